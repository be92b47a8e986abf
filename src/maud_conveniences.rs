use maud::{Markup, Render, html};

/// A titled table, or `empty_text` spanning every column when there are no rows.
pub fn render_table<const N: usize>(
    table_title: &str,
    headings: [&'static str; N],
    rows: Vec<[Markup; N]>,
    empty_text: &str,
) -> Markup {
    html! {
        section class="w-full" {
            (title(table_title))
            div class="overflow-x-auto rounded shadow-md" {
                table class="min-w-full bg-gray-800" {
                    thead class="bg-gray-700 text-gray-300" {
                        tr {
                            @for heading in headings {
                                th class="py-2 px-4 text-left font-semibold" {(heading)}
                            }
                        }
                    }
                    tbody class="text-gray-200" {
                        @if rows.is_empty() {
                            tr {
                                td colspan=(N) class="py-4 px-4 text-center italic text-gray-400" {(empty_text)}
                            }
                        }
                        @for row in rows {
                            tr class="border-b border-gray-600" {
                                @for cell in row {
                                    td class="py-2 px-4" {(cell)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4 text-gray-100" {(s)}
    }
}

pub fn form_element(id: &'static str, label: &'static str, input: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            (input)
        }
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    ty: Option<&'static str>,
    value: Option<&str>,
) -> Markup {
    form_element(id, label, html! {
        input required[required] type=(ty.unwrap_or("text")) id=(id) name=(id) value=[value] class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
    })
}

pub fn form_submit_button(text: Option<&str>) -> Markup {
    html! {
        div class="flex items-center justify-between" {
            button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                (text.unwrap_or("Submit"))
            }
        }
    }
}
