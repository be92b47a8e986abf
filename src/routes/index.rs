use crate::{
    data::student::Student,
    error::RosterResult,
    maud_conveniences::render_table,
    state::RosterState,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<RosterState>) -> RosterResult<Markup> {
    let students = state.find_all().await?;
    debug!(count = students.len(), "Listing students");

    let rows = students.into_iter().map(student_row).collect();

    Ok(state.render("Students", html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
            (render_table("Students", ["ID", "Name", "Age", "Course", ""], rows, "No students yet"))
            a href="/create" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded text-center" {
                "Add new Student"
            }
        }
    }))
}

fn student_row(Student { id, name, age, course }: Student) -> [Markup; 5] {
    [
        html! { code class="text-xs" {(id)} },
        html! { (name) },
        html! { (age) },
        html! { (course.unwrap_or_default()) },
        html! {
            div class="flex flex-row space-x-2" {
                a href={"/edit/" (id)} class="bg-slate-600 hover:bg-slate-800 font-bold py-1 px-3 rounded" {"Edit"}
                form method="post" action={"/delete/" (id)} {
                    button type="submit" class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded" {"Delete"}
                }
            }
        },
    ]
}
