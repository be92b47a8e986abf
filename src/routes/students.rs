use crate::{
    data::student::{Student, StudentForm, StudentId},
    error::{MissingStudentSnafu, RosterResult, UnreadableIdSnafu},
    maud_conveniences::{form_submit_button, simple_form_element, title},
    routes::redirect_to_index,
    state::RosterState,
};
use axum::{
    Form,
    extract::{
        Path, State,
        rejection::{FormRejection, PathRejection},
    },
    response::Response,
};
use maud::{Markup, html};
use snafu::{OptionExt, ResultExt};

type IdPath = Result<Path<String>, PathRejection>;
type FormPairs = Result<Form<Vec<(String, String)>>, FormRejection>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
        }
    }
}

pub fn student_form(student: Option<&Student>, mode: FormMode) -> Markup {
    let action = match student {
        Some(student) => format!("/edit/{}", student.id),
        None => "/create".to_string(),
    };
    let age = student.map(|student| student.age.to_string());

    html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-sm" {
            (title(format!("{} Student", mode.label())))
            @if let Some(student) = student {
                p class="text-sm text-gray-400 mb-4" {
                    "ID: "
                    code {(student.id)}
                }
            }
            form method="post" action=(action) {
                (simple_form_element("name", "Name", true, None, student.map(|s| s.name.as_str())))
                (simple_form_element("age", "Age", true, Some("number"), age.as_deref()))
                (simple_form_element("course", "Course (optional)", false, None, student.and_then(|s| s.course.as_deref())))
                (form_submit_button(Some(mode.label())))
            }
        }
    }
}

fn read_id(path: IdPath) -> RosterResult<String> {
    path.map(|Path(id)| id).context(UnreadableIdSnafu)
}

/// A body that can't be read as a form counts as one with no fields.
fn read_form(form: FormPairs) -> StudentForm {
    match form {
        Ok(Form(pairs)) => pairs.into_iter().collect(),
        Err(rejection) => {
            debug!(%rejection, "Unreadable form body");
            StudentForm::default()
        }
    }
}

async fn find_existing(state: &RosterState, raw_id: &str) -> RosterResult<Student> {
    let id: StudentId = raw_id.parse()?;
    state
        .find_by_id(id)
        .await?
        .context(MissingStudentSnafu { id })
}

pub async fn get_create_form(State(state): State<RosterState>) -> Markup {
    state.render("Create Student", student_form(None, FormMode::Create))
}

pub async fn post_create(
    State(state): State<RosterState>,
    form: FormPairs,
) -> RosterResult<Response> {
    let student = read_form(form).validate()?;
    let id = state.insert_one(student).await?;
    info!(%id, "Created student");

    Ok(redirect_to_index())
}

pub async fn get_edit_form(
    State(state): State<RosterState>,
    id: IdPath,
) -> RosterResult<Markup> {
    let student = find_existing(&state, &read_id(id)?).await?;

    Ok(state.render(
        "Update Student",
        student_form(Some(&student), FormMode::Update),
    ))
}

pub async fn post_edit(
    State(state): State<RosterState>,
    id: IdPath,
    form: FormPairs,
) -> RosterResult<Response> {
    let Student { id, .. } = find_existing(&state, &read_id(id)?).await?;
    let student = read_form(form).validate()?;

    if state.update_one(id, student).await? {
        info!(%id, "Updated student");
    } else {
        warn!(%id, "Student vanished before it could be updated");
    }

    Ok(redirect_to_index())
}

pub async fn post_delete(
    State(state): State<RosterState>,
    id: IdPath,
) -> RosterResult<Response> {
    let id: StudentId = read_id(id)?.parse()?;

    if state.delete_one(id).await? {
        info!(%id, "Deleted student");
    } else {
        debug!(%id, "No student to delete");
    }

    Ok(redirect_to_index())
}
