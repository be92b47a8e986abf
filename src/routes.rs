use crate::{
    routes::{
        index::get_index_route,
        students::{get_create_form, get_edit_form, post_create, post_delete, post_edit},
    },
    state::RosterState,
};
use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};

pub mod index;
pub mod students;

pub fn router() -> Router<RosterState> {
    Router::new()
        .route("/", get(get_index_route))
        .route("/create", get(get_create_form).post(post_create))
        .route("/edit/{id}", get(get_edit_form).post(post_edit))
        .route("/delete/{id}", post(post_delete))
}

/// `302 Found` back to the listing. `Redirect::to` would send a `303`.
pub fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
