use crate::data::student::StudentId;
use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse max DB connections {:?}", original))]
    ParseMaxConnections {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Name and age are required"))]
    MissingRequiredFields,
    #[snafu(display("Age must be a whole number, found {:?}", original))]
    InvalidAge {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Unable to parse student ID {:?}", original))]
    MalformedId {
        source: uuid::Error,
        original: String,
    },
    #[snafu(display("Unable to read student ID from the URL"))]
    UnreadableId { source: PathRejection },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: StudentId },
}

impl RosterError {
    pub const fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::OpenDatabase { .. }
            | Self::GetDatabaseConnection { .. }
            | Self::MakeQuery { .. }
            | Self::MigrateError { .. } => ISE,
            Self::BadEnvVar { .. } | Self::ParseMaxConnections { .. } => ISE,
            Self::MissingRequiredFields | Self::InvalidAge { .. } => BI,
            Self::MalformedId { .. } | Self::UnreadableId { .. } | Self::MissingStudent { .. } => NF,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            error!(?self, "Error!");
        } else {
            warn!(%self, %status_code, "Rejected request");
        }

        let body = html! {
            div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                strong class="font-bold" {"Roster Error: "}
                span {(self.to_string())}
            }
        };

        (status_code, Html(body)).into_response()
    }
}
