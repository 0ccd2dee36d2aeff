use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::net::AddrParseError;

pub type EnrolResult<T> = Result<T, EnrolError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum EnrolError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse server address {:?}", original))]
    ParseServerAddress {
        source: AddrParseError,
        original: String,
    },
    #[snafu(display("Unable to parse placeholder photo URL {:?}", original))]
    ParsePlaceholderUrl {
        source: url::ParseError,
        original: String,
    },
    #[snafu(display("No programmes were configured to choose from"))]
    NoProgrammes,
    #[snafu(display("Unable to parse uuid {:?}", original))]
    ParseUuid {
        source: uuid::Error,
        original: String,
    },
}

impl IntoResponse for EnrolError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Enrol Error"}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::BadEnvVar { .. }
            | Self::ParseServerAddress { .. }
            | Self::ParsePlaceholderUrl { .. }
            | Self::NoProgrammes => ISE,
            Self::ParseUuid { .. } => BI,
        };

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()).into_string())).into_response()
    }
}
