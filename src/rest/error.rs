use crate::form::validation::FieldError;
use crate::form::ValidationErrors;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::HttpRequest;
use actix_web::{http::StatusCode, web::Json, HttpResponse, ResponseError};
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

pub type RestResult<T, E = RestApiError> = std::result::Result<Json<T>, E>;

#[derive(Debug)]
pub struct RestApiError {
    pub code: RestApiErrorCode,
    pub message: String,
    pub fields: Vec<FieldError>,
}

/// Response body of every failed request.
#[derive(Serialize, Deserialize, Debug)]
pub struct RestApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl RestApiError {
    pub fn new(code: RestApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            fields: vec![],
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(RestApiErrorCode::NotFound, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(RestApiErrorCode::InvalidInput, message)
    }

    pub fn database() -> Self {
        Self::new(
            RestApiErrorCode::Database,
            "Database query failed, check the server logs.",
        )
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(RestApiErrorCode::Upstream, message)
    }
}

impl From<ValidationErrors> for RestApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            code: RestApiErrorCode::InvalidInput,
            message: errors.to_string(),
            fields: errors.0,
        }
    }
}

#[derive(Debug)]
pub enum RestApiErrorCode {
    NotFound,
    InvalidInput,
    Database,
    Upstream,
}

impl fmt::Display for RestApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl fmt::Display for RestApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestApiErrorCode::NotFound => write!(f, "not_found"),
            RestApiErrorCode::InvalidInput => write!(f, "invalid_input"),
            RestApiErrorCode::Database => write!(f, "database"),
            RestApiErrorCode::Upstream => write!(f, "upstream"),
        }
    }
}

impl RestApiErrorCode {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Database => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream => StatusCode::BAD_GATEWAY,
        }
    }
}

impl ResponseError for RestApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(RestApiErrorBody {
            code: self.code.to_string(),
            message: self.message.clone(),
            fields: self.fields.clone(),
        })
    }

    fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RestApiError::invalid_input(format!("Invalid arguments: {err}")).into()
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RestApiError::invalid_input(format!("Invalid body: {err}")).into()
}
