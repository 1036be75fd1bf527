use std::fmt;
use std::fmt::Formatter;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use serde::Serialize;
use crate::manager_visual_crossing::errors::VCError;

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}
impl From<VCError> for UnrecoverableError {
    fn from(e: VCError) -> Self { UnrecoverableError(e.to_string()) }
}

/// Errors while managing configuration
///
#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

/// Errors that end a weather request and are returned to the client
///
/// Every variant renders as a json body `{"message": ...}` with the status given by
/// `status_code`.
#[derive(Debug, PartialEq)]
pub enum ApiError {
    MissingField(String),
    MissingOrEmptyField(String),
    Forbidden,
    MalformedRequest,
    PayloadTooLarge,
    Upstream { status: u16, body: String },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl ApiError {
    /// Returns the message presented to the client
    ///
    /// For upstream errors this is the provider's response body, untouched
    pub fn message(&self) -> String {
        match self {
            ApiError::MissingField(field) => format!("Field '{}' must be present", field),
            ApiError::MissingOrEmptyField(field) => format!("Field '{}' must be present and not empty", field),
            ApiError::Forbidden => "Wrong API token".to_string(),
            ApiError::MalformedRequest => "Request body must be a JSON object".to_string(),
            ApiError::PayloadTooLarge => "Request body is too large".to_string(),
            ApiError::Upstream { body, .. } => body.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Upstream { status, .. } => write!(f, "ApiError::Upstream: status {}", status),
            _ => write!(f, "ApiError: {}", self.message()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingOrEmptyField(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::MalformedRequest => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.message();
        HttpResponse::build(self.status_code()).json(ErrorBody { message: &message })
    }
}

impl From<VCError> for ApiError {
    fn from(e: VCError) -> Self {
        match e {
            VCError::Status(status, body) => ApiError::Upstream { status, body },
            VCError::Timeout(_) => ApiError::Upstream {
                status: StatusCode::GATEWAY_TIMEOUT.as_u16(),
                body: "Weather provider did not respond in time".to_string(),
            },
            VCError::NoDays => ApiError::Upstream {
                status: StatusCode::BAD_GATEWAY.as_u16(),
                body: "Weather provider returned no data for the requested date".to_string(),
            },
            VCError::Transport(_) | VCError::Document(_) | VCError::Url(_) => ApiError::Upstream {
                status: StatusCode::BAD_GATEWAY.as_u16(),
                body: "Weather provider is unavailable".to_string(),
            },
        }
    }
}
