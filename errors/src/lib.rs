use actix_web::{
    error::{BlockingError, ResponseError},
    http::StatusCode,
    HttpResponse,
};
use derive_more::Display;
use diesel::result::Error as DBError;
use r2d2::Error as PoolError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    BadRequest(String),
    InternalServerError(String),
    #[display(fmt = "Method Not Allowed")]
    MethodNotAllowed,
    NotFound(String),
    PoolError(String),
    UnprocessableEntity(String),
    BlockingError(String),
}

/// Envelope returned for every failed request. The variant payload strings
/// only feed `Display` and the logs; the body carries the canonical message
/// for the status code.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: &str) -> ErrorResponse {
        ErrorResponse {
            success: false,
            error,
            message: message.to_string(),
        }
    }
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        match self {
            Error::BadRequest(_) => {
                HttpResponse::BadRequest().json(ErrorResponse::new(400, "Bad Request"))
            }
            Error::NotFound(_) => {
                HttpResponse::NotFound().json(ErrorResponse::new(404, "Resource Not Found"))
            }
            Error::MethodNotAllowed => {
                HttpResponse::MethodNotAllowed().json(ErrorResponse::new(405, "Method Not Allowed"))
            }
            Error::PoolError(_) | Error::UnprocessableEntity(_) => {
                HttpResponse::UnprocessableEntity().json(ErrorResponse::new(422, "Unprocessable"))
            }
            _ => HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                .json(ErrorResponse::new(500, "Internal Server Error")),
        }
    }
}

// Convert DBErrors to our Error type. A missing row is a 404, any other
// database failure folds into the unprocessable bucket.
impl From<DBError> for Error {
    fn from(error: DBError) -> Error {
        match error {
            DBError::NotFound => Error::NotFound("Record not found".into()),
            DBError::DatabaseError(_, info) => {
                let message = info.details().unwrap_or_else(|| info.message()).to_string();
                Error::UnprocessableEntity(message)
            }
            _ => Error::UnprocessableEntity("Unknown database error".into()),
        }
    }
}

// Convert PoolError to our Error type
impl From<PoolError> for Error {
    fn from(error: PoolError) -> Error {
        Error::PoolError(error.to_string())
    }
}

impl From<BlockingError> for Error {
    fn from(_: BlockingError) -> Error {
        Error::BlockingError("Thread blocking error".into())
    }
}
