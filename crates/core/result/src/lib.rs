use std::fmt;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "axum")]
pub mod axum;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// This error was not labeled :(
    LabelMe,

    // ? Event related errors
    UnknownEvent,

    // ? Request errors
    FailedValidation {
        error: String,
    },
    DeserializationError {
        error: String,
    },

    // ? General errors
    DatabaseError {
        operation: String,
        collection: String,
    },
    InternalError,
    NotFound,
}

impl ErrorType {
    /// Name of this error type, as sent to clients
    pub fn name(&self) -> &'static str {
        match self {
            ErrorType::LabelMe => "LabelMe",
            ErrorType::UnknownEvent => "UnknownEvent",
            ErrorType::FailedValidation { .. } => "FailedValidation",
            ErrorType::DeserializationError { .. } => "DeserializationError",
            ErrorType::DatabaseError { .. } => "DatabaseError",
            ErrorType::InternalError => "InternalError",
            ErrorType::NotFound => "NotFound",
        }
    }

    /// Whether this error originates from the server rather than the request
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ErrorType::LabelMe | ErrorType::DatabaseError { .. } | ErrorType::InternalError
        )
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::UnknownEvent | ErrorType::NotFound => write!(f, "Not found"),
            ErrorType::FailedValidation { error } => write!(f, "{error}"),
            ErrorType::DeserializationError { error } => write!(f, "Invalid request body: {error}"),
            ErrorType::LabelMe | ErrorType::DatabaseError { .. } | ErrorType::InternalError => {
                write!(f, "Internal server error")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error_type, self.location)
    }
}

impl std::error::Error for Error {}

/// Error body returned to clients
///
/// Server-side failures are collapsed into a generic `InternalError`
/// so that no operation, collection or location leaks out.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// Error type
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub error_type: String,
    /// Human-readable description
    pub error: String,
}

impl From<&Error> for ErrorBody {
    fn from(value: &Error) -> Self {
        if value.error_type.is_internal() {
            ErrorBody {
                error_type: ErrorType::InternalError.name().to_string(),
                error: ErrorType::InternalError.to_string(),
            }
        } else {
            ErrorBody {
                error_type: value.error_type.name().to_string(),
                error: value.error_type.to_string(),
            }
        }
    }
}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_database_error {
    ( $operation: expr, $collection: expr ) => {
        $crate::create_error!(DatabaseError {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}
