use thiserror::Error;

/// Validation and contract errors exposed by `uvatick-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("date must be an ISO 8601 calendar date (YYYY-MM-DD): '{value}'")]
    InvalidDate { value: String },
    #[error("amount must use es-AR formatting (e.g. 1.234,56): '{value}'")]
    InvalidAmount { value: String },

    #[error("invalid environment '{value}', expected development or production")]
    InvalidEnvironment { value: String },
}

/// Failures raised while resolving the current index quote.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Transport failure or a non-successful HTTP status.
    #[error("{message}")]
    Fetch {
        message: String,
        status: Option<u16>,
        cross_origin: bool,
    },

    /// The payload was empty or could not be decoded into quotes.
    #[error("{message}")]
    Data { message: String },
}

/// User-facing explanation shown when the endpoint refuses cross-origin access
/// or the connection is blocked before any response arrives.
pub const CROSS_ORIGIN_MESSAGE: &str = "Error de conexión: La API no permite peticiones \
desde el navegador (CORS). Intenta desde un servidor o usa un proxy.";

impl ResolveError {
    pub fn status(status: u16, reason: Option<&str>) -> Self {
        let message = match reason {
            Some(reason) => format!("Error al consultar la API: {status} {reason}"),
            None => format!("Error al consultar la API: {status}"),
        };
        Self::Fetch {
            message,
            status: Some(status),
            cross_origin: false,
        }
    }

    pub fn transport(message: impl Into<String>, cross_origin: bool) -> Self {
        Self::Fetch {
            message: message.into(),
            status: None,
            cross_origin,
        }
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    pub fn empty_payload() -> Self {
        Self::data("No se encontraron datos en la respuesta")
    }

    pub const fn is_cross_origin(&self) -> bool {
        matches!(
            self,
            Self::Fetch {
                cross_origin: true,
                ..
            }
        )
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "resolve.fetch",
            Self::Data { .. } => "resolve.data",
        }
    }

    /// Message suitable for display; the cross-origin case is replaced by a
    /// friendlier explanation.
    pub fn user_message(&self) -> String {
        if self.is_cross_origin() {
            String::from(CROSS_ORIGIN_MESSAGE)
        } else {
            self.to_string()
        }
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
