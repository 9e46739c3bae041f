use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] uvatick_core::ValidationError),

    #[error("{}", .0.user_message())]
    Resolve(#[from] uvatick_core::ResolveError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Resolve(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use uvatick_core::{ResolveError, CROSS_ORIGIN_MESSAGE};

    use super::*;

    #[test]
    fn resolve_errors_display_user_message() {
        let error = CliError::from(ResolveError::transport("connection failed", true));
        assert_eq!(error.to_string(), CROSS_ORIGIN_MESSAGE);
        assert_eq!(error.exit_code(), 3);
    }
}
