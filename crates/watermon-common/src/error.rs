//! Error types for watermon
//!
//! The enum doubles as the source of client-facing failure text: handlers
//! render a variant's display form into the plain-text response body.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum WatermonError {
    #[error("user name and password are required")]
    MissingCredentials,

    #[error("invalid API key")]
    InvalidApiKey,

    #[error("user not found or incorrect password")]
    UserNotFound,

    #[error("no {0} data found")]
    NoData(&'static str),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("internal server error")]
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watermon_error_display() {
        let err = WatermonError::InvalidApiKey;
        assert_eq!(format!("{}", err), "invalid API key");

        let err = WatermonError::NoData("history");
        assert_eq!(format!("{}", err), "no history data found");

        let err = WatermonError::DatabaseError("connection refused".to_string());
        assert_eq!(format!("{}", err), "database error: connection refused");
    }

    #[test]
    fn test_error_into_anyhow() {
        let err: anyhow::Error = WatermonError::UserNotFound.into();
        assert_eq!(
            format!("{}", err),
            "user not found or incorrect password"
        );
    }
}
