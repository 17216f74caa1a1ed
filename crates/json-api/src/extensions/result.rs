//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{error, warn};

/// Map any error to a logged HTTP error.
pub(crate) trait ResultExt<T> {
    /// Log the error and answer with a bare internal server error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Log the error and answer with a bad request carrying `brief`.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("{brief}: {error}");

            StatusError::bad_request().brief(brief)
        })
    }
}
