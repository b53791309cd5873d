use crate::CompositeValidationError;

/// Errors that can occur while preparing an operation for the transport.
///
/// Any of these means the request must not be sent.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ClientError {
    /// The operation parameters could not be written onto the request.
    Validation(CompositeValidationError),

    /// HTTP protocol error from the http crate.
    ///
    /// Occurs when the final request cannot be assembled.
    HttpError(http::Error),

    /// URL parsing error when joining the transport base URL.
    UrlError(url::ParseError),

    /// Invalid media type in the `Accept` header.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// JSON serialization error of the request body.
    JsonValueError(serde_json::Error),

    /// Query parameter serialization error.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// Path template contains unresolved parameters.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The partially resolved path.
        path: String,
        /// Names of the missing parameters.
        missings: Vec<String>,
    },

    /// Invalid base path configuration.
    #[display("Invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// Only `http` and `https` can be used by the transport.
    #[display("Unsupported scheme: {scheme}")]
    #[from(skip)]
    UnsupportedScheme {
        /// The refused scheme.
        scheme: String,
    },

    /// The transport configuration lists no scheme.
    #[display("Transport configuration has no scheme")]
    NoScheme,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestError;

    #[test]
    fn test_client_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ClientError>();
        assert_sync::<ClientError>();
    }

    #[test]
    fn test_validation_error_display() {
        let error = ClientError::from(CompositeValidationError::from(RequestError::Rejected {
            message: "closed".to_string(),
        }));

        insta::assert_snapshot!(error, @r"
        validation failure list:
        Request rejected: closed
        ");
    }
}
