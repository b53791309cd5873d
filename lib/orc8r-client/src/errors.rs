use std::fmt;
use std::time::Duration;

/// Errors raised by a [`ClientRequest`](crate::ClientRequest) when it refuses a value.
///
/// Parameter writers never build these themselves; they collect whatever the
/// request returns and hand them back inside a [`CompositeValidationError`].
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum RequestError {
    /// The request does not accept the timeout.
    #[display("Invalid timeout {timeout:?}: {message}")]
    #[from(skip)]
    InvalidTimeout {
        /// The rejected timeout.
        timeout: Duration,
        /// Why the request refused it.
        message: String,
    },

    /// The path template has no placeholder with this name.
    #[display("Path parameter '{name}' is not part of '{path_pattern}'")]
    #[from(skip)]
    UnknownPathParam {
        /// The parameter name that was written.
        name: String,
        /// The path template of the request.
        path_pattern: String,
    },

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// A value does not match the format declared for it.
    #[display("{name} in {location} must be of type {format}: \"{value}\"")]
    #[from(skip)]
    InvalidFormat {
        /// The parameter name.
        name: String,
        /// Where the parameter lives (`path`, `query`, `header`, `body`).
        location: &'static str,
        /// The expected format, e.g. `uuid`.
        format: String,
        /// The offending value.
        value: String,
    },

    /// Generic refusal from a request implementation.
    #[display("Request rejected: {message}")]
    #[from(skip)]
    Rejected {
        /// Description of the refusal.
        message: String,
    },
}

/// An ordered list of request errors gathered while writing parameters.
///
/// This is what every [`ClientRequestWriter`](crate::ClientRequestWriter)
/// returns on failure. Values written before the first error stay on the request.
#[derive(Debug, derive_more::Error)]
pub struct CompositeValidationError {
    #[error(not(source))]
    errors: Vec<RequestError>,
}

impl CompositeValidationError {
    /// Aggregates the given errors, keeping their order.
    pub fn new(errors: Vec<RequestError>) -> Self {
        Self { errors }
    }

    /// The underlying errors, in the order they were encountered.
    pub fn errors(&self) -> &[RequestError] {
        &self.errors
    }

    /// Consumes the composite and returns the underlying errors.
    pub fn into_errors(self) -> Vec<RequestError> {
        self.errors
    }

    /// Number of underlying errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the composite holds no error at all.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<RequestError> for CompositeValidationError {
    fn from(error: RequestError) -> Self {
        Self::new(vec![error])
    }
}

impl fmt::Display for CompositeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failure list:")?;
        for error in &self.errors {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}
