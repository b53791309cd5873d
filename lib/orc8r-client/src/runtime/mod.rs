//! Client runtime: the request abstraction parameter writers target, and the
//! glue that turns an operation into an HTTP request for a transport.
//!
//! - [`ClientRequest`] - what a parameter writer can set on a request
//! - [`SwaggerRequest`] - the in-memory request that builds an [`http::Request`]
//! - [`ClientOperation`] - one endpoint call, ready to be [prepared](ClientOperation::prepare)
//! - [`TransportConfig`] - host, base path and schemes of the API

use std::time::Duration;

mod config;
pub use self::config::{DEFAULT_BASE_PATH, DEFAULT_HOST, TransportConfig, TransportConfigBuilder};

mod error;
pub use self::error::ClientError;

mod operation;
pub use self::operation::{ClientOperation, ClientRequestWriter, PreparedRequest};

mod path;

mod request;
pub use self::request::{ClientRequest, SwaggerRequest};

/// Timeout given to operation parameters that do not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
