//! # orc8r client
//!
//! Request bindings for the orc8r REST API, federation networks operations.
//!
//! Each operation comes with a parameters type that collects the per-call
//! inputs (path parameters, timeout, cancellation token, HTTP client override)
//! and writes them onto a [`ClientRequest`]. The operation is then
//! [prepared](ClientOperation::prepare) into an [`http::Request`] that a
//! transport sends, honoring the carried timeout and cancellation token.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//!
//! use orc8r_client::federation_networks::{
//!     GetFegNetworkIdSubscriberConfigRuleNamesParams, get_feg_network_id_subscriber_config_rule_names,
//! };
//! use orc8r_client::{Registry, TransportConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TransportConfig::builder()
//!     .with_host("orc8r.example.com:9443")
//!     .build()?;
//!
//! let params = GetFegNetworkIdSubscriberConfigRuleNamesParams::new_with_timeout(Duration::from_secs(10))
//!     .with_network_id("net-42");
//!
//! let prepared = get_feg_network_id_subscriber_config_rule_names(params)
//!     .prepare(&config, &Registry::default())?;
//!
//! assert_eq!(prepared.timeout(), Some(Duration::from_secs(10)));
//! assert_eq!(
//!     prepared.request().uri(),
//!     "http://orc8r.example.com:9443/magma/v1/feg/net-42/subscriber_config/rule_names"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Writing parameters onto another request
//!
//! Parameters only depend on the [`ClientRequest`] trait, any request
//! implementation can receive them:
//!
//! ```rust
//! use orc8r_client::federation_networks::GetFegNetworkIdSubscriberConfigRuleNamesParams;
//! use orc8r_client::{ClientRequest, ClientRequestWriter, Registry, SwaggerRequest};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut request = SwaggerRequest::new(
//!     http::Method::GET,
//!     "/feg/{network_id}/subscriber_config/rule_names",
//! );
//!
//! GetFegNetworkIdSubscriberConfigRuleNamesParams::new()
//!     .with_network_id("net-42")
//!     .write_to_request(&mut request, &Registry::default())?;
//!
//! assert_eq!(request.path_params().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Errors
//!
//! A request refuses values with a [`RequestError`]. Parameter writers gather
//! them in a [`CompositeValidationError`]; any error means the request must
//! not be sent. Preparing an operation reports everything as a [`ClientError`].

mod errors;
pub use self::errors::{CompositeValidationError, RequestError};

mod runtime;
pub use self::runtime::{
    ClientError, ClientOperation, ClientRequest, ClientRequestWriter, DEFAULT_BASE_PATH,
    DEFAULT_HOST, DEFAULT_TIMEOUT, PreparedRequest, SwaggerRequest, TransportConfig,
    TransportConfigBuilder,
};

mod strfmt;
pub use self::strfmt::{FormatValidator, Registry};

pub mod federation_networks;
