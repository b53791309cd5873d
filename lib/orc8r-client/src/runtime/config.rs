use std::fmt::Debug;

use http::uri::{PathAndQuery, Scheme};
use url::Url;

use super::ClientError;

/// Default host of the orc8r REST API.
pub const DEFAULT_HOST: &str = "localhost";

/// Default base path of the orc8r REST API.
pub const DEFAULT_BASE_PATH: &str = "/magma/v1";

/// Where the transport sends operations: host, base path and allowed schemes.
///
/// Use [`TransportConfig::builder`] to create instances, or
/// [`TransportConfig::default`] for `http://localhost/magma/v1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    host: String,
    base_path: String,
    schemes: Vec<Scheme>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            schemes: vec![Scheme::HTTP],
        }
    }
}

impl TransportConfig {
    /// Starts a builder seeded with the defaults.
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }

    /// The host, optionally with a port (`orc8r.example.com:9443`).
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The base path prepended to every operation path.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Allowed schemes, by preference.
    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Picks the first of `preferred` this transport allows, else its own first scheme.
    pub(super) fn select_scheme(&self, preferred: &[Scheme]) -> Result<&Scheme, ClientError> {
        preferred
            .iter()
            .find_map(|scheme| self.schemes.iter().find(|allowed| *allowed == scheme))
            .or_else(|| self.schemes.first())
            .ok_or(ClientError::NoScheme)
    }

    pub(super) fn base_url(&self, scheme: &Scheme) -> Result<Url, ClientError> {
        let Self {
            host, base_path, ..
        } = self;
        let url = Url::parse(&format!("{scheme}://{host}{base_path}"))?;
        Ok(url)
    }
}

/// Builder for [`TransportConfig`].
///
/// # Default Configuration
///
/// - **Host**: `localhost`
/// - **Base path**: `/magma/v1`
/// - **Schemes**: `http`
///
/// # Example
///
/// ```rust
/// use http::uri::Scheme;
/// use orc8r_client::TransportConfig;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TransportConfig::builder()
///     .with_host("orc8r.example.com:9443")
///     .with_base_path("/magma/v1")?
///     .with_schemes(vec![Scheme::HTTPS])
///     .build()?;
///
/// assert_eq!(config.host(), "orc8r.example.com:9443");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TransportConfigBuilder {
    host: String,
    base_path: PathAndQuery,
    schemes: Vec<Scheme>,
}

impl Default for TransportConfigBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            base_path: PathAndQuery::from_static(DEFAULT_BASE_PATH),
            schemes: vec![Scheme::HTTP],
        }
    }
}

impl TransportConfigBuilder {
    /// Builds the final configuration.
    ///
    /// # Errors
    ///
    /// Fails if no scheme is configured, or if a scheme is neither `http` nor `https`.
    pub fn build(self) -> Result<TransportConfig, ClientError> {
        let Self {
            host,
            base_path,
            schemes,
        } = self;

        if schemes.is_empty() {
            return Err(ClientError::NoScheme);
        }
        if let Some(scheme) = schemes
            .iter()
            .find(|scheme| **scheme != Scheme::HTTP && **scheme != Scheme::HTTPS)
        {
            return Err(ClientError::UnsupportedScheme {
                scheme: scheme.to_string(),
            });
        }

        let base_path = base_path.path().trim_end_matches('/').to_string();

        Ok(TransportConfig {
            host,
            base_path,
            schemes,
        })
    }

    /// Sets the host, with an optional port.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the base path for all operations.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBasePath` if the path contains invalid characters
    /// (such as spaces) or cannot be parsed as a valid URI path.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ClientError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ClientError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        self.base_path = base_path;
        Ok(self)
    }

    /// Replaces the allowed schemes.
    pub fn with_schemes(mut self, schemes: Vec<Scheme>) -> Self {
        self.schemes = schemes;
        self
    }

    /// Adds an allowed scheme, with the lowest preference.
    pub fn add_scheme(mut self, scheme: Scheme) -> Self {
        if !self.schemes.contains(&scheme) {
            self.schemes.push(scheme);
        }
        self
    }
}
