use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::{ClientRequest, ClientRequestWriter, CompositeValidationError, DEFAULT_TIMEOUT, Registry};

/// Parameters of the "get FeG network subscriber config rule names" operation.
///
/// Every constructor starts from [`DEFAULT_TIMEOUT`], no cancellation token and
/// no HTTP client override; they only differ by the field they pre-set.
///
/// The network id is not checked here: an empty id ends up as an empty path
/// segment and is left for the server to refuse.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
///
/// use orc8r_client::federation_networks::GetFegNetworkIdSubscriberConfigRuleNamesParams;
///
/// let params = GetFegNetworkIdSubscriberConfigRuleNamesParams::new()
///     .with_network_id("net-42")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(params.network_id(), "net-42");
/// assert_eq!(params.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct GetFegNetworkIdSubscriberConfigRuleNamesParams {
    /// Network ID
    network_id: String,

    timeout: Duration,
    context: Option<CancellationToken>,
    http_client: Option<reqwest::Client>,
}

impl Default for GetFegNetworkIdSubscriberConfigRuleNamesParams {
    fn default() -> Self {
        Self::new()
    }
}

impl GetFegNetworkIdSubscriberConfigRuleNamesParams {
    /// Parameters with the default values.
    pub fn new() -> Self {
        Self {
            network_id: String::new(),
            timeout: DEFAULT_TIMEOUT,
            context: None,
            http_client: None,
        }
    }

    /// Parameters with the default values and the given timeout.
    pub fn new_with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::new()
        }
    }

    /// Parameters with the default values and a cancellation token.
    pub fn new_with_context(context: CancellationToken) -> Self {
        Self {
            context: Some(context),
            ..Self::new()
        }
    }

    /// Parameters with the default values and an HTTP client override.
    pub fn new_with_http_client(client: reqwest::Client) -> Self {
        Self {
            http_client: Some(client),
            ..Self::new()
        }
    }

    /// Adds the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    /// Adds the timeout.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Adds the cancellation token.
    pub fn with_context(mut self, context: CancellationToken) -> Self {
        self.set_context(context);
        self
    }

    /// Adds the cancellation token.
    pub fn set_context(&mut self, context: CancellationToken) {
        self.context = Some(context);
    }

    /// Adds the HTTP client override.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.set_http_client(client);
        self
    }

    /// Adds the HTTP client override.
    pub fn set_http_client(&mut self, client: reqwest::Client) {
        self.http_client = Some(client);
    }

    /// Adds the network id.
    pub fn with_network_id(mut self, network_id: impl Into<String>) -> Self {
        self.set_network_id(network_id);
        self
    }

    /// Adds the network id.
    pub fn set_network_id(&mut self, network_id: impl Into<String>) {
        self.network_id = network_id.into();
    }

    /// The network id, empty until set.
    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    /// The timeout given to the request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The cancellation token, if any.
    pub fn context(&self) -> Option<&CancellationToken> {
        self.context.as_ref()
    }

    /// The HTTP client override, if any.
    pub fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }
}

impl ClientRequestWriter for GetFegNetworkIdSubscriberConfigRuleNamesParams {
    fn write_to_request(
        &self,
        request: &mut dyn ClientRequest,
        _registry: &Registry,
    ) -> Result<(), CompositeValidationError> {
        request.set_timeout(self.timeout)?;

        let mut errors = Vec::new();

        // path param network_id
        if let Err(error) = request.set_path_param("network_id", &self.network_id) {
            errors.push(error);
        }

        if !errors.is_empty() {
            return Err(CompositeValidationError::new(errors));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use http::Method;

    use super::*;
    use crate::RequestError;

    /// Records what gets written, optionally refusing timeouts or path params.
    #[derive(Debug, Default)]
    struct StubRequest {
        method: Method,
        reject_timeout: bool,
        reject_path_params: bool,
        timeout: Option<Duration>,
        path_params: Vec<(String, String)>,
        path_param_attempts: usize,
    }

    impl ClientRequest for StubRequest {
        fn set_timeout(&mut self, timeout: Duration) -> Result<(), RequestError> {
            if self.reject_timeout {
                return Err(RequestError::InvalidTimeout {
                    timeout,
                    message: "stub refuses timeouts".to_string(),
                });
            }
            self.timeout = Some(timeout);
            Ok(())
        }

        fn set_path_param(&mut self, name: &str, value: &str) -> Result<(), RequestError> {
            self.path_param_attempts += 1;
            if self.reject_path_params {
                return Err(RequestError::Rejected {
                    message: format!("stub refuses {name}"),
                });
            }
            self.path_params.push((name.to_string(), value.to_string()));
            Ok(())
        }

        fn set_query_param(&mut self, _name: &str, _values: &[&str]) -> Result<(), RequestError> {
            unreachable!("no query parameter")
        }

        fn set_header_param(&mut self, _name: &str, _values: &[&str]) -> Result<(), RequestError> {
            unreachable!("no header parameter")
        }

        fn set_body_param(&mut self, _body: serde_json::Value) -> Result<(), RequestError> {
            unreachable!("no body parameter")
        }

        fn method(&self) -> &Method {
            &self.method
        }

        fn path_pattern(&self) -> &str {
            "/feg/{network_id}/subscriber_config/rule_names"
        }
    }

    type Params = GetFegNetworkIdSubscriberConfigRuleNamesParams;

    #[test]
    fn test_new_has_defaults() {
        let params = Params::new();

        assert_eq!(params.network_id(), "");
        assert_eq!(params.timeout(), DEFAULT_TIMEOUT);
        assert!(params.context().is_none());
        assert!(params.http_client().is_none());

        let params = Params::default();
        assert_eq!(params.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_new_with_timeout() {
        let params = Params::new_with_timeout(Duration::from_millis(1500));

        assert_eq!(params.timeout(), Duration::from_millis(1500));
        assert!(params.context().is_none());
        assert!(params.http_client().is_none());
    }

    #[test]
    fn test_new_with_context() {
        let token = CancellationToken::new();
        let params = Params::new_with_context(token.clone());

        assert_eq!(params.timeout(), DEFAULT_TIMEOUT);
        assert!(params.http_client().is_none());

        token.cancel();
        assert!(params.context().is_some_and(CancellationToken::is_cancelled));
    }

    #[test]
    fn test_new_with_http_client() {
        let params = Params::new_with_http_client(reqwest::Client::new());

        assert_eq!(params.timeout(), DEFAULT_TIMEOUT);
        assert!(params.context().is_none());
        assert!(params.http_client().is_some());
    }

    #[test]
    fn test_chaining_sets_all_fields_in_any_order() {
        let token = CancellationToken::new();
        let timeout = Duration::from_secs(7);

        let forward = Params::new()
            .with_timeout(timeout)
            .with_context(token.clone())
            .with_http_client(reqwest::Client::new())
            .with_network_id("net-42");
        let backward = Params::new()
            .with_network_id("net-42")
            .with_http_client(reqwest::Client::new())
            .with_context(token.clone())
            .with_timeout(timeout);

        token.cancel();
        for params in [forward, backward] {
            assert_eq!(params.network_id(), "net-42");
            assert_eq!(params.timeout(), timeout);
            assert!(params.context().is_some_and(CancellationToken::is_cancelled));
            assert!(params.http_client().is_some());
        }
    }

    #[test]
    fn test_setters() {
        let mut params = Params::new();

        params.set_network_id("net-1");
        params.set_timeout(Duration::from_secs(2));
        params.set_context(CancellationToken::new());
        params.set_http_client(reqwest::Client::new());

        assert_eq!(params.network_id(), "net-1");
        assert_eq!(params.timeout(), Duration::from_secs(2));
        assert!(params.context().is_some());
        assert!(params.http_client().is_some());
    }

    #[test]
    fn should_write_network_id_and_default_timeout() {
        let params = Params::new().with_network_id("net-42");
        let mut request = StubRequest::default();

        params
            .write_to_request(&mut request, &Registry::default())
            .expect("stub accepts everything");

        assert_eq!(request.timeout, Some(DEFAULT_TIMEOUT));
        insta::assert_debug_snapshot!(request.path_params, @r#"
        [
            (
                "network_id",
                "net-42",
            ),
        ]
        "#);
    }

    #[test]
    fn should_apply_accepted_timeout() {
        let params = Params::new_with_timeout(Duration::from_secs(90)).with_network_id("net-42");
        let mut request = StubRequest::default();

        let result = params.write_to_request(&mut request, &Registry::default());

        assert!(result.is_ok());
        assert_eq!(request.timeout, Some(Duration::from_secs(90)));
    }

    #[test]
    fn should_stop_on_rejected_timeout() {
        let params = Params::new().with_network_id("net-42");
        let mut request = StubRequest {
            reject_timeout: true,
            ..StubRequest::default()
        };

        let error = params
            .write_to_request(&mut request, &Registry::default())
            .expect_err("timeout refused");

        assert!(matches!(
            error.errors(),
            [RequestError::InvalidTimeout { .. }]
        ));
        assert_eq!(request.path_param_attempts, 0);
        assert!(request.path_params.is_empty());
    }

    #[test]
    fn should_aggregate_rejected_path_param() {
        let params = Params::new().with_network_id("net-42");
        let mut request = StubRequest {
            reject_path_params: true,
            ..StubRequest::default()
        };

        let error = params
            .write_to_request(&mut request, &Registry::default())
            .expect_err("path param refused");

        assert_eq!(request.timeout, Some(DEFAULT_TIMEOUT));
        insta::assert_snapshot!(error, @r"
        validation failure list:
        Request rejected: stub refuses network_id
        ");
    }

    #[test]
    fn should_write_empty_network_id_as_is() {
        let params = Params::new();
        let mut request = StubRequest::default();

        params
            .write_to_request(&mut request, &Registry::default())
            .expect("not validated here");

        assert_eq!(
            request.path_params,
            vec![("network_id".to_string(), String::new())]
        );
    }
}
