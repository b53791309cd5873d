use std::time::Duration;

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use indexmap::IndexMap;
use tracing::debug;
use url::{Position, Url};

use super::ClientError;
use super::path::{has_placeholder, resolve_path};
use crate::RequestError;

/// An outgoing request that parameter writers fill in.
///
/// This is the only thing a [`ClientRequestWriter`](crate::ClientRequestWriter)
/// depends on. Any setter may refuse a value with a [`RequestError`].
pub trait ClientRequest {
    /// Sets how long the transport may spend on this request.
    ///
    /// # Errors
    ///
    /// When the request does not accept this timeout.
    fn set_timeout(&mut self, timeout: Duration) -> Result<(), RequestError>;

    /// Sets the value of a `{name}` placeholder of the path template.
    ///
    /// # Errors
    ///
    /// When the request refuses the parameter.
    fn set_path_param(&mut self, name: &str, value: &str) -> Result<(), RequestError>;

    /// Appends values to a query parameter.
    ///
    /// # Errors
    ///
    /// When the request refuses the parameter.
    fn set_query_param(&mut self, name: &str, values: &[&str]) -> Result<(), RequestError>;

    /// Replaces the values of a header.
    ///
    /// # Errors
    ///
    /// When the header name or one of the values is invalid.
    fn set_header_param(&mut self, name: &str, values: &[&str]) -> Result<(), RequestError>;

    /// Replaces the JSON body.
    ///
    /// # Errors
    ///
    /// When the request refuses a body.
    fn set_body_param(&mut self, body: serde_json::Value) -> Result<(), RequestError>;

    /// The HTTP method of the operation.
    fn method(&self) -> &Method;

    /// The path template of the operation, e.g. `/feg/{network_id}`.
    fn path_pattern(&self) -> &str;
}

/// In-memory [`ClientRequest`] that assembles an [`http::Request`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
///
/// use http::Method;
/// use orc8r_client::{ClientRequest, SwaggerRequest};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut request = SwaggerRequest::new(Method::GET, "/feg/{network_id}");
/// request.set_timeout(Duration::from_secs(5))?;
/// request.set_path_param("network_id", "net-42")?;
///
/// assert_eq!(request.timeout(), Some(Duration::from_secs(5)));
/// assert_eq!(request.path_params().get("network_id").map(String::as_str), Some("net-42"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SwaggerRequest {
    method: Method,
    path_pattern: String,
    timeout: Option<Duration>,
    path_params: IndexMap<String, String>,
    query_params: IndexMap<String, Vec<String>>,
    headers: HeaderMap,
    body: Option<serde_json::Value>,
}

impl SwaggerRequest {
    /// A fresh request for an operation, without parameters nor deadline.
    pub fn new(method: Method, path_pattern: impl Into<String>) -> Self {
        Self {
            method,
            path_pattern: path_pattern.into(),
            timeout: None,
            path_params: IndexMap::new(),
            query_params: IndexMap::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// The per-request deadline, `None` when there is none.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Path parameters, in the order they were written.
    pub fn path_params(&self) -> &IndexMap<String, String> {
        &self.path_params
    }

    /// Query parameters, in the order they were first written.
    pub fn query_params(&self) -> &IndexMap<String, Vec<String>> {
        &self.query_params
    }

    /// Header parameters.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The JSON body, if any.
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Builds the HTTP request against a transport base URL.
    ///
    /// The operation path is appended to the path of `base_url`.
    ///
    /// # Errors
    ///
    /// Fails when a path placeholder has no value, or when the query string,
    /// the body or the request itself cannot be produced.
    pub fn build_http_request(&self, base_url: &Url) -> Result<http::Request<Vec<u8>>, ClientError> {
        let path = resolve_path(&self.path_pattern, &self.path_params)?;

        // joined by hand, `Url::set_path` would collapse dot segments
        let mut uri = format!(
            "{}{}{path}",
            &base_url[..Position::BeforePath],
            base_url.path().trim_end_matches('/')
        );

        if !self.query_params.is_empty() {
            let pairs = self
                .query_params
                .iter()
                .flat_map(|(name, values)| {
                    values.iter().map(move |value| (name.as_str(), value.as_str()))
                })
                .collect::<Vec<_>>();
            let query = serde_urlencoded::to_string(pairs)?;
            uri.push('?');
            uri.push_str(&query);
        }

        let body = match &self.body {
            Some(value) => serde_json::to_vec(value)?,
            None => Vec::new(),
        };

        let mut request = http::Request::builder()
            .method(self.method.clone())
            .uri(uri)
            .body(body)?;
        request.headers_mut().extend(self.headers.clone());

        debug!(method = %self.method, uri = %request.uri(), "request built");
        Ok(request)
    }
}

impl ClientRequest for SwaggerRequest {
    fn set_timeout(&mut self, timeout: Duration) -> Result<(), RequestError> {
        // zero means no per-request deadline
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        Ok(())
    }

    fn set_path_param(&mut self, name: &str, value: &str) -> Result<(), RequestError> {
        if !has_placeholder(&self.path_pattern, name) {
            return Err(RequestError::UnknownPathParam {
                name: name.to_string(),
                path_pattern: self.path_pattern.clone(),
            });
        }
        self.path_params.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_query_param(&mut self, name: &str, values: &[&str]) -> Result<(), RequestError> {
        self.query_params
            .entry(name.to_string())
            .or_default()
            .extend(values.iter().map(ToString::to_string));
        Ok(())
    }

    fn set_header_param(&mut self, name: &str, values: &[&str]) -> Result<(), RequestError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let values = values
            .iter()
            .map(|value| HeaderValue::from_str(value))
            .collect::<Result<Vec<_>, _>>()?;

        self.headers.remove(&name);
        for value in values {
            self.headers.append(name.clone(), value);
        }
        Ok(())
    }

    fn set_body_param(&mut self, body: serde_json::Value) -> Result<(), RequestError> {
        self.body = Some(body);
        Ok(())
    }

    fn method(&self) -> &Method {
        &self.method
    }

    fn path_pattern(&self) -> &str {
        &self.path_pattern
    }
}

#[cfg(test)]
mod tests {
    use http::header::AUTHORIZATION;
    use serde_json::json;

    use super::*;

    const RULE_NAMES: &str = "/feg/{network_id}/subscriber_config/rule_names";

    fn base_url() -> Url {
        Url::parse("http://localhost/magma/v1").expect("valid url")
    }

    #[test]
    fn test_new_request_is_empty() {
        let request = SwaggerRequest::new(Method::GET, RULE_NAMES);

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path_pattern(), RULE_NAMES);
        assert!(request.timeout().is_none());
        assert!(request.path_params().is_empty());
        assert!(request.query_params().is_empty());
        assert!(request.headers().is_empty());
        assert!(request.body().is_none());
    }

    #[test]
    fn test_zero_timeout_means_no_deadline() {
        let mut request = SwaggerRequest::new(Method::GET, RULE_NAMES);

        request
            .set_timeout(Duration::from_secs(10))
            .expect("accepted");
        assert_eq!(request.timeout(), Some(Duration::from_secs(10)));

        request.set_timeout(Duration::ZERO).expect("accepted");
        assert!(request.timeout().is_none());
    }

    #[test]
    fn test_unknown_path_param_is_rejected() {
        let mut request = SwaggerRequest::new(Method::GET, RULE_NAMES);

        let error = request
            .set_path_param("gateway_id", "gw-1")
            .expect_err("not in template");

        insta::assert_snapshot!(error, @"Path parameter 'gateway_id' is not part of '/feg/{network_id}/subscriber_config/rule_names'");
        assert!(request.path_params().is_empty());
    }

    #[test]
    fn test_invalid_header_is_rejected() {
        let mut request = SwaggerRequest::new(Method::GET, RULE_NAMES);

        let result = request.set_header_param("bad header", &["value"]);
        assert!(matches!(result, Err(RequestError::InvalidHeaderName(_))));

        let result = request.set_header_param("X-Trace", &["line\nbreak"]);
        assert!(matches!(result, Err(RequestError::InvalidHeaderValue(_))));

        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_header_param_replaces_values() {
        let mut request = SwaggerRequest::new(Method::GET, RULE_NAMES);

        request
            .set_header_param("Authorization", &["Bearer old"])
            .expect("valid header");
        request
            .set_header_param("authorization", &["Bearer new"])
            .expect("valid header");

        let values = request
            .headers()
            .get_all(AUTHORIZATION)
            .iter()
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["Bearer new"]);
    }

    #[test]
    fn should_build_rule_names_request() {
        let mut request = SwaggerRequest::new(Method::GET, RULE_NAMES);
        request
            .set_path_param("network_id", "net-42")
            .expect("known param");

        let http_request = request.build_http_request(&base_url()).expect("built");

        assert_eq!(http_request.method(), Method::GET);
        insta::assert_snapshot!(http_request.uri(), @"http://localhost/magma/v1/feg/net-42/subscriber_config/rule_names");
        assert!(http_request.body().is_empty());
    }

    #[test]
    fn should_build_request_with_query_headers_and_body() {
        let mut request = SwaggerRequest::new(Method::PUT, "/feg/{network_id}/rules");
        request
            .set_path_param("network_id", "my net")
            .expect("known param");
        request
            .set_query_param("view", &["full"])
            .expect("query accepted");
        request
            .set_query_param("tag", &["a", "b&c"])
            .expect("query accepted");
        request
            .set_header_param("X-Magma-Trace", &["abc-123"])
            .expect("valid header");
        request
            .set_body_param(json!(["rule-1", "rule-2"]))
            .expect("body accepted");

        let http_request = request.build_http_request(&base_url()).expect("built");

        insta::assert_snapshot!(http_request.uri(), @"http://localhost/magma/v1/feg/my%20net/rules?view=full&tag=a&tag=b%26c");
        assert_eq!(
            http_request
                .headers()
                .get("x-magma-trace")
                .map(HeaderValue::as_bytes),
            Some(b"abc-123".as_slice())
        );
        assert_eq!(http_request.body(), br#"["rule-1","rule-2"]"#);
    }

    #[test]
    fn should_keep_dot_segment_in_built_uri() {
        let mut request = SwaggerRequest::new(Method::GET, RULE_NAMES);
        request
            .set_path_param("network_id", "..")
            .expect("known param");

        let http_request = request.build_http_request(&base_url()).expect("built");

        insta::assert_snapshot!(http_request.uri(), @"http://localhost/magma/v1/feg/%2E%2E/subscriber_config/rule_names");
    }

    #[test]
    fn test_build_fails_on_missing_path_param() {
        let request = SwaggerRequest::new(Method::GET, RULE_NAMES);

        let result = request.build_http_request(&base_url());

        let Err(ClientError::PathUnresolved { missings, .. }) = result else {
            panic!("expected unresolved path, got {result:?}");
        };
        assert_eq!(missings, vec!["network_id".to_string()]);
    }
}
