use std::fmt::Debug;
use std::time::Duration;

use headers::{ContentType, HeaderMapExt};
use http::header::{ACCEPT, HeaderValue};
use http::uri::Scheme;
use http::Method;
use mime::Mime;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{ClientError, ClientRequest, SwaggerRequest, TransportConfig};
use crate::{CompositeValidationError, Registry};

/// Parameters of an operation that know how to write themselves onto a request.
pub trait ClientRequestWriter: Debug + Send + Sync {
    /// Writes every parameter onto the request.
    ///
    /// # Errors
    ///
    /// Returns the errors the request raised, the request is then not to be sent.
    fn write_to_request(
        &self,
        request: &mut dyn ClientRequest,
        registry: &Registry,
    ) -> Result<(), CompositeValidationError>;
}

/// Everything a transport needs to call one endpoint.
#[derive(Debug)]
pub struct ClientOperation {
    id: &'static str,
    method: Method,
    path_pattern: &'static str,
    produces: Vec<Mime>,
    consumes: Vec<Mime>,
    schemes: Vec<Scheme>,
    params: Box<dyn ClientRequestWriter>,
    context: Option<CancellationToken>,
    client: Option<reqwest::Client>,
}

impl ClientOperation {
    /// Creates an operation producing and consuming JSON, over `http`.
    pub fn new(
        id: &'static str,
        method: Method,
        path_pattern: &'static str,
        params: Box<dyn ClientRequestWriter>,
    ) -> Self {
        Self {
            id,
            method,
            path_pattern,
            produces: vec![mime::APPLICATION_JSON],
            consumes: vec![mime::APPLICATION_JSON],
            schemes: vec![Scheme::HTTP],
            params,
            context: None,
            client: None,
        }
    }

    /// Sets the media types the operation may answer with.
    pub fn with_produces(mut self, produces: Vec<Mime>) -> Self {
        self.produces = produces;
        self
    }

    /// Sets the media types the operation accepts as body.
    pub fn with_consumes(mut self, consumes: Vec<Mime>) -> Self {
        self.consumes = consumes;
        self
    }

    /// Sets the schemes the operation is served on, by preference.
    pub fn with_schemes(mut self, schemes: Vec<Scheme>) -> Self {
        self.schemes = schemes;
        self
    }

    /// Sets the cancellation token the transport must honor.
    pub fn with_context(mut self, context: Option<CancellationToken>) -> Self {
        self.context = context;
        self
    }

    /// Sets the HTTP client to use instead of the transport default.
    pub fn with_client(mut self, client: Option<reqwest::Client>) -> Self {
        self.client = client;
        self
    }

    /// The operation id, as named in the API document.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path template, relative to the transport base path.
    pub fn path_pattern(&self) -> &'static str {
        self.path_pattern
    }

    /// Media types of the responses.
    pub fn produces(&self) -> &[Mime] {
        &self.produces
    }

    /// Media types of the request body.
    pub fn consumes(&self) -> &[Mime] {
        &self.consumes
    }

    /// Schemes the operation is served on.
    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    /// The cancellation token, if any.
    pub fn context(&self) -> Option<&CancellationToken> {
        self.context.as_ref()
    }

    /// The HTTP client override, if any.
    pub fn client(&self) -> Option<&reqwest::Client> {
        self.client.as_ref()
    }

    /// Writes the parameters and assembles the HTTP request for the transport.
    ///
    /// # Errors
    ///
    /// Fails when the parameters are rejected ([`ClientError::Validation`]),
    /// when no scheme is usable, or when the request cannot be built.
    pub fn prepare(
        &self,
        config: &TransportConfig,
        registry: &Registry,
    ) -> Result<PreparedRequest, ClientError> {
        let mut request = SwaggerRequest::new(self.method.clone(), self.path_pattern);
        self.params.write_to_request(&mut request, registry)?;

        let scheme = config.select_scheme(&self.schemes)?;
        let base_url = config.base_url(scheme)?;
        let mut http_request = request.build_http_request(&base_url)?;

        if !self.produces.is_empty() {
            let accept = self
                .produces
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            http_request
                .headers_mut()
                .insert(ACCEPT, HeaderValue::from_str(&accept)?);
        }
        if !http_request.body().is_empty()
            && let Some(consumes) = self.consumes.first()
        {
            http_request
                .headers_mut()
                .typed_insert(ContentType::from(consumes.clone()));
        }

        debug!(operation = self.id, uri = %http_request.uri(), "operation prepared");
        Ok(PreparedRequest {
            operation_id: self.id,
            request: http_request,
            timeout: request.timeout(),
            context: self.context.clone(),
            client: self.client.clone(),
        })
    }
}

/// An HTTP request ready to be sent, with the per-call transport options.
#[derive(Debug)]
pub struct PreparedRequest {
    operation_id: &'static str,
    request: http::Request<Vec<u8>>,
    timeout: Option<Duration>,
    context: Option<CancellationToken>,
    client: Option<reqwest::Client>,
}

impl PreparedRequest {
    /// The id of the operation this request calls.
    pub fn operation_id(&self) -> &'static str {
        self.operation_id
    }

    /// The HTTP request.
    pub fn request(&self) -> &http::Request<Vec<u8>> {
        &self.request
    }

    /// Consumes this and returns the HTTP request.
    pub fn into_request(self) -> http::Request<Vec<u8>> {
        self.request
    }

    /// The per-request deadline, `None` when there is none.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The cancellation token, if any.
    pub fn context(&self) -> Option<&CancellationToken> {
        self.context.as_ref()
    }

    /// The HTTP client override, if any.
    pub fn http_client(&self) -> Option<&reqwest::Client> {
        self.client.as_ref()
    }

    /// Whether the caller already gave up on this call.
    pub fn is_cancelled(&self) -> bool {
        self.context
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}
