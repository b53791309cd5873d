use http::Method;

use super::GetFegNetworkIdSubscriberConfigRuleNamesParams;
use crate::{ClientError, ClientOperation, PreparedRequest, Registry, TransportConfig};

/// Path template of the rule names operation.
pub const GET_FEG_NETWORK_ID_SUBSCRIBER_CONFIG_RULE_NAMES_PATH: &str =
    "/feg/{network_id}/subscriber_config/rule_names";

/// Operation id of the rule names operation.
pub const GET_FEG_NETWORK_ID_SUBSCRIBER_CONFIG_RULE_NAMES_ID: &str =
    "GetFegNetworkIDSubscriberConfigRuleNames";

/// Lists the subscriber config rule names of a FeG network.
///
/// The cancellation token and the HTTP client override of the parameters are
/// carried by the operation for the transport.
pub fn get_feg_network_id_subscriber_config_rule_names(
    params: GetFegNetworkIdSubscriberConfigRuleNamesParams,
) -> ClientOperation {
    let context = params.context().cloned();
    let client = params.http_client().cloned();

    ClientOperation::new(
        GET_FEG_NETWORK_ID_SUBSCRIBER_CONFIG_RULE_NAMES_ID,
        Method::GET,
        GET_FEG_NETWORK_ID_SUBSCRIBER_CONFIG_RULE_NAMES_PATH,
        Box::new(params),
    )
    .with_context(context)
    .with_client(client)
}

/// Client for the federation networks operations.
///
/// It prepares requests; sending them is up to the transport.
///
/// # Example
///
/// ```rust
/// use orc8r_client::federation_networks::{
///     FederationNetworksClient, GetFegNetworkIdSubscriberConfigRuleNamesParams,
/// };
/// use orc8r_client::TransportConfig;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FederationNetworksClient::new(TransportConfig::default());
///
/// let params = GetFegNetworkIdSubscriberConfigRuleNamesParams::new().with_network_id("net-42");
/// let prepared = client.get_feg_network_id_subscriber_config_rule_names(params)?;
///
/// assert_eq!(
///     prepared.request().uri(),
///     "http://localhost/magma/v1/feg/net-42/subscriber_config/rule_names"
/// );
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FederationNetworksClient {
    config: TransportConfig,
    registry: Registry,
}

impl FederationNetworksClient {
    /// A client with the default formats registry.
    pub fn new(config: TransportConfig) -> Self {
        Self {
            config,
            registry: Registry::default(),
        }
    }

    /// Replaces the formats registry.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// The transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Prepares the "get FeG network subscriber config rule names" request.
    ///
    /// # Errors
    ///
    /// Fails when the parameters are rejected or the request cannot be built.
    pub fn get_feg_network_id_subscriber_config_rule_names(
        &self,
        params: GetFegNetworkIdSubscriberConfigRuleNamesParams,
    ) -> Result<PreparedRequest, ClientError> {
        get_feg_network_id_subscriber_config_rule_names(params).prepare(&self.config, &self.registry)
    }
}
