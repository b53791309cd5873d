//! Federation networks operations.
//!
//! - [`get_feg_network_id_subscriber_config_rule_names`] - `GET /feg/{network_id}/subscriber_config/rule_names`

mod client;
pub use self::client::{
    FederationNetworksClient, GET_FEG_NETWORK_ID_SUBSCRIBER_CONFIG_RULE_NAMES_ID,
    GET_FEG_NETWORK_ID_SUBSCRIBER_CONFIG_RULE_NAMES_PATH,
    get_feg_network_id_subscriber_config_rule_names,
};

mod get_feg_network_id_subscriber_config_rule_names_parameters;
pub use self::get_feg_network_id_subscriber_config_rule_names_parameters::GetFegNetworkIdSubscriberConfigRuleNamesParams;
