use crate::api_client::FoscamApiClient;
use crate::dto::LogQuery;
use crate::error::Result;
use crate::params::Params;
use crate::response::CommandResponse;

impl FoscamApiClient {
    pub async fn get_firewall_config(&self) -> Result<CommandResponse> {
        self.send("getFirewallConfig", Params::new()).await
    }

    pub async fn set_firewall_config(&self) -> Result<CommandResponse> {
        self.not_supported("setFirewallConfig")
    }

    /// Get one page of the system log. `LogQuery::default()` is the first 20 entries.
    pub async fn get_log(&self, query: LogQuery) -> Result<CommandResponse> {
        self.send("getLog", query.into()).await
    }
}
