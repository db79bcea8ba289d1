use crate::api_client::FoscamApiClient;
use crate::error::Result;
use crate::params::Params;
use crate::response::CommandResponse;

impl FoscamApiClient {
    pub async fn reboot_system(&self) -> Result<CommandResponse> {
        self.send("rebootSystem", Params::new()).await
    }

    pub async fn restore_to_factory_setting(&self) -> Result<CommandResponse> {
        self.send("restoreToFactorySetting", Params::new()).await
    }

    /// Export the config file. Once this succeeds the file can be downloaded
    /// from `/configs/export/configs.bin`.
    pub async fn export_config(&self) -> Result<CommandResponse> {
        self.send("exportConfig", Params::new()).await
    }

    pub async fn import_config(&self) -> Result<CommandResponse> {
        self.not_supported("importConfig")
    }

    pub async fn fw_upgrade(&self) -> Result<CommandResponse> {
        self.not_supported("fwUpgrade")
    }
}
