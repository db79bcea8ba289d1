use crate::api_client::FoscamApiClient;
use crate::error::Result;
use crate::params::Params;
use crate::response::CommandResponse;

impl FoscamApiClient {
    // ========================================================================
    // IP & Wi-Fi
    // ========================================================================

    pub async fn get_ip_info(&self) -> Result<CommandResponse> {
        self.send("getIPInfo", Params::new()).await
    }

    pub async fn set_ip_info(&self) -> Result<CommandResponse> {
        self.not_supported("setIpInfo")
    }

    /// Start scanning for access points. Fetch the results with
    /// [`FoscamApiClient::get_wifi_list`].
    pub async fn refresh_wifi_list(&self) -> Result<CommandResponse> {
        self.send("refreshWifiList", Params::new()).await
    }

    /// Get one page of scanned access points, starting at page 0.
    pub async fn get_wifi_list(&self, start_no: Option<u32>) -> Result<CommandResponse> {
        self.send(
            "getWifiList",
            Params::new().with("startNo", start_no.unwrap_or(0)),
        )
        .await
    }

    pub async fn set_wifi_setting(&self) -> Result<CommandResponse> {
        self.not_supported("setWifiSetting")
    }

    pub async fn get_wifi_config(&self) -> Result<CommandResponse> {
        self.send("getWifiConfig", Params::new()).await
    }

    // ========================================================================
    // Ports, UPnP & DDNS
    // ========================================================================

    pub async fn get_port_info(&self) -> Result<CommandResponse> {
        self.send("getPortInfo", Params::new()).await
    }

    pub async fn set_port_info(&self) -> Result<CommandResponse> {
        self.not_supported("setPortInfo")
    }

    pub async fn get_upnp_config(&self) -> Result<CommandResponse> {
        self.send("getUPnPConfig", Params::new()).await
    }

    pub async fn set_upnp_config(&self) -> Result<CommandResponse> {
        self.not_supported("setUPnPConfig")
    }

    pub async fn get_ddns_config(&self) -> Result<CommandResponse> {
        self.send("getDDNSConfig", Params::new()).await
    }

    pub async fn set_ddns_config(&self) -> Result<CommandResponse> {
        self.not_supported("setDDNSConfig")
    }

    // ========================================================================
    // FTP & Mail
    // ========================================================================

    pub async fn set_ftp_config(&self) -> Result<CommandResponse> {
        self.not_supported("setFtpConfig")
    }

    pub async fn get_ftp_config(&self) -> Result<CommandResponse> {
        self.send("getFtpConfig", Params::new()).await
    }

    pub async fn test_ftp_server(&self) -> Result<CommandResponse> {
        self.not_supported("testFtpServer")
    }

    pub async fn get_smtp_config(&self) -> Result<CommandResponse> {
        self.send("getSMTPConfig", Params::new()).await
    }

    pub async fn set_smtp_config(&self) -> Result<CommandResponse> {
        self.not_supported("setSMTPConfig")
    }

    pub async fn smtp_test(&self) -> Result<CommandResponse> {
        self.not_supported("smtpTest")
    }

    // ========================================================================
    // P2P & PPPoE
    // ========================================================================

    pub async fn set_p2p_enable(&self) -> Result<CommandResponse> {
        self.not_supported("setP2PEnable")
    }

    pub async fn get_p2p_enable(&self) -> Result<CommandResponse> {
        self.send("getP2PEnable", Params::new()).await
    }

    pub async fn set_p2p_port(&self) -> Result<CommandResponse> {
        self.not_supported("setP2PPort")
    }

    pub async fn get_p2p_port(&self) -> Result<CommandResponse> {
        self.send("getP2PPort", Params::new()).await
    }

    /// Get the P2P UID
    pub async fn get_p2p_info(&self) -> Result<CommandResponse> {
        self.send("getP2PInfo", Params::new()).await
    }

    pub async fn get_pppoe_config(&self) -> Result<CommandResponse> {
        self.send("getPPPoEConfig", Params::new()).await
    }

    pub async fn set_pppoe_config(&self) -> Result<CommandResponse> {
        self.not_supported("setPPPoEConfig")
    }
}
