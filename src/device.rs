use crate::api_client::FoscamApiClient;
use crate::error::Result;
use crate::params::Params;
use crate::response::CommandResponse;

impl FoscamApiClient {
    // ========================================================================
    // Time & Infrared
    // ========================================================================

    pub async fn set_system_time(&self) -> Result<CommandResponse> {
        self.not_supported("setSystemTime")
    }

    pub async fn get_system_time(&self) -> Result<CommandResponse> {
        self.send("getSystemTime", Params::new()).await
    }

    /// Force the infrared LEDs on
    pub async fn open_infra_led(&self) -> Result<CommandResponse> {
        self.send("openInfraLed", Params::new()).await
    }

    /// Force the infrared LEDs off
    pub async fn close_infra_led(&self) -> Result<CommandResponse> {
        self.send("closeInfraLed", Params::new()).await
    }

    pub async fn get_infra_led_config(&self) -> Result<CommandResponse> {
        self.send("getInfraLedConfig", Params::new()).await
    }

    pub async fn set_infra_led_config(&self) -> Result<CommandResponse> {
        self.not_supported("setInfraLedConfig")
    }

    pub async fn get_schedule_infra_led_config(&self) -> Result<CommandResponse> {
        self.send("getScheduleInfraLedConfig", Params::new()).await
    }

    pub async fn set_schedule_infra_led_config(&self) -> Result<CommandResponse> {
        self.not_supported("setScheduleInfraLedConfig")
    }

    // ========================================================================
    // Device Identity
    // ========================================================================

    /// Get all device state (alarms, SD card, connectivity)
    pub async fn get_dev_state(&self) -> Result<CommandResponse> {
        self.send("getDevState", Params::new()).await
    }

    pub async fn get_dev_name(&self) -> Result<CommandResponse> {
        self.send("getDevName", Params::new()).await
    }

    pub async fn set_dev_name(&self, name: &str) -> Result<CommandResponse> {
        self.send("setDevName", Params::new().with("devName", name))
            .await
    }

    /// Get camera information. See [`crate::dto::DevInfo`].
    pub async fn get_dev_info(&self) -> Result<CommandResponse> {
        self.send("getDevInfo", Params::new()).await
    }

    // ========================================================================
    // Product Capabilities
    // ========================================================================

    pub async fn get_product_model(&self) -> Result<CommandResponse> {
        self.send("getProductModel", Params::new()).await
    }

    pub async fn get_product_model_name(&self) -> Result<CommandResponse> {
        self.send("getProductModelName", Params::new()).await
    }

    pub async fn get_product_language(&self) -> Result<CommandResponse> {
        self.send("getProductLanguage", Params::new()).await
    }

    pub async fn get_product_sensor_type(&self) -> Result<CommandResponse> {
        self.send("getProductSensorType", Params::new()).await
    }

    pub async fn get_product_wifi_type(&self) -> Result<CommandResponse> {
        self.send("getProductWifiType", Params::new()).await
    }

    /// Whether the camera has an SD card slot
    pub async fn get_product_sd_flag(&self) -> Result<CommandResponse> {
        self.send("getProductSdFlag", Params::new()).await
    }

    pub async fn get_product_outdoor_flag(&self) -> Result<CommandResponse> {
        self.send("getProductOutdoorFlag", Params::new()).await
    }

    /// Whether the camera can pan and tilt
    pub async fn get_product_pt_flag(&self) -> Result<CommandResponse> {
        self.send("getProductPtFlag", Params::new()).await
    }

    pub async fn get_product_zoom_flag(&self) -> Result<CommandResponse> {
        self.send("getProductZoomFlag", Params::new()).await
    }

    pub async fn get_product_rs485_flag(&self) -> Result<CommandResponse> {
        self.send("getProductRs485Flag", Params::new()).await
    }

    pub async fn get_product_io_alarm_flag(&self) -> Result<CommandResponse> {
        self.send("getProductIoAlarmFlag", Params::new()).await
    }

    pub async fn get_product_onvif_flag(&self) -> Result<CommandResponse> {
        self.send("getProductOnvifFlag", Params::new()).await
    }

    pub async fn get_product_p2p_flag(&self) -> Result<CommandResponse> {
        self.send("getProductP2pFlag", Params::new()).await
    }

    pub async fn get_product_wps_flag(&self) -> Result<CommandResponse> {
        self.send("getProductWpsFlag", Params::new()).await
    }

    /// Whether the camera has a speaker
    pub async fn get_product_audio_flag(&self) -> Result<CommandResponse> {
        self.send("getProductAudioFlag", Params::new()).await
    }

    /// Whether the camera supports two-way talk
    pub async fn get_product_talk_flag(&self) -> Result<CommandResponse> {
        self.send("getProductTalkFlag", Params::new()).await
    }

    pub async fn get_product_app_ver(&self) -> Result<CommandResponse> {
        self.send("getProductAppVer", Params::new()).await
    }

    pub async fn get_product_all_info(&self) -> Result<CommandResponse> {
        self.send("getProductAllInfo", Params::new()).await
    }

    // ========================================================================
    // Software Reset
    // ========================================================================

    /// Public key generated by the camera for a software factory reset
    pub async fn get_generate_pub_key(&self) -> Result<CommandResponse> {
        self.send("getGeneratePubKey", Params::new()).await
    }

    pub async fn tool_reset_to_factory(&self) -> Result<CommandResponse> {
        self.not_supported("toolResetToFactory")
    }
}
