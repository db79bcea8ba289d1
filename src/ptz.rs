use crate::api_client::FoscamApiClient;
use crate::dto::PtzSpeed;
use crate::error::Result;
use crate::params::Params;
use crate::response::CommandResponse;

impl FoscamApiClient {
    // ========================================================================
    // Movement
    // ========================================================================

    pub async fn ptz_move_up(&self) -> Result<CommandResponse> {
        self.send("ptzMoveUp", Params::new()).await
    }

    pub async fn ptz_move_down(&self) -> Result<CommandResponse> {
        self.send("ptzMoveDown", Params::new()).await
    }

    pub async fn ptz_move_left(&self) -> Result<CommandResponse> {
        self.send("ptzMoveLeft", Params::new()).await
    }

    pub async fn ptz_move_right(&self) -> Result<CommandResponse> {
        self.send("ptzMoveRight", Params::new()).await
    }

    pub async fn ptz_move_top_left(&self) -> Result<CommandResponse> {
        self.send("ptzMoveTopLeft", Params::new()).await
    }

    pub async fn ptz_move_top_right(&self) -> Result<CommandResponse> {
        self.send("ptzMoveTopRight", Params::new()).await
    }

    pub async fn ptz_move_bottom_left(&self) -> Result<CommandResponse> {
        self.send("ptzMoveBottomLeft", Params::new()).await
    }

    pub async fn ptz_move_bottom_right(&self) -> Result<CommandResponse> {
        self.send("ptzMoveBottomRight", Params::new()).await
    }

    /// Stop any pan/tilt movement started by the `ptz_move_*` commands
    pub async fn ptz_stop_run(&self) -> Result<CommandResponse> {
        self.send("ptzStopRun", Params::new()).await
    }

    /// Return to the default position
    pub async fn ptz_reset(&self) -> Result<CommandResponse> {
        self.send("ptzReset", Params::new()).await
    }

    pub async fn get_ptz_speed(&self) -> Result<CommandResponse> {
        self.send("getPTZSpeed", Params::new()).await
    }

    pub async fn set_ptz_speed(&self, speed: PtzSpeed) -> Result<CommandResponse> {
        self.send("setPTZSpeed", Params::new().with("speed", speed.code()))
            .await
    }

    // ========================================================================
    // Preset Points
    // ========================================================================

    pub async fn get_ptz_preset_point_list(&self) -> Result<CommandResponse> {
        self.send("getPTZPresetPointList", Params::new()).await
    }

    /// Save the current position as a preset
    pub async fn ptz_add_preset_point(&self, name: &str) -> Result<CommandResponse> {
        self.send("ptzAddPresetPoint", Params::new().with("name", name))
            .await
    }

    pub async fn ptz_delete_preset_point(&self, name: &str) -> Result<CommandResponse> {
        self.send("ptzDeletePresetPoint", Params::new().with("name", name))
            .await
    }

    pub async fn ptz_goto_preset_point(&self, name: &str) -> Result<CommandResponse> {
        self.send("ptzGotoPresetPoint", Params::new().with("name", name))
            .await
    }

    // ========================================================================
    // Cruise
    // ========================================================================

    /// Get all cruise maps. The camera holds at most 8, two of which
    /// (horizontal and vertical) are built in.
    pub async fn ptz_get_cruise_map_list(&self) -> Result<CommandResponse> {
        self.send("ptzGetCruiseMapList", Params::new()).await
    }

    pub async fn ptz_get_cruise_map_info(&self) -> Result<CommandResponse> {
        self.not_supported("ptzGetCruiseMapInfo")
    }

    pub async fn ptz_set_cruise_map(&self) -> Result<CommandResponse> {
        self.not_supported("ptzSetCruiseMap")
    }

    pub async fn ptz_del_cruise_map(&self) -> Result<CommandResponse> {
        self.not_supported("ptzDelCruiseMap")
    }

    pub async fn ptz_start_cruise(&self, map_name: &str) -> Result<CommandResponse> {
        self.send("ptzStartCruise", Params::new().with("mapName", map_name))
            .await
    }

    pub async fn ptz_stop_cruise(&self) -> Result<CommandResponse> {
        self.send("ptzStopCruise", Params::new()).await
    }

    pub async fn set_cruise_time(&self) -> Result<CommandResponse> {
        self.not_supported("setCruiseTime")
    }

    pub async fn get_cruise_time(&self) -> Result<CommandResponse> {
        self.send("getCruiseTime", Params::new()).await
    }

    pub async fn set_cruise_time_customed(&self) -> Result<CommandResponse> {
        self.not_supported("setCruiseTimeCustomed")
    }

    pub async fn get_cruise_time_customed(&self) -> Result<CommandResponse> {
        self.send("getCruiseTimeCustomed", Params::new()).await
    }

    pub async fn set_cruise_loop_cnt(&self) -> Result<CommandResponse> {
        self.not_supported("setCruiseLoopCnt")
    }

    pub async fn get_cruise_loop_cnt(&self) -> Result<CommandResponse> {
        self.send("getCruiseLoopCnt", Params::new()).await
    }

    pub async fn set_cruise_ctrl_mode(&self) -> Result<CommandResponse> {
        self.not_supported("setCruiseCtrlMode")
    }

    /// Whether continuous cruise is bounded by time or by loop count
    pub async fn get_cruise_ctrl_mode(&self) -> Result<CommandResponse> {
        self.send("getCruiseCtrlMode", Params::new()).await
    }

    pub async fn set_cruise_pre_point_linger_time(&self) -> Result<CommandResponse> {
        self.not_supported("setCruisePrePointLingerTime")
    }

    pub async fn get_cruise_pre_point_linger_time(&self) -> Result<CommandResponse> {
        self.not_supported("getCruisePrePointLingerTime")
    }

    // ========================================================================
    // Zoom
    // ========================================================================

    pub async fn zoom_in(&self) -> Result<CommandResponse> {
        self.send("zoomIn", Params::new()).await
    }

    pub async fn zoom_out(&self) -> Result<CommandResponse> {
        self.send("zoomOut", Params::new()).await
    }

    pub async fn zoom_stop(&self) -> Result<CommandResponse> {
        self.send("zoomStop", Params::new()).await
    }

    pub async fn get_zoom_speed(&self) -> Result<CommandResponse> {
        self.send("getZoomSpeed", Params::new()).await
    }

    pub async fn set_zoom_speed(&self) -> Result<CommandResponse> {
        self.not_supported("setZoomSpeed")
    }

    // ========================================================================
    // Self Test & RS485
    // ========================================================================

    pub async fn set_ptz_self_test_mode(&self) -> Result<CommandResponse> {
        self.not_supported("setPTZSelfTestMode")
    }

    pub async fn get_ptz_self_test_mode(&self) -> Result<CommandResponse> {
        self.send("getPTZSelfTestMode", Params::new()).await
    }

    pub async fn get_ptz_pre_point_for_self_test(&self) -> Result<CommandResponse> {
        self.send("getPTZPrePointForSelfTest", Params::new()).await
    }

    pub async fn set_ptz_pre_point_for_self_test(&self) -> Result<CommandResponse> {
        self.not_supported("setPTZPrePointForSelfTest")
    }

    pub async fn get_485_info(&self) -> Result<CommandResponse> {
        self.send("get485Info", Params::new()).await
    }

    pub async fn set_485_info(&self) -> Result<CommandResponse> {
        self.not_supported("set485Info")
    }
}
