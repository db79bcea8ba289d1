use crate::api_client::FoscamApiClient;
use crate::dto::*;
use crate::error::Result;
use crate::params::Params;
use crate::response::CommandResponse;
use crate::stream::MjpegStream;
use bytes::Bytes;

impl FoscamApiClient {
    // ========================================================================
    // Image Settings
    // ========================================================================

    /// Get color attributes of the video (brightness, contrast, hue,
    /// saturation, sharpness, denoise level). See [`ImageSetting`].
    pub async fn get_image_setting(&self) -> Result<CommandResponse> {
        self.send("getImageSetting", Params::new()).await
    }

    /// Set brightness, 0-100
    pub async fn set_brightness(&self, brightness: u8) -> Result<CommandResponse> {
        self.send("setBrightness", Params::new().with("brightness", brightness))
            .await
    }

    /// Set contrast, 0-100
    pub async fn set_contrast(&self, contrast: u8) -> Result<CommandResponse> {
        // The firmware expects `constrast`.
        self.send("setContrast", Params::new().with("constrast", contrast))
            .await
    }

    /// Set hue, 0-100
    pub async fn set_hue(&self, hue: u8) -> Result<CommandResponse> {
        self.send("setHue", Params::new().with("hue", hue)).await
    }

    /// Set saturation, 0-100
    pub async fn set_saturation(&self, saturation: u8) -> Result<CommandResponse> {
        self.send("setSaturation", Params::new().with("saturation", saturation))
            .await
    }

    /// Set sharpness, 0-100
    pub async fn set_sharpness(&self, sharpness: u8) -> Result<CommandResponse> {
        self.send("setSharpness", Params::new().with("sharpness", sharpness))
            .await
    }

    /// Set denoise level, 0-100. Accepted but unused by current firmware.
    pub async fn set_denoise_level(&self, level: u8) -> Result<CommandResponse> {
        self.send("setDenoiseLevel", Params::new().with("level", level))
            .await
    }

    /// Reset color parameters to their defaults
    pub async fn reset_image_setting(&self) -> Result<CommandResponse> {
        self.send("resetImageSetting", Params::new()).await
    }

    /// Get mirror and flip state. `isMirror` and `isFlip` come back as booleans.
    pub async fn get_mirror_and_flip_setting(&self) -> Result<CommandResponse> {
        Ok(self
            .send("getMirrorAndFlipSetting", Params::new())
            .await?
            .with_flags(&["isMirror", "isFlip"]))
    }

    pub async fn mirror_video(&self, is_mirror: bool) -> Result<CommandResponse> {
        let mut params = Params::new();
        params.insert_flag("isMirror", Some(is_mirror), None);
        self.send("mirrorVideo", params).await
    }

    pub async fn flip_video(&self, is_flip: bool) -> Result<CommandResponse> {
        let mut params = Params::new();
        params.insert_flag("isFlip", Some(is_flip), None);
        self.send("flipVideo", params).await
    }

    /// Get the image distortion correction value.
    ///
    /// The camera reports one of three ranks: 150 (high), 210 (middle) or 430 (low).
    pub async fn get_ratio(&self) -> Result<CommandResponse> {
        self.send("getRatio", Params::new()).await
    }

    /// Set image distortion correction, 0-511.
    ///
    /// 0-150 is high, 151-430 middle (default), 431-511 low.
    pub async fn set_ratio(&self, ratio: u16) -> Result<CommandResponse> {
        self.send("setRatio", Params::new().with("ratio", ratio)).await
    }

    pub async fn get_h264_frame_reference_mode(&self) -> Result<CommandResponse> {
        self.send("getH264FrmRefMode", Params::new()).await
    }

    pub async fn set_h264_frame_reference_mode(
        &self,
        mode: FrameReferenceMode,
    ) -> Result<CommandResponse> {
        self.send("setH264FrmRefMode", Params::new().with("mode", mode.code()))
            .await
    }

    /// Get the stream channel used for scheduled recording (`chn`: 0 main, 1 sub)
    pub async fn get_schedule_record_stream_channel(&self) -> Result<CommandResponse> {
        self.send("getScheduleRecordStreamChn", Params::new()).await
    }

    pub async fn set_schedule_record_stream_channel(
        &self,
        channel: StreamChannel,
    ) -> Result<CommandResponse> {
        self.send(
            "setScheduleRecordStreamChn",
            Params::new().with("chn", channel.code()),
        )
        .await
    }

    /// Set the power line frequency of the sensor
    pub async fn set_power_frequency(&self, frequency: PowerFrequency) -> Result<CommandResponse> {
        self.send("setPwrFreq", Params::new().with("freq", frequency.code()))
            .await
    }

    // ========================================================================
    // Video Streams
    // ========================================================================

    /// Get parameters of the four main stream types. Fields are suffixed with
    /// the stream type (`resolution0`, `bitRate3`, ...); `isVBR0`-`isVBR3`
    /// come back as booleans.
    pub async fn get_video_stream_param(&self) -> Result<CommandResponse> {
        Ok(self
            .send("getVideoStreamParam", Params::new())
            .await?
            .with_flags(&["isVBR0", "isVBR1", "isVBR2", "isVBR3"]))
    }

    /// Set the parameters of one main stream type. `is_vbr` defaults to off.
    pub async fn set_video_stream_param(
        &self,
        params: VideoStreamParams,
    ) -> Result<CommandResponse> {
        self.send("setVideoStreamParam", params.into()).await
    }

    pub async fn get_sub_video_stream_param(&self) -> Result<CommandResponse> {
        self.send("getSubVideoStreamParam", Params::new()).await
    }

    /// Set the parameters of one sub stream type. `is_vbr` defaults to off and
    /// is not used by current firmware.
    pub async fn set_sub_video_stream_param(
        &self,
        params: VideoStreamParams,
    ) -> Result<CommandResponse> {
        self.send("setSubVideoStreamParam", params.into()).await
    }

    pub async fn get_main_video_stream_type(&self) -> Result<CommandResponse> {
        self.send("getMainVideoStreamType", Params::new()).await
    }

    pub async fn get_sub_video_stream_type(&self) -> Result<CommandResponse> {
        self.send("getSubVideoStreamType", Params::new()).await
    }

    /// Select the active main stream type, 0-3
    pub async fn set_main_video_stream_type(&self, stream_type: u8) -> Result<CommandResponse> {
        self.send(
            "setMainVideoStreamType",
            Params::new().with("streamType", stream_type),
        )
        .await
    }

    /// Set the sub stream format.
    ///
    /// Switching the sub stream to motion JPEG is what makes
    /// [`FoscamApiClient::get_mj_stream`] available. A user logged in on the
    /// sub stream still receives main stream data.
    pub async fn set_sub_stream_format(&self, format: SubStreamFormat) -> Result<CommandResponse> {
        self.send(
            "setSubStreamFormat",
            Params::new().with("format", format.code()),
        )
        .await
    }

    /// Open the server-push motion JPEG stream (VGA at 15fps).
    ///
    /// The stream stays open until the returned handle is dropped.
    pub async fn get_mj_stream(&self) -> Result<MjpegStream> {
        self.stream("GetMJStream").await
    }

    // ========================================================================
    // On-Screen Display
    // ========================================================================

    /// Get OSD config. See [`OsdSetting`].
    pub async fn get_osd_setting(&self) -> Result<CommandResponse> {
        Ok(self.send("getOSDSetting", Params::new()).await?.with_flags(&[
            "isEnableTimeStamp",
            "isEnableDevName",
            "isEnableOSDMask",
            "isEnableTempAndHumid",
        ]))
    }

    pub async fn set_osd_setting(&self, params: OsdSettingParams) -> Result<CommandResponse> {
        self.send("setOSDSetting", params.into()).await
    }

    /// Get the four OSD mask rectangles (`x1_N`, `y1_N`, `x2_N`, `y2_N`)
    pub async fn get_osd_mask_area(&self) -> Result<CommandResponse> {
        self.send("getOsdMaskArea", Params::new()).await
    }

    pub async fn set_osd_mask_area(&self, area: OsdMaskArea) -> Result<CommandResponse> {
        self.send("setOsdMaskArea", area.into()).await
    }

    pub async fn get_osd_mask(&self) -> Result<CommandResponse> {
        Ok(self.send("getOSDMask", Params::new()).await?.with_flags(&[
            "isEnableTimeStamp",
            "isEnableTempAndHumid",
            "isEnableDevName",
            "isEnableOSDMask",
        ]))
    }

    pub async fn set_osd_mask(&self, is_enabled_osd_mask: bool) -> Result<CommandResponse> {
        let mut params = Params::new();
        params.insert_flag("isEnabledOSDMask", Some(is_enabled_osd_mask), None);
        self.send("setOSDMask", params).await
    }

    // ========================================================================
    // Motion Detection & Alarms
    // ========================================================================

    pub async fn get_motion_detect_config(&self) -> Result<CommandResponse> {
        self.send("getMotionDetectConfig", Params::new()).await
    }

    /// Region-based motion detection config, on firmware that has it.
    pub async fn get_motion_detect_config1(&self) -> Result<CommandResponse> {
        self.send("getMotionDetectConfig1", Params::new()).await
    }

    pub async fn set_motion_detect_config(
        &self,
        config: MotionDetectConfig,
    ) -> Result<CommandResponse> {
        self.send("setMotionDetectConfig", config.into()).await
    }

    pub async fn set_motion_detect_config1(
        &self,
        config: MotionDetectConfig1,
    ) -> Result<CommandResponse> {
        self.send("setMotionDetectConfig1", config.into()).await
    }

    pub async fn get_local_alarm_record_config(&self) -> Result<CommandResponse> {
        Ok(self
            .send("getLocalAlarmRecordConfig", Params::new())
            .await?
            .with_flags(&["isEnableLocalAlarmRecord"]))
    }

    pub async fn set_local_alarm_record_config(
        &self,
        config: LocalAlarmRecordConfig,
    ) -> Result<CommandResponse> {
        self.send("setLocalAlarmRecordConfig", config.into()).await
    }

    pub async fn set_io_alarm_config(&self) -> Result<CommandResponse> {
        self.not_supported("setIOAlarmConfig")
    }

    pub async fn get_io_alarm_config(&self) -> Result<CommandResponse> {
        self.send("getIOAlarmConfig", Params::new()).await
    }

    pub async fn clear_io_alarm_output(&self) -> Result<CommandResponse> {
        self.send("clearIOAlarmOutput", Params::new()).await
    }

    /// Enable or disable the audio alarm of the web live view
    pub async fn set_pc_audio_alarm_cfg(&self, enabled: bool) -> Result<CommandResponse> {
        let mut params = Params::new();
        params.insert_flag("isEnablePCAudioAlarm", Some(enabled), None);
        self.send("setPCAudioAlarmCfg", params).await
    }

    pub async fn get_pc_audio_alarm_cfg(&self) -> Result<CommandResponse> {
        Ok(self
            .send("getPCAudioAlarmCfg", Params::new())
            .await?
            .with_flags(&["isEnablePCAudioAlarm"]))
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    pub async fn get_snap_config(&self) -> Result<CommandResponse> {
        self.send("getSnapConfig", Params::new()).await
    }

    pub async fn set_snap_config(&self, config: SnapConfig) -> Result<CommandResponse> {
        self.send("setSnapConfig", config.into()).await
    }

    pub async fn get_schedule_snap_config(&self) -> Result<CommandResponse> {
        Ok(self
            .send("getScheduleSnapConfig", Params::new())
            .await?
            .with_flags(&["isEnable"]))
    }

    pub async fn set_schedule_snap_config(
        &self,
        config: ScheduleSnapConfig,
    ) -> Result<CommandResponse> {
        self.send("setScheduleSnapConfig", config.into()).await
    }

    /// Manual snapshot. The camera answers with an HTML fragment pointing at
    /// the stored picture, returned here unparsed.
    pub async fn snap_picture(&self) -> Result<Bytes> {
        self.send_raw("snapPicture", Params::new()).await
    }

    /// Manual snapshot returning JPEG data at main stream resolution.
    pub async fn snap_picture2(&self) -> Result<Bytes> {
        self.send_raw("snapPicture2", Params::new()).await
    }

    // ========================================================================
    // Recording
    // ========================================================================

    pub async fn get_record_list(&self) -> Result<CommandResponse> {
        self.send("getRecordList", Params::new()).await
    }

    pub async fn get_record_list2(&self) -> Result<CommandResponse> {
        self.send("getRecordList2", Params::new()).await
    }

    /// Resynchronize the record index used for playback
    pub async fn reload_record_index(&self) -> Result<CommandResponse> {
        self.send("reloadRecordindex", Params::new()).await
    }

    pub async fn get_alarm_record_config(&self) -> Result<CommandResponse> {
        self.send("getAlarmRecordConfig", Params::new()).await
    }

    pub async fn set_alarm_record_config(
        &self,
        config: AlarmRecordConfig,
    ) -> Result<CommandResponse> {
        self.send("setAlarmRecordConfig", config.into()).await
    }

    /// Storage used for recordings (`path`: 0 SD card, 2 FTP) with its free
    /// and total capacity. See [`RecordPath`].
    pub async fn get_record_path(&self) -> Result<CommandResponse> {
        self.send("getRecordPath", Params::new()).await
    }

    pub async fn get_schedule_record_config(&self) -> Result<CommandResponse> {
        Ok(self
            .send("getScheduleRecordConfig", Params::new())
            .await?
            .with_flags(&["isEnable", "isEnableAudio"]))
    }

    pub async fn set_schedule_record_config(
        &self,
        config: ScheduleRecordConfig,
    ) -> Result<CommandResponse> {
        self.send("setScheduleRecordConfig", config.into()).await
    }

    // ========================================================================
    // Multi-Device
    // ========================================================================

    pub async fn get_multi_dev_list(&self) -> Result<CommandResponse> {
        self.send("getMultiDevList", Params::new()).await
    }

    pub async fn get_multi_dev_detail_info(&self, channel: u8) -> Result<CommandResponse> {
        self.send(
            "getMultiDevDetailInfo",
            Params::new().with("chnnl", channel),
        )
        .await
    }

    pub async fn add_multi_dev(&self) -> Result<CommandResponse> {
        self.not_supported("addMultiDev")
    }

    pub async fn del_multi_dev(&self, channel: u8) -> Result<CommandResponse> {
        self.send("delMultiDev", Params::new().with("chnnl", channel))
            .await
    }

    // ========================================================================
    // Night Vision
    // ========================================================================

    /// Enable (1) or disable (0) night vision enhancement
    pub async fn set_de_frame_level(&self, level: u8) -> Result<CommandResponse> {
        self.send("setDeFrameLevel", Params::new().with("level", level))
            .await
    }

    pub async fn get_de_frame_level(&self) -> Result<CommandResponse> {
        self.send("getDeFrameLevel", Params::new()).await
    }
}
