use super::common::DaySchedule;
use super::text_serde;
use crate::params::Params;
use serde::{Deserialize, Serialize};

fn insert_schedules(params: &mut Params, schedules: Option<[DaySchedule; 7]>) {
    if let Some(schedules) = schedules {
        for (day, schedule) in schedules.iter().enumerate() {
            params.insert(format!("schedule{day}"), schedule);
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Parameters for `setVideoStreamParam` and `setSubVideoStreamParam`.
/// Unset fields are left out of the request, except `is_vbr` which is sent as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoStreamParams {
    /// 0-3
    pub stream_type: Option<u8>,
    pub resolution: Option<u8>,
    /// 20480 to 2097152
    pub bit_rate: Option<u32>,
    pub frame_rate: Option<u8>,
    /// P frames between I frames, usually a multiple of the frame rate.
    pub gop: Option<u32>,
    pub is_vbr: Option<bool>,
}

impl From<VideoStreamParams> for Params {
    fn from(p: VideoStreamParams) -> Self {
        let mut params = Params::new();
        params.insert_opt("streamType", p.stream_type);
        params.insert_opt("resolution", p.resolution);
        params.insert_opt("bitRate", p.bit_rate);
        params.insert_opt("frameRate", p.frame_rate);
        params.insert_opt("GOP", p.gop);
        params.insert_flag("isVBR", p.is_vbr, Some(0));
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsdSettingParams {
    pub is_enable_time_stamp: Option<bool>,
    pub is_enable_dev_name: Option<bool>,
    /// Currently always 0.
    pub disp_pos: Option<u8>,
    pub is_enable_osd_mask: Option<bool>,
}

impl From<OsdSettingParams> for Params {
    fn from(p: OsdSettingParams) -> Self {
        let mut params = Params::new();
        params.insert_flag("isEnableTimeStamp", p.is_enable_time_stamp, None);
        params.insert_flag("isEnableDevName", p.is_enable_dev_name, None);
        params.insert_opt("dispPos", p.disp_pos);
        params.insert_flag("isEnableOSDMask", p.is_enable_osd_mask, None);
        params
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

/// The camera supports at most four mask areas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsdMaskArea {
    pub areas: [MaskRect; 4],
}

impl From<OsdMaskArea> for Params {
    fn from(p: OsdMaskArea) -> Self {
        let mut params = Params::new();
        for (n, rect) in p.areas.iter().enumerate() {
            params.insert(format!("x1_{n}"), rect.x1);
            params.insert(format!("y1_{n}"), rect.y1);
            params.insert(format!("x2_{n}"), rect.x2);
            params.insert(format!("y2_{n}"), rect.y2);
        }
        params
    }
}

/// `setMotionDetectConfig`. The picture is divided into a 10x10 grid; each
/// `areas` entry is the bitmask of armed cells in one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotionDetectConfig {
    pub is_enable: Option<bool>,
    /// See [`super::common::linkage`].
    pub linkage: Option<u8>,
    pub snap_interval: Option<u32>,
    /// 0 low, 1 normal, 2 high, 3 lower, 4 lowest
    pub sensitivity: Option<u8>,
    pub trigger_interval: Option<u32>,
    /// Monday first.
    pub schedules: Option<[DaySchedule; 7]>,
    pub areas: Option<[u16; 10]>,
}

impl From<MotionDetectConfig> for Params {
    fn from(p: MotionDetectConfig) -> Self {
        let mut params = Params::new();
        params.insert_flag("isEnable", p.is_enable, None);
        params.insert_opt("linkage", p.linkage);
        params.insert_opt("snapInterval", p.snap_interval);
        params.insert_opt("sensitivity", p.sensitivity);
        params.insert_opt("triggerInterval", p.trigger_interval);
        insert_schedules(&mut params, p.schedules);
        if let Some(areas) = p.areas {
            for (row, area) in areas.iter().enumerate() {
                params.insert(format!("area{row}"), area);
            }
        }
        params
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub threshold: u32,
    pub sensitivity: u32,
    pub valid: u32,
}

/// `setMotionDetectConfig1`, the newer region-based variant. Only `is_enable`
/// is converted from a boolean; the alarm switches are sent as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotionDetectConfig1 {
    pub is_enable: Option<bool>,
    pub linkage: Option<u8>,
    pub snap_interval: Option<u32>,
    pub trigger_interval: Option<u32>,
    pub is_mov_alarm_enable: Option<u8>,
    pub is_pir_alarm_enable: Option<u8>,
    pub schedules: Option<[DaySchedule; 7]>,
    /// Regions 1 to 3, sent as `x1`..`valid3`. Unset slots are left out.
    pub regions: [Option<DetectRegion>; 3],
}

impl From<MotionDetectConfig1> for Params {
    fn from(p: MotionDetectConfig1) -> Self {
        let mut params = Params::new();
        params.insert_flag("isEnable", p.is_enable, None);
        params.insert_opt("linkage", p.linkage);
        params.insert_opt("snapInterval", p.snap_interval);
        params.insert_opt("triggerInterval", p.trigger_interval);
        params.insert_opt("isMovAlarmEnable", p.is_mov_alarm_enable);
        params.insert_opt("isPirAlarmEnable", p.is_pir_alarm_enable);
        insert_schedules(&mut params, p.schedules);
        for (i, region) in p.regions.iter().enumerate() {
            let Some(region) = region else {
                continue;
            };
            let n = i + 1;
            params.insert(format!("x{n}"), region.x);
            params.insert(format!("y{n}"), region.y);
            params.insert(format!("width{n}"), region.width);
            params.insert(format!("height{n}"), region.height);
            params.insert(format!("threshold{n}"), region.threshold);
            params.insert(format!("sensitivity{n}"), region.sensitivity);
            params.insert(format!("valid{n}"), region.valid);
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalAlarmRecordConfig {
    pub is_enable_local_alarm_record: Option<bool>,
    pub local_alarm_record_secs: Option<u32>,
}

impl From<LocalAlarmRecordConfig> for Params {
    fn from(p: LocalAlarmRecordConfig) -> Self {
        let mut params = Params::new();
        params.insert_flag("isEnableLocalAlarmRecord", p.is_enable_local_alarm_record, None);
        params.insert_opt("localAlarmRecordSecs", p.local_alarm_record_secs);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapConfig {
    /// 0 low, 1 normal, 2 high
    pub snap_pic_quality: Option<u8>,
    /// 0 SD card, 2 FTP
    pub save_location: Option<u8>,
}

impl From<SnapConfig> for Params {
    fn from(p: SnapConfig) -> Self {
        let mut params = Params::new();
        params.insert_opt("snapPicQuality", p.snap_pic_quality);
        params.insert_opt("saveLocation", p.save_location);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSnapConfig {
    pub is_enable: Option<bool>,
    pub snap_interval: Option<u32>,
    pub schedules: Option<[DaySchedule; 7]>,
}

impl From<ScheduleSnapConfig> for Params {
    fn from(p: ScheduleSnapConfig) -> Self {
        let mut params = Params::new();
        params.insert_flag("isEnable", p.is_enable, None);
        params.insert_opt("snapInterval", p.snap_interval);
        insert_schedules(&mut params, p.schedules);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmRecordConfig {
    pub is_enable_pre_record: Option<bool>,
    pub pre_record_secs: Option<u32>,
    pub alarm_record_secs: Option<u32>,
}

impl From<AlarmRecordConfig> for Params {
    fn from(p: AlarmRecordConfig) -> Self {
        let mut params = Params::new();
        params.insert_flag("isEnablePreRecord", p.is_enable_pre_record, None);
        params.insert_opt("preRecordSecs", p.pre_record_secs);
        params.insert_opt("alarmRecordSecs", p.alarm_record_secs);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleRecordConfig {
    pub is_enable: Option<bool>,
    /// Frame drop level: 0 keeps 30/30, 5 keeps 1/30.
    pub record_level: Option<u8>,
    /// 0 overwrites the oldest recording when the card is full, 1 stops.
    pub space_full_mode: Option<u8>,
    pub is_enable_audio: Option<bool>,
    pub schedules: Option<[DaySchedule; 7]>,
}

impl From<ScheduleRecordConfig> for Params {
    fn from(p: ScheduleRecordConfig) -> Self {
        let mut params = Params::new();
        params.insert_flag("isEnable", p.is_enable, None);
        params.insert_opt("recordLevel", p.record_level);
        params.insert_opt("spaceFullMode", p.space_full_mode);
        params.insert_flag("isEnableAudio", p.is_enable_audio, None);
        insert_schedules(&mut params, p.schedules);
        params
    }
}

// ============================================================================
// Response views
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSetting {
    pub result: i64,
    pub brightness: u8,
    pub contrast: u8,
    pub hue: u8,
    pub saturation: u8,
    pub sharpness: u8,
    #[serde(default)]
    pub denoise_level: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MirrorAndFlipSetting {
    pub result: i64,
    pub is_mirror: bool,
    pub is_flip: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsdSetting {
    pub result: i64,
    pub is_enable_time_stamp: bool,
    pub is_enable_dev_name: bool,
    pub disp_pos: i64,
    #[serde(rename = "isEnableOSDMask", default)]
    pub is_enable_osd_mask: Option<bool>,
    #[serde(default)]
    pub is_enable_temp_and_humid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPath {
    pub result: i64,
    /// 0 SD card, 2 FTP
    pub path: i64,
    #[serde(default, deserialize_with = "text_serde::option::deserialize")]
    pub free: Option<String>,
    #[serde(default, deserialize_with = "text_serde::option::deserialize")]
    pub total: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_stream_params_default_vbr() {
        let params: Params = VideoStreamParams::default().into();
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("isVBR", "0")]);
    }

    #[test]
    fn test_video_stream_params() {
        let params: Params = VideoStreamParams {
            stream_type: Some(2),
            resolution: Some(0),
            bit_rate: Some(20580),
            frame_rate: Some(15),
            gop: Some(30),
            is_vbr: Some(true),
        }
        .into();
        assert_eq!(params.get("streamType"), Some("2"));
        assert_eq!(params.get("bitRate"), Some("20580"));
        assert_eq!(params.get("GOP"), Some("30"));
        assert_eq!(params.get("isVBR"), Some("1"));
    }

    #[test]
    fn test_osd_setting_omits_unset_flags() {
        let params: Params = OsdSettingParams {
            is_enable_time_stamp: Some(true),
            is_enable_dev_name: None,
            disp_pos: Some(0),
            is_enable_osd_mask: Some(false),
        }
        .into();
        assert_eq!(params.get("isEnableTimeStamp"), Some("1"));
        assert!(!params.contains_key("isEnableDevName"));
        assert_eq!(params.get("isEnableOSDMask"), Some("0"));
    }

    #[test]
    fn test_motion_detect_config_grid() {
        let params: Params = MotionDetectConfig {
            is_enable: Some(true),
            linkage: Some(16),
            schedules: Some([1023; 7]),
            areas: Some([1023; 10]),
            ..Default::default()
        }
        .into();
        assert_eq!(params.get("isEnable"), Some("1"));
        assert_eq!(params.get("schedule6"), Some("1023"));
        assert_eq!(params.get("area9"), Some("1023"));
        assert!(!params.contains_key("area10"));
        assert!(!params.contains_key("sensitivity"));
    }

    #[test]
    fn test_motion_detect_config1_regions() {
        let region = DetectRegion {
            width: 10000,
            height: 10000,
            ..Default::default()
        };
        let params: Params = MotionDetectConfig1 {
            is_enable: Some(false),
            is_mov_alarm_enable: Some(1),
            regions: [Some(region), None, Some(region)],
            ..Default::default()
        }
        .into();
        assert_eq!(params.get("isEnable"), Some("0"));
        assert_eq!(params.get("isMovAlarmEnable"), Some("1"));
        assert_eq!(params.get("width1"), Some("10000"));
        assert!(!params.contains_key("width2"));
        assert!(!params.contains_key("valid2"));
        assert_eq!(params.get("height3"), Some("10000"));
    }

    #[test]
    fn test_osd_mask_area_keys() {
        let mut area = OsdMaskArea::default();
        area.areas[3] = MaskRect {
            x1: 1,
            y1: 2,
            x2: 3,
            y2: 4,
        };
        let params: Params = area.into();
        assert_eq!(params.len(), 16);
        assert_eq!(params.get("x1_3"), Some("1"));
        assert_eq!(params.get("y2_3"), Some("4"));
    }
}
