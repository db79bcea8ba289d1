use serde::{Deserialize, Serialize};

/// Schedule for one day: 48 half-hour slots, bit N set means slot N is armed.
pub type DaySchedule = u64;

/// Every half hour of the day.
pub const FULL_DAY: DaySchedule = (1 << 48) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamChannel {
    Main,
    Sub,
}

impl StreamChannel {
    pub fn code(self) -> u8 {
        match self {
            StreamChannel::Main => 0,
            StreamChannel::Sub => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerFrequency {
    Hz60,
    Hz50,
    Outdoor,
}

impl PowerFrequency {
    pub fn code(self) -> u8 {
        match self {
            PowerFrequency::Hz60 => 0,
            PowerFrequency::Hz50 => 1,
            PowerFrequency::Outdoor => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubStreamFormat {
    H264,
    MotionJpeg,
}

impl SubStreamFormat {
    pub fn code(self) -> u8 {
        match self {
            SubStreamFormat::H264 => 0,
            SubStreamFormat::MotionJpeg => 1,
        }
    }
}

/// Frame shipping reference mode of the H264 encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameReferenceMode {
    Normal,
    /// Two frames are separated by four skipped frames.
    SkipFour,
}

impl FrameReferenceMode {
    pub fn code(self) -> u8 {
        match self {
            FrameReferenceMode::Normal => 0,
            FrameReferenceMode::SkipFour => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PtzSpeed {
    VerySlow,
    Slow,
    Normal,
    Fast,
    VeryFast,
}

impl PtzSpeed {
    pub fn code(self) -> u8 {
        match self {
            PtzSpeed::VerySlow => 0,
            PtzSpeed::Slow => 1,
            PtzSpeed::Normal => 2,
            PtzSpeed::Fast => 3,
            PtzSpeed::VeryFast => 4,
        }
    }
}

/// Alarm linkage bits (`linkage` parameter).
pub mod linkage {
    pub const RING: u8 = 1 << 0;
    pub const SEND_MAIL: u8 = 1 << 1;
    pub const SNAP_PICTURE: u8 = 1 << 2;
    pub const RECORD: u8 = 1 << 3;
}
