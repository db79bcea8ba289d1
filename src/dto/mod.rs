pub mod av;
pub mod common;
pub mod device;
pub mod misc;
pub mod text_serde;

pub use av::*;
pub use common::*;
pub use device::*;
pub use misc::*;
