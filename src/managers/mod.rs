pub mod playback;
pub mod quiz;
