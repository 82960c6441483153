mod bridge;
mod call;
mod capability;
mod command;
mod error;
mod recording;
mod service;
#[cfg(feature = "sdl2-backend")]
mod rumble;

pub use crate::bridge::VibrationBridge;
pub use crate::call::{ArgValue, Arguments, MethodCall, MethodResult};
pub use crate::capability::{Capability, RICH_VIBRATION_MIN_API_LEVEL};
pub use crate::command::{
    Command, VibrateArgs, CANCEL_METHOD, DEFAULT_AMPLITUDE, DEFAULT_DURATION_MS,
    VIBRATE_METHOD,
};
pub use crate::error::{BridgeError, Result, ServiceError};
pub use crate::recording::{RecordingVibrator, VibratorCall};
pub use crate::service::VibratorService;
#[cfg(feature = "sdl2-backend")]
pub use crate::rumble::Sdl2Vibrator;

/// Name of the method channel the bridge is registered under.
pub const CHANNEL_NAME: &str = "com.example.vibrator";
