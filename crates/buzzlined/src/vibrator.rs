use buzzline_bridge::{RecordingVibrator, ServiceError, VibratorService};

use crate::config::Backend;
use crate::print_info;

/// Vibrator that only reports what it would do.
#[derive(Debug, Default)]
pub struct LogVibrator;

impl VibratorService for LogVibrator {
    fn one_shot(&mut self, duration_ms: i64, amplitude: i32) -> Result<(), ServiceError> {
        print_info!("vibrate one-shot duration={duration_ms}ms amplitude={amplitude}");
        Ok(())
    }

    fn vibrate_legacy(&mut self, duration_ms: i64) -> Result<(), ServiceError> {
        print_info!("vibrate legacy duration={duration_ms}ms");
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), ServiceError> {
        print_info!("vibration cancelled");
        Ok(())
    }
}

/// Opens the vibrator for `backend`.
///
/// Must be called on the thread that will drive the vibrator.
pub fn open(backend: Backend) -> Result<Box<dyn VibratorService>, ServiceError> {
    match backend {
        Backend::Log => Ok(Box::new(LogVibrator)),
        Backend::Recording => Ok(Box::new(RecordingVibrator::new())),
        Backend::Sdl2 => open_sdl2(),
    }
}

#[cfg(feature = "sdl2-backend")]
fn open_sdl2() -> Result<Box<dyn VibratorService>, ServiceError> {
    Ok(Box::new(buzzline_bridge::Sdl2Vibrator::open()?))
}

#[cfg(not(feature = "sdl2-backend"))]
fn open_sdl2() -> Result<Box<dyn VibratorService>, ServiceError> {
    Err(ServiceError::Unavailable(
        "built without the sdl2-backend feature".into(),
    ))
}
