use log::debug;
use sdl2::controller::GameController;
use sdl2::{GameControllerSubsystem, Sdl};

use crate::error::ServiceError;
use crate::service::VibratorService;

const MAX_AMPLITUDE: i32 = 255;

/// Vibrator backed by the rumble motors of the first attached game controller.
///
/// SDL must live entirely within the thread that created this value.
pub struct Sdl2Vibrator {
    _sdl: Sdl,
    _subsystem: GameControllerSubsystem,
    controller: GameController,
}

impl Sdl2Vibrator {
    pub fn open() -> Result<Self, ServiceError> {
        let sdl = sdl2::init().map_err(ServiceError::Backend)?;
        let subsystem = sdl.game_controller().map_err(ServiceError::Backend)?;
        let count = subsystem.num_joysticks().map_err(ServiceError::Backend)?;

        let controller = (0..count)
            .filter(|&i| subsystem.is_game_controller(i))
            .filter_map(|i| subsystem.open(i).ok())
            .find(GameController::has_rumble)
            .ok_or_else(|| {
                ServiceError::Unavailable("no game controller with rumble".into())
            })?;
        debug!("using controller for vibration: {}", controller.name());

        Ok(Self {
            _sdl: sdl,
            _subsystem: subsystem,
            controller,
        })
    }

    fn rumble(&mut self, strength: u16, duration_ms: i64) -> Result<(), ServiceError> {
        // Non-positive durations stop the motors instead of playing.
        let (strength, ms) = if duration_ms <= 0 {
            (0, 0)
        } else {
            (strength, u32::try_from(duration_ms).unwrap_or(u32::MAX))
        };
        self.controller
            .set_rumble(strength, strength, ms)
            .map_err(|e| ServiceError::Backend(format!("{e}")))
    }
}

/// Scales a 0..=255 amplitude to SDL's 16-bit motor strength.
fn motor_strength(amplitude: i32) -> u16 {
    let clamped = amplitude.clamp(0, MAX_AMPLITUDE);
    u16::try_from(clamped * 257).unwrap_or(u16::MAX)
}

impl VibratorService for Sdl2Vibrator {
    fn one_shot(&mut self, duration_ms: i64, amplitude: i32) -> Result<(), ServiceError> {
        self.rumble(motor_strength(amplitude), duration_ms)
    }

    fn vibrate_legacy(&mut self, duration_ms: i64) -> Result<(), ServiceError> {
        self.rumble(u16::MAX, duration_ms)
    }

    fn cancel(&mut self) -> Result<(), ServiceError> {
        self.rumble(0, 0)
    }
}
