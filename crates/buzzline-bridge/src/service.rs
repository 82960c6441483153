use crate::error::ServiceError;

/// Device-level vibration primitives.
///
/// Calls are fire-and-forget: they return as soon as the request is handed
/// to the device.
pub trait VibratorService {
    /// Plays a one-shot vibration with the given amplitude.
    fn one_shot(&mut self, duration_ms: i64, amplitude: i32) -> Result<(), ServiceError>;

    /// Plays a vibration at the device default strength.
    fn vibrate_legacy(&mut self, duration_ms: i64) -> Result<(), ServiceError>;

    /// Stops any ongoing vibration. A no-op when nothing is playing.
    fn cancel(&mut self) -> Result<(), ServiceError>;
}

impl<T: VibratorService + ?Sized> VibratorService for Box<T> {
    fn one_shot(&mut self, duration_ms: i64, amplitude: i32) -> Result<(), ServiceError> {
        (**self).one_shot(duration_ms, amplitude)
    }

    fn vibrate_legacy(&mut self, duration_ms: i64) -> Result<(), ServiceError> {
        (**self).vibrate_legacy(duration_ms)
    }

    fn cancel(&mut self) -> Result<(), ServiceError> {
        (**self).cancel()
    }
}
