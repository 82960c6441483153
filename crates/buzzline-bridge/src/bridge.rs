use log::debug;

use crate::call::{MethodCall, MethodResult};
use crate::capability::Capability;
use crate::command::{Command, VibrateArgs};
use crate::error::Result;
use crate::service::VibratorService;

/// Translates method-channel calls into vibrator primitives.
///
/// The capability is fixed when the bridge is built; every `vibrate` goes
/// through the same primitive for the bridge's lifetime.
pub struct VibrationBridge<V> {
    vibrator: V,
    capability: Capability,
}

impl<V: VibratorService> VibrationBridge<V> {
    pub fn new(vibrator: V, capability: Capability) -> Self {
        Self {
            vibrator,
            capability,
        }
    }

    /// Builds a bridge for a platform reporting `api_level`.
    pub fn for_api_level(vibrator: V, api_level: u32) -> Self {
        Self::new(vibrator, Capability::detect(api_level))
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Handles a single call.
    ///
    /// Unknown methods yield [`MethodResult::NotImplemented`] without touching
    /// the vibrator. Wrongly typed `vibrate` arguments and vibrator faults are
    /// returned as errors.
    pub fn dispatch(&mut self, call: &MethodCall) -> Result<MethodResult> {
        match Command::parse(call)? {
            Command::Vibrate(args) => {
                self.vibrate(args)?;
                Ok(MethodResult::Success)
            }
            Command::Cancel => {
                debug!("cancel vibration");
                self.vibrator.cancel()?;
                Ok(MethodResult::Success)
            }
            Command::Unsupported(method) => {
                debug!("method not implemented: {method}");
                Ok(MethodResult::NotImplemented)
            }
        }
    }

    fn vibrate(&mut self, args: VibrateArgs) -> Result<()> {
        let duration_ms = i64::from(args.duration_ms);
        match self.capability {
            Capability::RicherVibration => {
                debug!("one-shot vibration: {duration_ms}ms at {}", args.amplitude);
                self.vibrator.one_shot(duration_ms, args.amplitude)?;
            }
            Capability::LegacyVibration => {
                debug!("legacy vibration: {duration_ms}ms");
                self.vibrator.vibrate_legacy(duration_ms)?;
            }
        }
        Ok(())
    }
}
