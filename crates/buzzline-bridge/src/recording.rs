use std::sync::{Arc, Mutex, PoisonError};

use crate::error::ServiceError;
use crate::service::VibratorService;

/// A primitive invocation observed by [`RecordingVibrator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibratorCall {
    OneShot { duration_ms: i64, amplitude: i32 },
    Legacy { duration_ms: i64 },
    Cancel,
}

/// In-memory vibrator that records every call instead of touching hardware.
///
/// Clones share the same log, so a clone can be kept for inspection after the
/// original is moved into a bridge.
#[derive(Debug, Clone, Default)]
pub struct RecordingVibrator {
    calls: Arc<Mutex<Vec<VibratorCall>>>,
    fail_with: Option<Arc<str>>,
}

impl RecordingVibrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A vibrator whose every call fails with a backend error.
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Arc::default(),
            fail_with: Some(message.into()),
        }
    }

    /// Snapshot of recorded calls, oldest first.
    pub fn calls(&self) -> Vec<VibratorCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: VibratorCall) -> Result<(), ServiceError> {
        if let Some(message) = &self.fail_with {
            return Err(ServiceError::Backend(message.to_string()));
        }
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
        Ok(())
    }
}

impl VibratorService for RecordingVibrator {
    fn one_shot(&mut self, duration_ms: i64, amplitude: i32) -> Result<(), ServiceError> {
        self.record(VibratorCall::OneShot {
            duration_ms,
            amplitude,
        })
    }

    fn vibrate_legacy(&mut self, duration_ms: i64) -> Result<(), ServiceError> {
        self.record(VibratorCall::Legacy { duration_ms })
    }

    fn cancel(&mut self) -> Result<(), ServiceError> {
        self.record(VibratorCall::Cancel)
    }
}
