/// First platform API level that offers amplitude-controlled one-shot vibration.
pub const RICH_VIBRATION_MIN_API_LEVEL: u32 = 26;

/// Vibration primitive available on the running platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// One-shot effect with explicit amplitude.
    RicherVibration,
    /// Duration-only vibration, amplitude is dropped.
    LegacyVibration,
}

impl Capability {
    pub fn detect(api_level: u32) -> Self {
        if api_level >= RICH_VIBRATION_MIN_API_LEVEL {
            Capability::RicherVibration
        } else {
            Capability::LegacyVibration
        }
    }
}
