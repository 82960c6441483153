use crate::call::{Arguments, MethodCall};
use crate::error::Result;

pub const VIBRATE_METHOD: &str = "vibrate";
pub const CANCEL_METHOD: &str = "cancel";

/// Duration used when `duration` is absent or null.
pub const DEFAULT_DURATION_MS: i32 = 100;
/// Amplitude used when `amplitude` is absent or null.
pub const DEFAULT_AMPLITUDE: i32 = 128;

/// Resolved arguments of the `vibrate` command.
///
/// Values are taken verbatim, without range checks. Absent or null values
/// take the defaults; values of any other type are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibrateArgs {
    pub duration_ms: i32,
    pub amplitude: i32,
}

impl VibrateArgs {
    pub fn from_arguments(args: &Arguments) -> Result<Self> {
        Ok(Self {
            duration_ms: args.int("duration")?.unwrap_or(DEFAULT_DURATION_MS),
            amplitude: args.int("amplitude")?.unwrap_or(DEFAULT_AMPLITUDE),
        })
    }
}

impl Default for VibrateArgs {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}

/// Closed command vocabulary of the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Vibrate(VibrateArgs),
    Cancel,
    /// Anything else. Holds the method name for reporting.
    Unsupported(String),
}

impl Command {
    /// Fails only when a `vibrate` argument has the wrong type.
    pub fn parse(call: &MethodCall) -> Result<Self> {
        let command = match call.method.as_str() {
            VIBRATE_METHOD => Command::Vibrate(VibrateArgs::from_arguments(&call.arguments)?),
            CANCEL_METHOD => Command::Cancel,
            other => Command::Unsupported(other.to_string()),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::ArgValue;
    use crate::error::BridgeError;

    #[test]
    fn vibrate_without_arguments_uses_defaults() {
        let call = MethodCall::new("vibrate", Arguments::new());
        assert_eq!(
            Command::parse(&call).unwrap(),
            Command::Vibrate(VibrateArgs {
                duration_ms: 100,
                amplitude: 128
            })
        );
    }

    #[test]
    fn vibrate_keeps_negative_values() {
        let args = Arguments::new()
            .with("duration", -20)
            .with("amplitude", -1);
        let call = MethodCall::new("vibrate", args);
        assert_eq!(
            Command::parse(&call).unwrap(),
            Command::Vibrate(VibrateArgs {
                duration_ms: -20,
                amplitude: -1
            })
        );
    }

    #[test]
    fn null_arguments_fall_back_to_defaults() {
        let args = Arguments::new()
            .with("duration", ArgValue::Null)
            .with("amplitude", ArgValue::Null);
        assert_eq!(
            VibrateArgs::from_arguments(&args).unwrap(),
            VibrateArgs::default()
        );
    }

    #[test]
    fn wrongly_typed_arguments_are_rejected() {
        let args = Arguments::new().with("amplitude", true);
        assert!(matches!(
            VibrateArgs::from_arguments(&args),
            Err(BridgeError::InvalidArgument { ref name, .. }) if name == "amplitude"
        ));

        // Larger than 32 bits arrives as text and is rejected, not defaulted.
        let args = Arguments::new().with("duration", ArgValue::parse("3000000000"));
        let call = MethodCall::new("vibrate", args);
        assert!(matches!(
            Command::parse(&call),
            Err(BridgeError::InvalidArgument { ref name, ref value })
                if name == "duration" && value == "3000000000"
        ));
    }

    #[test]
    fn unknown_methods_ignore_argument_types() {
        let call = MethodCall::new("beep", Arguments::new().with("duration", "loud"));
        assert_eq!(
            Command::parse(&call).unwrap(),
            Command::Unsupported("beep".into())
        );
    }

    #[test]
    fn cancel_ignores_arguments() {
        let call = MethodCall::new("cancel", Arguments::new().with("duration", 5));
        assert_eq!(Command::parse(&call).unwrap(), Command::Cancel);
    }

    #[test]
    fn method_names_are_case_sensitive() {
        let call = MethodCall::new("Vibrate", Arguments::new());
        assert_eq!(
            Command::parse(&call).unwrap(),
            Command::Unsupported("Vibrate".into())
        );
    }
}
