use buzzline_bridge::{ArgValue, Arguments, MethodCall};

use super::{ChannelError, ChannelResult};

/// Parses a request line of the form `<method> [key=value]...`.
pub fn parse_request(line: &str) -> ChannelResult<MethodCall> {
    let mut parts = line.split_whitespace();
    let Some(method) = parts.next() else {
        return Err(ChannelError::Parse("missing method".into()));
    };

    let mut arguments = Arguments::new();
    for part in parts {
        let Some((key, value)) = part.split_once('=') else {
            return Err(ChannelError::Parse(format!(
                "expected key=value, got {part}"
            )));
        };
        if key.is_empty() {
            return Err(ChannelError::Parse(format!("empty argument name in {part}")));
        }
        arguments.insert(key, ArgValue::parse(value));
    }

    Ok(MethodCall::new(method, arguments))
}

/// Renders a call as a request line, without the trailing newline.
/// Arguments are sorted by name.
pub fn format_request(call: &MethodCall) -> String {
    let mut args: Vec<(&str, &ArgValue)> = call.arguments.iter().collect();
    args.sort_by_key(|(k, _)| *k);

    let mut line = call.method.clone();
    for (key, value) in args {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(&value.to_string());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_method_and_arguments() {
        let call = parse_request("vibrate duration=500 amplitude=200").unwrap();
        assert_eq!(call.method, "vibrate");
        assert_eq!(call.arguments.int("duration").unwrap(), Some(500));
        assert_eq!(call.arguments.int("amplitude").unwrap(), Some(200));
    }

    #[test]
    fn bare_method_has_no_arguments() {
        let call = parse_request("  cancel \n").unwrap();
        assert_eq!(call.method, "cancel");
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn loose_values_survive_parsing() {
        let call = parse_request("vibrate duration=long amplitude=null").unwrap();
        assert_eq!(
            call.arguments.get("duration"),
            Some(&ArgValue::Str("long".into()))
        );
        assert_eq!(call.arguments.get("amplitude"), Some(&ArgValue::Null));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(parse_request(""), Err(ChannelError::Parse(_))));
        assert!(matches!(
            parse_request("vibrate 500"),
            Err(ChannelError::Parse(_))
        ));
        assert!(matches!(
            parse_request("vibrate =5"),
            Err(ChannelError::Parse(_))
        ));
    }

    #[test]
    fn formats_sorted_line() {
        let call = MethodCall::new(
            "vibrate",
            Arguments::new().with("duration", 300).with("amplitude", 50),
        );
        assert_eq!(format_request(&call), "vibrate amplitude=50 duration=300");
        assert_eq!(parse_request(&format_request(&call)).unwrap(), call);
    }
}
