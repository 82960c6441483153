use std::collections::HashMap;
use std::fmt;

use crate::error::BridgeError;

/// Loosely typed argument value, as sent by the host layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Int(i32),
    Bool(bool),
    Str(String),
    Null,
}

impl ArgValue {
    /// Parses a raw textual value into the narrowest matching variant.
    pub fn parse(raw: &str) -> Self {
        if let Ok(v) = raw.parse::<i32>() {
            return ArgValue::Int(v);
        }
        match raw {
            "true" => ArgValue::Bool(true),
            "false" => ArgValue::Bool(false),
            "null" => ArgValue::Null,
            other => ArgValue::Str(other.to_string()),
        }
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Int(v) => write!(f, "{v}"),
            ArgValue::Bool(v) => write!(f, "{v}"),
            ArgValue::Str(v) => f.write_str(v),
            ArgValue::Null => f.write_str("null"),
        }
    }
}

/// Named arguments of a method call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments(HashMap<String, ArgValue>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<ArgValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.get(name)
    }

    /// Reads an integer argument.
    ///
    /// Absent and null values yield `Ok(None)`; any other non-integer value
    /// is an error.
    pub fn int(&self, name: &str) -> Result<Option<i32>, BridgeError> {
        match self.get(name) {
            None | Some(ArgValue::Null) => Ok(None),
            Some(ArgValue::Int(v)) => Ok(Some(*v)),
            Some(other) => Err(BridgeError::InvalidArgument {
                name: name.to_string(),
                value: other.to_string(),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A single call arriving over the method channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
    pub arguments: Arguments,
}

impl MethodCall {
    pub fn new(method: &str, arguments: Arguments) -> Self {
        Self {
            method: method.to_string(),
            arguments,
        }
    }
}

/// Outcome of a dispatched call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodResult {
    /// The command ran. Carries no payload.
    Success,
    /// The method name is not part of the bridge vocabulary.
    NotImplemented,
}
