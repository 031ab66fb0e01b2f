use crate::constants::{DEFAULT_VALUE_PREFIX, PARTIAL_KEY_SUFFIXES};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The value of a constant as declared in code.
///
/// Text constants may name configuration keys; every kind can take part in
/// default-value collision checks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstValue {
    Boolean(bool),
    Integer(i64),
    Text(Cow<'static, str>),
}

impl ConstValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Boolean(_) | Self::Integer(_) => None,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<&'static str> for ConstValue {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for ConstValue {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<bool> for ConstValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ConstValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ConstValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u16> for ConstValue {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ConstValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// A symbolic name declared by a constants class together with its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstantBinding {
    name: Cow<'static, str>,
    value: ConstValue,
}

impl ConstantBinding {
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<ConstValue>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn value(&self) -> &ConstValue {
        &self.value
    }

    /// `true` for `DEFAULT_*` constants, which carry default values rather than keys.
    #[must_use]
    pub fn is_default_value(&self) -> bool {
        self.name.starts_with(DEFAULT_VALUE_PREFIX)
    }

    /// The configuration key this binding names, if it names one.
    ///
    /// Only text constants outside the `DEFAULT_*` family qualify, and values ending in
    /// `.`, `-` or `.xml` are partial keys or file names.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        if self.is_default_value() {
            return None;
        }
        let text = self.value.as_text()?;
        if text.is_empty() || PARTIAL_KEY_SUFFIXES.iter().any(|suffix| text.ends_with(suffix)) {
            return None;
        }
        Some(text)
    }
}
