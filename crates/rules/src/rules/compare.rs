//! Cross-field comparison
//!
//! [`Compare`] reads a sibling property off the owning object and applies a
//! relational operator between the value under test and the sibling.
//!
//! # Examples
//!
//! ```
//! use fieldrules::foundation::{Rule, ValidationArguments};
//! use fieldrules::rules::{Compare, CompareOptions};
//! use serde_json::json;
//!
//! let doc = json!({ "start": 3, "end": 1 });
//! let args = ValidationArguments::new("Range", doc.as_object().unwrap(), "end");
//!
//! let rule = Compare::new("start", CompareOptions::GreaterThanOrEqual);
//! assert!(!rule.validate(args.value, &args));
//! assert_eq!(
//!     rule.default_message(&args),
//!     "end must be greater than or equal with start"
//! );
//! ```

use crate::foundation::coerce;
use crate::foundation::{Rule, ValidationArguments};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// COMPARISON MODE
// ============================================================================

/// Relational operator applied by [`Compare`].
///
/// Serializes as its camelCase name; [`from_constraint`](Self::from_constraint)
/// also accepts the ordinal (`0` = `Equals` .. `5` = `LessThanOrEqual`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompareOptions {
    /// `value === sibling`
    Equals,
    /// `value !== sibling`
    NotEquals,
    /// `value > sibling`
    GreaterThan,
    /// `value >= sibling`
    GreaterThanOrEqual,
    /// `value < sibling`
    LessThan,
    /// `value <= sibling`
    LessThanOrEqual,
}

impl CompareOptions {
    /// Every mode, in ordinal order.
    pub const ALL: [Self; 6] = [
        Self::Equals,
        Self::NotEquals,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
    ];

    /// English phrase used in failure messages.
    #[must_use]
    pub const fn as_words(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "not equals",
            Self::GreaterThan => "greater than",
            Self::GreaterThanOrEqual => "greater than or equal",
            Self::LessThan => "less than",
            Self::LessThanOrEqual => "less than or equal",
        }
    }

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Mode at `ordinal`, if any.
    #[must_use]
    pub fn from_ordinal(ordinal: u64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Reads a mode from a constraint value: an ordinal or a mode name.
    #[must_use]
    pub fn from_constraint(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_u64().and_then(Self::from_ordinal),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Applies the operator to `value` (left) and `sibling` (right).
    #[must_use]
    pub fn apply(self, value: Option<&Value>, sibling: Option<&Value>) -> bool {
        match self {
            Self::Equals => coerce::strict_equals(value, sibling),
            Self::NotEquals => !coerce::strict_equals(value, sibling),
            Self::GreaterThan => coerce::greater_than(value, sibling),
            Self::GreaterThanOrEqual => coerce::greater_than_or_equal(value, sibling),
            Self::LessThan => coerce::less_than(value, sibling) == Some(true),
            Self::LessThanOrEqual => coerce::less_than_or_equal(value, sibling),
        }
    }
}

impl fmt::Display for CompareOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_words())
    }
}

/// Error returned when parsing an unknown [`CompareOptions`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown comparison mode `{0}`")]
pub struct ParseCompareOptionsError(pub String);

impl FromStr for CompareOptions {
    type Err = ParseCompareOptionsError;

    /// Accepts PascalCase and camelCase names (`"GreaterThan"`, `"greaterThan"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s {
            "Equals" | "equals" => Self::Equals,
            "NotEquals" | "notEquals" => Self::NotEquals,
            "GreaterThan" | "greaterThan" => Self::GreaterThan,
            "GreaterThanOrEqual" | "greaterThanOrEqual" => Self::GreaterThanOrEqual,
            "LessThan" | "lessThan" => Self::LessThan,
            "LessThanOrEqual" | "lessThanOrEqual" => Self::LessThanOrEqual,
            other => return Err(ParseCompareOptionsError(other.to_owned())),
        };
        Ok(mode)
    }
}

// ============================================================================
// COMPARE RULE
// ============================================================================

/// Compares the value under test with a sibling property.
///
/// The sibling is not required to exist: an absent sibling is `undefined`
/// and takes part in the comparison like any other value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Compare {
    /// Name of the sibling property.
    pub property: String,
    /// Operator applied as `value <op> sibling`.
    pub mode: CompareOptions,
}

impl Compare {
    /// Creates a comparison against `property` using `mode`.
    #[must_use]
    pub fn new(property: impl Into<String>, mode: CompareOptions) -> Self {
        Self {
            property: property.into(),
            mode,
        }
    }
}

impl Rule for Compare {
    fn name(&self) -> &'static str {
        "compare"
    }

    fn constraints(&self) -> Vec<Value> {
        vec![
            Value::String(self.property.clone()),
            Value::from(self.mode.ordinal()),
        ]
    }

    fn validate(&self, value: Option<&Value>, args: &ValidationArguments<'_>) -> bool {
        self.mode.apply(value, args.sibling(&self.property))
    }

    fn default_message(&self, args: &ValidationArguments<'_>) -> String {
        format!("{} must be {} with {}", args.property, self.mode, self.property)
    }
}

/// Creates a [`Compare`] rule.
#[must_use]
pub fn compare(property: impl Into<String>, mode: CompareOptions) -> Compare {
    Compare::new(property, mode)
}
