//! Delimited number list validation
//!
//! [`IsNumberList`] accepts strings such as `"1,2.5,-3"` where every
//! separator-delimited segment is numeric under
//! [`coerce::is_numeric_string`](crate::foundation::coerce::is_numeric_string).
//!
//! Segment numeric-ness follows `Number(segment)`, so surrounding
//! whitespace, exponents, `Infinity` and `0x` literals are accepted, and an
//! empty segment counts as `0`:
//!
//! ```
//! use fieldrules::rules::is_number_list;
//!
//! let rule = is_number_list();
//! assert!(rule.is_number_list("1, 2e3 ,-Infinity"));
//! assert!(rule.is_number_list("1,,2"));
//! assert!(!rule.is_number_list("1,two"));
//! ```

use crate::foundation::coerce;
use crate::foundation::{Rule, ValidationArguments};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_SEPARATOR: &str = ",";

/// Options for [`IsNumberList`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct NumberListValidationOptions {
    /// Segment separator. `None` or `""` means `,`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Recorded for compatibility. Negative segments are accepted
    /// whatever its value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_negative: Option<bool>,
}

/// Validates a separator-delimited list of numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IsNumberList {
    options: NumberListValidationOptions,
}

impl IsNumberList {
    /// Creates a number list rule from options.
    #[must_use]
    pub fn new(options: NumberListValidationOptions) -> Self {
        Self { options }
    }

    /// Creates a number list rule with a custom separator.
    #[must_use]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self::new(NumberListValidationOptions {
            separator: Some(separator.into()),
            allow_negative: None,
        })
    }

    /// Options this rule was built with.
    #[must_use]
    pub fn options(&self) -> &NumberListValidationOptions {
        &self.options
    }

    /// The separator in effect.
    #[must_use]
    pub fn separator(&self) -> &str {
        match self.options.separator.as_deref() {
            None | Some("") => DEFAULT_SEPARATOR,
            Some(sep) => sep,
        }
    }

    /// Checks a string.
    #[must_use]
    pub fn is_number_list(&self, input: &str) -> bool {
        // allow_negative never narrows the segment check
        input
            .split(self.separator())
            .all(coerce::is_numeric_string)
    }
}

impl Rule for IsNumberList {
    fn name(&self) -> &'static str {
        "isNumberList"
    }

    fn constraints(&self) -> Vec<Value> {
        vec![serde_json::to_value(&self.options).unwrap_or(Value::Null)]
    }

    fn validate(&self, value: Option<&Value>, _args: &ValidationArguments<'_>) -> bool {
        match value {
            Some(Value::String(s)) => self.is_number_list(s),
            _ => false,
        }
    }

    fn default_message(&self, args: &ValidationArguments<'_>) -> String {
        format!(
            "{} must be list of number with {} as separator",
            args.property,
            self.separator()
        )
    }
}

/// Creates an [`IsNumberList`] rule with the default `,` separator.
#[must_use]
pub fn is_number_list() -> IsNumberList {
    IsNumberList::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_separator() {
        let rule = is_number_list();
        assert!(rule.is_number_list("1,2,3"));
        assert!(rule.is_number_list("1.5,0.25,1e3"));
        assert!(!rule.is_number_list("1,a,3"));
        assert!(!rule.is_number_list("1;2;3"));
    }

    #[test]
    fn test_custom_separator() {
        let rule = IsNumberList::with_separator(";");
        assert!(rule.is_number_list("1;2;3"));
        assert!(!rule.is_number_list("1,2;3"));
    }

    #[test]
    fn test_multi_character_separator() {
        let rule = IsNumberList::with_separator(" | ");
        assert!(rule.is_number_list("1 | 2 | 3"));
        assert!(!rule.is_number_list("1 || 2"));
    }

    #[test]
    fn test_empty_segments_count_as_zero() {
        let rule = is_number_list();
        assert!(rule.is_number_list(""));
        assert!(rule.is_number_list("1,,2"));
        assert!(rule.is_number_list("1, ,2"));
        assert!(rule.is_number_list(",1,"));
    }

    #[test]
    fn test_negatives_accepted_by_default() {
        assert!(is_number_list().is_number_list("-1,2"));
    }

    #[test]
    fn test_allow_negative_false_still_accepts_negatives() {
        let rule = IsNumberList::new(NumberListValidationOptions {
            separator: None,
            allow_negative: Some(false),
        });
        assert!(rule.is_number_list("-1,-2.5"));
    }

    #[test]
    fn test_non_string_fails() {
        let doc = json!({"n": 1, "arr": [1, 2]});
        let obj = doc.as_object().unwrap();
        for field in ["n", "arr", "missing"] {
            let args = ValidationArguments::new("T", obj, field);
            assert!(!is_number_list().validate(args.value, &args), "{field}");
        }
    }

    #[test]
    fn test_message_names_separator() {
        let doc = json!({});
        let args = ValidationArguments::new("T", doc.as_object().unwrap(), "ids");
        assert_eq!(
            is_number_list().default_message(&args),
            "ids must be list of number with , as separator"
        );
        assert_eq!(
            IsNumberList::with_separator(";").default_message(&args),
            "ids must be list of number with ; as separator"
        );
    }

    #[test]
    fn test_constraints() {
        let rule = IsNumberList::new(NumberListValidationOptions {
            separator: Some(";".into()),
            allow_negative: Some(true),
        });
        assert_eq!(
            rule.constraints(),
            vec![json!({"separator": ";", "allowNegative": true})]
        );
    }
}
