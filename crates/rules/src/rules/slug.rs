//! Slug format validation

use crate::foundation::{Rule, ValidationArguments};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_SEPARATOR: &str = "-";

/// Options for [`IsSlug`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SlugValidationOptions {
    /// Separator allowed between alphanumeric runs. `None` or `""` means `-`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

/// Validates that a string consists of ASCII alphanumerics and the separator.
///
/// Non-strings fail and the empty string passes. The separator only ever
/// matches a single character: a multi-character separator matches nothing,
/// so only alphanumerics are accepted.
///
/// # Examples
///
/// ```
/// use fieldrules::foundation::{Rule, ValidationArguments};
/// use fieldrules::rules::IsSlug;
/// use serde_json::json;
///
/// let doc = json!({ "handle": "hello-world-42", "bad": "hello world" });
/// let obj = doc.as_object().unwrap();
///
/// let ok = ValidationArguments::new("Post", obj, "handle");
/// let bad = ValidationArguments::new("Post", obj, "bad");
/// assert!(IsSlug::default().validate(ok.value, &ok));
/// assert!(!IsSlug::default().validate(bad.value, &bad));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IsSlug {
    options: SlugValidationOptions,
}

impl IsSlug {
    /// Creates a slug rule from options.
    #[must_use]
    pub fn new(options: SlugValidationOptions) -> Self {
        Self { options }
    }

    /// Creates a slug rule with a custom separator.
    #[must_use]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self::new(SlugValidationOptions {
            separator: Some(separator.into()),
        })
    }

    /// Options this rule was built with.
    #[must_use]
    pub fn options(&self) -> &SlugValidationOptions {
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
    pub fn is_slug(&self, input: &str) -> bool {
        let separator = single_unit(self.separator());
        input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || Some(c) == separator)
    }
}

/// The separator as a character, if it is one UTF-16 code unit long.
fn single_unit(separator: &str) -> Option<char> {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.len_utf16() == 1 => Some(c),
        _ => None,
    }
}

impl Rule for IsSlug {
    fn name(&self) -> &'static str {
        "isSlug"
    }

    fn constraints(&self) -> Vec<Value> {
        vec![serde_json::to_value(&self.options).unwrap_or(Value::Null)]
    }

    fn validate(&self, value: Option<&Value>, _args: &ValidationArguments<'_>) -> bool {
        match value {
            Some(Value::String(s)) => self.is_slug(s),
            _ => false,
        }
    }

    fn default_message(&self, args: &ValidationArguments<'_>) -> String {
        format!("{} must be slug", args.property)
    }
}

/// Creates an [`IsSlug`] rule with the default `-` separator.
#[must_use]
pub fn is_slug() -> IsSlug {
    IsSlug::default()
}
