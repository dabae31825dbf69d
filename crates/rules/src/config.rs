//! Declarative registry configuration
//!
//! A [`RegistryConfig`] describes a whole [`RuleRegistry`] as data, so rule
//! tables can live in JSON next to the schemas they protect:
//!
//! ```json
//! {
//!   "Signup": {
//!     "handle":  [{ "rule": "isSlug", "constraints": [{ "separator": "_" }] }],
//!     "confirm": [{ "rule": "compare", "constraints": ["password", "equals"],
//!                   "message": "$property must match $constraint1" }]
//!   }
//! }
//! ```
//!
//! Rules are looked up by their registration name ([`RULE_NAMES`]) and
//! their constraints are checked when the registry is built, so a bad table
//! fails at load time rather than during validation.

use crate::foundation::Rule;
use crate::registry::{RuleDefinition, RuleRegistry, ValidationOptions};
use crate::rules::{
    Compare, CompareOptions, IsNotNull, IsNotUndefined, IsNull, IsNumberList, IsSlug, IsUndefined,
    NumberListValidationOptions, SlugValidationOptions,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Names accepted in [`RuleConfig::rule`].
pub const RULE_NAMES: [&str; 7] = [
    "compare",
    "isNotNull",
    "isNotUndefined",
    "isNull",
    "isUndefined",
    "isSlug",
    "isNumberList",
];

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while building a registry from configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The rule name is not one of [`RULE_NAMES`].
    #[error("unknown rule `{name}`")]
    UnknownRule { name: String },

    /// The constraints do not fit the rule.
    #[error("invalid constraints for `{rule}`: {reason}")]
    InvalidConstraints { rule: &'static str, reason: String },

    /// The configuration document could not be parsed.
    #[error("invalid registry configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RegistryError {
    fn constraints(rule: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConstraints {
            rule,
            reason: reason.into(),
        }
    }
}

// ============================================================================
// CONFIG TYPES
// ============================================================================

/// One rule attached to a property.
///
/// Unknown keys are rejected, so a misspelled `constraints` or `message`
/// fails to parse instead of falling back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Registration name, e.g. `"isSlug"`.
    pub rule: String,

    /// Ordered constraint parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Value>,

    /// Message template override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Validation groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,

    /// Run regardless of requested groups.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub always: bool,
}

impl RuleConfig {
    /// Registration options carried by this entry.
    #[must_use]
    pub fn options(&self) -> ValidationOptions {
        ValidationOptions {
            message: self.message.clone(),
            groups: self.groups.clone(),
            always: self.always,
        }
    }

    /// Builds the rule this entry names.
    pub fn build(&self) -> Result<RuleDefinition, RegistryError> {
        let rule = build_rule(&self.rule, &self.constraints)?;
        Ok(RuleDefinition::new(rule, self.options()))
    }
}

/// `target -> property -> [rule]`, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryConfig {
    pub targets: IndexMap<String, IndexMap<String, Vec<RuleConfig>>>,
}

impl RegistryConfig {
    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// RULE CONSTRUCTION
// ============================================================================

/// Constructs a rule from its registration name and constraint parameters.
///
/// # Examples
///
/// ```
/// use fieldrules::config::build_rule;
/// use fieldrules::foundation::Rule;
/// use serde_json::json;
///
/// let rule = build_rule("compare", &[json!("start"), json!("greaterThan")]).unwrap();
/// assert_eq!(rule.name(), "compare");
///
/// assert!(build_rule("compare", &[json!("start"), json!(42)]).is_err());
/// assert!(build_rule("isEmail", &[]).is_err());
/// ```
pub fn build_rule(name: &str, constraints: &[Value]) -> Result<Arc<dyn Rule>, RegistryError> {
    let rule: Arc<dyn Rule> = match name {
        "compare" => Arc::new(build_compare(constraints)?),
        "isNotNull" => unit_rule("isNotNull", constraints, IsNotNull)?,
        "isNotUndefined" => unit_rule("isNotUndefined", constraints, IsNotUndefined)?,
        "isNull" => unit_rule("isNull", constraints, IsNull)?,
        "isUndefined" => unit_rule("isUndefined", constraints, IsUndefined)?,
        "isSlug" => Arc::new(IsSlug::new(options_constraint::<SlugValidationOptions>(
            "isSlug",
            constraints,
        )?)),
        "isNumberList" => Arc::new(IsNumberList::new(options_constraint::<
            NumberListValidationOptions,
        >("isNumberList", constraints)?)),
        other => {
            return Err(RegistryError::UnknownRule {
                name: other.to_owned(),
            });
        }
    };
    Ok(rule)
}

fn build_compare(constraints: &[Value]) -> Result<Compare, RegistryError> {
    let [property, mode] = constraints else {
        return Err(RegistryError::constraints(
            "compare",
            format!("expected [property, mode], got {} value(s)", constraints.len()),
        ));
    };
    let Some(property) = property.as_str() else {
        return Err(RegistryError::constraints(
            "compare",
            format!("property must be a string, got {property}"),
        ));
    };
    let Some(mode) = CompareOptions::from_constraint(mode) else {
        return Err(RegistryError::constraints(
            "compare",
            format!("unknown comparison mode {mode}"),
        ));
    };
    Ok(Compare::new(property, mode))
}

fn unit_rule<R>(
    name: &'static str,
    constraints: &[Value],
    rule: R,
) -> Result<Arc<dyn Rule>, RegistryError>
where
    R: Rule + 'static,
{
    if constraints.is_empty() {
        Ok(Arc::new(rule))
    } else {
        Err(RegistryError::constraints(name, "takes no constraints"))
    }
}

/// A single optional options object; `null` counts as absent.
fn options_constraint<T>(name: &'static str, constraints: &[Value]) -> Result<T, RegistryError>
where
    T: Default + for<'de> Deserialize<'de>,
{
    match constraints {
        [] | [Value::Null] => Ok(T::default()),
        [options] => serde_json::from_value(options.clone())
            .map_err(|err| RegistryError::constraints(name, err.to_string())),
        _ => Err(RegistryError::constraints(
            name,
            format!("expected at most one options object, got {}", constraints.len()),
        )),
    }
}

// ============================================================================
// REGISTRY CONSTRUCTION
// ============================================================================

impl RuleRegistry {
    /// Builds a registry from configuration.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for (target, properties) in &config.targets {
            for (property, rules) in properties {
                for rule in rules {
                    let definition = rule.build()?;
                    registry.register_definition(target.as_str(), property.as_str(), definition);
                }
            }
        }
        tracing::debug!(
            targets = config.targets.len(),
            rules = registry.len(),
            "rule registry built from config"
        );
        Ok(registry)
    }

    /// Parses a JSON [`RegistryConfig`] and builds the registry.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Self::from_config(&RegistryConfig::from_json(json)?)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_rule_name_builds() {
        for name in RULE_NAMES {
            let constraints = if name == "compare" {
                vec![json!("other"), json!(0)]
            } else {
                vec![]
            };
            let rule = build_rule(name, &constraints).unwrap();
            assert_eq!(rule.name(), name);
        }
    }

    #[test]
    fn test_unknown_rule() {
        let err = build_rule("isEmail", &[]).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownRule { ref name } if name == "isEmail"));
        assert_eq!(err.to_string(), "unknown rule `isEmail`");
    }

    #[test]
    fn test_compare_constraints() {
        assert!(build_rule("compare", &[json!("a")]).is_err());
        assert!(build_rule("compare", &[json!(1), json!(0)]).is_err());
        let err = build_rule("compare", &[json!("a"), json!(9)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid constraints for `compare`: unknown comparison mode 9"
        );
        let rule = build_rule("compare", &[json!("a"), json!("lessThanOrEqual")]).unwrap();
        assert_eq!(rule.constraints(), vec![json!("a"), json!(5)]);
    }

    #[test]
    fn test_unit_rules_reject_constraints() {
        assert!(build_rule("isNull", &[json!(1)]).is_err());
    }

    #[test]
    fn test_options_constraints() {
        let slug = build_rule("isSlug", &[json!({"separator": "_"})]).unwrap();
        assert_eq!(slug.constraints(), vec![json!({"separator": "_"})]);

        let list = build_rule("isNumberList", &[json!(null)]).unwrap();
        assert_eq!(list.constraints(), vec![json!({})]);

        assert!(build_rule("isSlug", &[json!({"separator": 5})]).is_err());
        assert!(build_rule("isSlug", &[json!({"separatr": "_"})]).is_err());
        assert!(build_rule("isNumberList", &[json!({"allowNegatives": true})]).is_err());
        assert!(build_rule("isSlug", &[json!({}), json!({})]).is_err());
    }

    #[test]
    fn test_registry_from_json() {
        let registry = RuleRegistry::from_json(
            r#"{
                "Signup": {
                    "handle": [{ "rule": "isSlug", "constraints": [{ "separator": "_" }] }],
                    "password": [{ "rule": "isNotUndefined" }],
                    "confirm": [{
                        "rule": "compare",
                        "constraints": ["password", "equals"],
                        "message": "$property must match $constraint1",
                        "groups": ["create"]
                    }]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 3);
        let props: Vec<_> = registry.properties("Signup").collect();
        assert_eq!(props, ["handle", "password", "confirm"]);

        let errors = registry
            .validate("Signup", &json!({ "handle": "a-b", "password": "x", "confirm": "y" }))
            .unwrap_err();
        let messages: Vec<_> = errors.errors().iter().map(|e| e.message.as_ref()).collect();
        assert_eq!(
            messages,
            ["handle must be slug", "confirm must match password"]
        );
    }

    #[test]
    fn test_registry_from_bad_json() {
        let err = RuleRegistry::from_json("{ not json").unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));

        let err = RuleRegistry::from_json(r#"{"T": {"f": [{"rule": "nope"}]}}"#).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownRule { .. }));
    }

    #[test]
    fn test_config_roundtrips_options() {
        let config = RegistryConfig::from_json(
            r#"{"T": {"f": [{"rule": "isNull", "groups": ["g"], "always": true}]}}"#,
        )
        .unwrap();
        let rule = &config.targets["T"]["f"][0];
        assert_eq!(rule.rule, "isNull");
        assert!(rule.constraints.is_empty());
        assert_eq!(rule.options(), ValidationOptions::new().with_group("g").always());
        assert_eq!(
            serde_json::to_value(rule).unwrap(),
            json!({"rule": "isNull", "groups": ["g"], "always": true})
        );
    }

    #[test]
    fn test_misspelled_keys_are_rejected() {
        for json in [
            r#"{"T": {"f": [{"rule": "isSlug", "constraint": [{"separator": "_"}]}]}}"#,
            r#"{"T": {"f": [{"rule": "isSlug", "mesage": "custom"}]}}"#,
            r#"{"T": {"f": [{"rule": "isNull", "group": ["g"]}]}}"#,
        ] {
            let err = RuleRegistry::from_json(json).unwrap_err();
            assert!(matches!(err, RegistryError::Parse(_)), "{json}");
            assert!(err.to_string().contains("unknown field"), "{err}");
        }
    }

    #[test]
    fn test_config_keeps_separator_and_message() {
        let registry = RuleRegistry::from_json(
            r#"{"T": {"f": [{"rule": "isSlug", "constraints": [{"separator": "_"}], "message": "custom"}]}}"#,
        )
        .unwrap();
        assert!(registry.validate("T", &json!({"f": "a_b"})).is_ok());
        let errors = registry.validate("T", &json!({"f": "a-b"})).unwrap_err();
        assert_eq!(errors.errors()[0].message, "custom");
    }
}
