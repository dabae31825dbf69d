//! Rule registry and validation driver
//!
//! A [`RuleRegistry`] is an explicit table from `(target, property)` to the
//! ordered list of [`RuleDefinition`]s attached to that property. The driver
//! methods ([`validate`](RuleRegistry::validate) and friends) walk the
//! registered properties of one target, invoke each rule and collect the
//! failures.
//!
//! # Examples
//!
//! ```
//! use fieldrules::prelude::*;
//! use serde_json::json;
//!
//! let mut registry = RuleRegistry::new();
//! registry
//!     .register("Signup", "password", is_not_undefined())
//!     .register(
//!         "Signup",
//!         "confirm",
//!         compare("password", CompareOptions::Equals),
//!     );
//!
//! assert!(registry
//!     .validate("Signup", &json!({ "password": "pw", "confirm": "pw" }))
//!     .is_ok());
//!
//! let errors = registry
//!     .validate("Signup", &json!({ "password": "pw", "confirm": "nope" }))
//!     .unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.errors()[0].message, "confirm must be equals with password");
//! ```

use crate::foundation::coerce;
use crate::foundation::{Rule, ValidationArguments, ValidationError, ValidationErrors};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

// ============================================================================
// OPTIONS
// ============================================================================

/// Per-registration options passed through to the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    /// Message template replacing the rule's default message.
    ///
    /// `$property`, `$target`, `$value` and `$constraint1`..`$constraintN`
    /// are substituted when the message is rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Validation groups this registration belongs to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,

    /// Run even when the requested groups do not include this registration.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub always: bool,
}

impl ValidationOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a validation group.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Marks the registration to run regardless of groups.
    #[must_use = "builder methods must be chained or built"]
    pub fn always(mut self) -> Self {
        self.always = true;
        self
    }
}

/// Options for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorOptions {
    /// Requested groups. Empty runs every registration.
    pub groups: Vec<String>,

    /// Stop checking a property after its first failed rule.
    pub stop_at_first_error: bool,
}

impl ValidatorOptions {
    /// Requests a single group.
    #[must_use]
    pub fn group(group: impl Into<String>) -> Self {
        Self {
            groups: vec![group.into()],
            ..Self::default()
        }
    }

    /// Enables `stop_at_first_error`.
    #[must_use = "builder methods must be chained or built"]
    pub fn stop_at_first_error(mut self) -> Self {
        self.stop_at_first_error = true;
        self
    }
}

// ============================================================================
// RULE DEFINITION
// ============================================================================

/// A rule attached to one property, with its registration options.
#[derive(Debug, Clone)]
pub struct RuleDefinition {
    rule: Arc<dyn Rule>,
    options: ValidationOptions,
}

impl RuleDefinition {
    /// Wraps a rule with options.
    pub fn new(rule: Arc<dyn Rule>, options: ValidationOptions) -> Self {
        Self { rule, options }
    }

    /// The rule.
    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Registration options.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Whether this definition runs for the requested groups.
    pub fn is_selected(&self, requested: &[String]) -> bool {
        requested.is_empty()
            || self.options.always
            || self.options.groups.iter().any(|g| requested.contains(g))
    }

    /// Runs the rule, rendering the message override on failure.
    pub fn check(&self, args: &ValidationArguments<'_>) -> Result<(), ValidationError> {
        self.rule.check(args).map_err(|mut error| {
            if let Some(template) = &self.options.message {
                error.message = interpolate(template, args, &self.rule.constraints()).into();
            }
            error
        })
    }
}

/// Renders a message template for a failed rule.
///
/// Unknown `$` tokens and out-of-range `$constraintN` are left untouched.
#[must_use]
pub fn interpolate(template: &str, args: &ValidationArguments<'_>, constraints: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix("property") {
            out.push_str(args.property);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("target") {
            out.push_str(args.target_name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("value") {
            out.push_str(&coerce::to_display_string(args.value));
            rest = after;
        } else if let Some(after) = tail.strip_prefix("constraint") {
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            let constraint = after[..digits]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| constraints.get(i));
            match constraint {
                Some(c) => {
                    out.push_str(&coerce::to_display_string(Some(c)));
                    rest = &after[digits..];
                }
                None => {
                    out.push('$');
                    rest = tail;
                }
            }
        } else {
            out.push('$');
            rest = tail;
        }
    }

    out.push_str(rest);
    out
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Table of rules keyed by target name and property.
///
/// Properties keep their registration order, and so do the rules attached
/// to each property. A registry is immutable while validating, so it can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    targets: IndexMap<String, IndexMap<String, Vec<RuleDefinition>>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `rule` to `target.property` with default options.
    pub fn register<R>(
        &mut self,
        target: impl Into<String>,
        property: impl Into<String>,
        rule: R,
    ) -> &mut Self
    where
        R: Rule + 'static,
    {
        self.register_with(target, property, rule, ValidationOptions::default())
    }

    /// Attaches `rule` to `target.property` with `options`.
    pub fn register_with<R>(
        &mut self,
        target: impl Into<String>,
        property: impl Into<String>,
        rule: R,
        options: ValidationOptions,
    ) -> &mut Self
    where
        R: Rule + 'static,
    {
        self.register_definition(target, property, RuleDefinition::new(Arc::new(rule), options))
    }

    /// Attaches a prepared definition to `target.property`.
    pub fn register_definition(
        &mut self,
        target: impl Into<String>,
        property: impl Into<String>,
        definition: RuleDefinition,
    ) -> &mut Self {
        self.targets
            .entry(target.into())
            .or_default()
            .entry(property.into())
            .or_default()
            .push(definition);
        self
    }

    /// Rules attached to `target.property`, in registration order.
    pub fn rules_for(&self, target: &str, property: &str) -> &[RuleDefinition] {
        self.targets
            .get(target)
            .and_then(|props| props.get(property))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Registered target names.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Registered properties of `target`.
    pub fn properties<'a>(&'a self, target: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.targets
            .get(target)
            .into_iter()
            .flat_map(|props| props.keys().map(String::as_str))
    }

    /// Whether any rule is registered for `target`.
    #[must_use]
    pub fn contains_target(&self, target: &str) -> bool {
        self.targets.contains_key(target)
    }

    /// Total number of registered rule definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets
            .values()
            .flat_map(IndexMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ------------------------------------------------------------------------
    // Driver
    // ------------------------------------------------------------------------

    /// Validates `value` against every rule registered for `target`.
    pub fn validate(&self, target: &str, value: &Value) -> Result<(), ValidationErrors> {
        self.validate_with(target, value, &ValidatorOptions::default())
    }

    /// Validates `value` against the rules of `target` selected by `options`.
    ///
    /// A non-object `value` yields a single `type_mismatch` error. A target
    /// with no registrations passes.
    pub fn validate_with(
        &self,
        target: &str,
        value: &Value,
        options: &ValidatorOptions,
    ) -> Result<(), ValidationErrors> {
        let Some(object) = value.as_object() else {
            return Err(ValidationErrors::from_iter([ValidationError::type_mismatch(
                "object",
                kind_of(value),
            )]));
        };

        let Some(properties) = self.targets.get(target) else {
            tracing::debug!(target_name = target, "no rules registered for target");
            return Ok(());
        };

        let mut errors = ValidationErrors::new();
        for (property, definitions) in properties {
            let args = ValidationArguments::new(target, object, property);
            for definition in definitions {
                let rule = definition.rule().name();
                if !definition.is_selected(&options.groups) {
                    tracing::trace!(target_name = target, %property, rule, "rule skipped by groups");
                    continue;
                }
                if let Err(error) = definition.check(&args) {
                    tracing::debug!(target_name = target, %property, rule, "rule failed");
                    errors.add(error);
                    if options.stop_at_first_error {
                        break;
                    }
                }
            }
        }

        errors.into_result(())
    }

    /// Serializes `value` with serde and validates the result.
    ///
    /// `Option::None` fields serialize to `null`; mark them
    /// `#[serde(skip_serializing_if = "Option::is_none")]` to make them
    /// absent instead.
    pub fn validate_serialize<T>(&self, target: &str, value: &T) -> Result<(), ValidationErrors>
    where
        T: Serialize + ?Sized,
    {
        self.validate_serialize_with(target, value, &ValidatorOptions::default())
    }

    /// [`validate_serialize`](Self::validate_serialize) with run options.
    pub fn validate_serialize_with<T>(
        &self,
        target: &str,
        value: &T,
        options: &ValidatorOptions,
    ) -> Result<(), ValidationErrors>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(json) => self.validate_with(target, &json, options),
            Err(err) => Err(ValidationErrors::from_iter([ValidationError::new(
                "serialization",
                err.to_string(),
            )])),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
