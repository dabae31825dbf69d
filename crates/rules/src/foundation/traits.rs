//! Core trait for the rule library
//!
//! This module defines the [`Rule`] trait every validation rule implements.

use crate::foundation::coerce;
use crate::foundation::{ValidationArguments, ValidationError};
use serde_json::Value;
use std::fmt::Debug;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A named predicate plus failure-message generator.
///
/// Rules are pure: the same value and arguments always produce the same
/// answer, and malformed or mistyped input is a failure, never a panic.
/// The constraint parameters a rule was built with are fixed for its
/// lifetime and exposed through [`constraints`](Self::constraints).
///
/// # Examples
///
/// ```
/// use fieldrules::foundation::{Rule, ValidationArguments};
/// use serde_json::Value;
///
/// #[derive(Debug)]
/// struct IsTrue;
///
/// impl Rule for IsTrue {
///     fn name(&self) -> &'static str {
///         "isTrue"
///     }
///
///     fn validate(&self, value: Option<&Value>, _args: &ValidationArguments<'_>) -> bool {
///         value == Some(&Value::Bool(true))
///     }
///
///     fn default_message(&self, args: &ValidationArguments<'_>) -> String {
///         format!("{} must be true", args.property)
///     }
/// }
/// ```
pub trait Rule: Debug + Send + Sync {
    /// Registration name, also used as the error code.
    fn name(&self) -> &'static str;

    /// Constraint parameters captured at construction, in order.
    fn constraints(&self) -> Vec<Value> {
        Vec::new()
    }

    /// Returns `true` if `value` satisfies the rule.
    fn validate(&self, value: Option<&Value>, args: &ValidationArguments<'_>) -> bool;

    /// Message reported when [`validate`](Self::validate) fails.
    fn default_message(&self, args: &ValidationArguments<'_>) -> String;

    /// Runs the rule against `args.value` and builds the error on failure.
    ///
    /// The error carries the rule name as code, the property as field and
    /// the constraints as `constraint1..N` params, rendered the same way
    /// as `$constraintN` in message templates.
    fn check(&self, args: &ValidationArguments<'_>) -> Result<(), ValidationError> {
        if self.validate(args.value, args) {
            return Ok(());
        }
        let mut error = ValidationError::new(self.name(), self.default_message(args))
            .with_field(args.property.to_owned());
        for (i, constraint) in self.constraints().iter().enumerate() {
            error = error.with_param(
                format!("constraint{}", i + 1),
                coerce::to_display_string(Some(constraint)),
            );
        }
        Err(error)
    }
}
