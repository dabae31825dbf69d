//! Core rule types and traits
//!
//! - **Trait**: [`Rule`], the registration contract every rule implements
//! - **Context**: [`ValidationArguments`], what a rule sees when invoked
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Coercions**: [`coerce`], JavaScript-compatible equality, ordering
//!   and numeric parsing over JSON values
//!
//! # Value model
//!
//! A property value is an `Option<&serde_json::Value>`:
//!
//! | Host value   | Rust value               |
//! |--------------|--------------------------|
//! | `undefined`  | `None` (property absent) |
//! | `null`       | `Some(Value::Null)`      |
//! | anything else| `Some(value)`            |
//!
//! # Examples
//!
//! ```
//! use fieldrules::foundation::{ValidationArguments, check_value};
//! use fieldrules::rules::IsNotNull;
//! use serde_json::json;
//!
//! let doc = json!({ "email": null });
//! let args = ValidationArguments::new("User", doc.as_object().unwrap(), "email");
//!
//! let err = check_value(&IsNotNull, &args).unwrap_err();
//! assert_eq!(err.message, "email must be not null");
//! ```

pub mod coerce;
pub mod context;
pub mod error;
pub mod traits;

pub use context::ValidationArguments;
pub use error::{ErrorParams, ValidationError, ValidationErrors};
pub use serde_json::Value;
pub use traits::Rule;

// ============================================================================
// UTILITIES
// ============================================================================

/// Checks a single rule against the property described by `args`.
#[must_use = "validation result must be checked"]
pub fn check_value<R>(rule: &R, args: &ValidationArguments<'_>) -> Result<(), ValidationError>
where
    R: Rule + ?Sized,
{
    rule.check(args)
}

/// Checks every rule, collecting all failures.
pub fn check_all(
    rules: &[&dyn Rule],
    args: &ValidationArguments<'_>,
) -> Result<(), ValidationErrors> {
    rules
        .iter()
        .filter_map(|rule| rule.check(args).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A validation result that can contain multiple errors.
pub type ValidationResultMulti<T> = Result<T, ValidationErrors>;

// ============================================================================
// TESTS
// ============================================================================
