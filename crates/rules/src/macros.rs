//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a parameterless rule (unit struct + `Rule` impl + factory fn)
//!
//! # Examples
//!
//! ```rust
//! use fieldrules::rule;
//! use fieldrules::foundation::Rule;
//! use serde_json::Value;
//!
//! rule! {
//!     /// Passes for JSON booleans.
//!     pub IsBoolean = "isBoolean";
//!     validate(value, _args) { matches!(value, Some(Value::Bool(_))) }
//!     message(args) { format!("{} must be a boolean", args.property) }
//!     fn is_boolean();
//! }
//!
//! assert_eq!(is_boolean().name(), "isBoolean");
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a parameterless rule: unit struct, [`Rule`](crate::foundation::Rule)
/// implementation, and optionally a `const` factory function.
///
/// The struct always derives `Debug, Clone, Copy, Default, PartialEq, Eq, Hash`.
/// `validate(value, args)` binds the value under test (`Option<&Value>`) and
/// the [`ValidationArguments`](crate::foundation::ValidationArguments), so a
/// rule can read sibling properties; `message(args)` binds the arguments only.
#[macro_export]
macro_rules! rule {
    // ── Unit rule + factory fn ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $rule_name:literal;
        validate($val:ident, $vargs:ident) $validate:block
        message($args:ident) $message:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name = $rule_name;
            validate($val, $vargs) $validate
            message($args) $message
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit rule, no factory ────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $rule_name:literal;
        validate($val:ident, $vargs:ident) $validate:block
        message($args:ident) $message:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            fn name(&self) -> &'static str {
                $rule_name
            }

            #[allow(unused_variables)]
            fn validate(
                &self,
                $val: ::std::option::Option<&$crate::foundation::Value>,
                $vargs: &$crate::foundation::ValidationArguments<'_>,
            ) -> bool $validate

            #[allow(unused_variables)]
            fn default_message(
                &self,
                $args: &$crate::foundation::ValidationArguments<'_>,
            ) -> ::std::string::String $message
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Rule, ValidationArguments};
    use serde_json::{Value, json};

    rule! {
        /// A test rule with a factory.
        TestIsString = "testIsString";
        validate(value, args) { matches!(value, Some(Value::String(_))) }
        message(args) { format!("{} must be a string", args.property) }
        fn test_is_string();
    }

    rule! {
        TestAlwaysOk = "testAlwaysOk";
        validate(value, args) { true }
        message(args) { String::from("unreachable") }
    }

    rule! {
        TestMatchesPassword = "testMatchesPassword";
        validate(value, args) { value.is_some() && value == args.sibling("password") }
        message(args) { format!("{} must match password", args.property) }
    }

    #[test]
    fn test_validate_reads_siblings() {
        let doc = json!({ "password": "pw", "ok": "pw", "bad": "nope" });
        let obj = doc.as_object().unwrap();
        let ok = ValidationArguments::new("T", obj, "ok");
        let bad = ValidationArguments::new("T", obj, "bad");
        let missing = ValidationArguments::new("T", obj, "missing");

        assert!(TestMatchesPassword.validate(ok.value, &ok));
        assert!(!TestMatchesPassword.validate(bad.value, &bad));
        assert!(!TestMatchesPassword.validate(missing.value, &missing));
        assert_eq!(
            TestMatchesPassword.check(&bad).unwrap_err().message,
            "bad must match password"
        );
    }

    #[test]
    fn test_unit_rule() {
        let doc = json!({ "a": "x", "b": 1 });
        let obj = doc.as_object().unwrap();
        let a = ValidationArguments::new("T", obj, "a");
        let b = ValidationArguments::new("T", obj, "b");

        assert!(TestIsString.validate(a.value, &a));
        assert!(!TestIsString.validate(b.value, &b));
        assert_eq!(TestIsString.default_message(&b), "b must be a string");
    }

    #[test]
    fn test_unit_factory() {
        let rule = test_is_string();
        assert_eq!(rule, TestIsString);
        assert_eq!(rule.name(), "testIsString");
        assert!(rule.constraints().is_empty());
    }

    #[test]
    fn test_unit_without_factory() {
        let doc = json!({});
        let args = ValidationArguments::new("T", doc.as_object().unwrap(), "missing");
        assert!(TestAlwaysOk.validate(args.value, &args));
        assert!(TestAlwaysOk.check(&args).is_ok());
    }
}
