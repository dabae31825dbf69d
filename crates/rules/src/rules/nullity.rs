//! Null / undefined checks
//!
//! `null` is an explicitly present JSON `null`; `undefined` is an absent
//! property. The four rules are independent and each is a strict identity
//! test against one of the two.

use crate::foundation::Value;

crate::rule! {
    /// Passes unless the value is `null`. An absent property passes.
    pub IsNotNull = "isNotNull";
    validate(value, _args) { !matches!(value, Some(Value::Null)) }
    message(args) { format!("{} must be not null", args.property) }
    fn is_not_null();
}

crate::rule! {
    /// Passes unless the property is absent. `null` passes.
    pub IsNotUndefined = "isNotUndefined";
    validate(value, _args) { value.is_some() }
    message(args) { format!("{} must be not undefined", args.property) }
    fn is_not_undefined();
}

crate::rule! {
    /// Passes only for an explicit `null`.
    pub IsNull = "isNull";
    validate(value, _args) { matches!(value, Some(Value::Null)) }
    message(args) { format!("{} must be null", args.property) }
    fn is_null();
}

crate::rule! {
    /// Passes only when the property is absent.
    pub IsUndefined = "isUndefined";
    validate(value, _args) { value.is_none() }
    message(args) { format!("{} must be undefined", args.property) }
    fn is_undefined();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, ValidationArguments};
    use serde_json::json;

    fn args(doc: &Value) -> ValidationArguments<'_> {
        ValidationArguments::new("T", doc.as_object().unwrap(), "field")
    }

    #[test]
    fn test_is_null() {
        let null = json!({"field": null});
        let absent = json!({});
        let zero = json!({"field": 0});
        let empty = json!({"field": ""});
        for (doc, expected) in [(&null, true), (&absent, false), (&zero, false), (&empty, false)] {
            let a = args(doc);
            assert_eq!(is_null().validate(a.value, &a), expected, "{doc}");
            assert_eq!(is_not_null().validate(a.value, &a), !expected, "{doc}");
        }
    }

    #[test]
    fn test_is_undefined() {
        let null = json!({"field": null});
        let absent = json!({});
        let a = args(&absent);
        assert!(is_undefined().validate(a.value, &a));
        assert!(!is_not_undefined().validate(a.value, &a));

        let a = args(&null);
        assert!(!is_undefined().validate(a.value, &a));
        assert!(is_not_undefined().validate(a.value, &a));
    }

    #[test]
    fn test_messages() {
        let doc = json!({});
        let a = args(&doc);
        assert_eq!(IsNotNull.default_message(&a), "field must be not null");
        assert_eq!(IsNotUndefined.default_message(&a), "field must be not undefined");
        assert_eq!(IsNull.default_message(&a), "field must be null");
        assert_eq!(IsUndefined.default_message(&a), "field must be undefined");
    }

    #[test]
    fn test_names() {
        assert_eq!(IsNotNull.name(), "isNotNull");
        assert_eq!(IsNotUndefined.name(), "isNotUndefined");
        assert_eq!(IsNull.name(), "isNull");
        assert_eq!(IsUndefined.name(), "isUndefined");
    }
}
