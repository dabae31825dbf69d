//! Validation context handed to every rule invocation.

use serde_json::{Map, Value};

/// Read-only view of the property being validated.
///
/// The driver builds one per `(property, rule)` invocation. Rules use
/// [`object`](Self::object) for sibling lookups and
/// [`property`](Self::property) when rendering messages.
///
/// # Examples
///
/// ```
/// use fieldrules::foundation::ValidationArguments;
/// use serde_json::json;
///
/// let user = json!({ "password": "s3cret", "confirm": "s3cret" });
/// let object = user.as_object().unwrap();
/// let args = ValidationArguments::new("User", object, "confirm");
///
/// assert_eq!(args.value, Some(&json!("s3cret")));
/// assert_eq!(args.sibling("password"), Some(&json!("s3cret")));
/// assert_eq!(args.sibling("missing"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValidationArguments<'a> {
    /// Value under test. `None` when the property is absent.
    pub value: Option<&'a Value>,
    /// The owning object.
    pub object: &'a Map<String, Value>,
    /// Name of the property under test.
    pub property: &'a str,
    /// Name of the registered target (type descriptor) being validated.
    pub target_name: &'a str,
}

impl<'a> ValidationArguments<'a> {
    /// Creates arguments for `property`, reading its value off `object`.
    #[must_use]
    pub fn new(target_name: &'a str, object: &'a Map<String, Value>, property: &'a str) -> Self {
        Self {
            value: object.get(property),
            object,
            property,
            target_name,
        }
    }

    /// Reads a sibling property. `None` when absent.
    #[inline]
    #[must_use]
    pub fn sibling(&self, name: &str) -> Option<&'a Value> {
        self.object.get(name)
    }
}
