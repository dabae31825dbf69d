//! Error types for validation failures
//!
//! Rules themselves only answer pass/fail. The registry driver turns every
//! failed rule into a [`ValidationError`] and collects them in a
//! [`ValidationErrors`].
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Ordered key/value parameters attached to an error (typically 0-2).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failed rule on a single property.
///
/// # Examples
///
/// ```
/// use fieldrules::foundation::ValidationError;
///
/// let error = ValidationError::new("compare", "end must be greater than with start")
///     .with_field("end")
///     .with_param("constraint1", "start");
///
/// assert_eq!(error.field.as_deref(), Some("end"));
/// assert_eq!(error.param("constraint1"), Some("start"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code, the registered rule name (`"compare"`, `"isSlug"`, ...).
    pub code: Cow<'static, str>,

    /// Human-readable message, either the rule's default or an override.
    pub message: Cow<'static, str>,

    /// Property the failing rule was attached to.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for templating, `constraint1..N` for rule failures.
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("type_mismatch", "Type mismatch")
            .with_param("expected", expected)
            .with_param("actual", actual)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// All failures produced by one validation run, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Errors reported for one property.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("isNull", "value must be null");
        assert_eq!(error.code, "isNull");
        assert_eq!(error.message, "value must be null");
        assert!(error.field.is_none());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("compare", "end must be greater than with start")
            .with_param("constraint1", "start")
            .with_param("constraint2", "2");

        assert_eq!(error.param("constraint1"), Some("start"));
        assert_eq!(error.param("constraint2"), Some("2"));
        assert_eq!(error.param("constraint3"), None);
    }

    #[test]
    fn test_display_with_field_and_params() {
        let error = ValidationError::new("isSlug", "handle must be slug")
            .with_field("handle")
            .with_param("constraint1", "[object Object]");
        assert_eq!(
            error.to_string(),
            "[handle] isSlug: handle must be slug (params: [constraint1=[object Object]])"
        );
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        assert!(!errors.has_errors());
        errors.add(ValidationError::new("isNull", "a must be null").with_field("a"));
        errors.add(ValidationError::new("isSlug", "b must be slug").with_field("b"));
        errors.add(ValidationError::new("isNotNull", "a must be not null").with_field("a"));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.for_field("a").count(), 2);
        assert_eq!(errors.for_field("c").count(), 0);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));
        let errors: ValidationErrors = [ValidationError::new("x", "y")].into_iter().collect();
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("isNull", "must be null");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
