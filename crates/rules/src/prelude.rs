//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldrules::prelude::*;` import that brings in the
//! rule trait, error types, every built-in rule and the registry.

// ============================================================================
// FOUNDATION: Core trait, context, errors
// ============================================================================

pub use crate::foundation::{Rule, ValidationArguments, ValidationError, ValidationErrors};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

pub use crate::rules::*;

// ============================================================================
// REGISTRY: Registration and driver
// ============================================================================

pub use crate::config::{RegistryConfig, RegistryError, RuleConfig};
pub use crate::registry::{RuleDefinition, RuleRegistry, ValidationOptions, ValidatorOptions};
