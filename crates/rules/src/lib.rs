//! # fieldrules
//!
//! Custom field-validation rules and the explicit registry that runs them.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldrules::prelude::*;
//! use serde_json::json;
//!
//! let mut registry = RuleRegistry::new();
//! registry
//!     .register("Article", "slug", is_slug())
//!     .register("Article", "tags", is_number_list())
//!     .register("Article", "publishedAt", is_not_undefined())
//!     .register("Article", "updatedAt", compare("publishedAt", CompareOptions::GreaterThanOrEqual));
//!
//! let article = json!({
//!     "slug": "hello-world",
//!     "tags": "1,2,3",
//!     "publishedAt": 100,
//!     "updatedAt": 120,
//! });
//! assert!(registry.validate("Article", &article).is_ok());
//! ```
//!
//! ## Rules
//!
//! - **Cross-field**: [`Compare`](rules::Compare) with [`CompareOptions`](rules::CompareOptions)
//! - **Nullity**: [`IsNotNull`](rules::IsNotNull), [`IsNotUndefined`](rules::IsNotUndefined),
//!   [`IsNull`](rules::IsNull), [`IsUndefined`](rules::IsUndefined)
//! - **Format**: [`IsSlug`](rules::IsSlug), [`IsNumberList`](rules::IsNumberList)
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for parameterless rules, or implement
//! [`Rule`](foundation::Rule) manually when the rule carries constraints.
//!
//! ## Registries
//!
//! Rules are attached to `(target, property)` pairs in a
//! [`RuleRegistry`](registry::RuleRegistry), either in code or from a
//! [`RegistryConfig`](config::RegistryConfig) document.

pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod rules;
