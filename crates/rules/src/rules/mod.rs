//! Built-in rules
//!
//! | Rule             | Name             | Constraints                      |
//! |------------------|------------------|----------------------------------|
//! | [`Compare`]      | `compare`        | `[sibling, mode]`                |
//! | [`IsNotNull`]    | `isNotNull`      | none                             |
//! | [`IsNotUndefined`]| `isNotUndefined`| none                             |
//! | [`IsNull`]       | `isNull`         | none                             |
//! | [`IsUndefined`]  | `isUndefined`    | none                             |
//! | [`IsSlug`]       | `isSlug`         | `[{separator}]`                  |
//! | [`IsNumberList`] | `isNumberList`   | `[{separator, allowNegative}]`   |
//!
//! # Examples
//!
//! ```
//! use fieldrules::prelude::*;
//! use serde_json::json;
//!
//! let doc = json!({ "tags": "1,2,3", "slug": "hello_world" });
//! let obj = doc.as_object().unwrap();
//!
//! let tags = ValidationArguments::new("Post", obj, "tags");
//! assert!(is_number_list().check(&tags).is_ok());
//!
//! let slug = ValidationArguments::new("Post", obj, "slug");
//! assert_eq!(is_slug().check(&slug).unwrap_err().message, "slug must be slug");
//! ```

pub mod compare;
pub mod nullity;
pub mod number_list;
pub mod slug;

pub use compare::{Compare, CompareOptions, ParseCompareOptionsError, compare};
pub use nullity::{
    IsNotNull, IsNotUndefined, IsNull, IsUndefined, is_not_null, is_not_undefined, is_null,
    is_undefined,
};
pub use number_list::{IsNumberList, NumberListValidationOptions, is_number_list};
pub use slug::{IsSlug, SlugValidationOptions, is_slug};
