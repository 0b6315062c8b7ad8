//!
//! Protoenum wraps protocol buffer enum values with a native enum counterpart and
//! arbitrary metadata. The wrapped values are collected in a [`Registry`] that
//! supports lookups by numeric code, by name and by the native value, with an
//! optional default entry for lookups that miss.
//!
//! ```
//! use protoenum::{Entry, ProtoEnum, Registry, RegistryError, LookupKey};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum StatusEnum { Unknown = 0, Success = 1, Failure = 2 }
//!
//! impl ProtoEnum for StatusEnum {
//!     fn name(&self) -> &str {
//!         match self {
//!             StatusEnum::Unknown => "UNKNOWN",
//!             StatusEnum::Success => "SUCCESS",
//!             StatusEnum::Failure => "FAILURE",
//!         }
//!     }
//!     fn number(&self) -> i32 { *self as i32 }
//! }
//!
//! let mut registry = Registry::new(vec![
//!     Entry::new(StatusEnum::Unknown, "unknown"),
//!     Entry::new(StatusEnum::Success, "success"),
//!     Entry::new(StatusEnum::Failure, "failure"),
//! ]).unwrap();
//!
//! // The first entry is the default.
//! assert_eq!(registry.get_default().unwrap().plain(), &"unknown");
//! assert_eq!(registry.get_by_code(2).unwrap().name(), "FAILURE");
//! assert_eq!(registry.get_by_code(999).unwrap().name(), "UNKNOWN");
//! assert_eq!(
//!     registry.must_get_by_code(999),
//!     Err(RegistryError::NotFound { key: LookupKey::Code(999) }));
//! assert_eq!(registry.list_plains(), vec!["unknown", "success", "failure"]);
//!
//! registry.unset_default().unwrap();
//! assert_eq!(registry.get_by_code(999), Err(RegistryError::NoDefaultConfigured));
//! ```
#![warn(missing_docs)]

pub mod entry;
pub mod registry;
pub mod schema;

pub use entry::{Entry, MetaDesc, MetaNone, ProtoEnum};
pub use registry::{LookupKey, Registry, RegistryError};
