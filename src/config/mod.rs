//! Layered bridge configuration.
//!
//! A [`BridgeConfig`] is built in two steps:
//! 1. **Defaults** - compiled in, see [`BridgeConfig::default`]
//! 2. **Overrides** - a flat `key -> text` [`Properties`] map applied with
//!    [`BridgeConfig::overlay`], each value parsed and validated per field
//!
//! ## Property files
//! [`PropertiesLoader`] merges any number of flat YAML files into one
//! [`Properties`] map. Later files override earlier ones key by key.
//!
//! ## Serialization
//! [`BridgeConfig::to_properties`] is the inverse of the overlay: applying its
//! output to the defaults reproduces the configuration.

mod fields;
mod loader;
mod merge;
mod timespan;
mod types;

pub use fields::{Field, FieldKind};
pub use loader::{PropertiesLoader, parse_assignment, parse_properties_yaml};
pub use merge::{merge_all, merge_properties};
pub use timespan::{format_timespan, parse_timespan};
pub use types::*;
