//! Merging of flat property maps.
//!
//! Higher tiers override lower tiers key by key. Keys a tier does not mention
//! keep the value from below.

use super::types::Properties;

/// Merge two property maps, with `overlay` taking precedence over `base`.
///
/// # Example
/// ```
/// use bridge_config::config::{Properties, merge_properties};
///
/// let base: Properties = [("BridgeHost", "localhost"), ("BridgePort", "44283")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// let overlay: Properties = [("BridgePort", "9000")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// let merged = merge_properties(base, overlay);
/// assert_eq!(merged["BridgeHost"], "localhost");
/// assert_eq!(merged["BridgePort"], "9000");
/// ```
pub fn merge_properties(mut base: Properties, overlay: Properties) -> Properties {
    base.extend(overlay);
    base
}

/// Merge multiple maps in order, with later maps taking precedence.
pub fn merge_all(maps: impl IntoIterator<Item = Properties>) -> Properties {
    maps.into_iter().fold(Properties::new(), merge_properties)
}
