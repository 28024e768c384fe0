//! Keys subcommand: list recognized properties.

use crate::config::{BridgeConfig, Field};

/// One line per recognized property: key, kind and default value.
pub fn render_keys() -> String {
    let defaults = BridgeConfig::default();
    let width = Field::ALL.iter().map(|f| f.key().len()).max().unwrap_or(0);

    let mut out = String::new();
    for field in Field::ALL {
        out.push_str(&format!(
            "{:<width$}  {:<9}  '{}'\n",
            field.key(),
            field.kind().as_str(),
            field.render(&defaults),
            width = width
        ));
    }
    out
}
