//! Menu tree configuration.
//!
//! ```
//! use horizon_lattice_menu::{LabelConvention, MenuConfig};
//!
//! let config = MenuConfig::from_toml_str(r#"
//! label_convention = "keep-mnemonics"
//! warn_on_anonymous_items = false
//! "#).unwrap();
//! assert_eq!(config.label_convention, LabelConvention::KeepMnemonics);
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::platform::LabelConvention;

/// Settings that shape how descriptors are normalized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// How mnemonic markers are handled when deriving ids from labels.
    pub label_convention: LabelConvention,
    /// Log a warning when a non-separator has neither an id nor a label.
    ///
    /// Such items all share the empty id and therefore match one another.
    pub warn_on_anonymous_items: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            label_convention: LabelConvention::native(),
            warn_on_anonymous_items: true,
        }
    }
}

impl MenuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_label_convention(mut self, convention: LabelConvention) -> Self {
        self.label_convention = convention;
        self
    }

    pub fn with_anonymous_item_warnings(mut self, warn: bool) -> Self {
        self.warn_on_anonymous_items = warn;
        self
    }
}
