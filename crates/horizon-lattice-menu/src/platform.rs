//! Platform label conventions.
//!
//! Menu labels may carry `&` mnemonic markers ("&File", "Save &As"). macOS
//! menus have no mnemonics, so labels there are used verbatim. Every other
//! platform strips the markers. The convention only affects ids derived from
//! labels; the label shown to the user is never rewritten here.
//!
//! The convention is injected rather than detected so that a single process
//! can exercise both behaviors.

use serde::Deserialize;

/// How `&` mnemonic markers are treated when deriving an item id from its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelConvention {
    /// Keep `&` markers in place (macOS).
    KeepMnemonics,
    /// Remove every `&` marker (Windows, Linux and everything else).
    StripMnemonics,
}

impl LabelConvention {
    /// The convention for the platform this crate was compiled for.
    pub fn native() -> Self {
        if cfg!(target_os = "macos") {
            Self::KeepMnemonics
        } else {
            Self::StripMnemonics
        }
    }
}

impl Default for LabelConvention {
    fn default() -> Self {
        Self::native()
    }
}

/// Normalize a label into the text used for id derivation.
///
/// - `"&File"` -> `"File"` when stripping
/// - `"Fish && Chips"` -> `"Fish  Chips"` when stripping (every marker goes)
/// - any label is returned unchanged with [`LabelConvention::KeepMnemonics`]
pub fn normalize_label(label: &str, convention: LabelConvention) -> String {
    match convention {
        LabelConvention::KeepMnemonics => label.to_owned(),
        LabelConvention::StripMnemonics => label.replace('&', ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_mnemonics() {
        assert_eq!(normalize_label("&File", LabelConvention::StripMnemonics), "File");
        assert_eq!(
            normalize_label("Save &As", LabelConvention::StripMnemonics),
            "Save As"
        );
        assert_eq!(
            normalize_label("Fish && Chips", LabelConvention::StripMnemonics),
            "Fish  Chips"
        );
    }

    #[test]
    fn test_keep_mnemonics() {
        assert_eq!(normalize_label("&File", LabelConvention::KeepMnemonics), "&File");
    }

    #[test]
    fn test_native_matches_target() {
        let expected = if cfg!(target_os = "macos") {
            LabelConvention::KeepMnemonics
        } else {
            LabelConvention::StripMnemonics
        };
        assert_eq!(LabelConvention::native(), expected);
        assert_eq!(LabelConvention::default(), expected);
    }
}
