//! Raw menu item descriptors as supplied by contributors.
//!
//! A [`MenuDescriptor`] is what a plugin hands to the menu tree. It can be
//! built in code or parsed from JSON. Only a fixed set of fields is
//! recognized; anything else in the JSON is ignored and never reaches the
//! tree.
//!
//! ```
//! use horizon_lattice_menu::MenuDescriptor;
//!
//! let file = MenuDescriptor::submenu("&File", vec![
//!     MenuDescriptor::item("&Save").with_command("core:save").with_accelerator("ctrl-s"),
//!     MenuDescriptor::separator(),
//!     MenuDescriptor::item("&Quit").with_localised_label("menu.quit"),
//! ]);
//! assert_eq!(file.submenu.as_ref().map(Vec::len), Some(3));
//!
//! let parsed = MenuDescriptor::from_json_str(
//!     r#"{ "label": "Edit", "submenu": [{ "label": "Undo", "command": "core:undo" }] }"#,
//! ).unwrap();
//! assert_eq!(parsed.label.as_deref(), Some("Edit"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::translate::TranslationParams;

/// The kind of a menu item.
///
/// Submenus are normal items that carry a `submenu`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    /// A regular entry, optionally with a submenu.
    #[default]
    Normal,
    /// An anonymous separator line.
    Separator,
    /// A renderer-specific kind such as `checkbox` or `radio`.
    ///
    /// Composition treats it like [`MenuItemKind::Normal`]; the name is
    /// passed through to the output unchanged.
    #[serde(untagged)]
    Other(String),
}

impl MenuItemKind {
    /// The name used for this kind in descriptor JSON.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Normal => "normal",
            Self::Separator => "separator",
            Self::Other(name) => name,
        }
    }
}

/// A translatable label reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LocalisedLabel {
    /// A bare translation key.
    Key(String),
    /// A translation key with named parameters.
    Keyed {
        /// The translation key.
        key: String,
        /// Parameters for the translation.
        #[serde(default, alias = "opts")]
        params: Option<TranslationParams>,
    },
}

impl LocalisedLabel {
    /// The translation key.
    pub fn key(&self) -> &str {
        match self {
            Self::Key(key) | Self::Keyed { key, .. } => key,
        }
    }

    /// The translation parameters, if any.
    pub fn params(&self) -> Option<&TranslationParams> {
        match self {
            Self::Key(_) => None,
            Self::Keyed { params, .. } => params.as_ref(),
        }
    }
}

impl From<&str> for LocalisedLabel {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for LocalisedLabel {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

/// Metadata carried through merging untouched.
///
/// The ordering hints (`before`, `after` and the group variants) are
/// interpreted by the renderer, not by the menu tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Opaque payload delivered with the command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_detail: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Keystroke in `ctrl-shift-a` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_group_containing: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_group_containing: Option<Vec<String>>,
}

/// A raw menu item descriptor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDescriptor {
    #[serde(rename = "type", default)]
    pub kind: MenuItemKind,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub localised_label: Option<LocalisedLabel>,
    /// Stable identifier. Derived from `label` when absent.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub submenu: Option<Vec<MenuDescriptor>>,
    #[serde(flatten)]
    pub meta: MenuItemMeta,
}

impl MenuDescriptor {
    /// A leaf item with the given label.
    pub fn item(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// A separator.
    pub fn separator() -> Self {
        Self {
            kind: MenuItemKind::Separator,
            ..Default::default()
        }
    }

    /// An item carrying a submenu.
    pub fn submenu(label: impl Into<String>, children: Vec<MenuDescriptor>) -> Self {
        Self {
            label: Some(label.into()),
            submenu: Some(children),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_localised_label(mut self, label: impl Into<LocalisedLabel>) -> Self {
        self.localised_label = Some(label.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.meta.command = Some(command.into());
        self
    }

    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.meta.accelerator = Some(accelerator.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.meta.enabled = Some(enabled);
        self
    }

    pub fn with_meta(mut self, meta: MenuItemMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Parse a single descriptor from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::descriptor)
    }

    /// Convert an already-parsed JSON value into a descriptor.
    pub fn from_json_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::descriptor)
    }

    /// Parse a JSON array of descriptors.
    pub fn list_from_json_str(json: &str) -> Result<Vec<Self>> {
        serde_json::from_str(json).map_err(Error::descriptor)
    }

    pub fn is_separator(&self) -> bool {
        self.kind == MenuItemKind::Separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_descriptor() {
        let desc = MenuDescriptor::from_json_str(
            r#"{
                "label": "&File",
                "id": "file",
                "submenu": [
                    { "label": "Save", "command": "core:save", "accelerator": "ctrl-s" },
                    { "type": "separator" },
                    { "label": "Close", "enabled": false, "before": ["quit"] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(desc.kind, MenuItemKind::Normal);
        assert_eq!(desc.id.as_deref(), Some("file"));
        let children = desc.submenu.unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].meta.command.as_deref(), Some("core:save"));
        assert_eq!(children[0].meta.accelerator.as_deref(), Some("ctrl-s"));
        assert!(children[1].is_separator());
        assert_eq!(children[2].meta.enabled, Some(false));
        assert_eq!(children[2].meta.before, Some(vec!["quit".to_string()]));
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let desc = MenuDescriptor::from_json_str(
            r#"{ "label": "Save", "sublabel": "ignored", "icon": "save.png", "checked": true }"#,
        )
        .unwrap();
        assert_eq!(desc, MenuDescriptor::item("Save"));
    }

    #[test]
    fn test_localised_label_forms() {
        let plain = MenuDescriptor::from_json_str(r#"{ "localisedLabel": "menu.save" }"#).unwrap();
        assert_eq!(plain.localised_label, Some(LocalisedLabel::Key("menu.save".into())));

        let keyed = MenuDescriptor::from_json_str(
            r#"{ "localisedLabel": { "key": "menu.open", "params": { "name": "a.txt" } } }"#,
        )
        .unwrap();
        let label = keyed.localised_label.unwrap();
        assert_eq!(label.key(), "menu.open");
        assert_eq!(
            label.params().and_then(|p| p.get("name")),
            Some(&Value::from("a.txt"))
        );

        let opts = MenuDescriptor::from_json_str(
            r#"{ "localisedLabel": { "key": "menu.open", "opts": { "n": 2 } } }"#,
        )
        .unwrap();
        assert!(opts.localised_label.unwrap().params().is_some());
    }

    #[test]
    fn test_null_id_is_absent() {
        let desc = MenuDescriptor::from_json_str(r#"{ "label": "A", "id": null }"#).unwrap();
        assert_eq!(desc.id, None);
    }

    #[test]
    fn test_invalid_descriptor() {
        let err = MenuDescriptor::from_json_str(r#"{ "type": 5 }"#).unwrap_err();
        assert!(matches!(err, Error::Descriptor(_)));
        assert!(err.to_string().starts_with("Invalid menu descriptor"));
    }

    #[test]
    fn test_parse_list() {
        let list = MenuDescriptor::list_from_json_str(
            r#"[{ "label": "A" }, { "type": "separator" }, { "label": "B" }]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_renderer_kinds_are_accepted() {
        let list = MenuDescriptor::list_from_json_str(
            r#"[{ "label": "A" }, { "type": "checkbox", "label": "Wrap" }, { "type": "normal" }]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].kind, MenuItemKind::Other("checkbox".into()));
        assert_eq!(list[1].kind.as_str(), "checkbox");
        assert!(!list[1].is_separator());
        assert_eq!(list[2].kind, MenuItemKind::Normal);

        let json = serde_json::to_value(&list[1].kind).unwrap();
        assert_eq!(json, Value::from("checkbox"));
    }

    #[test]
    fn test_builders() {
        let desc = MenuDescriptor::item("Save")
            .with_id("save")
            .with_command("core:save")
            .with_enabled(false)
            .with_localised_label("menu.save");
        assert_eq!(desc.id.as_deref(), Some("save"));
        assert_eq!(desc.meta.command.as_deref(), Some("core:save"));
        assert_eq!(desc.meta.enabled, Some(false));
        assert_eq!(desc.localised_label.as_ref().map(LocalisedLabel::key), Some("menu.save"));
    }
}
