//! Canonical menu items as stored in a menu tree.

use serde::Serialize;

use crate::descriptor::{MenuItemKind, MenuItemMeta};
use crate::specificity::ItemHandle;

/// A normalized menu item.
///
/// Items are produced by [`normalize`](crate::normalize::normalize) and owned
/// by a menu tree. Equality is structural: two items compare equal when their
/// contents match, regardless of which installation they came from.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "type")]
    pub kind: MenuItemKind,
    /// Display text, already localized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Identifier used for matching among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<MenuItem>>,
    #[serde(flatten)]
    pub meta: MenuItemMeta,
    #[serde(skip)]
    pub(crate) handle: ItemHandle,
}

impl MenuItem {
    /// A leaf item with the given id.
    pub fn normal(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// An item with the given id carrying `children`.
    pub fn submenu(id: impl Into<String>, children: Vec<MenuItem>) -> Self {
        Self {
            id: Some(id.into()),
            submenu: Some(children),
            ..Default::default()
        }
    }

    pub fn separator() -> Self {
        Self {
            kind: MenuItemKind::Separator,
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_separator(&self) -> bool {
        self.kind == MenuItemKind::Separator
    }

    pub fn has_submenu(&self) -> bool {
        self.submenu.is_some()
    }

    /// The handle this instance is tracked under.
    pub fn handle(&self) -> ItemHandle {
        self.handle
    }

    /// Find a direct child by id.
    pub fn child(&self, id: &str) -> Option<&MenuItem> {
        self.submenu
            .as_ref()?
            .iter()
            .find(|child| child.id.as_deref() == Some(id))
    }

    /// Follow a path of ids down through nested submenus.
    pub fn find_path<'a>(&'a self, path: &[&str]) -> Option<&'a MenuItem> {
        match path.split_first() {
            None => Some(self),
            Some((first, rest)) => self.child(first)?.find_path(rest),
        }
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.label == other.label
            && self.id == other.id
            && self.submenu == other.submenu
            && self.meta == other.meta
    }
}
