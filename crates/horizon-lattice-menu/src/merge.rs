//! Merging and unmerging contributed menu items.
//!
//! Contributors register descriptors with [`MenuTree::merge`] and retract them
//! with [`MenuTree::unmerge`], passing the same descriptor shape both times.
//!
//! # Merge
//!
//! The descriptor is normalized, then matched against its siblings (same id,
//! same submenu-presence):
//!
//! - no match: the item is appended, unless it is a separator directly after
//!   another separator
//! - match with a submenu: each child is merged into the existing submenu
//! - match without a submenu: the existing item is replaced when the incoming
//!   specificity is nonzero and at least the stored one; otherwise nothing
//!   happens
//!
//! # Unmerge
//!
//! The matching item's children are unmerged first. Then the item itself is
//! removed if it is a leaf or its submenu no longer holds anything but
//! separators. Because every level checks its own item after handling the
//! children, an emptied submenu disappears from its parent in the same call.
//!
//! ```
//! use horizon_lattice_menu::{MenuDescriptor, MenuTree, NoTranslation};
//!
//! let mut tree = MenuTree::new();
//! let plugin = MenuDescriptor::submenu("Packages", vec![
//!     MenuDescriptor::submenu("Linter", vec![MenuDescriptor::item("Lint File")]),
//! ]);
//!
//! tree.merge(&plugin, &NoTranslation);
//! assert!(tree.find(&["Packages", "Linter", "Lint File"]).is_some());
//!
//! tree.unmerge(&plugin, &NoTranslation);
//! assert!(tree.is_empty());
//! ```

use crate::config::MenuConfig;
use crate::descriptor::MenuDescriptor;
use crate::error::{Error, Result};
use crate::item::MenuItem;
use crate::logging::targets;
use crate::matcher::{find_matching_index, non_separator_count};
use crate::normalize::normalize;
use crate::specificity::{can_override, SpecificityRegistry, DEFAULT_SPECIFICITY};
use crate::translate::Translate;

/// What a merge did at the level it was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The item was new and appended.
    Appended,
    /// A separator was dropped because the list already ended with one.
    SeparatorSuppressed,
    /// The item matched an existing submenu; its children were merged into it.
    MergedIntoSubmenu,
    /// The item replaced an existing leaf.
    Replaced,
    /// The existing leaf was installed at a higher specificity and was kept.
    Kept,
}

/// Merge `raw` into `tree`.
///
/// This is the low-level form of [`MenuTree::merge_with`] for callers that
/// manage the item list and its [`SpecificityRegistry`] themselves.
pub fn merge<T>(
    tree: &mut Vec<MenuItem>,
    registry: &mut SpecificityRegistry,
    raw: &MenuDescriptor,
    translate: &T,
    specificity: f64,
    config: &MenuConfig,
) -> MergeOutcome
where
    T: Translate + ?Sized,
{
    let item = normalize(raw, translate, config);
    merge_item(tree, registry, item, specificity)
}

fn merge_item(
    tree: &mut Vec<MenuItem>,
    registry: &mut SpecificityRegistry,
    mut item: MenuItem,
    specificity: f64,
) -> MergeOutcome {
    let Some(index) = find_matching_index(tree, &item) else {
        if item.is_separator() && tree.last().is_some_and(MenuItem::is_separator) {
            tracing::trace!(target: targets::MERGE, "dropping adjacent separator");
            return MergeOutcome::SeparatorSuppressed;
        }
        tracing::trace!(target: targets::MERGE, id = ?item.id, specificity, "appending item");
        // Children go through merge_item so separator runs collapse the same
        // way whether or not the parent already existed.
        let children = item.submenu.as_mut().map(std::mem::take);
        registry.record(&mut item, specificity);
        tree.push(item);

        if let (Some(children), Some(target)) =
            (children, tree.last_mut().and_then(|parent| parent.submenu.as_mut()))
        {
            for child in children {
                merge_item(target, registry, child, specificity);
            }
        }
        return MergeOutcome::Appended;
    };

    if let Some(children) = item.submenu.take() {
        // Matching guarantees the existing item carries a submenu too.
        if let Some(target) = tree[index].submenu.as_mut() {
            for child in children {
                merge_item(target, registry, child, specificity);
            }
        }
        return MergeOutcome::MergedIntoSubmenu;
    }

    let stored = registry.stored(&tree[index]);
    if can_override(specificity, stored) {
        tracing::trace!(target: targets::MERGE, id = ?item.id, specificity, stored, "replacing item");
        registry.release(&tree[index]);
        registry.record(&mut item, specificity);
        tree[index] = item;
        MergeOutcome::Replaced
    } else {
        tracing::trace!(target: targets::MERGE, id = ?item.id, specificity, stored, "keeping stronger item");
        MergeOutcome::Kept
    }
}

/// Remove a previously merged `raw` from `tree`.
///
/// Returns `true` if anything was removed at any depth. Unmerging something
/// that is not present is a no-op.
pub fn unmerge<T>(
    tree: &mut Vec<MenuItem>,
    registry: &mut SpecificityRegistry,
    raw: &MenuDescriptor,
    translate: &T,
    config: &MenuConfig,
) -> bool
where
    T: Translate + ?Sized,
{
    let item = normalize(raw, translate, config);
    unmerge_item(tree, registry, &item)
}

fn unmerge_item(tree: &mut Vec<MenuItem>, registry: &mut SpecificityRegistry, item: &MenuItem) -> bool {
    let Some(index) = find_matching_index(tree, item) else {
        return false;
    };

    let mut removed = false;
    if let (Some(children), Some(target)) = (item.submenu.as_ref(), tree[index].submenu.as_mut()) {
        for child in children {
            removed |= unmerge_item(target, registry, child);
        }
    }

    let emptied = tree[index]
        .submenu
        .as_deref()
        .is_none_or(|children| non_separator_count(children) == 0);
    if emptied {
        let gone = tree.remove(index);
        tracing::trace!(target: targets::MERGE, id = ?gone.id, "removing item");
        registry.release(&gone);
        removed = true;
    }
    removed
}

/// An ordered menu tree together with the specificity of its items.
///
/// This is the usual entry point for contributors. The finished tree is
/// handed to a renderer through [`MenuTree::items`] or [`MenuTree::to_json`].
#[derive(Debug, Default)]
pub struct MenuTree {
    items: Vec<MenuItem>,
    specificities: SpecificityRegistry,
    config: MenuConfig,
}

impl MenuTree {
    /// Create an empty tree with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MenuConfig::default())
    }

    pub fn with_config(config: MenuConfig) -> Self {
        tracing::debug!(
            target: targets::MENU,
            convention = ?config.label_convention,
            warn_on_anonymous_items = config.warn_on_anonymous_items,
            "creating menu tree"
        );
        Self {
            items: Vec::new(),
            specificities: SpecificityRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Merge at the default (infinite) specificity.
    pub fn merge<T>(&mut self, raw: &MenuDescriptor, translate: &T) -> MergeOutcome
    where
        T: Translate + ?Sized,
    {
        self.merge_with(raw, translate, DEFAULT_SPECIFICITY)
    }

    /// Merge at an explicit specificity.
    #[tracing::instrument(
        skip_all,
        target = "horizon_lattice_menu::merge",
        level = "debug",
        fields(id = ?raw.id, label = ?raw.label, specificity = specificity)
    )]
    pub fn merge_with<T>(&mut self, raw: &MenuDescriptor, translate: &T, specificity: f64) -> MergeOutcome
    where
        T: Translate + ?Sized,
    {
        merge(
            &mut self.items,
            &mut self.specificities,
            raw,
            translate,
            specificity,
            &self.config,
        )
    }

    /// Merge several descriptors in order at one specificity.
    pub fn merge_all<'a, T, I>(&mut self, raws: I, translate: &T, specificity: f64)
    where
        T: Translate + ?Sized,
        I: IntoIterator<Item = &'a MenuDescriptor>,
    {
        for raw in raws {
            self.merge_with(raw, translate, specificity);
        }
    }

    /// Retract a previously merged descriptor.
    #[tracing::instrument(
        skip_all,
        target = "horizon_lattice_menu::merge",
        level = "debug",
        fields(id = ?raw.id, label = ?raw.label)
    )]
    pub fn unmerge<T>(&mut self, raw: &MenuDescriptor, translate: &T) -> bool
    where
        T: Translate + ?Sized,
    {
        unmerge(&mut self.items, &mut self.specificities, raw, translate, &self.config)
    }

    /// Retract several descriptors in order.
    pub fn unmerge_all<'a, T, I>(&mut self, raws: I, translate: &T) -> bool
    where
        T: Translate + ?Sized,
        I: IntoIterator<Item = &'a MenuDescriptor>,
    {
        let mut removed = false;
        for raw in raws {
            removed |= self.unmerge(raw, translate);
        }
        removed
    }

    /// Top-level items in order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Consume the tree, returning its items.
    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }

    pub fn specificities(&self) -> &SpecificityRegistry {
        &self.specificities
    }

    /// The specificity `item` was installed at, if it belongs to this tree.
    pub fn specificity_of(&self, item: &MenuItem) -> Option<f64> {
        self.specificities.get(item)
    }

    /// Follow a path of ids from the top level down.
    pub fn find(&self, path: &[&str]) -> Option<&MenuItem> {
        let (first, rest) = path.split_first()?;
        self.items
            .iter()
            .find(|item| item.id.as_deref() == Some(*first))?
            .find_path(rest)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item and forget all specificities.
    pub fn clear(&mut self) {
        self.items.clear();
        self.specificities.clear();
    }

    /// Render the tree as a JSON array for a menu renderer.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.items).map_err(Error::serialize)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.items).map_err(Error::serialize)
    }
}
