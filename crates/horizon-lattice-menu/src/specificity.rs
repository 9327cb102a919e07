//! Specificity bookkeeping for installed menu items.
//!
//! Specificity says how strongly an item was installed, not what the item is.
//! The same logical item may be merged several times by different contributors
//! at different priorities, so the value lives in a side table keyed by the
//! [`ItemHandle`] of the concrete item instance in the tree.
//!
//! Entries are released explicitly whenever the item leaves the tree: when it
//! is replaced by a stronger merge or spliced out by an unmerge. Nothing ever
//! scans the table for stale entries.

use slotmap::{new_key_type, SlotMap};

use crate::item::MenuItem;

new_key_type! {
    /// Identifies one installed menu item instance.
    ///
    /// Freshly normalized items carry the null handle until they are
    /// installed into a tree.
    pub struct ItemHandle;
}

/// The default specificity: every merge without an explicit priority wins ties.
pub const DEFAULT_SPECIFICITY: f64 = f64::INFINITY;

/// Whether a merge at `incoming` may replace an item installed at `stored`.
///
/// Zero and NaN never override anything. Otherwise the newer merge wins
/// unless it is strictly weaker.
#[inline]
pub fn can_override(incoming: f64, stored: f64) -> bool {
    incoming != 0.0 && !incoming.is_nan() && incoming >= stored
}

/// Side table from installed items to the specificity they were merged at.
#[derive(Debug, Default)]
pub struct SpecificityRegistry {
    entries: SlotMap<ItemHandle, f64>,
}

impl SpecificityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    /// Record `specificity` for `item` and every node below it.
    ///
    /// Any handle the item already held is released first, so recording twice
    /// never leaks.
    pub fn record(&mut self, item: &mut MenuItem, specificity: f64) {
        self.release_one(item.handle);
        item.handle = self.entries.insert(specificity);

        if let Some(children) = item.submenu.as_mut() {
            for child in children {
                self.record(child, specificity);
            }
        }
    }

    /// The specificity an item was installed at, if it is tracked.
    pub fn get(&self, item: &MenuItem) -> Option<f64> {
        self.entries.get(item.handle).copied()
    }

    /// The specificity used when comparing against `item`.
    ///
    /// Items that were never recorded count as [`DEFAULT_SPECIFICITY`].
    pub fn stored(&self, item: &MenuItem) -> f64 {
        self.get(item).unwrap_or(DEFAULT_SPECIFICITY)
    }

    /// Release the entries of `item` and its whole submenu.
    pub fn release(&mut self, item: &MenuItem) {
        self.release_one(item.handle);
        if let Some(children) = item.submenu.as_ref() {
            for child in children {
                self.release(child);
            }
        }
    }

    fn release_one(&mut self, handle: ItemHandle) {
        self.entries.remove(handle);
    }

    /// Whether `handle` is currently tracked.
    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.entries.contains_key(handle)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
