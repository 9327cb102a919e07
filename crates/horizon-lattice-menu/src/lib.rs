//! Menu tree composition for Horizon Lattice.
//!
//! Plugins and other independent contributors describe the menu entries they
//! want with [`MenuDescriptor`]s. A [`MenuTree`] merges those descriptors into
//! one ordered tree, resolves id collisions by specificity, and removes a
//! contributor's entries again when it is unloaded, pruning submenus that end
//! up empty.
//!
//! - **Descriptors**: [`MenuDescriptor`], parsed from JSON or built in code
//! - **Normalization**: [`normalize()`] derives ids and localizes labels
//! - **Matching**: [`find_matching_index`] pairs items by id and submenu-presence
//! - **Merging**: [`MenuTree::merge`], [`MenuTree::merge_with`], [`MenuTree::unmerge`]
//! - **Accelerators**: [`format_accelerator`] turns `ctrl-s` into `Ctrl+S`
//!
//! # Example
//!
//! ```
//! use horizon_lattice_menu::{Catalog, MenuDescriptor, MenuTree};
//!
//! let catalog = Catalog::new().with("menu.file", "File").with("menu.save", "Save");
//! let mut tree = MenuTree::new();
//!
//! // The application installs the base menu.
//! let base = MenuDescriptor::submenu("&File", vec![
//!     MenuDescriptor::item("Save").with_id("save").with_localised_label("menu.save"),
//! ])
//! .with_id("file")
//! .with_localised_label("menu.file");
//! tree.merge(&base, &catalog);
//!
//! // A plugin adds an entry at a lower specificity.
//! let plugin = MenuDescriptor::submenu("File", vec![
//!     MenuDescriptor::item("Export PDF").with_command("pdf:export"),
//! ])
//! .with_id("file");
//! tree.merge_with(&plugin, &catalog, 10.0);
//! assert_eq!(tree.find(&["file"]).and_then(|f| f.submenu.as_ref()).map(Vec::len), Some(2));
//!
//! // Unloading the plugin removes only its own entry.
//! tree.unmerge(&plugin, &catalog);
//! assert_eq!(tree.find(&["file"]).and_then(|f| f.submenu.as_ref()).map(Vec::len), Some(1));
//! ```

pub mod accelerator;
mod config;
pub mod descriptor;
mod error;
mod item;
pub mod logging;
pub mod matcher;
pub mod merge;
pub mod normalize;
pub mod platform;
pub mod specificity;
pub mod translate;

pub use accelerator::{accelerator_for_keystroke, format_accelerator};
pub use config::MenuConfig;
pub use descriptor::{LocalisedLabel, MenuDescriptor, MenuItemKind, MenuItemMeta};
pub use error::{Error, Result};
pub use item::MenuItem;
pub use matcher::find_matching_index;
pub use merge::{merge, unmerge, MenuTree, MergeOutcome};
pub use normalize::normalize;
pub use platform::{normalize_label, LabelConvention};
pub use specificity::{ItemHandle, SpecificityRegistry, DEFAULT_SPECIFICITY};
pub use translate::{Catalog, NoTranslation, Translate, TranslationParams};
