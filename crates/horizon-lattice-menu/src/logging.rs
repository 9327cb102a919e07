//! Logging and debugging facilities for menu trees.
//!
//! Menu composition is instrumented with `tracing`. Install a subscriber in
//! the host application to see what contributors did to the tree:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_menu::merge=trace")
//!     .init();
//! ```
//!
//! [`MenuTreeDebug`] renders a tree as indented text, optionally annotated
//! with the specificity each item was installed at:
//!
//! ```
//! use horizon_lattice_menu::{MenuDescriptor, MenuTree, NoTranslation};
//! use horizon_lattice_menu::logging::MenuTreeDebug;
//!
//! let mut tree = MenuTree::new();
//! tree.merge(&MenuDescriptor::submenu("File", vec![MenuDescriptor::item("Save")]), &NoTranslation);
//! let text = MenuTreeDebug::new().format_tree(&tree);
//! assert!(text.contains("Save"));
//! ```

use std::fmt::Write as FmtWrite;

use crate::item::MenuItem;
use crate::merge::MenuTree;
use crate::specificity::SpecificityRegistry;

/// Target names for log filtering.
pub mod targets {
    /// Crate-wide target.
    pub const MENU: &str = "horizon_lattice_menu";
    /// Merge and unmerge decisions.
    pub const MERGE: &str = "horizon_lattice_menu::merge";
    /// Descriptor normalization and localization.
    pub const NORMALIZE: &str = "horizon_lattice_menu::normalize";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed lines.
    Compact,
}

/// Configuration for menu tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    pub style: TreeStyle,
    /// Show item ids next to labels.
    pub show_ids: bool,
    /// Show the specificity each item was installed at.
    pub show_specificity: bool,
    /// Show bound commands.
    pub show_commands: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_specificity: false,
            show_commands: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Everything turned on.
    pub fn detailed() -> Self {
        Self {
            show_specificity: true,
            show_commands: true,
            ..Default::default()
        }
    }

    /// Labels only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_specificity: false,
            show_commands: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing menu trees.
#[derive(Debug, Clone, Default)]
pub struct MenuTreeDebug {
    options: TreeFormatOptions,
}

impl MenuTreeDebug {
    pub fn new() -> Self {
        Self {
            options: TreeFormatOptions::default(),
        }
    }

    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format a whole [`MenuTree`], including its specificity table.
    pub fn format_tree(&self, tree: &MenuTree) -> String {
        self.format_items(tree.items(), Some(tree.specificities()))
    }

    /// Format a bare list of items.
    pub fn format_items(&self, items: &[MenuItem], registry: Option<&SpecificityRegistry>) -> String {
        let mut output = String::new();
        writeln!(output, "Menu ({} top-level items):", items.len()).expect("write to String");

        if items.is_empty() {
            writeln!(output, "  (empty)").expect("write to String");
        } else {
            self.format_level(items, 1, registry, &mut output);
        }
        output
    }

    fn format_level(
        &self,
        items: &[MenuItem],
        depth: usize,
        registry: Option<&SpecificityRegistry>,
        output: &mut String,
    ) {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return;
        }

        let count = items.len();
        for (i, item) in items.iter().enumerate() {
            output.push_str(&self.build_prefix(depth, i + 1 == count));
            self.format_item(item, registry, output);
            output.push('\n');

            if let Some(children) = item.submenu.as_deref() {
                self.format_level(children, depth + 1, registry, output);
            }
        }
    }

    fn format_item(&self, item: &MenuItem, registry: Option<&SpecificityRegistry>, output: &mut String) {
        if item.is_separator() {
            output.push_str("---");
            return;
        }

        output.push_str(item.label.as_deref().unwrap_or("(unlabeled)"));
        if item.has_submenu() {
            output.push_str(" >");
        }

        if self.options.show_ids {
            match item.id.as_deref() {
                Some(id) => write!(output, " [{id}]").expect("write to String"),
                None => output.push_str(" [-]"),
            }
        }

        if self.options.show_commands {
            if let Some(command) = item.meta.command.as_deref() {
                write!(output, " => {command}").expect("write to String");
            }
        }

        if self.options.show_specificity {
            if let Some(specificity) = registry.and_then(|r| r.get(item)) {
                write!(output, " @{specificity}").expect("write to String");
            }
        }
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        let (branch, corner, last) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..depth.saturating_sub(1) {
            prefix.push_str(branch);
            for _ in 0..self.options.indent_size {
                prefix.push(' ');
            }
        }
        prefix.push_str(if is_last { last } else { corner });
        prefix.push(' ');
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MenuItem> {
        let mut save = MenuItem::normal("save").with_label("Save");
        save.meta.command = Some("core:save".into());
        vec![
            MenuItem::submenu("file", vec![save, MenuItem::separator(), MenuItem::normal("quit")])
                .with_label("File"),
            MenuItem::normal("help").with_label("Help"),
        ]
    }

    #[test]
    fn test_format_empty() {
        let output = MenuTreeDebug::new().format_items(&[], None);
        assert!(output.contains("Menu (0 top-level items)"));
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_format_hierarchy() {
        let output = MenuTreeDebug::new().format_items(&sample(), None);
        assert!(output.contains("File > [file]"));
        assert!(output.contains("Save [save]"));
        assert!(output.contains("---"));
        assert!(output.contains("(unlabeled) [quit]"));
        assert!(output.contains("Help [help]"));
    }

    #[test]
    fn test_format_minimal_ascii() {
        let options = TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..TreeFormatOptions::minimal()
        };
        let output = MenuTreeDebug::with_options(options).format_items(&sample(), None);
        assert!(output.contains("+-- File >"));
        assert!(output.contains("`-- Help"));
        assert!(!output.contains("[file]"));
    }

    #[test]
    fn test_format_detailed() {
        let mut items = sample();
        let mut registry = SpecificityRegistry::new();
        registry.record(&mut items[0], 5.0);

        let output = MenuTreeDebug::with_options(TreeFormatOptions::detailed())
            .format_items(&items, Some(&registry));
        assert!(output.contains("Save [save] => core:save @5"));
        assert!(!output.contains("Help [help] @"));
    }

    #[test]
    fn test_max_depth() {
        let options = TreeFormatOptions {
            max_depth: Some(1),
            ..Default::default()
        };
        let output = MenuTreeDebug::with_options(options).format_items(&sample(), None);
        assert!(output.contains("File"));
        assert!(!output.contains("Save"));
    }
}
