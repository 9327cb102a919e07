//! Translation hooks used to localize menu labels.
//!
//! The host supplies the actual translation service. Anything implementing
//! [`Translate`] works, including plain closures:
//!
//! ```
//! use horizon_lattice_menu::{Translate, TranslationParams};
//!
//! let t = |key: &str, _params: Option<&TranslationParams>| match key {
//!     "menu.save" => Some("Save".to_string()),
//!     _ => None,
//! };
//! assert_eq!(t.translate("menu.save", None).as_deref(), Some("Save"));
//! assert_eq!(t.translate("menu.quit", None), None);
//! ```
//!
//! A missing translation is a normal outcome. Callers fall back to the
//! untranslated label and never treat `None` as an error.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Named parameters passed along with a translation key.
pub type TranslationParams = BTreeMap<String, Value>;

/// A translation service.
pub trait Translate {
    /// Translate `key`, optionally interpolating `params`.
    ///
    /// Returns `None` when no translation is available.
    fn translate(&self, key: &str, params: Option<&TranslationParams>) -> Option<String>;
}

impl<F> Translate for F
where
    F: Fn(&str, Option<&TranslationParams>) -> Option<String>,
{
    fn translate(&self, key: &str, params: Option<&TranslationParams>) -> Option<String> {
        self(key, params)
    }
}

/// A translator that never finds anything, so every label stays as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translate for NoTranslation {
    fn translate(&self, _key: &str, _params: Option<&TranslationParams>) -> Option<String> {
        None
    }
}

/// An in-memory translation table.
///
/// Templates may contain `{name}` placeholders, which are replaced with the
/// matching parameter. Strings are inserted verbatim; other JSON values use
/// their JSON text. Placeholders without a parameter are left untouched.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace a translation template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Builder-style variant of [`Catalog::insert`].
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Look up the raw template for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str, params: Option<&TranslationParams>) -> Option<String> {
        let template = self.get(key)?;
        Some(match params {
            Some(params) if !params.is_empty() => interpolate(template, params),
            _ => template.to_owned(),
        })
    }
}

fn interpolate(template: &str, params: &TranslationParams) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match params.get(name) {
            Some(Value::String(s)) => out.push_str(s),
            Some(other) => out.push_str(&other.to_string()),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, Value)]) -> TranslationParams {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_no_translation() {
        assert_eq!(NoTranslation.translate("menu.save", None), None);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new().with("menu.save", "Save");
        assert_eq!(catalog.translate("menu.save", None).as_deref(), Some("Save"));
        assert_eq!(catalog.translate("menu.open", None), None);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_interpolation() {
        let catalog = Catalog::new().with("menu.recent", "Open {name} ({count})");
        let p = params(&[("name", Value::from("notes.md")), ("count", Value::from(3))]);
        assert_eq!(
            catalog.translate("menu.recent", Some(&p)).as_deref(),
            Some("Open notes.md (3)")
        );
    }

    #[test]
    fn test_catalog_missing_placeholder_is_kept() {
        let catalog = Catalog::new().with("greeting", "Hello {who}{");
        let p = params(&[("other", Value::from("x"))]);
        assert_eq!(
            catalog.translate("greeting", Some(&p)).as_deref(),
            Some("Hello {who}{")
        );
    }

    #[test]
    fn test_closure_translator() {
        let t = |key: &str, params: Option<&TranslationParams>| {
            Some(format!("{key}:{}", params.map_or(0, |p| p.len())))
        };
        let p = params(&[("a", Value::Null)]);
        assert_eq!(t.translate("k", Some(&p)).as_deref(), Some("k:1"));
        assert_eq!(t.translate("k", None).as_deref(), Some("k:0"));
    }
}
