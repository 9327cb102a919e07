//! Descriptor normalization and localization.
//!
//! Normalization turns a [`MenuDescriptor`] into a canonical [`MenuItem`]:
//!
//! 1. Only recognized fields survive (the descriptor type already drops the rest).
//! 2. A missing id is derived from the label, using the configured
//!    [`LabelConvention`](crate::LabelConvention) for mnemonic markers.
//! 3. A `localisedLabel` is resolved through the translator. A missing
//!    translation keeps the original label.
//! 4. Submenus are normalized recursively.
//!
//! The descriptor is never modified; a fresh tree is returned each time.

use crate::config::MenuConfig;
use crate::descriptor::{LocalisedLabel, MenuDescriptor};
use crate::item::MenuItem;
use crate::logging::targets;
use crate::platform::normalize_label;
use crate::translate::Translate;

/// Normalize a descriptor and all of its descendants.
pub fn normalize<T>(raw: &MenuDescriptor, translate: &T, config: &MenuConfig) -> MenuItem
where
    T: Translate + ?Sized,
{
    let id = match (&raw.id, raw.is_separator()) {
        (Some(id), _) => Some(id.clone()),
        (None, true) => None,
        (None, false) => derive_id(raw, config),
    };

    let label = match raw.localised_label.as_ref() {
        Some(localised) => localise(localised, translate).or_else(|| raw.label.clone()),
        None => raw.label.clone(),
    };

    let submenu = raw.submenu.as_ref().map(|children| {
        children
            .iter()
            .map(|child| normalize(child, translate, config))
            .collect()
    });

    MenuItem {
        kind: raw.kind.clone(),
        label,
        id,
        submenu,
        meta: raw.meta.clone(),
        handle: Default::default(),
    }
}

fn derive_id(raw: &MenuDescriptor, config: &MenuConfig) -> Option<String> {
    let Some(label) = raw.label.as_deref() else {
        if config.warn_on_anonymous_items {
            tracing::warn!(
                target: targets::NORMALIZE,
                "menu item has neither an id nor a label; it will match every other anonymous sibling"
            );
        }
        return None;
    };
    Some(normalize_label(label, config.label_convention))
}

fn localise<T>(localised: &LocalisedLabel, translate: &T) -> Option<String>
where
    T: Translate + ?Sized,
{
    // A bare empty string means "no key"; the keyed form is always looked up.
    if matches!(localised, LocalisedLabel::Key(key) if key.is_empty()) {
        return None;
    }

    let key = localised.key();

    let translated = translate.translate(key, localised.params());
    if translated.is_none() {
        tracing::trace!(target: targets::NORMALIZE, key, "no translation, keeping label");
    }
    translated
}
