//! Light/dark theme preference.
//!
//! The preference is a single key in a [`PreferenceStore`]. The active theme
//! is mirrored onto [`RootAttributes`]: dark sets `data-theme="dark"`, light
//! removes the attribute so the default styling applies.

use std::collections::{BTreeMap, HashMap};

use crate::error::StoreError;
use crate::types::Theme;

/// Preference key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Root attribute set while the dark theme is active.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Key/value preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Preference store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Attributes of the document root the theme is reflected on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootAttributes {
    attributes: BTreeMap<String, String>,
}

impl RootAttributes {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

/// Keeps the stored preference, the current theme and the root attributes
/// in step.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    current: Theme,
    root: RootAttributes,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Load the stored theme (light when unset or unrecognized) and apply it.
    pub fn new(store: S) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|value| Theme::from_str(&value))
            .unwrap_or_default();

        let mut controller = Self {
            store,
            current,
            root: RootAttributes::default(),
        };
        controller.apply();
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn root(&self) -> &RootAttributes {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist and apply a theme.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.current = theme;
        self.apply();
        tracing::debug!(theme = theme.as_str(), "theme applied");
        Ok(())
    }

    /// Switch to the other theme and return it.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        let next = self.current.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    fn apply(&mut self) {
        match self.current {
            Theme::Dark => self.root.set(THEME_ATTRIBUTE, Theme::Dark.as_str()),
            Theme::Light => self.root.remove(THEME_ATTRIBUTE),
        }
    }
}
