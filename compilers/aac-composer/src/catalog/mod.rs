mod defaults;

pub use defaults::{default_catalog, DEFAULT_CATALOG_VERSION};

use std::collections::{HashMap, HashSet};

use aac_protocol::{Catalog, ItemId, ItemKind, VocabularyItem};
use thiserror::Error;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown vocabulary item '{0}'")]
    UnknownItem(ItemId),
    #[error("duplicate vocabulary item '{0}'")]
    DuplicateId(ItemId),
    #[error("vocabulary item with an empty id (label '{0}')")]
    EmptyId(String),
    #[error("item '{id}' has level {level}, expected 1..=3")]
    LevelOutOfRange { id: ItemId, level: u8 },
    #[error("verb '{0}' is missing a form")]
    MissingVerbForm(ItemId),
    #[error("override for '{id}' is a {found}, the catalog item is a {expected}")]
    KindMismatch { id: ItemId, expected: ItemKind, found: ItemKind },
}

/// User edits keyed by the id of the catalog item they replace.
pub type Overrides = HashMap<ItemId, VocabularyItem>;

/// Checks a catalog before it is compiled or loaded.
pub fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(catalog.items.len());

    for item in &catalog.items {
        let id = item.id();
        if id.is_empty() {
            return Err(CatalogError::EmptyId(item.label().to_string()));
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id.clone()));
        }
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&item.level()) {
            return Err(CatalogError::LevelOutOfRange { id: id.clone(), level: item.level() });
        }
        if let VocabularyItem::Verb(v) = item {
            if v.base_form.is_empty() || v.third_person_singular.is_empty() {
                return Err(CatalogError::MissingVerbForm(id.clone()));
            }
        }
    }

    Ok(())
}

/// A catalog with the user's overrides layered on top.
///
/// Overrides are resolved here, before items ever reach the sentence
/// renderer.
#[derive(Debug, Clone, Default)]
pub struct Board {
    catalog: Catalog,
    overrides: Overrides,
}

impl Board {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, overrides: Overrides::new() }
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    fn catalog_item(&self, id: &ItemId) -> Option<&VocabularyItem> {
        self.catalog.items.iter().find(|item| item.id() == id)
    }

    /// Looks up an item, preferring the user's override.
    pub fn get(&self, id: &ItemId) -> Option<&VocabularyItem> {
        self.overrides.get(id).or_else(|| self.catalog_item(id))
    }

    /// Tiles of one kind up to `level`, in catalog order, overrides applied.
    /// The level filter runs on the catalog entry, not on the override.
    pub fn visible(&self, kind: ItemKind, level: u8) -> Vec<&VocabularyItem> {
        self.catalog
            .items
            .iter()
            .filter(|item| item.kind() == kind && item.level() <= level)
            .map(|item| self.overrides.get(item.id()).unwrap_or(item))
            .collect()
    }

    /// Maps tapped ids to items, in tap order.
    pub fn resolve<I, S>(&self, ids: I) -> Result<Vec<VocabularyItem>, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .map(|id| {
                let id = ItemId::from(id.as_ref());
                self.get(&id).cloned().ok_or(CatalogError::UnknownItem(id))
            })
            .collect()
    }

    /// Stores a user edit. An edit may relabel or re-inflect an item but not
    /// change what kind of tile it is.
    pub fn set_override(&mut self, item: VocabularyItem) -> Result<(), CatalogError> {
        if let Some(original) = self.catalog_item(item.id()) {
            if original.kind() != item.kind() {
                let err = CatalogError::KindMismatch {
                    id: item.id().clone(),
                    expected: original.kind(),
                    found: item.kind(),
                };
                tracing::warn!(%err, "rejected override");
                return Err(err);
            }
        }

        tracing::debug!(id = %item.id(), label = item.label(), "override stored");
        self.overrides.insert(item.id().clone(), item);
        Ok(())
    }

    /// Drops a user edit, returning it if there was one.
    pub fn reset_override(&mut self, id: &ItemId) -> Option<VocabularyItem> {
        self.overrides.remove(id)
    }
}
