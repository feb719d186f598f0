use aac_protocol::{ItemKind, Role, VocabularyItem};

use crate::config::BoardConfig;
use crate::diagnostics::{check_selection, SelectionIssue};
use crate::render::{render, Rendered};

/// The sentence bar: what has been tapped so far and which role the board
/// is offering next.
#[derive(Debug, Clone)]
pub struct Composition {
    items: Vec<VocabularyItem>,
    active_role: Role,
    auto_advance: bool,
}

impl Default for Composition {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Composition {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            items: Vec::new(),
            active_role: Role::Subject,
            auto_advance: config.auto_advance,
        }
    }

    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    pub fn active_role(&self) -> Role {
        self.active_role
    }

    /// Jump to a role tab by hand.
    pub fn set_active_role(&mut self, role: Role) {
        self.active_role = role;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a tapped tile. Returns `false` for unlabeled placeholders.
    ///
    /// Phrases are one-shot: the bar is cleared before a phrase goes in.
    pub fn push(&mut self, item: VocabularyItem) -> bool {
        if item.label().is_empty() {
            return false;
        }

        if item.kind() == ItemKind::Phrase {
            self.clear();
        }

        if self.auto_advance {
            self.active_role = self.active_role.next();
        }

        tracing::debug!(id = %item.id(), next = %self.active_role, "item added");
        self.items.push(item);
        true
    }

    /// Removes the item at `index`, if there is one. The active role is kept.
    pub fn remove(&mut self, index: usize) -> Option<VocabularyItem> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Undo: drops the last item and, with auto-advance, returns to its role.
    pub fn pop(&mut self) -> Option<VocabularyItem> {
        let removed = self.items.pop()?;

        if self.auto_advance {
            if let Some(role) = removed.role() {
                self.active_role = role;
            }
        }

        tracing::debug!(id = %removed.id(), active = %self.active_role, "item removed");
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.active_role = Role::Subject;
    }

    pub fn render(&self) -> Rendered {
        render(&self.items)
    }

    pub fn issues(&self) -> Vec<SelectionIssue> {
        check_selection(&self.items)
    }
}
