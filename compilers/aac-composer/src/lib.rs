//! Sentence construction for a symbol board.
//!
//! Tiles tapped in any order are sorted into subject, verb, qualifiers,
//! object and phrases, then rendered as one English sentence with verb
//! agreement, "a"/"an"/"the" selection and a completeness period.

pub mod catalog;
pub mod clause;
pub mod composition;
pub mod config;
pub mod diagnostics;
pub mod render;

#[cfg(test)]
mod test_support;

pub use catalog::{default_catalog, validate, Board, CatalogError, Overrides};
pub use clause::Clause;
pub use composition::Composition;
pub use config::BoardConfig;
pub use diagnostics::{check_selection, IssueKind, SelectionIssue};
pub use render::{construct_sentence, render, Rendered};

// Word-level rules, re-exported for callers that only depend on the composer
pub use aac_morph::{conjugate, resolve_noun_phrase, starts_with_vowel_sound};
