use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::ItemId;
use crate::grammar::{ArticlePolicy, ItemKind, NounType, Number, Person, Role};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Fields shared by every tile, whatever its kind.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ItemMeta {
    pub id: ItemId,
    /// Text shown on the tile and spoken in the default case.
    pub label: String,
    /// Difficulty tier, 1..=3. The grammar never reads it.
    pub level: u8,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub icon: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub category: Option<String>,
}

impl ItemMeta {
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            level,
            icon: None,
            category: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Subject {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub meta: ItemMeta,
    pub person: Person,
    pub number: Number,
}

impl Subject {
    pub fn is_third_singular(&self) -> bool {
        self.person == Person::Third && self.number == Number::Singular
    }
}

/// Both forms are authored; nothing is derived morphologically.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[archive(check_bytes)]
pub struct Verb {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub meta: ItemMeta,
    pub base_form: String,
    pub third_person_singular: String,
}

/// Adjectives are invariant; the label is all there is.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Qualifier {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub meta: ItemMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[archive(check_bytes)]
pub struct Object {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub meta: ItemMeta,
    pub noun_type: NounType,
    pub default_number: Number,
    #[cfg_attr(feature = "serde", serde(default))]
    pub article_policy: ArticlePolicy,
    // Carried for catalog authors; sentence assembly always uses the label.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub plural_form: Option<String>,
}

/// A canned utterance ("I need help") that bypasses role-based construction.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Phrase {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub meta: ItemMeta,
}

/// A board tile, discriminated by its `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
#[archive(check_bytes)]
pub enum VocabularyItem {
    Subject(Subject),
    Verb(Verb),
    Qualifier(Qualifier),
    Object(Object),
    Phrase(Phrase),
}

impl VocabularyItem {
    pub fn meta(&self) -> &ItemMeta {
        match self {
            VocabularyItem::Subject(s) => &s.meta,
            VocabularyItem::Verb(v) => &v.meta,
            VocabularyItem::Qualifier(q) => &q.meta,
            VocabularyItem::Object(o) => &o.meta,
            VocabularyItem::Phrase(p) => &p.meta,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.meta().id
    }

    pub fn label(&self) -> &str {
        &self.meta().label
    }

    pub fn level(&self) -> u8 {
        self.meta().level
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            VocabularyItem::Subject(_) => ItemKind::Subject,
            VocabularyItem::Verb(_) => ItemKind::Verb,
            VocabularyItem::Qualifier(_) => ItemKind::Qualifier,
            VocabularyItem::Object(_) => ItemKind::Object,
            VocabularyItem::Phrase(_) => ItemKind::Phrase,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.kind().role()
    }
}

impl From<Subject> for VocabularyItem {
    fn from(item: Subject) -> Self {
        VocabularyItem::Subject(item)
    }
}

impl From<Verb> for VocabularyItem {
    fn from(item: Verb) -> Self {
        VocabularyItem::Verb(item)
    }
}

impl From<Qualifier> for VocabularyItem {
    fn from(item: Qualifier) -> Self {
        VocabularyItem::Qualifier(item)
    }
}

impl From<Object> for VocabularyItem {
    fn from(item: Object) -> Self {
        VocabularyItem::Object(item)
    }
}

impl From<Phrase> for VocabularyItem {
    fn from(item: Phrase) -> Self {
        VocabularyItem::Phrase(item)
    }
}

/// Archive root of a compiled vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Catalog {
    pub version: u32,
    pub items: Vec<VocabularyItem>,
}
