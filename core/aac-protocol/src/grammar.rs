use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::String;
use bitflags::bitflags;
use core::fmt;
use core::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    First = 1,
    #[cfg_attr(feature = "serde", serde(rename = "2"))]
    Second = 2,
    #[cfg_attr(feature = "serde", serde(rename = "3"))]
    Third = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Number {
    #[cfg_attr(feature = "serde", serde(rename = "sg"))]
    Singular = 0,
    #[cfg_attr(feature = "serde", serde(rename = "pl"))]
    Plural = 1,
}

/// Informational noun class. Grammar only branches on `ArticlePolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum NounType {
    Countable = 0,
    Mass = 1,
    Proper = 2,
    SetPlural = 3,
}

/// Which article, if any, precedes an object's noun phrase.
///
/// Decoding is lenient: a policy string that is not one of the three known
/// tags decodes as `None` (no article), and so does a missing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(from = "alloc::string::String", into = "&'static str"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum ArticlePolicy {
    /// "a" or "an", picked from the first content word.
    AutoIndefinite = 0,
    /// Always "the".
    Definite = 1,
    #[default]
    None = 2,
}

impl ArticlePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ArticlePolicy::AutoIndefinite => "auto_indefinite",
            ArticlePolicy::Definite => "definite",
            ArticlePolicy::None => "none",
        }
    }
}

impl From<&str> for ArticlePolicy {
    fn from(tag: &str) -> Self {
        match tag {
            "auto_indefinite" => ArticlePolicy::AutoIndefinite,
            "definite" => ArticlePolicy::Definite,
            _ => ArticlePolicy::None,
        }
    }
}

impl From<String> for ArticlePolicy {
    fn from(tag: String) -> Self {
        ArticlePolicy::from(tag.as_str())
    }
}

impl From<ArticlePolicy> for &'static str {
    fn from(policy: ArticlePolicy) -> &'static str {
        policy.as_str()
    }
}

/// A grammatical slot on the board. Phrases bypass roles entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Role {
    Subject = 0,
    Verb = 1,
    Qualifier = 2,
    Object = 3,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Subject, Role::Verb, Role::Qualifier, Role::Object];

    /// Auto-advance order. Object is terminal.
    pub fn next(self) -> Role {
        match self {
            Role::Subject => Role::Verb,
            Role::Verb => Role::Qualifier,
            Role::Qualifier | Role::Object => Role::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        ItemKind::from(self).as_str()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` discriminant of a vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum ItemKind {
    Subject = 0,
    Verb = 1,
    Qualifier = 2,
    Object = 3,
    Phrase = 4,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Subject => "subject",
            ItemKind::Verb => "verb",
            ItemKind::Qualifier => "qualifier",
            ItemKind::Object => "object",
            ItemKind::Phrase => "phrase",
        }
    }

    pub fn role(self) -> Option<Role> {
        match self {
            ItemKind::Subject => Some(Role::Subject),
            ItemKind::Verb => Some(Role::Verb),
            ItemKind::Qualifier => Some(Role::Qualifier),
            ItemKind::Object => Some(Role::Object),
            ItemKind::Phrase => None,
        }
    }
}

impl From<Role> for ItemKind {
    fn from(role: Role) -> Self {
        match role {
            Role::Subject => ItemKind::Subject,
            Role::Verb => ItemKind::Verb,
            Role::Qualifier => ItemKind::Qualifier,
            Role::Object => ItemKind::Object,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown item kind: {:?}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseKindError {}

impl FromStr for ItemKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subject" => Ok(ItemKind::Subject),
            "verb" => Ok(ItemKind::Verb),
            "qualifier" => Ok(ItemKind::Qualifier),
            "object" => Ok(ItemKind::Object),
            "phrase" => Ok(ItemKind::Phrase),
            other => Err(ParseKindError(String::from(other))),
        }
    }
}

bitflags! {
    /// Which parts a classified selection contains.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct ClauseParts: u8 {
        const SUBJECT = 1;
        const VERB = 2;
        const QUALIFIER = 4;
        const OBJECT = 8;
        const PHRASE = 16;

        const CORE = Self::SUBJECT.bits() | Self::VERB.bits() | Self::OBJECT.bits();
    }
}

impl ClauseParts {
    /// Whether the rendered sentence earns a trailing period.
    ///
    /// Either subject, verb and object are all present, or there is at least
    /// one phrase and neither a subject nor a verb. Nothing else counts, not
    /// even subject + verb with an intransitive reading.
    pub fn is_complete(self) -> bool {
        self.contains(ClauseParts::CORE)
            || (self.contains(ClauseParts::PHRASE)
                && !self.intersects(ClauseParts::SUBJECT | ClauseParts::VERB))
    }
}

impl From<ItemKind> for ClauseParts {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Subject => ClauseParts::SUBJECT,
            ItemKind::Verb => ClauseParts::VERB,
            ItemKind::Qualifier => ClauseParts::QUALIFIER,
            ItemKind::Object => ClauseParts::OBJECT,
            ItemKind::Phrase => ClauseParts::PHRASE,
        }
    }
}
