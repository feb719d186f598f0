use aac_protocol::{ClauseParts, Object, Phrase, Qualifier, Subject, Verb, VocabularyItem};

/// A selection sorted into grammatical slots.
///
/// Singular slots hold the first matching item in tap order; later ones are
/// dropped. Qualifiers and phrases keep every item, in tap order.
#[derive(Debug, Clone, Default)]
pub struct Clause<'a> {
    pub subject: Option<&'a Subject>,
    pub verb: Option<&'a Verb>,
    pub object: Option<&'a Object>,
    pub qualifiers: Vec<&'a Qualifier>,
    pub phrases: Vec<&'a Phrase>,
}

impl<'a> Clause<'a> {
    pub fn classify(items: &'a [VocabularyItem]) -> Self {
        let mut clause = Clause::default();

        for item in items {
            match item {
                VocabularyItem::Subject(s) => {
                    clause.subject.get_or_insert(s);
                }
                VocabularyItem::Verb(v) => {
                    clause.verb.get_or_insert(v);
                }
                VocabularyItem::Object(o) => {
                    clause.object.get_or_insert(o);
                }
                VocabularyItem::Qualifier(q) => clause.qualifiers.push(q),
                VocabularyItem::Phrase(p) => clause.phrases.push(p),
            }
        }

        clause
    }

    pub fn parts(&self) -> ClauseParts {
        let mut parts = ClauseParts::empty();
        parts.set(ClauseParts::SUBJECT, self.subject.is_some());
        parts.set(ClauseParts::VERB, self.verb.is_some());
        parts.set(ClauseParts::OBJECT, self.object.is_some());
        parts.set(ClauseParts::QUALIFIER, !self.qualifiers.is_empty());
        parts.set(ClauseParts::PHRASE, !self.phrases.is_empty());
        parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts().is_empty()
    }
}
