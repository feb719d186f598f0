use aac_protocol::{ClauseParts, Role, VocabularyItem};

use crate::clause::Clause;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A second item for a singular slot; the renderer ignores it.
    RepeatedRole(Role),
    /// A phrase next to a subject or verb; the sentence will not get a period.
    PhraseInClause,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionIssue {
    pub kind: IssueKind,
    pub source: String, // label of the item the issue is about
    pub target: String, // label of the item it collides with
    pub details: String,
}

/// Reports what the renderer silently works around. Never changes output.
pub fn check_selection(items: &[VocabularyItem]) -> Vec<SelectionIssue> {
    let mut issues = Vec::new();

    // 1. Singular slots tapped more than once
    issues.extend(check_repeated_roles(items));

    // 2. Phrases mixed into a role-based clause
    issues.extend(check_phrase_mixing(items));

    for issue in &issues {
        tracing::warn!(kind = ?issue.kind, item = %issue.source, against = %issue.target, "{}", issue.details);
    }

    issues
}

fn check_repeated_roles(items: &[VocabularyItem]) -> Vec<SelectionIssue> {
    let mut issues = Vec::new();

    // Qualifiers stack, every other role holds one item
    for role in Role::ALL.into_iter().filter(|role| *role != Role::Qualifier) {
        let mut matching = items.iter().filter(|item| item.role() == Some(role));

        let Some(kept) = matching.next() else { continue };
        for dropped in matching {
            issues.push(SelectionIssue {
                kind: IssueKind::RepeatedRole(role),
                source: dropped.label().to_string(),
                target: kept.label().to_string(),
                details: format!("Only one {} is used: '{}' is ignored, '{}' is kept", role, dropped.label(), kept.label()),
            });
        }
    }

    issues
}

fn check_phrase_mixing(items: &[VocabularyItem]) -> Vec<SelectionIssue> {
    let clause = Clause::classify(items);
    let parts = clause.parts();

    if !parts.contains(ClauseParts::PHRASE) || !parts.intersects(ClauseParts::SUBJECT | ClauseParts::VERB) {
        return Vec::new();
    }

    // Name the clause by its head: the subject if there is one, else the verb
    let head = clause
        .subject
        .map(|s| s.meta.label.as_str())
        .or_else(|| clause.verb.map(|v| v.meta.label.as_str()))
        .unwrap_or_default();

    clause
        .phrases
        .iter()
        .map(|phrase| SelectionIssue {
            kind: IssueKind::PhraseInClause,
            source: phrase.meta.label.clone(),
            target: head.to_string(),
            details: format!("Phrase '{}' is appended to the clause starting at '{}'", phrase.meta.label, head),
        })
        .collect()
}
