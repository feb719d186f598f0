use aac_morph::{capitalize_first, conjugate, resolve_noun_phrase};
use aac_protocol::VocabularyItem;

use crate::clause::Clause;

/// Text for the sentence bar plus whether it reads as finished.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub text: String,
    pub complete: bool,
}

impl Rendered {
    /// Words as a speech engine reports them, punctuation stripped.
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.text
            .split(' ')
            .map(|w| w.chars().filter(|c| !matches!(c, '.' | ',' | '!' | '?')).collect::<String>())
            .filter(|w| !w.is_empty())
    }

    /// A finished sentence is spoken without waiting for the speak button.
    pub fn should_auto_speak(&self) -> bool {
        self.text.ends_with('.')
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Renders a tapped selection into a sentence.
///
/// Order is fixed regardless of tap order: subject, verb, noun phrase (or
/// bare qualifiers when there is no object), then phrases. Only the first
/// character is upper-cased. A period is added when subject, verb and
/// object are all there, or when phrases stand without subject and verb.
pub fn render(items: &[VocabularyItem]) -> Rendered {
    let clause = Clause::classify(items);
    let mut parts: Vec<String> = Vec::new();

    // 1. Subject, verbatim
    if let Some(subject) = clause.subject {
        parts.push(subject.meta.label.clone());
    }

    // 2. Verb, agreeing with whatever subject was found
    if let Some(verb) = clause.verb {
        parts.push(conjugate(clause.subject, verb).to_string());
    }

    // 3. Noun phrase, or dangling qualifiers without articles
    if let Some(object) = clause.object {
        parts.push(resolve_noun_phrase(object, &clause.qualifiers));
    } else {
        parts.extend(clause.qualifiers.iter().map(|q| q.meta.label.clone()));
    }

    // 4. Phrases always trail the clause
    parts.extend(clause.phrases.iter().map(|p| p.meta.label.clone()));

    // Blank labels would leave stray spaces
    parts.retain(|part| !part.is_empty());
    if parts.is_empty() {
        return Rendered::default();
    }

    let mut text = capitalize_first(&parts.join(" "));
    let complete = clause.parts().is_complete();
    if complete {
        text.push('.');
    }

    tracing::debug!(parts = ?clause.parts(), complete, %text, "rendered selection");
    Rendered { text, complete }
}

/// Shorthand for `render(items).text`.
pub fn construct_sentence(items: &[VocabularyItem]) -> String {
    render(items).text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::test_support::{object, pick, qualifier};
    use aac_protocol::ArticlePolicy;
    use proptest::prelude::*;

    fn say(ids: &[&str]) -> String {
        construct_sentence(&pick(&default_catalog(), ids))
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(construct_sentence(&[]), "");
        assert_eq!(render(&[]), Rendered { text: String::new(), complete: false });
    }

    #[test]
    fn test_basic_svo() {
        assert_eq!(say(&["s_i", "v_like", "o_pizza"]), "I like a pizza.");
    }

    #[test]
    fn test_third_person_agreement() {
        assert_eq!(say(&["s_dad", "v_like", "o_pizza"]), "My Dad likes a pizza.");
        assert_eq!(say(&["s_mom", "v_dontlike", "o_music"]), "My Mom doesn't like music.");
        assert_eq!(say(&["s_class", "v_like", "o_music"]), "My Class like music.");
    }

    #[test]
    fn test_articles_from_catalog() {
        assert_eq!(say(&["s_i", "v_want", "o_dog"]), "I want a dog.");
        assert_eq!(say(&["s_we", "v_go", "o_playground"]), "We go the playground.");
        assert_eq!(say(&["s_i", "v_like", "o_music"]), "I like music.");
        assert_eq!(say(&["s_i", "v_want", "o_icecream"]), "I want ice cream.");
    }

    #[test]
    fn test_vowel_object_and_qualifier() {
        let catalog = default_catalog();
        let mut items = pick(&catalog, &["s_i", "v_want"]);
        items.push(object("apple", ArticlePolicy::AutoIndefinite));
        assert_eq!(construct_sentence(&items), "I want an apple.");

        let mut items = pick(&catalog, &["s_i", "v_want", "o_ball"]);
        items.push(qualifier("orange"));
        assert_eq!(construct_sentence(&items), "I want an orange ball.");
    }

    #[test]
    fn test_qualifier_tap_order_is_irrelevant_to_position() {
        assert_eq!(say(&["s_i", "v_want", "o_ball", "q_big"]), "I want a big ball.");
        assert_eq!(say(&["s_i", "v_have", "q_small", "o_dog"]), "I have a small dog.");
        assert_eq!(say(&["o_ball", "q_red", "v_want", "q_big", "s_i"]), "I want a red big ball.");
    }

    #[test]
    fn test_partial_selections_stay_open() {
        assert_eq!(say(&["s_i"]), "I");
        assert_eq!(say(&["s_i", "v_want"]), "I want");
        assert_eq!(say(&["v_like"]), "Like");
        assert_eq!(say(&["v_like", "o_pizza"]), "Like a pizza");
        assert_eq!(say(&["s_dad", "o_ball"]), "My Dad a ball");
    }

    #[test]
    fn test_dangling_qualifiers() {
        assert_eq!(say(&["q_big", "q_red"]), "Big red");
        assert_eq!(say(&["s_i", "v_want", "q_big"]), "I want big");
    }

    #[test]
    fn test_phrases() {
        assert_eq!(say(&["p_help"]), "I need help.");
        assert_eq!(say(&["p_yes", "p_thank_you"]), "Yes thank you.");
        assert_eq!(say(&["s_i", "p_yes"]), "I yes");
        assert_eq!(say(&["v_want", "p_more"]), "Want more please");
        assert_eq!(say(&["o_ball", "p_more"]), "A ball more please.");
        assert_eq!(say(&["p_more", "s_i", "v_want", "o_ball"]), "I want a ball more please.");
    }

    #[test]
    fn test_repeated_roles_first_wins() {
        assert_eq!(say(&["s_dad", "s_i", "v_like", "o_pizza"]), "My Dad likes a pizza.");
        assert_eq!(say(&["s_i", "s_dad", "v_like", "o_pizza"]), "I like a pizza.");
        assert_eq!(say(&["s_i", "v_like", "o_pizza", "o_dog"]), "I like a pizza.");
    }

    #[test]
    fn test_rendered_helpers() {
        let rendered = render(&pick(&default_catalog(), &["s_dad", "v_like", "o_pizza"]));
        assert!(rendered.complete);
        assert!(rendered.should_auto_speak());
        assert_eq!(rendered.words().collect::<Vec<_>>(), ["My", "Dad", "likes", "a", "pizza"]);

        let open = render(&pick(&default_catalog(), &["s_dad", "v_like"]));
        assert!(!open.complete);
        assert!(!open.should_auto_speak());
    }

    #[test]
    fn test_blank_labels_leave_no_gaps() {
        let catalog = default_catalog();
        let mut blank_subject = pick(&catalog, &["s_i"]).remove(0);
        if let VocabularyItem::Subject(s) = &mut blank_subject {
            s.meta.label.clear();
        }

        let mut items = vec![blank_subject];
        items.extend(pick(&catalog, &["v_like", "o_pizza"]));
        let rendered = render(&items);
        assert_eq!(rendered.text, "Like a pizza.");
        assert!(rendered.complete);

        let items = vec![qualifier("big"), qualifier(""), qualifier("red")];
        assert_eq!(construct_sentence(&items), "Big red");
        assert_eq!(render(&[qualifier("")]), Rendered::default());
    }

    proptest! {
        #[test]
        fn test_only_first_char_changes(label in "[a-z][a-zA-Z]{0,10}") {
            let items = vec![qualifier(&label)];
            let text = construct_sentence(&items);
            prop_assert_eq!(&text[1..], &label[1..]);
            prop_assert_eq!(text.chars().next(), label.chars().next().map(|c| c.to_ascii_uppercase()));
        }

        #[test]
        fn test_no_surrounding_whitespace(picks in proptest::sample::subsequence(
            vec!["s_i", "s_dad", "v_like", "v_go", "q_big", "q_red", "o_ball", "o_playground", "p_yes"], 0..9)) {
            let text = say(&picks);
            prop_assert_eq!(text.trim(), text.as_str());
            prop_assert!(!text.contains("  "));
        }
    }
}
