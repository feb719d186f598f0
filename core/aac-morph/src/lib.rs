#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

use alloc::string::String;
use alloc::vec::Vec;

use aac_protocol::{ArticlePolicy, Object, Qualifier, Subject, Verb};

/// Whether `word` starts with a vowel sound.
///
/// First-letter check only: `a e i o u` in either case. "one" and
/// "university" come out as vowels, "hour" as a consonant.
pub fn starts_with_vowel_sound(word: &str) -> bool {
    word.chars()
        .next()
        .map_or(false, |c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

/// Picks the verb form that agrees with `subject`.
///
/// Only a 3rd person singular subject selects `third_person_singular`.
/// Every other person/number, and no subject at all, keeps `base_form`.
pub fn conjugate<'a>(subject: Option<&Subject>, verb: &'a Verb) -> &'a str {
    match subject {
        Some(s) if s.is_third_singular() => &verb.third_person_singular,
        _ => &verb.base_form,
    }
}

/// The article `policy` asks for in front of `first_word`, if any.
pub fn article_for(policy: ArticlePolicy, first_word: &str) -> Option<&'static str> {
    match policy {
        ArticlePolicy::Definite => Some("the"),
        ArticlePolicy::AutoIndefinite if starts_with_vowel_sound(first_word) => Some("an"),
        ArticlePolicy::AutoIndefinite => Some("a"),
        ArticlePolicy::None => None,
    }
}

/// Builds `[article] qualifier... noun` for an object.
///
/// The first content word decides "a" vs "an", so a leading qualifier wins
/// over the noun: "an orange ball", "a big apple". The noun is always its
/// label; `plural_form` is not consulted. Blank labels contribute nothing.
pub fn resolve_noun_phrase(object: &Object, qualifiers: &[&Qualifier]) -> String {
    // 1. Content words in selection order, noun last
    let content: Vec<&str> = qualifiers
        .iter()
        .map(|q| q.meta.label.as_str())
        .chain(core::iter::once(object.meta.label.as_str()))
        .filter(|word| !word.is_empty())
        .collect();

    let Some(first) = content.first() else {
        return String::new();
    };

    // 2. Sound-determining word is the first content word
    let mut words: Vec<&str> = Vec::with_capacity(content.len() + 1);
    if let Some(article) = article_for(object.article_policy, first) {
        words.push(article);
    }

    // 3. Join
    words.extend(content);
    words.join(" ")
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aac_protocol::{ItemMeta, NounType, Number, Person};
    use alloc::format;
    use alloc::string::ToString;
    use proptest::prelude::*;

    fn subject(person: Person, number: Number) -> Subject {
        Subject { meta: ItemMeta::new("s", "someone", 1), person, number }
    }

    fn like() -> Verb {
        Verb {
            meta: ItemMeta::new("v_like", "like", 1),
            base_form: "like".to_string(),
            third_person_singular: "likes".to_string(),
        }
    }

    fn object(label: &str, policy: ArticlePolicy) -> Object {
        Object {
            meta: ItemMeta::new(format!("o_{}", label), label, 1),
            noun_type: NounType::Countable,
            default_number: Number::Singular,
            article_policy: policy,
            plural_form: None,
        }
    }

    fn qualifier(label: &str) -> Qualifier {
        Qualifier { meta: ItemMeta::new(format!("q_{}", label), label, 1) }
    }

    #[test]
    fn test_vowel_sound_first_letter() {
        assert!(starts_with_vowel_sound("apple"));
        assert!(starts_with_vowel_sound("Orange"));
        assert!(starts_with_vowel_sound("ice cream"));
        assert!(!starts_with_vowel_sound("ball"));
        assert!(!starts_with_vowel_sound(""));

        // Naive on purpose
        assert!(starts_with_vowel_sound("one"));
        assert!(starts_with_vowel_sound("university"));
        assert!(!starts_with_vowel_sound("hour"));
    }

    #[test]
    fn test_conjugation_table() {
        let verb = like();
        assert_eq!(conjugate(Some(&subject(Person::Third, Number::Singular)), &verb), "likes");

        for (person, number) in [
            (Person::First, Number::Singular),
            (Person::Second, Number::Singular),
            (Person::First, Number::Plural),
            (Person::Second, Number::Plural),
            (Person::Third, Number::Plural),
        ] {
            assert_eq!(conjugate(Some(&subject(person, number)), &verb), "like");
        }

        assert_eq!(conjugate(None, &verb), "like");
    }

    #[test]
    fn test_indefinite_article_from_noun() {
        assert_eq!(resolve_noun_phrase(&object("ball", ArticlePolicy::AutoIndefinite), &[]), "a ball");
        assert_eq!(resolve_noun_phrase(&object("apple", ArticlePolicy::AutoIndefinite), &[]), "an apple");
    }

    #[test]
    fn test_qualifier_decides_article() {
        let orange = qualifier("orange");
        let big = qualifier("big");

        let ball = object("ball", ArticlePolicy::AutoIndefinite);
        assert_eq!(resolve_noun_phrase(&ball, &[&orange]), "an orange ball");
        assert_eq!(resolve_noun_phrase(&ball, &[&big, &orange]), "a big orange ball");

        let apple = object("apple", ArticlePolicy::AutoIndefinite);
        assert_eq!(resolve_noun_phrase(&apple, &[&big]), "a big apple");
    }

    #[test]
    fn test_definite_and_bare_policies() {
        let big = qualifier("big");
        assert_eq!(resolve_noun_phrase(&object("playground", ArticlePolicy::Definite), &[]), "the playground");
        assert_eq!(resolve_noun_phrase(&object("apple", ArticlePolicy::Definite), &[&big]), "the big apple");
        assert_eq!(resolve_noun_phrase(&object("music", ArticlePolicy::None), &[]), "music");
        assert_eq!(resolve_noun_phrase(&object("toys", ArticlePolicy::None), &[&big]), "big toys");
    }

    #[test]
    fn test_blank_labels_skipped() {
        let blank = qualifier("");
        let big = qualifier("big");
        let ball = object("ball", ArticlePolicy::AutoIndefinite);
        assert_eq!(resolve_noun_phrase(&ball, &[&blank, &big]), "a big ball");

        let nameless = object("", ArticlePolicy::AutoIndefinite);
        assert_eq!(resolve_noun_phrase(&nameless, &[&big]), "a big");
        assert_eq!(resolve_noun_phrase(&nameless, &[]), "");
    }

    #[test]
    fn test_plural_form_ignored() {
        let mut ball = object("ball", ArticlePolicy::AutoIndefinite);
        ball.plural_form = Some("balls".to_string());
        assert_eq!(resolve_noun_phrase(&ball, &[]), "a ball");
    }

    #[test]
    fn test_capitalize_first_only() {
        assert_eq!(capitalize_first("my Dad likes a pizza"), "My Dad likes a pizza");
        assert_eq!(capitalize_first("I"), "I");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ßig"), "SSig");
    }

    proptest! {
        #[test]
        fn test_definite_always_the(label in "[a-zA-Z]{1,12}", quals in proptest::collection::vec("[a-z]{1,8}", 0..3)) {
            let obj = object(&label, ArticlePolicy::Definite);
            let quals: Vec<Qualifier> = quals.iter().map(|q| qualifier(q)).collect();
            let refs: Vec<&Qualifier> = quals.iter().collect();

            let phrase = resolve_noun_phrase(&obj, &refs);
            prop_assert!(phrase.starts_with("the "));
            prop_assert!(phrase.ends_with(label.as_str()));
        }

        #[test]
        fn test_none_never_adds_article(label in "[a-zA-Z]{1,12}", quals in proptest::collection::vec("[a-z]{1,8}", 0..3)) {
            let obj = object(&label, ArticlePolicy::None);
            let quals: Vec<Qualifier> = quals.iter().map(|q| qualifier(q)).collect();
            let refs: Vec<&Qualifier> = quals.iter().collect();

            let mut expected: Vec<&str> = refs.iter().map(|q| q.meta.label.as_str()).collect();
            expected.push(&label);
            prop_assert_eq!(resolve_noun_phrase(&obj, &refs), expected.join(" "));
        }

        #[test]
        fn test_indefinite_follows_first_word(first in "[a-zA-Z][a-z]{0,8}", label in "[a-z]{1,8}") {
            let obj = object(&label, ArticlePolicy::AutoIndefinite);
            let q = qualifier(&first);
            let phrase = resolve_noun_phrase(&obj, &[&q]);

            let expected = if starts_with_vowel_sound(&first) { "an " } else { "a " };
            prop_assert!(phrase.starts_with(expected));
        }

        #[test]
        fn test_capitalize_keeps_tail(text in "[a-z][a-zA-Z ]{0,30}") {
            let out = capitalize_first(&text);
            prop_assert_eq!(&out[1..], &text[1..]);
            prop_assert!(out.chars().next().map_or(false, |c| c.is_ascii_uppercase()));
        }
    }
}
