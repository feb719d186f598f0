use aac_protocol::{
    ArticlePolicy, Catalog, ItemMeta, NounType, Number, Object, Person, Phrase, Qualifier, Subject,
    Verb, VocabularyItem,
};

pub const DEFAULT_CATALOG_VERSION: u32 = 1;

fn subject(id: &str, label: &str, level: u8, person: Person, number: Number) -> VocabularyItem {
    Subject { meta: ItemMeta::new(id, label, level), person, number }.into()
}

fn verb(id: &str, base: &str, third: &str, level: u8) -> VocabularyItem {
    Verb {
        meta: ItemMeta::new(id, base, level),
        base_form: base.to_string(),
        third_person_singular: third.to_string(),
    }
    .into()
}

fn qualifier(id: &str, label: &str, level: u8) -> VocabularyItem {
    Qualifier { meta: ItemMeta::new(id, label, level) }.into()
}

fn object(
    id: &str,
    label: &str,
    level: u8,
    noun_type: NounType,
    article_policy: ArticlePolicy,
    plural_form: Option<&str>,
) -> VocabularyItem {
    let default_number = match noun_type {
        NounType::SetPlural => Number::Plural,
        _ => Number::Singular,
    };
    Object {
        meta: ItemMeta::new(id, label, level),
        noun_type,
        default_number,
        article_policy,
        plural_form: plural_form.map(str::to_string),
    }
    .into()
}

fn phrase(id: &str, label: &str) -> VocabularyItem {
    Phrase { meta: ItemMeta::new(id, label, 1) }.into()
}

/// The built-in English board.
pub fn default_catalog() -> Catalog {
    use ArticlePolicy::{AutoIndefinite, Definite, None as Bare};
    use NounType::{Countable, Mass, Proper, SetPlural};
    use Number::{Plural as Pl, Singular as Sg};
    use Person::{First, Second, Third};

    let items = vec![
        // --- Subjects ---
        subject("s_i", "I", 1, First, Sg),
        subject("s_you", "You", 1, Second, Sg),
        subject("s_we", "We", 1, First, Pl),
        subject("s_mom", "My Mom", 1, Third, Sg),
        subject("s_dad", "My Dad", 1, Third, Sg),
        subject("s_friend", "My Friend", 1, Third, Sg),
        subject("s_teacher", "My Teacher", 1, Third, Sg),
        subject("s_dog", "My Dog", 1, Third, Sg),
        subject("s_brother", "My Brother", 2, Third, Sg),
        subject("s_sister", "My Sister", 2, Third, Sg),
        subject("s_class", "My Class", 2, Third, Pl),
        subject("s_baby", "My Baby", 2, Third, Sg),
        // --- Verbs ---
        verb("v_like", "like", "likes", 1),
        verb("v_dontlike", "don't like", "doesn't like", 1),
        verb("v_want", "want", "wants", 1),
        verb("v_love", "love", "loves", 1),
        verb("v_need", "need", "needs", 1),
        verb("v_have", "have", "has", 1),
        verb("v_see", "see", "sees", 1),
        verb("v_hear", "hear", "hears", 1),
        verb("v_eat", "eat", "eats", 2),
        verb("v_play", "play", "plays", 2),
        verb("v_go", "go", "goes", 2),
        verb("v_make", "make", "makes", 2),
        // --- Qualifiers ---
        qualifier("q_big", "big", 1),
        qualifier("q_small", "small", 1),
        qualifier("q_red", "red", 1),
        qualifier("q_blue", "blue", 1),
        qualifier("q_loud", "loud", 1),
        qualifier("q_quiet", "quiet", 1),
        qualifier("q_happy", "happy", 1),
        qualifier("q_sad", "sad", 1),
        qualifier("q_fast", "fast", 2),
        qualifier("q_slow", "slow", 2),
        qualifier("q_soft", "soft", 2),
        qualifier("q_tasty", "tasty", 2),
        // --- Objects ---
        object("o_ball", "ball", 1, Countable, AutoIndefinite, Some("balls")),
        object("o_book", "book", 1, Countable, AutoIndefinite, Some("books")),
        object("o_dog", "dog", 1, Countable, AutoIndefinite, Some("dogs")),
        object("o_toys", "toys", 1, SetPlural, Bare, None),
        object("o_music", "music", 1, Mass, Bare, None),
        object("o_pizza", "pizza", 1, Countable, AutoIndefinite, Some("pizzas")),
        object("o_playground", "playground", 1, Proper, Definite, None),
        object("o_school", "school", 1, Proper, Bare, None),
        object("o_games", "games", 2, SetPlural, Bare, None),
        object("o_icecream", "ice cream", 2, Mass, Bare, None),
        object("o_tablet", "tablet", 2, Countable, AutoIndefinite, Some("tablets")),
        object("o_cars", "cars", 2, SetPlural, Bare, None),
        // --- Phrases ---
        phrase("p_help", "I need help"),
        phrase("p_yes", "yes"),
        phrase("p_no", "no"),
        phrase("p_thank_you", "thank you"),
        phrase("p_more", "more please"),
        phrase("p_stop", "stop"),
        phrase("p_bathroom", "I need the bathroom"),
    ];

    Catalog { version: DEFAULT_CATALOG_VERSION, items }
}
