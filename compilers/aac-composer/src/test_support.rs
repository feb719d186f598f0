use aac_protocol::{
    ArticlePolicy, Catalog, ItemMeta, NounType, Number, Object, Qualifier, VocabularyItem,
};

/// Clones catalog items by id, in the given order.
pub fn pick(catalog: &Catalog, ids: &[&str]) -> Vec<VocabularyItem> {
    ids.iter()
        .map(|id| {
            catalog
                .items
                .iter()
                .find(|item| item.id().as_str() == *id)
                .cloned()
                .unwrap_or_else(|| panic!("Item not found: {}", id))
        })
        .collect()
}

pub fn qualifier(label: &str) -> VocabularyItem {
    Qualifier { meta: ItemMeta::new(format!("q_{}", label), label, 1) }.into()
}

pub fn object(label: &str, policy: ArticlePolicy) -> VocabularyItem {
    Object {
        meta: ItemMeta::new(format!("o_{}", label), label, 1),
        noun_type: NounType::Countable,
        default_number: Number::Singular,
        article_policy: policy,
        plural_form: None,
    }
    .into()
}
