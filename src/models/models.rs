use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HeroContent {
    pub heading: String,
    pub subheading: String,
    pub cta_label: String,
    pub cta_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectionCard {
    pub key: String,
    pub label: String,
    /// Catalog query title selected by this card.
    pub title: String,
    pub description: String,
    pub href: String,
    pub selected: bool,
}

/// Refinements currently applied to the search widget.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchRefinements {
    pub query: Option<String>,
    pub catalog_titles: Vec<String>,
    pub learning_types: Vec<String>,
    pub availability: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NormalizeResponse {
    pub search: String,
    pub changed: bool,
    pub params: BTreeMap<String, Vec<String>>,
}
