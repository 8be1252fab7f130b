use chrono::Datelike;
use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::{Captures, Regex};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::*;
use crate::core::query_params::QueryParams;
use crate::models::models::{HeroContent, SearchRefinements, SelectionCard};
use crate::selection_deck::selection_cards;

#[derive(RustEmbed)]
#[folder = "static"]
struct Assets;

const CATALOG_TEMPLATE: &str = "catalog.html";

pub fn hero_content(config: &CatalogConfig) -> HeroContent {
    HeroContent {
        heading: "Explore the catalog".to_string(),
        subheading: "Find courses, programs and executive education for your learners.".to_string(),
        cta_label: "Want to learn more?".to_string(),
        cta_url: config.hubspot_marketing_url.clone(),
    }
}

pub fn search_refinements(params: &QueryParams) -> SearchRefinements {
    SearchRefinements {
        query: params.get(PARAM_QUERY).map(str::to_string),
        catalog_titles: params.get_all(PARAM_QUERY_TITLES).to_vec(),
        learning_types: params.get_all(PARAM_LEARNING_TYPE).to_vec(),
        availability: params.get_all(PARAM_AVAILABILITY).to_vec(),
    }
}

/// Render the catalog page served at `page_path` for an already-normalized query.
pub fn render_catalog_page(
    config: &CatalogConfig,
    page_path: &str,
    params: &QueryParams,
) -> anyhow::Result<String> {
    let template = Assets::get(CATALOG_TEMPLATE)
        .ok_or_else(|| anyhow::anyhow!("Catalog template not found"))?
        .data
        .to_vec();
    let template = String::from_utf8(template)?;

    let hero = hero_content(config);
    let refinements = search_refinements(params);
    let cards = selection_cards(config, page_path, params);

    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("hero_heading", encode_text(&hero.heading).to_string());
    vars.insert("hero_subheading", encode_text(&hero.subheading).to_string());
    vars.insert("hero_cta_label", encode_text(&hero.cta_label).to_string());
    vars.insert("hero_cta_url", encode_double_quoted_attribute(&hero.cta_url).to_string());
    vars.insert("page_path", encode_double_quoted_attribute(page_path).to_string());
    vars.insert("selection_deck", render_selection_deck(&cards));
    vars.insert(
        "search_state",
        encode_double_quoted_attribute(&serde_json::to_string(&refinements)?).to_string(),
    );
    vars.insert("search_hidden_fields", render_hidden_fields(params));
    vars.insert(
        "search_query",
        encode_double_quoted_attribute(refinements.query.as_deref().unwrap_or_default()).to_string(),
    );
    vars.insert("search_refinements", render_refinements(&refinements));
    vars.insert("footer_year", chrono::Utc::now().year().to_string());

    Ok(fill(&template, &vars))
}

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").expect("Regex should compile"))
}

// Single pass, so substituted values are never re-scanned for placeholders.
fn fill(template: &str, vars: &HashMap<&str, String>) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            vars.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

fn render_selection_deck(cards: &[SelectionCard]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                r#"<a class="selection-card{}" data-card="{}" href="{}">
        <h2 class="selection-card-label">{}</h2>
        <p class="selection-card-title">{}</p>
        <p class="selection-card-description">{}</p>
      </a>"#,
                if card.selected { " selected" } else { "" },
                encode_double_quoted_attribute(&card.key),
                encode_double_quoted_attribute(&card.href),
                encode_text(&card.label),
                encode_text(&card.title),
                encode_text(&card.description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

fn render_hidden_fields(params: &QueryParams) -> String {
    [PARAM_QUERY_TITLES, PARAM_LEARNING_TYPE, PARAM_AVAILABILITY]
        .iter()
        .flat_map(|key| {
            params.get_all(key).iter().map(move |value| {
                format!(
                    r#"<input type="hidden" name="{}" value="{}">"#,
                    key,
                    encode_double_quoted_attribute(value)
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn render_refinements(refinements: &SearchRefinements) -> String {
    refinements
        .catalog_titles
        .iter()
        .chain(&refinements.learning_types)
        .chain(&refinements.availability)
        .map(|value| format!(r#"<li class="catalog-refinement">{}</li>"#, encode_text(value)))
        .collect::<Vec<_>>()
        .join("\n        ")
}
