use crate::config::{CatalogConfig, PARAM_QUERY_TITLES};
use crate::core::query_params::QueryParams;
use crate::models::models::SelectionCard;

struct CardSpec {
    key: &'static str,
    label: &'static str,
    description: &'static str,
}

const BUSINESS: CardSpec = CardSpec {
    key: "edx-for-business",
    label: "Business",
    description: "Subscription access to a curated collection of courses for teams.",
};

const ONLINE_EDU: CardSpec = CardSpec {
    key: "edx-online-education",
    label: "Education",
    description: "Courses licensed to universities and online campuses.",
};

const ALACARTE: CardSpec = CardSpec {
    key: "a-la-carte",
    label: "A la carte",
    description: "Pick individual courses, programs and executive education.",
};

/// The three catalog cards, in display order. Each card links back to
/// `page_path` with its title selected; the rest of the current query is kept.
pub fn selection_cards(
    config: &CatalogConfig,
    page_path: &str,
    current: &QueryParams,
) -> Vec<SelectionCard> {
    [
        (BUSINESS, &config.edx_for_business_title),
        (ONLINE_EDU, &config.edx_for_online_edu_title),
        (ALACARTE, &config.edx_enterprise_alacarte_title),
    ]
    .into_iter()
    .map(|(spec, title)| card(spec, title, page_path, current))
    .collect()
}

fn card(spec: CardSpec, title: &str, page_path: &str, current: &QueryParams) -> SelectionCard {
    let mut params = current.clone();
    params.set(PARAM_QUERY_TITLES, [title]);

    SelectionCard {
        key: spec.key.to_string(),
        label: spec.label.to_string(),
        title: title.to_string(),
        description: spec.description.to_string(),
        href: format!("{}?{}", page_path, params),
        selected: current.get_all(PARAM_QUERY_TITLES) == [title],
    }
}
