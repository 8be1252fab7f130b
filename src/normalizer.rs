use crate::config::{
    CatalogConfig, ExecEdPolicy, FeatureFlags, DEFAULT_AVAILABILITY, LEARNING_TYPE_EXEC_ED,
    PARAM_AVAILABILITY, PARAM_LEARNING_TYPE, PARAM_QUERY_TITLES,
};
use crate::core::query_params::{KeyOrder, QueryParams};

/// Normalize a catalog search string, e.g. `?q=` or `?learning_type=...`.
///
/// Returns the corrected query string without the leading `?`. The result is
/// stable: feeding it back in returns it unchanged.
pub fn normalize(search: &str, flags: &FeatureFlags, config: &CatalogConfig) -> String {
    normalize_with_order(search, flags, config, KeyOrder::Insertion)
}

pub fn normalize_with_order(
    search: &str,
    flags: &FeatureFlags,
    config: &CatalogConfig,
    order: KeyOrder,
) -> String {
    normalize_params(QueryParams::parse(search), flags, config).to_query_string(order)
}

pub fn normalize_params(
    mut params: QueryParams,
    flags: &FeatureFlags,
    config: &CatalogConfig,
) -> QueryParams {
    apply_default_catalog(&mut params, config);
    apply_exec_ed_rule(&mut params, flags, config);
    params
}

fn apply_default_catalog(params: &mut QueryParams, config: &CatalogConfig) {
    if params.contains(PARAM_QUERY_TITLES) {
        return;
    }
    params.set(
        PARAM_QUERY_TITLES,
        [config.edx_enterprise_alacarte_title.as_str()],
    );
    if !params.contains(PARAM_AVAILABILITY) {
        params.set(PARAM_AVAILABILITY, DEFAULT_AVAILABILITY);
    }
}

fn apply_exec_ed_rule(params: &mut QueryParams, flags: &FeatureFlags, config: &CatalogConfig) {
    if !params.contains_value(PARAM_LEARNING_TYPE, LEARNING_TYPE_EXEC_ED) {
        return;
    }
    if !exec_ed_allowed(params, flags, config) {
        params.remove_value(PARAM_LEARNING_TYPE, LEARNING_TYPE_EXEC_ED);
    }
}

fn exec_ed_allowed(params: &QueryParams, flags: &FeatureFlags, config: &CatalogConfig) -> bool {
    if !flags.exec_ed_inclusion {
        return false;
    }
    match flags.exec_ed_policy {
        ExecEdPolicy::AnyCatalog => true,
        ExecEdPolicy::AlaCarteOnly => params
            .get_all(PARAM_QUERY_TITLES)
            .iter()
            .all(|title| *title == config.edx_enterprise_alacarte_title),
    }
}
