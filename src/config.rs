use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

// === Query parameter names ===
pub const PARAM_QUERY: &str = "q";
pub const PARAM_QUERY_TITLES: &str = "enterprise_catalog_query_titles";
pub const PARAM_AVAILABILITY: &str = "availability";
pub const PARAM_LEARNING_TYPE: &str = "learning_type";

pub const LEARNING_TYPE_EXEC_ED: &str = "executive-education-2u";

pub const DEFAULT_AVAILABILITY: [&str; 3] = ["Available Now", "Starting Soon", "Upcoming"];

// === Defaults ===
const DEFAULT_HUBSPOT_MARKETING_URL: &str = "https://business.edx.org";
const DEFAULT_EDX_FOR_BUSINESS_TITLE: &str = "edX for Business";
const DEFAULT_EDX_FOR_ONLINE_EDU_TITLE: &str = "edX Online Campus";
const DEFAULT_EDX_ENTERPRISE_ALACARTE_TITLE: &str = "A la carte";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:80";

/// Static business configuration shared by the page and the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogConfig {
    pub hubspot_marketing_url: String,
    pub edx_for_business_title: String,
    pub edx_for_online_edu_title: String,
    pub edx_enterprise_alacarte_title: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            hubspot_marketing_url: DEFAULT_HUBSPOT_MARKETING_URL.to_string(),
            edx_for_business_title: DEFAULT_EDX_FOR_BUSINESS_TITLE.to_string(),
            edx_for_online_edu_title: DEFAULT_EDX_FOR_ONLINE_EDU_TITLE.to_string(),
            edx_enterprise_alacarte_title: DEFAULT_EDX_ENTERPRISE_ALACARTE_TITLE.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            hubspot_marketing_url: marketing_url(env_string("HUBSPOT_MARKETING_URL")),
            edx_for_business_title: env_string("EDX_FOR_BUSINESS_TITLE")
                .unwrap_or_else(|| DEFAULT_EDX_FOR_BUSINESS_TITLE.to_string()),
            edx_for_online_edu_title: env_string("EDX_FOR_ONLINE_EDU_TITLE")
                .unwrap_or_else(|| DEFAULT_EDX_FOR_ONLINE_EDU_TITLE.to_string()),
            edx_enterprise_alacarte_title: env_string("EDX_ENTERPRISE_ALACARTE_TITLE")
                .unwrap_or_else(|| DEFAULT_EDX_ENTERPRISE_ALACARTE_TITLE.to_string()),
        }
    }
}

/// Decides whether the exec-ed learning type survives when inclusion is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecEdPolicy {
    /// Exec-ed is only offered inside the a-la-carte catalog.
    #[default]
    AlaCarteOnly,
    AnyCatalog,
}

impl ExecEdPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ala-carte-only" | "alacarte-only" => Some(Self::AlaCarteOnly),
            "any-catalog" | "any" => Some(Self::AnyCatalog),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FeatureFlags {
    pub exec_ed_inclusion: bool,
    pub exec_ed_policy: ExecEdPolicy,
}

impl FeatureFlags {
    pub fn from_env() -> Self {
        Self {
            exec_ed_inclusion: env_string("EXEC_ED_INCLUSION")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            exec_ed_policy: env_string("EXEC_ED_POLICY")
                .and_then(|v| ExecEdPolicy::parse(&v))
                .unwrap_or_default(),
        }
    }
}

/// Everything a request handler needs, loaded once per component instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub flags: FeatureFlags,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            catalog: CatalogConfig::from_env(),
            flags: FeatureFlags::from_env(),
        }
    }
}

pub fn bind_addr() -> String {
    env_string("CATALOG_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}

/// Truthy values: `true`, `1`, `yes`, `on` (any case). Everything else is off.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn marketing_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://[^\s/]+").expect("Regex should compile"))
}

fn marketing_url(value: Option<String>) -> String {
    match value {
        Some(url) if marketing_url_regex().is_match(&url) => url,
        Some(url) => {
            tracing::warn!(%url, "HUBSPOT_MARKETING_URL is not an http(s) URL, using default");
            DEFAULT_HUBSPOT_MARKETING_URL.to_string()
        }
        None => DEFAULT_HUBSPOT_MARKETING_URL.to_string(),
    }
}
