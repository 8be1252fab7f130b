use catalog::config::{CatalogConfig, ExecEdPolicy, FeatureFlags, Settings};
use spin_sdk::http::{Method, Request, Response};

const DEFAULT_QUERY: &str = "enterprise_catalog_query_titles=baz&availability=Available+Now&availability=Starting+Soon&availability=Upcoming";

fn settings(exec_ed_inclusion: bool) -> Settings {
    Settings {
        catalog: CatalogConfig {
            hubspot_marketing_url: "http://bobsdooremporium.com".to_string(),
            edx_for_business_title: "ayylmao".to_string(),
            edx_for_online_edu_title: "foo".to_string(),
            edx_enterprise_alacarte_title: "baz".to_string(),
        },
        flags: FeatureFlags {
            exec_ed_inclusion,
            exec_ed_policy: ExecEdPolicy::AlaCarteOnly,
        },
    }
}

fn get(uri: &str, settings: &Settings) -> Response {
    let req = Request::builder()
        .method(Method::Get)
        .uri(uri)
        .body(Vec::new())
        .build();
    catalog::route(&req, settings)
}

fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .and_then(|(_, v)| v.as_str().map(str::to_string))
}

fn body_text(resp: &Response) -> String {
    String::from_utf8_lossy(resp.body()).into_owned()
}

#[test]
fn test_empty_query_redirects_to_default_catalog() {
    let resp = get("/?q=", &settings(false));

    assert_eq!(*resp.status(), 302);
    assert_eq!(header(&resp, "location").unwrap(), format!("/?{}", DEFAULT_QUERY));
}

#[test]
fn test_exec_ed_stripped_when_flag_disabled() {
    let resp = get("/?learning_type=executive-education-2u", &settings(false));

    assert_eq!(*resp.status(), 302);
    assert_eq!(header(&resp, "location").unwrap(), format!("/?{}", DEFAULT_QUERY));
}

#[test]
fn test_exec_ed_stripped_outside_ala_carte() {
    let resp = get(
        "/catalog?learning_type=executive-education-2u&learning_type=ayylmao&enterprise_catalog_query_titles=foobar",
        &settings(true),
    );

    assert_eq!(*resp.status(), 302);
    assert_eq!(
        header(&resp, "location").unwrap(),
        "/catalog?enterprise_catalog_query_titles=foobar&learning_type=ayylmao"
    );
}

#[test]
fn test_normalized_query_renders_page() {
    let resp = get(&format!("/?{}", DEFAULT_QUERY), &settings(false));

    assert_eq!(*resp.status(), 200);
    assert!(header(&resp, "content-type").unwrap().starts_with("text/html"));

    let html = body_text(&resp);
    assert!(html.contains(r#"class="hero""#), "hero section missing");
    assert!(html.contains(r#"class="catalog-search""#), "search widget missing");
    assert!(html.contains("Business"), "business selection card missing");
    assert!(html.contains(r#"href="http://bobsdooremporium.com""#));
    assert!(html.contains(r#"class="selection-card selected" data-card="a-la-carte""#));
}

#[test]
fn test_catalog_route_links_back_to_itself() {
    let resp = get(&format!("/catalog?{}", DEFAULT_QUERY), &settings(false));
    assert_eq!(*resp.status(), 200);

    let html = body_text(&resp);
    assert!(html.contains(r#"action="/catalog""#));
    assert!(html.contains(r#"href="/catalog?availability=Available+Now"#));
    assert!(!html.contains(r#"href="/?"#));
}

#[test]
fn test_redirect_target_is_stable() {
    let settings = settings(true);
    let first = get("/?learning_type=executive-education-2u&q=leadership", &settings);
    assert_eq!(*first.status(), 302);

    let location = header(&first, "location").unwrap();
    let second = get(&location, &settings);
    assert_eq!(*second.status(), 200, "second hop should render, got redirect to {:?}", header(&second, "location"));
}

#[test]
fn test_normalize_endpoint_reports_changes() {
    let resp = get("/api/catalog/normalize?q=", &settings(false));
    assert_eq!(*resp.status(), 200);

    let json: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(json["search"], DEFAULT_QUERY);
    assert_eq!(json["changed"], true);
    assert_eq!(
        json["params"]["availability"],
        serde_json::json!(["Available Now", "Starting Soon", "Upcoming"])
    );

    let resp = get(&format!("/api/catalog/normalize?{}", DEFAULT_QUERY), &settings(false));
    let json: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(json["changed"], false);
}

#[test]
fn test_static_assets_and_unknown_routes() {
    let css = get("/static/catalog.css", &settings(false));
    assert_eq!(*css.status(), 200);
    assert_eq!(header(&css, "content-type").unwrap(), "text/css");

    let template = get("/static/catalog.html", &settings(false));
    assert_eq!(*template.status(), 404);

    let missing = get("/nope", &settings(false));
    assert_eq!(*missing.status(), 404);
    let json: serde_json::Value = serde_json::from_slice(missing.body()).unwrap();
    assert_eq!(json["error"], "No route found");
}

#[test]
fn test_health() {
    let resp = get("/health", &settings(false));
    assert_eq!(*resp.status(), 200);
    let json: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(json["status"], "ok");
}

#[test]
fn test_init_logging_is_repeatable() {
    catalog::init_logging();
    catalog::init_logging();

    let resp = get("/health", &settings(false));
    assert_eq!(*resp.status(), 200);
}
