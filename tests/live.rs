// Runs against a server started with `cargo run` (CATALOG_BIND_ADDR=127.0.0.1:3000).

const BASE_URL: &str = "http://127.0.0.1:3000";

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[ignore]
#[tokio::test]
async fn test_live_empty_query_redirects() {
    let resp = client()
        .get(&format!("{}/?q=", BASE_URL))
        .send()
        .await
        .expect("Failed to make request");

    assert_eq!(resp.status(), 302);
    let location = resp.headers()["location"].to_str().unwrap();
    assert!(location.contains("enterprise_catalog_query_titles="));
    assert!(location.contains("availability=Available+Now&availability=Starting+Soon&availability=Upcoming"));
}

#[ignore]
#[tokio::test]
async fn test_live_follow_redirect_renders_page() {
    let resp = reqwest::get(&format!("{}/", BASE_URL))
        .await
        .expect("Failed to make request");

    assert_eq!(resp.status(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains(r#"class="hero""#));
    assert!(html.contains(r#"class="catalog-selection-deck""#));
}
