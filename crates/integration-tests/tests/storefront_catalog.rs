//! Catalog pages rendered through the assembled storefront router.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use naia_integration_tests::TestClient;

#[tokio::test]
async fn test_home_lists_featured_and_occasions() {
    let mut client = TestClient::new();
    let response = client.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Solène"));
    assert!(response.body.contains("Zia"));
    // Not featured
    assert!(!response.body.contains("Séraphine"));
    assert!(response.body.contains("/products/celestine"));
}

#[tokio::test]
async fn test_shop_filters_by_category() {
    let mut client = TestClient::new();

    let all = client.get("/shop").await;
    assert_eq!(all.status, StatusCode::OK);
    assert!(all.body.contains("Séraphine"));
    assert!(all.body.contains("Liora"));

    let warm = client.get("/shop?category=warm").await;
    assert_eq!(warm.status, StatusCode::OK);
    assert!(warm.body.contains("Liora"));
    assert!(warm.body.contains("Aurélia"));
    assert!(!warm.body.contains("Séraphine"));

    let everything = client.get("/shop?category=all").await;
    assert!(everything.body.contains("Séraphine"));
}

#[tokio::test]
async fn test_shop_unknown_category_is_400() {
    let mut client = TestClient::new();
    let response = client.get("/shop?category=tropical").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_page_shows_vases_and_suggestions() {
    let mut client = TestClient::new();
    let response = client.get("/products/solene").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("£185.00"));
    assert!(response.body.contains("Forest Green"));
    assert!(response.body.contains("+£40.00"));
    assert!(response.body.contains("/products/amea"));
}

#[tokio::test]
async fn test_unknown_product_is_404() {
    let mut client = TestClient::new();
    let response = client.get("/products/thalia").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_our_story_page() {
    let mut client = TestClient::new();
    let response = client.get("/our-story").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("The Beginning"));
    assert!(response.body.contains("Our Philosophy"));
    assert!(response.body.contains(r#"href="/shop""#));
}

#[tokio::test]
async fn test_services_page_lists_both_groups() {
    let mut client = TestClient::new();
    let response = client.get("/services").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Personal Celebrations"));
    assert!(response.body.contains("Corporate &amp; Commercial"));
    assert!(response.body.contains("Hotel lobby installations"));
}

#[tokio::test]
async fn test_nav_links_to_content_pages() {
    let mut client = TestClient::new();
    let response = client.get("/").await;
    assert!(response.body.contains(r#"href="/our-story""#));
    assert!(response.body.contains(r#"href="/services""#));
}
