//! Router tests for the landing page and its forms.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use common::{body_text, build_test_app, get, post_form};

use realtrust_core::{Email, NewClient, NewProject};
use realtrust_data::RecordStore;

const JANE: &str = "full_name=Jane+Doe&email=jane%40example.com&mobile=5551234&city=Austin";

#[tokio::test]
async fn health_is_ok() {
    let app = build_test_app();
    let response = get(app.router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn readiness_reports_unavailable_store() {
    let app = build_test_app();
    app.records.set_unavailable(true);

    let response = get(app.router, "/health/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app();
    let response = get(app.router, "/no-such-page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn landing_page_shows_placeholders_when_empty() {
    let app = build_test_app();
    let response = get(app.router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Consultation"));
    assert!(html.contains("Sharon Smith"));
    assert!(html.contains("Project design services"));
    assert!(html.contains("http://admin.test"));
    assert!(html.contains(r#"id="hero-form""#));
    assert!(html.contains(r#"id="contact-form""#));
    assert!(html.contains(r#"id="newsletter-form""#));
}

#[tokio::test]
async fn landing_page_shows_stored_rows_instead_of_placeholders() {
    let app = build_test_app();
    app.records
        .insert_project(
            &NewProject::new("Lakeside Villa", "Waterfront staging").unwrap(),
            Some("/media/projects/1.jpg"),
        )
        .await
        .unwrap();
    app.records
        .insert_client(
            &NewClient::new("Jane Doe", "Home Buyer", "Smooth closing").unwrap(),
            None,
        )
        .await
        .unwrap();

    let html = body_text(get(app.router, "/").await).await;
    assert!(html.contains("Lakeside Villa"));
    assert!(html.contains("/media/projects/1.jpg"));
    assert!(html.contains("Smooth closing"));
    assert!(!html.contains("Sharon Smith"));
    assert!(!html.contains("Project design services"));
    // No image, so initials stand in
    assert!(html.contains(">JD</span>"));
}

#[tokio::test]
async fn landing_page_survives_store_outage() {
    let app = build_test_app();
    app.records.set_unavailable(true);

    let response = get(app.router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Sharon Smith"));
}

#[tokio::test]
async fn contact_form_stores_lead_and_clears_fields() {
    let app = build_test_app();
    let response = post_form(app.router, "/leads/contact", JANE).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Message Sent!"));
    assert!(html.contains("toast-success"));
    assert!(html.contains(r#"hx-swap-oob="beforeend:#toasts""#));
    assert!(!html.contains(r#"value="Jane Doe""#));

    let leads = app.records.list_contact_submissions().await.unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].full_name, "Jane Doe");
    assert_eq!(leads[0].email.as_str(), "jane@example.com");
    assert_eq!(leads[0].city, "Austin");
}

#[tokio::test]
async fn hero_form_failure_keeps_input() {
    let app = build_test_app();
    app.records.set_unavailable(true);

    let html = body_text(post_form(app.router, "/leads/hero", JANE).await).await;
    assert!(html.contains("Failed to submit form. Please try again."));
    assert!(html.contains("toast-error"));
    assert!(html.contains(r#"value="Jane Doe""#));
    assert!(html.contains("Get Quick Quote"));
}

#[tokio::test]
async fn lead_form_with_missing_field_is_rejected() {
    let app = build_test_app();
    let body = "full_name=Jane+Doe&email=jane%40example.com&mobile=&city=Austin";

    let html = body_text(post_form(app.router, "/leads/contact", body).await).await;
    assert!(html.contains("Failed to send message. Please try again."));
    assert!(html.contains(r#"value="Jane Doe""#));
    assert!(app.records.list_contact_submissions().await.unwrap().is_empty());
}

#[tokio::test]
async fn newsletter_subscribes_and_clears_input() {
    let app = build_test_app();
    let html = body_text(post_form(app.router, "/newsletter", "email=a%40b.com").await).await;

    assert!(html.contains("Subscribed!"));
    assert!(!html.contains(r#"value="a@b.com""#));
    assert_eq!(app.records.list_subscribers().await.unwrap().len(), 1);
}

#[tokio::test]
async fn newsletter_duplicate_is_informational_and_keeps_input() {
    let app = build_test_app();
    app.records
        .insert_subscriber(&Email::parse("a@b.com").unwrap())
        .await
        .unwrap();

    let html = body_text(post_form(app.router, "/newsletter", "email=a%40b.com").await).await;
    assert!(html.contains("Already Subscribed"));
    assert!(html.contains("toast-info"));
    assert!(html.contains(r#"value="a@b.com""#));
    assert_eq!(app.records.list_subscribers().await.unwrap().len(), 1);
}

#[tokio::test]
async fn newsletter_rejects_invalid_email() {
    let app = build_test_app();
    let html = body_text(post_form(app.router, "/newsletter", "email=not-an-email").await).await;

    assert!(html.contains("Please enter a valid email address."));
    assert!(html.contains(r#"value="not-an-email""#));
    assert!(app.records.list_subscribers().await.unwrap().is_empty());
}
