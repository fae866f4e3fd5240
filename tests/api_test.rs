//! Router tests.
//!
//! Drive the full axum router with an in-memory user directory; no
//! database is needed.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use bookshelf::api::{create_router, AppState};
use bookshelf::infra::{MemoryUserStore, UserStore};

const ALICE: &str = "uname=Alice&uid=alice1&uemail=a%40example.com&psw1=secret1&psw2=secret1";

fn app() -> (Arc<MemoryUserStore>, Router) {
    let store = Arc::new(MemoryUserStore::new());
    let router = create_router(AppState::from_store(store.clone()), "static");
    (store, router)
}

async fn get(router: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    router
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_signup(router: &Router, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri("/helloWorld/signup/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

fn flash_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("flash="))
        .map(|v| v.split(';').next().unwrap_or_default().to_string())
}

// =============================================================================
// Static pages
// =============================================================================

#[tokio::test]
async fn test_static_pages_render() {
    let (_, router) = app();

    for (uri, heading) in [
        ("/helloWorld/", "Find a book"),
        ("/helloWorld/shelf/", "My shelf"),
        ("/helloWorld/login/", "Log in"),
    ] {
        let response = get(&router, uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(body_text(response).await.contains(heading), "{}", uri);
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (_, router) = app();
    let response = get(&router, "/admin/", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("data-code=\"NOT_FOUND\""));
}

#[tokio::test]
async fn test_page_scripts_are_served() {
    let (_, router) = app();

    for (uri, marker) in [
        ("/helloWorld/static/js/script.js", "openlibrary.org/search.json"),
        ("/helloWorld/static/js/shelfScript.js", "function toggleWishlist"),
    ] {
        let response = get(&router, uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.contains("javascript"), "{}: {}", uri, content_type);
        assert!(body_text(response).await.contains(marker), "{}", uri);
    }

    let missing = get(&router, "/helloWorld/static/js/missing.js", None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_paths_without_trailing_slash_redirect() {
    let (_, router) = app();

    for (uri, target) in [
        ("/helloWorld", "/helloWorld/"),
        ("/helloWorld/shelf", "/helloWorld/shelf/"),
        ("/helloWorld/login", "/helloWorld/login/"),
        ("/helloWorld/signup", "/helloWorld/signup/"),
    ] {
        let response = get(&router, uri, None).await;
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT, "{}", uri);
        assert_eq!(location(&response), target);
    }
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let (_, router) = app();
    let response = get(&router, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("\"status\":\"healthy\""));
}

// =============================================================================
// Signup
// =============================================================================

#[tokio::test]
async fn test_signup_page_renders_form_without_notice() {
    let (store, router) = app();

    let response = get(&router, "/helloWorld/signup/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("name=\"psw2\""));
    assert!(!html.contains("class=\"notice\""));
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn test_successful_signup_redirects_to_login() {
    let (store, router) = app();

    let response = post_signup(&router, ALICE).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/helloWorld/login/");
    assert_eq!(flash_cookie(&response), None);

    let user = store.find_by_username("alice1").await.unwrap().unwrap();
    let profile = store.find_profile(user.id).await.unwrap().unwrap();
    assert_eq!(profile.name, "Alice");
    assert_eq!(store.user_count(), 1);
    assert_eq!(store.profile_count(), 1);
}

#[tokio::test]
async fn test_multipart_signup_redirects_to_login() {
    let (store, router) = app();

    let fields = [
        ("uname", "Alice"),
        ("uid", "alice1"),
        ("uemail", "a@example.com"),
        ("psw1", "secret1"),
        ("psw2", "secret1"),
    ];
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--XBOUNDARY\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            name, value
        ));
    }
    body.push_str("--XBOUNDARY--\r\n");

    let request = Request::builder()
        .method("POST")
        .uri("/helloWorld/signup/")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
        .body(Body::from(body))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/helloWorld/login/");
    let user = store.find_by_username("alice1").await.unwrap().unwrap();
    assert_eq!(user.email, "a@example.com");
    assert_eq!(store.profile_count(), 1);
}

#[tokio::test]
async fn test_multipart_signup_missing_field_is_bad_request() {
    let (store, router) = app();

    let body = "--XBOUNDARY\r\nContent-Disposition: form-data; name=\"uname\"\r\n\r\nAlice\r\n--XBOUNDARY--\r\n";
    let request = Request::builder()
        .method("POST")
        .uri("/helloWorld/signup/")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
        .body(Body::from(body))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn test_password_mismatch_redirects_back_with_notice() {
    let (store, router) = app();

    let response = post_signup(
        &router,
        "uname=Alice&uid=alice1&uemail=a%40example.com&psw1=secret1&psw2=secret2",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/helloWorld/signup/");
    assert_eq!(
        flash_cookie(&response).as_deref(),
        Some("flash=password_mismatch")
    );
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn test_resubmission_is_rejected_and_notice_is_shown_once() {
    let (store, router) = app();
    post_signup(&router, ALICE).await;

    let response = post_signup(&router, ALICE).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/helloWorld/signup/");
    let cookie = flash_cookie(&response).unwrap();
    assert_eq!(cookie, "flash=email_taken");
    assert_eq!(store.user_count(), 1);

    // The notice is shown on the next page load and then cleared
    let page = get(&router, "/helloWorld/signup/", Some(cookie.as_str())).await;
    assert_eq!(page.status(), StatusCode::OK);
    let clearing = page
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("flash=") && v.contains("Max-Age=0"));
    assert!(clearing, "flash cookie should be expired");
    assert!(body_text(page).await.contains("Email already exists"));
}

#[tokio::test]
async fn test_duplicate_username_notice() {
    let (store, router) = app();
    post_signup(&router, ALICE).await;

    let response = post_signup(
        &router,
        "uname=Alice&uid=alice1&uemail=other%40example.com&psw1=secret1&psw2=secret1",
    )
    .await;
    let cookie = flash_cookie(&response).unwrap();
    assert_eq!(cookie, "flash=username_taken");

    let page = get(&router, "/helloWorld/signup/", Some(cookie.as_str())).await;
    assert!(body_text(page).await.contains("Username already exists"));
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let (store, router) = app();

    let response = post_signup(&router, "uname=Alice&uid=alice1&psw1=secret1&psw2=secret1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn test_invalid_field_is_bad_request() {
    let (store, router) = app();

    let response = post_signup(
        &router,
        "uname=Alice&uid=alice1&uemail=not-an-email&psw1=secret1&psw2=secret1",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Invalid email format"));
    assert_eq!(store.user_count(), 0);
}
