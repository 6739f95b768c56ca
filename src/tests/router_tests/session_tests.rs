use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn first_visit_issues_cookie() {
    let t = test_app();

    let resp = handle(get("/", None), &t.app).unwrap();
    let token = issued_token(&resp).expect("new visitors get a session");
    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("HttpOnly"));

    let again = handle(get("/", Some(&token)), &t.app).unwrap();
    assert!(again.headers().get("Set-Cookie").is_none());
}

#[test]
fn home_page_shows_defaults() {
    let t = test_app();

    let body = body_string(handle(get("/", None), &t.app).unwrap());

    assert!(body.contains("USA House Price Prediction App"));
    assert!(body.contains(r#"name="zip""#));
    assert!(body.contains(r#"value="12345""#));
    assert!(body.contains("No predictions yet."));
}

#[test]
fn stale_cookie_starts_a_fresh_session() {
    let t = test_app();

    let resp = handle(get("/", Some("not-a-real-token")), &t.app).unwrap();
    assert!(issued_token(&resp).is_some());
}

#[test]
fn history_is_private_to_each_session() {
    let t = test_app();

    let resp = handle(post_form("/estimate", &house_form("12345", "1500"), None, false), &t.app).unwrap();
    assert!(issued_token(&resp).is_some());

    let other = body_string(handle(get("/", None), &t.app).unwrap());
    assert!(other.contains("No predictions yet."));
}

#[test]
fn clearing_the_session_drops_history() {
    let t = test_app();

    let resp = handle(post_form("/estimate", &house_form("12345", "1500"), None, false), &t.app).unwrap();
    let token = issued_token(&resp).unwrap();

    let cleared = handle(post_form("/session/clear", "", Some(&token), false), &t.app).unwrap();
    assert_eq!(cleared.status(), 302);
    assert_eq!(cleared.headers().get("Location").unwrap(), "/");
    let cookie = cleared.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));

    let resp = handle(get("/", Some(&token)), &t.app).unwrap();
    assert!(issued_token(&resp).is_some());
    assert!(body_string(resp).contains("No predictions yet."));
}

#[test]
fn unknown_route_is_not_found() {
    let t = test_app();

    assert!(matches!(handle(get("/admin", None), &t.app), Err(ServerError::NotFound)));
    assert!(matches!(
        handle(post_form("/", "", None, false), &t.app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn failed_requests_without_cookie_leave_no_session() {
    let t = test_app();

    for _ in 0..50 {
        assert!(handle(get("/favicon.ico", None), &t.app).is_err());
    }
    let json = http::Request::builder()
        .method(http::Method::POST)
        .uri("/feedback")
        .header("Content-Type", "application/json")
        .body(astra::Body::from(b"{}".to_vec()))
        .unwrap();
    assert!(matches!(handle(json, &t.app), Err(ServerError::BadRequest(_))));

    assert_eq!(t.app.sessions.active(), 0);
}

#[test]
fn failed_request_keeps_an_existing_session() {
    let t = test_app();

    let resp = handle(post_form("/estimate", &house_form("12345", "1500"), None, false), &t.app).unwrap();
    let token = issued_token(&resp).unwrap();

    assert!(handle(get("/missing", Some(&token)), &t.app).is_err());

    assert_eq!(t.app.sessions.active(), 1);
    let body = body_string(handle(get("/", Some(&token)), &t.app).unwrap());
    assert!(body.contains("$315,000.00"));
}

#[test]
fn clearing_without_a_session_sends_only_the_expiring_cookie() {
    let t = test_app();

    let cleared = handle(post_form("/session/clear", "", None, false), &t.app).unwrap();

    assert_eq!(cleared.status(), 302);
    let cookie = cleared.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));
    assert_eq!(t.app.sessions.active(), 0);
}
