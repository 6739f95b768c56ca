use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn new_york_zip_gets_state_adjustment() {
    let t = test_app();

    let req = post_form("/estimate", &house_form("12345", "1500"), None, false);
    let resp = handle(req, &t.app).expect("estimate should succeed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("$315,000.00"), "expected +5% for New York");
    assert!(body.contains("Location adjustment for ZIP 12345: +5% (Strong urban markets, high taxes)"));
    assert!(body.contains("Resolved state: New York"));
    assert_eq!(calls(&t.model_calls), 1);
}

#[test]
fn out_of_range_zip_prices_without_adjustment() {
    let t = test_app();

    let req = post_form("/estimate", &house_form("00000", "1500"), None, false);
    let body = body_string(handle(req, &t.app).unwrap());

    assert!(body.contains("ZIP code must be a valid US ZIP code. Using default US center location."));
    assert!(body.contains("$300,000.00"));
    assert!(body.contains(r#"data-tooltip="US Center""#));
    assert_eq!(calls(&t.geocoder_calls), 0);
}

#[test]
fn zero_living_area_never_reaches_the_model() {
    let t = test_app();

    let req = post_form("/estimate", &house_form("12345", "0"), None, false);
    let body = body_string(handle(req, &t.app).unwrap());

    assert!(body.contains("Please enter a valid living area (greater than 0)."));
    assert!(body.contains("No predictions yet."));
    assert_eq!(calls(&t.model_calls), 0);
}

#[test]
fn negative_living_area_gets_the_same_message_as_zero() {
    let t = test_app();

    let req = post_form("/estimate", &house_form("12345", "-10"), None, false);
    let body = body_string(handle(req, &t.app).unwrap());

    assert!(body.contains("Please enter a valid living area (greater than 0)."));
    assert_eq!(calls(&t.model_calls), 0);
}

#[test]
fn state_missing_from_table_gets_default_adjustment() {
    let t = test_app();

    let req = post_form("/estimate", &house_form("00601", "1500"), None, false);
    let body = body_string(handle(req, &t.app).unwrap());

    assert!(body.contains("$309,000.00"));
    assert!(body.contains("+3% (General market)"));
}

#[test]
fn non_numeric_input_is_reported_inline() {
    let t = test_app();

    let form = "bedrooms=three&bathrooms=2&living_area=1500&condition=3&schools=2&zip=12345";
    let body = body_string(handle(post_form("/estimate", form, None, false), &t.app).unwrap());

    assert!(body.contains(r#"class="error" id="estimate""#));
    assert_eq!(calls(&t.model_calls), 0);
}

#[test]
fn model_failure_is_shown_not_raised() {
    let t = test_app_with(FakeGeocoder::new(), FakeModel::broken("weights missing"));

    let req = post_form("/estimate", &house_form("12345", "1500"), None, false);
    let resp = handle(req, &t.app).expect("model failure is rendered, not an error");
    let body = body_string(resp);

    assert!(body.contains("Prediction failed:"));
    assert!(body.contains("weights missing"));
    assert!(body.contains("No predictions yet."));
}

#[test]
fn htmx_request_gets_results_fragment() {
    let t = test_app();

    let req = post_form("/estimate", &house_form("12345", "1500"), None, true);
    let body = body_string(handle(req, &t.app).unwrap());

    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"id="location-panel""#));
    assert!(body.contains(r#"id="history""#));
    assert!(body.contains("$315,000.00"));
}

#[test]
fn successful_estimates_are_appended_to_history() {
    let t = test_app();

    let first = handle(post_form("/estimate", &house_form("12345", "1500"), None, false), &t.app).unwrap();
    let token = issued_token(&first).expect("first request issues a session cookie");

    let req = post_form("/estimate", &house_form("00601", "1500"), Some(&token), false);
    let body = body_string(handle(req, &t.app).unwrap());

    assert!(body.contains("$315,000.00"));
    assert!(body.contains("$309,000.00"));
    assert!(body.contains("<td>00601</td>"));
    assert!(!body.contains("No predictions yet."));
}

#[test]
fn same_zip_is_geocoded_once() {
    let t = test_app();

    let first = handle(post_form("/estimate", &house_form("12345", "1500"), None, false), &t.app).unwrap();
    let token = issued_token(&first).unwrap();
    handle(post_form("/estimate", &house_form("12345", "2000"), Some(&token), false), &t.app).unwrap();

    // A different session still hits the shared cache.
    handle(post_form("/estimate", &house_form("12345", "1500"), None, false), &t.app).unwrap();

    assert_eq!(calls(&t.geocoder_calls), 1);
    assert_eq!(calls(&t.model_calls), 3);
}

#[test]
fn form_post_needs_form_content_type() {
    let t = test_app();

    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/estimate")
        .header("Content-Type", "application/json")
        .body(astra::Body::from(b"{}".to_vec()))
        .unwrap();

    assert!(matches!(
        handle(req, &t.app),
        Err(crate::errors::ServerError::BadRequest(_))
    ));
}
