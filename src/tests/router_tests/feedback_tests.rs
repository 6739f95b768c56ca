use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn rating_is_acknowledged() {
    let t = test_app();

    let body = body_string(handle(post_form("/feedback", "rating=4", None, true), &t.app).unwrap());

    assert!(body.contains("Thank you for your feedback! Rating: 4/5"));
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[test]
fn out_of_range_rating_is_rejected() {
    let t = test_app();

    for raw in ["rating=0", "rating=6", "rating=four", ""] {
        let body = body_string(handle(post_form("/feedback", raw, None, true), &t.app).unwrap());
        assert!(
            body.contains("Rating must be a whole number between 1 and 5"),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn last_rating_positions_the_slider() {
    let t = test_app();

    let resp = handle(post_form("/feedback", "rating=5", None, false), &t.app).unwrap();
    let token = issued_token(&resp).unwrap();
    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Rating: 5/5"));

    let body = body_string(handle(get("/", Some(&token)), &t.app).unwrap());
    assert!(body.contains(r#"name="rating" min="1" max="5" step="1" value="5""#));
}
