use crate::app::{now_unix, App};
use crate::domain::logic;
use crate::domain::property::PropertyForm;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, redirect};
use crate::sessions::{self, FeedbackRating, SessionHandle};
use crate::templates::pages::{home_page, results_fragment, HomeVm};
use crate::templates::{feedback_result, location_panel};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Form bodies larger than this are rejected.
const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let now = now_unix();

    let cookie = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(sessions::session_cookie)
        .map(str::to_string);
    let session = app.sessions.open(cookie.as_deref(), now)?;

    match route(&mut req, app, &session, &method, &path, now) {
        Ok(resp) => with_session_cookie(resp, &session),
        Err(e) => {
            // The client never receives a cookie for a failed request.
            if session.is_new {
                app.sessions.end(&session.token)?;
            }
            Err(e)
        }
    }
}

fn route(
    req: &mut Request,
    app: &App,
    session: &SessionHandle,
    method: &str,
    path: &str,
    now: i64,
) -> ResultResp {
    // htmx asks for fragments; plain form posts get the whole page.
    let partial = req.headers().contains_key("HX-Request");

    match (method, path) {
        ("GET", "/") => home(app, session, now),
        ("POST", "/estimate") => {
            let fields = read_form(req)?;
            estimate(app, session, &fields, partial, now)
        }
        ("GET", "/location") => {
            let query = parse_query(req);
            let zip = query.get("zip").map(String::as_str).unwrap_or_default();
            let ctx = logic::locate(app, session, zip, now)?;
            html_response(location_panel(&ctx))
        }
        ("POST", "/feedback") => {
            let fields = read_form(req)?;
            feedback(app, session, &fields, partial, now)
        }
        ("POST", "/session/clear") => {
            app.sessions.end(&session.token)?;
            tracing::info!(active = app.sessions.active(), "session cleared");
            redirect("/", &[("Set-Cookie", sessions::clear_cookie_header())])
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &App, session: &SessionHandle, now: i64) -> ResultResp {
    let form = app.sessions.with_session(session, |s| s.form.clone())?;
    let location = logic::locate(app, session, &form.zip, now)?;
    let vm = page_vm(app, session, form, location)?;

    html_response(home_page(&vm))
}

fn estimate(
    app: &App,
    session: &SessionHandle,
    fields: &HashMap<String, String>,
    partial: bool,
    now: i64,
) -> ResultResp {
    let form = PropertyForm::from_fields(fields);
    let report = logic::submit_estimate(app, session, form.clone(), now)?;

    let mut vm = page_vm(app, session, form, report.location)?;
    vm.estimate = Some(report.price);

    if partial {
        html_response(results_fragment(&vm))
    } else {
        html_response(home_page(&vm))
    }
}

fn feedback(
    app: &App,
    session: &SessionHandle,
    fields: &HashMap<String, String>,
    partial: bool,
    now: i64,
) -> ResultResp {
    let raw = fields.get("rating").map(String::as_str).unwrap_or_default();
    let result = FeedbackRating::parse(raw);

    if let Ok(rating) = result {
        app.sessions.with_session(session, |s| s.rate(rating))?;
        tracing::info!(rating = rating.value(), "feedback received");
    }

    if partial {
        return html_response(feedback_result(&result));
    }

    let form = app.sessions.with_session(session, |s| s.form.clone())?;
    let location = logic::locate(app, session, &form.zip, now)?;
    let mut vm = page_vm(app, session, form, location)?;
    vm.feedback = Some(result);

    html_response(home_page(&vm))
}

fn page_vm(
    app: &App,
    session: &SessionHandle,
    form: PropertyForm,
    location: logic::LocationContext,
) -> Result<HomeVm, ServerError> {
    let (history, rating) = app.sessions.with_session(session, |s| {
        (
            s.history().to_vec(),
            s.last_rating().map(FeedbackRating::value).unwrap_or(3),
        )
    })?;

    Ok(HomeVm {
        form,
        location,
        estimate: None,
        history,
        rating,
        feedback: None,
    })
}

fn with_session_cookie(mut resp: astra::Response, session: &SessionHandle) -> ResultResp {
    // A response that already sets the cookie (session clear) keeps its own.
    if session.is_new && !resp.headers().contains_key("Set-Cookie") {
        let value = sessions::set_cookie_header(&session.token)
            .parse()
            .map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().insert("Set-Cookie", value);
    }
    Ok(resp)
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let is_form = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .map(|m| m.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str())
        .unwrap_or(false);
    if !is_form {
        return Err(ServerError::BadRequest(
            "expected application/x-www-form-urlencoded".into(),
        ));
    }

    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;
    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form too large".into()));
    }

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
