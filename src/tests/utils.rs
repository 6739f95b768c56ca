use crate::app::App;
use crate::domain::location::Coordinates;
use crate::geocoding::{Geocoder, GeocodingError, LocationResolver};
use crate::model::{ModelError, PriceModel};
use crate::sessions::SessionStore;
use astra::{Body, Request, Response};
use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const ALBANY: Coordinates = Coordinates {
    latitude: 42.6526,
    longitude: -73.7562,
};

pub const SAN_JUAN: Coordinates = Coordinates {
    latitude: 18.4655,
    longitude: -66.1057,
};

/// In-memory geocoder keyed by ZIP. Counts forward lookups.
pub struct FakeGeocoder {
    places: HashMap<String, (Coordinates, Option<String>)>,
    failure: Option<GeocodingError>,
    pub forward_calls: Arc<AtomicUsize>,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        let mut places = HashMap::new();
        places.insert("12345".to_string(), (ALBANY, Some("New York".to_string())));
        places.insert("00601".to_string(), (SAN_JUAN, Some("Puerto Rico".to_string())));

        Self {
            places,
            failure: None,
            forward_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(err: GeocodingError) -> Self {
        Self {
            failure: Some(err),
            ..Self::new()
        }
    }
}

impl Geocoder for FakeGeocoder {
    fn forward(&self, query: &str) -> Result<Option<Coordinates>, GeocodingError> {
        self.forward_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let zip = query.trim_end_matches(", USA");
        Ok(self.places.get(zip).map(|(coords, _)| *coords))
    }

    fn reverse(&self, coordinates: Coordinates) -> Result<Option<String>, GeocodingError> {
        Ok(self
            .places
            .values()
            .find(|(c, _)| *c == coordinates)
            .and_then(|(_, state)| state.clone()))
    }
}

/// Returns a fixed raw price. Counts invocations.
pub struct FakeModel {
    output: Result<f64, String>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeModel {
    pub fn pricing(raw: f64) -> Self {
        Self {
            output: Ok(raw),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn broken(reason: &str) -> Self {
        Self {
            output: Err(reason.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl PriceModel for FakeModel {
    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(features.len(), 5);
        match &self.output {
            Ok(raw) => Ok(vec![*raw]),
            Err(reason) => Err(ModelError::Artifact(reason.clone())),
        }
    }
}

pub struct TestApp {
    pub app: App,
    pub geocoder_calls: Arc<AtomicUsize>,
    pub model_calls: Arc<AtomicUsize>,
}

pub fn test_app_with(geocoder: FakeGeocoder, model: FakeModel) -> TestApp {
    let geocoder_calls = geocoder.forward_calls.clone();
    let model_calls = model.calls.clone();

    let app = App::new(
        Box::new(model),
        LocationResolver::new(Box::new(geocoder), 3600),
        SessionStore::new(3600),
    );

    TestApp {
        app,
        geocoder_calls,
        model_calls,
    }
}

/// Geocoder knows 12345 (New York) and 00601 (Puerto Rico); the model
/// always prices at $300,000.
pub fn test_app() -> TestApp {
    test_app_with(FakeGeocoder::new(), FakeModel::pricing(300_000.0))
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(http::Method::GET).uri(uri);
    if let Some(token) = cookie {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, cookie: Option<&str>, htmx: bool) -> Request {
    let mut builder = http::Request::builder()
        .method(http::Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = cookie {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

/// Form body for the estimate endpoint with the given ZIP and living area.
pub fn house_form(zip: &str, living_area: &str) -> String {
    format!(
        "bedrooms=3&bathrooms=2&living_area={living_area}&condition=3&schools=2&zip={zip}"
    )
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Token from the response's `Set-Cookie`, if one was issued.
pub fn issued_token(resp: &Response) -> Option<String> {
    let header = resp.headers().get("Set-Cookie")?.to_str().ok()?;
    let value = header.split(';').next()?.strip_prefix("session=")?;
    (!value.is_empty()).then(|| value.to_string())
}
