use crate::app::App;
use crate::config::AppConfig;
use crate::geocoding::{LocationResolver, NominatimGeocoder};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::sessions::SessionStore;
use astra::Server;

mod app;
mod config;
mod domain;
mod errors;
mod geocoding;
mod geos;
mod logging;
mod model;
mod responses;
mod router;
mod sessions;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration and logging
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    logging::init_tracing(&config.log_level);

    // 2️⃣ Model artifact, loaded once
    let model = model::load_or_unavailable(&config.model_path);

    // 3️⃣ Geocoder and session state
    let geocoder = match NominatimGeocoder::new(
        &config.geocoder_url,
        &config.user_agent,
        config.geocode_timeout,
    ) {
        Ok(g) => g,
        Err(e) => {
            tracing::error!(error = %e, "could not build geocoding client");
            std::process::exit(1);
        }
    };

    let app = App::new(
        model,
        LocationResolver::new(Box::new(geocoder), config.cache_ttl_secs),
        SessionStore::new(config.session_idle_secs),
    );

    // 4️⃣ Serve requests
    tracing::info!(addr = %config.addr, workers = config.max_workers, "starting server");
    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match handle(req, &app) {
            Ok(resp) => {
                tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
                resp
            }
            Err(err) => {
                tracing::warn!(%method, %path, error = %err, "request failed");
                error_to_response(err)
            }
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    } else {
        tracing::info!("server shut down cleanly");
    }
}
