use crate::app::AppContext;
use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::ledger::Ledger;
use crate::ocr::{GeminiConfig, GeminiExtractor, TextExtractor};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info, warn};

mod app;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod ledger;
mod logging;
mod notices;
mod ocr;
mod request;
mod responses;
mod router;
mod spreadsheets;
mod templates;


fn main() {
    logging::init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Storage: one key/value table, created from the schema file if missing.
    let db = Database::new(cfg.db_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        error!(error = %e, path = %cfg.db_path, "database initialization failed");
        std::process::exit(1);
    }

    let ledger = Ledger::load(Box::new(db));
    let extractor = build_extractor(&cfg);
    let app = AppContext::new(ledger, extractor, cfg.max_body_bytes);

    info!(addr = %cfg.addr, workers = cfg.max_workers, "starting server");

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}

fn build_extractor(cfg: &AppConfig) -> Option<Box<dyn TextExtractor>> {
    let Some(key) = cfg.gemini_api_key.as_deref() else {
        info!("GEMINI_API_KEY not set, text extraction disabled");
        return None;
    };

    match GeminiExtractor::new(GeminiConfig::new(key, cfg.gemini_model.clone())) {
        Ok(extractor) => Some(Box::new(extractor)),
        Err(e) => {
            warn!(error = %e, "text extraction disabled");
            None
        }
    }
}
