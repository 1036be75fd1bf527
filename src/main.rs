mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_visual_crossing;
mod weather;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_visual_crossing::VisualCrossing;

/// Immutable per-process state shared by all workers
pub struct AppState {
    token: String,
    provider: VisualCrossing,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let provider = VisualCrossing::new(
        &config.provider.base_url,
        &config.provider.api_key,
        config.provider.timeout(),
    )?;
    info!("using weather provider at {}", provider.base_url());

    let state = web::Data::new(AppState {
        token: config.auth.token,
        provider,
    });

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::configure)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
