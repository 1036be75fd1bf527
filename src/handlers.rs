use actix_web::{get, post, web, HttpResponse, Responder};
use log::{error, info, warn};
use crate::AppState;
use crate::errors::ApiError;
use crate::weather::models::{WeatherEnvelope, WeatherRequest};
use crate::weather::parse_body;

const BANNER: &str = "<p><h2>Weather proxy. Use POST /api/v1/weather</h2></p>";
const MAX_BODY_SIZE: usize = 256 * 1024;

#[get("/")]
async fn home_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(BANNER)
}

#[post("/api/v1/weather")]
async fn weather(payload: web::Payload, data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let request = read_body(payload).await
        .and_then(|body| parse_body(&body))
        .and_then(|json| WeatherRequest::from_body(&json, &data.token))
        .inspect_err(|e| warn!("rejected weather request: {}", e))?;

    info!("weather for {} at {} on {}", request.requester_name, request.location, request.date);

    let day = data.provider.day_record(&request.location, &request.date).await
        .inspect_err(|e| error!("weather provider request failed: {}", e))?;

    Ok(HttpResponse::Ok().json(WeatherEnvelope::new(request, &day)))
}

/// Reads the whole request body, bodies above `MAX_BODY_SIZE` are rejected
async fn read_body(payload: web::Payload) -> Result<web::Bytes, ApiError> {
    payload.to_bytes_limited(MAX_BODY_SIZE).await
        .map_err(|_| ApiError::PayloadTooLarge)?
        .map_err(|_| ApiError::MalformedRequest)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home_page).service(weather);
}
