/*
    * Logs every response with its status, elapsed time and UTC date. The
    * body passes through untouched: clients of /install depend on the exact
    * JSON shapes the handlers produce.
*/

use std::{convert::Infallible, time::Instant};

use axum::{
    body::Body,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::info;

pub async fn response_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response, Infallible> {
    // Pull out the start time from request extensions (if present).
    // If it's missing for some reason, default to "now()".
    let start_time: Instant = req
        .extensions()
        .get::<Instant>()
        .copied()
        .unwrap_or_else(Instant::now);

    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    // Call the inner handler
    let response: Response = next.run(req).await;

    // Build a reason string from the status (e.g. "OK", "NOT_FOUND")
    let reason: String = response
        .status()
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_");

    let duration_ms: u128 = start_time.elapsed().as_millis();
    let current_utc_date: String = Utc::now().to_rfc3339();

    info!(
        "{} {} -> {} {} in {} ms at {}",
        method,
        path,
        response.status().as_u16(),
        reason,
        duration_ms,
        current_utc_date
    );

    Ok(response)
}
