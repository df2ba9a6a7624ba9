use std::convert::Infallible;
use std::time::Instant;

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};

pub async fn start_time_middleware(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Infallible> {
    let start: Instant = Instant::now();

    req.extensions_mut().insert(start);

    // Pass the request down the chain
    Ok(next.run(req).await)
}
