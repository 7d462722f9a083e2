//! Per-client rate limiting for the authentication endpoints.
//!
//! Clients are keyed by the first `X-Forwarded-For` address when a proxy
//! sets one, otherwise by the peer address of the connection.

use std::net::SocketAddr;
use std::num::NonZeroU32;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use yoga_config::RateLimitConfig;
use yoga_core::AppError;

use crate::state::AppState;

pub type AuthRateLimiter = DefaultKeyedRateLimiter<String>;

pub fn build_auth_limiter(config: &RateLimitConfig) -> AuthRateLimiter {
    let per_second = NonZeroU32::new(config.auth_per_second).unwrap_or(NonZeroU32::MIN);
    let burst = NonZeroU32::new(config.auth_burst_size).unwrap_or(per_second);

    RateLimiter::keyed(Quota::per_second(per_second).allow_burst(burst))
}

fn client_key(req: &Request) -> String {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn rate_limit_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = client_key(&req);

    if state.auth_limiter.check_key(&key).is_err() {
        tracing::warn!(client = %key, "Authentication rate limit exceeded");
        return Err(AppError::too_many_requests(
            "Too many requests, please try again later",
        ));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_client_key_prefers_forwarded_for() {
        let req = Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_key(&req), "203.0.113.7");
    }

    #[test]
    fn test_client_key_falls_back_to_peer_address() {
        let mut req = Request::builder().body(Body::empty()).unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([192, 168, 1, 20], 51000))));
        assert_eq!(client_key(&req), "192.168.1.20");
    }

    #[test]
    fn test_limiter_allows_burst_then_rejects() {
        let limiter = build_auth_limiter(&RateLimitConfig {
            auth_per_second: 1,
            auth_burst_size: 2,
        });
        let key = "198.51.100.4".to_string();

        assert!(limiter.check_key(&key).is_ok());
        assert!(limiter.check_key(&key).is_ok());
        assert!(limiter.check_key(&key).is_err());
        assert!(limiter.check_key(&"198.51.100.5".to_string()).is_ok());
    }
}
