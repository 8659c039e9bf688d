//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

use crate::config::RateLimitConfig;

/// Creates a per-IP rate limiter for the generation endpoint.
///
/// # Limits
///
/// - **Replenish**: one request every `limits.per_second` seconds
/// - **Burst**: `limits.burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
///
/// ```rust,ignore
/// let mut app = Router::new().route("/generate-qr", post(generate_qr_handler));
///
/// if let Some(limits) = &config.rate_limit {
///     app = app.layer(rate_limit::layer(limits));
/// }
/// ```
pub fn layer(
    limits: &RateLimitConfig,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(limits.per_second)
            .burst_size(limits.burst)
            .finish()
            .expect("rate limit values are validated by Config::validate"),
    );

    GovernorLayer::new(governor_conf)
}
