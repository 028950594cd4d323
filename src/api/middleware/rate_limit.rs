//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Sustained requests per second per client.
const PER_SECOND: u64 = 5;

/// Requests a client may send in a burst before being throttled.
const BURST_SIZE: u32 = 60;

/// Creates a rate limiter for the panchang API keyed on the socket peer address.
///
/// # Limits
///
/// - **Rate**: 5 requests per second
/// - **Burst**: 60 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/panchang", get(panchang_handler))
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    GovernorLayer::new(Arc::new(config(PeerIpKeyExtractor)))
}

/// Same limits, keyed on the client IP forwarded by a reverse proxy.
///
/// Reads `X-Forwarded-For`, `X-Real-IP` and `Forwarded`, falling back to the
/// peer address. Use only behind a trusted proxy.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    GovernorLayer::new(Arc::new(config(SmartIpKeyExtractor)))
}

fn config<K: KeyExtractor>(extractor: K) -> GovernorConfig<K, NoOpMiddleware<QuantaInstant>> {
    GovernorConfigBuilder::default()
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .key_extractor(extractor)
        .finish()
        .expect("rate limit period and burst are non-zero")
}
