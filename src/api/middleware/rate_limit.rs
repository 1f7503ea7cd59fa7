//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Applies the standard per-IP rate limit to a router.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Per client IP from the socket peer address, or from
/// `X-Forwarded-For` / `X-Real-IP` when `behind_proxy` is set. Enable the
/// latter only behind a trusted reverse proxy; otherwise clients control
/// their own rate-limit key.
pub fn apply(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        let conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(SmartIpKeyExtractor)
                .per_second(2)
                .burst_size(100)
                .finish()
                .unwrap(),
        );
        let layer: GovernorLayer<_, _, axum::body::Body> = GovernorLayer::new(conf);
        router.layer(layer)
    } else {
        let conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(2)
                .burst_size(100)
                .finish()
                .unwrap(),
        );
        let layer: GovernorLayer<_, _, axum::body::Body> = GovernorLayer::new(conf);
        router.layer(layer)
    }
}

/// Applies the stricter limit used for the credential endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Damps brute-force attempts against `POST /api/auth/login`.
pub fn apply_secure(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        let conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(SmartIpKeyExtractor)
                .per_second(1)
                .burst_size(10)
                .finish()
                .unwrap(),
        );
        let layer: GovernorLayer<_, _, axum::body::Body> = GovernorLayer::new(conf);
        router.layer(layer)
    } else {
        let conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(1)
                .burst_size(10)
                .finish()
                .unwrap(),
        );
        let layer: GovernorLayer<_, _, axum::body::Body> = GovernorLayer::new(conf);
        router.layer(layer)
    }
}
