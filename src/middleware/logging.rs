use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

/// How a gateway-backed endpoint ended: `"ok"` or a `GatewayError::kind()`.
/// Attached as a response extension; those endpoints answer 200 either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyOutcome(pub &'static str);

impl ReplyOutcome {
    pub const OK: ReplyOutcome = ReplyOutcome("ok");

    pub fn is_failure(&self) -> bool {
        self.0 != "ok"
    }
}

pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    tracing::debug!(request_id = %request_id, method = %method, path = %path, "incoming request");

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;
    let outcome = response.extensions().get::<ReplyOutcome>().copied();
    let outcome_label = outcome.map(|o| o.0).unwrap_or("-");

    if status >= 500 {
        tracing::error!(request_id = %request_id, method = %method, path = %path, status, outcome = outcome_label, duration_ms, "request failed");
    } else if status >= 400 || outcome.is_some_and(|o| o.is_failure()) {
        tracing::warn!(request_id = %request_id, method = %method, path = %path, status, outcome = outcome_label, duration_ms, "request completed with error");
    } else {
        tracing::info!(request_id = %request_id, method = %method, path = %path, status, outcome = outcome_label, duration_ms, "request completed");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ok_is_not_a_failure() {
        assert!(!ReplyOutcome::OK.is_failure());
        assert!(ReplyOutcome("transport").is_failure());
        assert!(ReplyOutcome("authentication").is_failure());
    }
}
