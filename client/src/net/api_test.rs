use super::*;

fn config() -> ClientConfig {
    ClientConfig {
        backend_url: "https://db.example.com".to_owned(),
        anon_key: "anon".to_owned(),
        session_timeout_ms: 8000,
    }
}

fn user_id() -> Uuid {
    Uuid::parse_str("9b2f7c1e-3d4a-4b8e-9f10-2a3b4c5d6e7f").unwrap()
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn auth_endpoint_joins_backend_url() {
    assert_eq!(auth_endpoint(&config(), "user"), "https://db.example.com/auth/v1/user");
    assert_eq!(
        auth_endpoint(&config(), "token?grant_type=password"),
        "https://db.example.com/auth/v1/token?grant_type=password"
    );
}

#[test]
fn rest_endpoint_appends_query() {
    assert_eq!(
        rest_endpoint(&config(), "weight_logs", "order=date.desc"),
        "https://db.example.com/rest/v1/weight_logs?order=date.desc"
    );
}

#[test]
fn food_logs_query_filters_by_user_and_date_and_embeds_item() {
    assert_eq!(
        food_logs_query(user_id(), "2024-03-15"),
        "user_id=eq.9b2f7c1e-3d4a-4b8e-9f10-2a3b4c5d6e7f&date=eq.2024-03-15\
         &select=*,food_item:food_items(*)&order=created_at.asc"
    );
}

#[test]
fn user_metadata_query_limits_to_one_row() {
    assert_eq!(
        user_metadata_query(user_id()),
        "id=eq.9b2f7c1e-3d4a-4b8e-9f10-2a3b4c5d6e7f&limit=1"
    );
}

#[test]
fn weight_logs_query_orders_newest_first() {
    assert!(weight_logs_query(user_id()).ends_with("&order=date.desc"));
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

// =============================================================
// Sign-up body
// =============================================================

#[test]
fn grant_from_signup_without_token_needs_confirmation() {
    let body = serde_json::json!({ "id": "9b2f7c1e-3d4a-4b8e-9f10-2a3b4c5d6e7f", "email": "a@b.com" });
    assert_eq!(grant_from_signup(body), Ok(None));
}

#[test]
fn grant_from_signup_with_token_is_a_session() {
    let body = serde_json::json!({
        "access_token": "jwt",
        "user": { "id": "9b2f7c1e-3d4a-4b8e-9f10-2a3b4c5d6e7f", "email": "a@b.com" }
    });
    let grant = grant_from_signup(body).unwrap().unwrap();
    assert_eq!(grant.access_token, "jwt");
    assert_eq!(grant.user.id, user_id());
}

#[test]
fn grant_from_signup_with_malformed_user_is_decode_error() {
    let body = serde_json::json!({ "access_token": "jwt", "user": { "id": "not-a-uuid" } });
    assert!(matches!(grant_from_signup(body), Err(ApiError::Decode(_))));
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(500).to_string(), "backend responded with status 500");
    assert_eq!(ApiError::Timeout(8000).to_string(), "request timed out after 8000 ms");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
}

#[test]
fn api_error_unauthorized_statuses() {
    assert!(ApiError::Status(401).is_unauthorized());
    assert!(ApiError::Status(403).is_unauthorized());
    assert!(!ApiError::Status(404).is_unauthorized());
    assert!(!ApiError::Timeout(1).is_unauthorized());
}

#[test]
fn api_error_retryable_kinds() {
    assert!(ApiError::Transport("reset".to_owned()).is_retryable());
    assert!(ApiError::Timeout(10).is_retryable());
    assert!(ApiError::Status(503).is_retryable());
    assert!(!ApiError::Status(401).is_retryable());
    assert!(!ApiError::Decode("bad".to_owned()).is_retryable());
    assert!(!ApiError::Unavailable.is_retryable());
}

// =============================================================
// Non-browser stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = block_on(fetch_session(&config(), "t"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
