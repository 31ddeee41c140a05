use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::investors;
use super::payouts;
use super::state::AppState;
use crate::config::CorsConfig;

/// Create the API router with application state
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Liveness (no auth)
        .route("/health", get(health::health_check))
        // Registration and login bypass the auth gate
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        // Investors
        .route(
            "/api/investors",
            get(investors::list_investors).post(investors::create_investor),
        )
        .route(
            "/api/investors/{id}",
            put(investors::update_investor).delete(investors::delete_investor),
        )
        // Payouts
        .route(
            "/api/payouts",
            get(payouts::list_payouts).post(payouts::create_payout),
        )
        .route("/api/payouts/topup", post(payouts::create_topup))
        // Add state and middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer from configuration.
///
/// A `*` origin cannot be combined with credentials, so the wildcard branch
/// drops them; explicit origins get credential support.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if config.origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::domain::investor::MockInvestorRepository;
    use crate::domain::payout::MockPayoutRepository;
    use crate::domain::user::MockUserRepository;
    use crate::infrastructure::auth::{BcryptHasher, Claims, JwtService, TokenService};
    use crate::infrastructure::ledger::LedgerService;
    use crate::infrastructure::user::AuthService;

    const TEST_SECRET: &str = "router-test-secret";
    const REG_CODE: &str = "letmein";

    fn test_app() -> Router {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtService::new(TEST_SECRET));

        let auth_service = Arc::new(AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(BcryptHasher::with_cost(4)),
            tokens.clone(),
            REG_CODE.to_string(),
        ));

        let ledger_service = Arc::new(LedgerService::new(
            Arc::new(MockInvestorRepository::new()),
            Arc::new(MockPayoutRepository::new()),
        ));

        let state = AppState::new(auth_service, tokens, ledger_service);
        create_router(state, build_cors_layer(&CorsConfig::default()))
    }

    fn bearer_token() -> String {
        JwtService::new(TEST_SECRET).issue(7).unwrap()
    }

    fn request(
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    async fn register(app: &Router, email: &str, password: &str, code: &str) -> (StatusCode, Value) {
        send(
            app,
            request(
                "POST",
                "/api/register",
                None,
                Some(json!({"email": email, "password": password, "secretCode": code})),
            ),
        )
        .await
    }

    #[tokio::test]
    async fn test_health_is_open() {
        let app = test_app();

        let (status, body) = send(&app, request("GET", "/health", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_register_returns_token_and_email() {
        let app = test_app();

        let (status, body) = register(&app, "a@b.c", "password", REG_CODE).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "a@b.c");

        // The minted token passes the auth gate.
        let token = body["token"].as_str().unwrap();
        let (status, _) = send(&app, request("GET", "/api/investors", Some(token), None)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_never_echoes_password() {
        let app = test_app();

        let (_, body) = register(&app, "a@b.c", "password", REG_CODE).await;
        let raw = body.to_string();
        assert!(!raw.contains("password"));
    }

    #[tokio::test]
    async fn test_register_empty_fields_rejected() {
        let app = test_app();

        let (status, body) = register(&app, "", "password", REG_CODE).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_register_wrong_secret_code_forbidden() {
        let app = test_app();

        let (status, body) = register(&app, "a@b.c", "password", "nope").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "wrong secret code");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let app = test_app();

        register(&app, "a@b.c", "password", REG_CODE).await;

        let (status, body) = register(&app, "a@b.c", "password", REG_CODE).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_login_failure_bodies_are_identical() {
        let app = test_app();

        register(&app, "a@b.c", "password", REG_CODE).await;

        let (wrong_pw_status, wrong_pw_body) = send(
            &app,
            request(
                "POST",
                "/api/login",
                None,
                Some(json!({"email": "a@b.c", "password": "wrong"})),
            ),
        )
        .await;

        let (unknown_status, unknown_body) = send(
            &app,
            request(
                "POST",
                "/api/login",
                None,
                Some(json!({"email": "nobody@b.c", "password": "password"})),
            ),
        )
        .await;

        assert_eq!(wrong_pw_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_pw_body, unknown_body);
        assert_eq!(wrong_pw_body, json!({"error": "invalid credentials"}));
    }

    #[tokio::test]
    async fn test_login_success_issues_usable_token() {
        let app = test_app();

        register(&app, "a@b.c", "password", REG_CODE).await;

        let (status, body) = send(
            &app,
            request(
                "POST",
                "/api/login",
                None,
                Some(json!({"email": "a@b.c", "password": "password"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let token = body["token"].as_str().unwrap();
        let (status, _) = send(&app, request("GET", "/api/payouts", Some(token), None)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_token_rejected() {
        let app = test_app();

        let (status, body) = send(&app, request("GET", "/api/investors", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"error": "missing token"}));
    }

    #[tokio::test]
    async fn test_non_bearer_header_rejected_as_missing() {
        let app = test_app();

        let req = Request::builder()
            .method("GET")
            .uri("/api/investors")
            .header("authorization", "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"error": "missing token"}));
    }

    #[tokio::test]
    async fn test_expired_and_forged_tokens_rejected_identically() {
        let app = test_app();

        // Expired: signed with the right secret, exp in the past.
        let past = chrono::Utc::now() - chrono::Duration::hours(2);
        let expired_claims = Claims {
            sub: 7,
            iat: (past - chrono::Duration::days(30)).timestamp(),
            exp: past.timestamp(),
        };
        let expired = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &expired_claims,
            &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        // Forged: valid shape, wrong secret.
        let forged = JwtService::new("wrong-secret").issue(7).unwrap();

        let (expired_status, expired_body) =
            send(&app, request("GET", "/api/investors", Some(&expired), None)).await;
        let (forged_status, forged_body) =
            send(&app, request("GET", "/api/investors", Some(&forged), None)).await;
        let (garbage_status, garbage_body) =
            send(&app, request("GET", "/api/investors", Some("garbage"), None)).await;

        assert_eq!(expired_status, StatusCode::UNAUTHORIZED);
        assert_eq!(forged_status, StatusCode::UNAUTHORIZED);
        assert_eq!(garbage_status, StatusCode::UNAUTHORIZED);
        assert_eq!(expired_body, forged_body);
        assert_eq!(forged_body, garbage_body);
        assert_eq!(garbage_body, json!({"error": "invalid token"}));
    }

    #[tokio::test]
    async fn test_create_investor_with_empty_body_succeeds() {
        let app = test_app();
        let token = bearer_token();

        let (status, body) = send(
            &app,
            request("POST", "/api/investors", Some(&token), Some(json!({}))),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["full_name"], "");
        assert_eq!(body["invested_amount"], 0.0);
        assert!(body["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_update_investor_partial_fields() {
        let app = test_app();
        let token = bearer_token();

        let (_, created) = send(
            &app,
            request(
                "POST",
                "/api/investors",
                Some(&token),
                Some(json!({"full_name": "Alice", "invested_amount": 100.0})),
            ),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        // Name only; the amount stays.
        let (status, body) = send(
            &app,
            request(
                "PUT",
                &format!("/api/investors/{}", id),
                Some(&token),
                Some(json!({"full_name": "x"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["full_name"], "x");
        assert_eq!(body["invested_amount"], 100.0);

        // Zero is an overwrite, not an omission.
        let (_, body) = send(
            &app,
            request(
                "PUT",
                &format!("/api/investors/{}", id),
                Some(&token),
                Some(json!({"invested_amount": 0})),
            ),
        )
        .await;
        assert_eq!(body["full_name"], "x");
        assert_eq!(body["invested_amount"], 0.0);

        // Empty body: a no-op read-back.
        let (status, body) = send(
            &app,
            request(
                "PUT",
                &format!("/api/investors/{}", id),
                Some(&token),
                Some(json!({})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["full_name"], "x");
        assert_eq!(body["invested_amount"], 0.0);
    }

    #[tokio::test]
    async fn test_update_investor_non_numeric_id() {
        let app = test_app();
        let token = bearer_token();

        let (status, body) = send(
            &app,
            request(
                "PUT",
                "/api/investors/abc",
                Some(&token),
                Some(json!({"full_name": "x"})),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "invalid investor id"}));
    }

    #[tokio::test]
    async fn test_delete_investor() {
        let app = test_app();
        let token = bearer_token();

        let (_, created) = send(
            &app,
            request("POST", "/api/investors", Some(&token), Some(json!({}))),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            request(
                "DELETE",
                &format!("/api/investors/{}", id),
                Some(&token),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "deleted"}));

        let (_, listed) = send(&app, request("GET", "/api/investors", Some(&token), None)).await;
        assert_eq!(listed.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_create_payout_bad_period_persists_nothing() {
        let app = test_app();
        let token = bearer_token();

        for bad_period in ["2024-13", "bad"] {
            let (status, body) = send(
                &app,
                request(
                    "POST",
                    "/api/payouts",
                    Some(&token),
                    Some(json!({
                        "investorId": 1,
                        "periodMonth": bad_period,
                        "payoutAmount": 10.0,
                        "reinvest": false,
                        "isWithdrawalProfit": true,
                        "isWithdrawalCapital": false
                    })),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {:?}", bad_period);
            assert!(body["error"].is_string());
        }

        let (_, listed) = send(&app, request("GET", "/api/payouts", Some(&token), None)).await;
        assert_eq!(listed.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_payouts_listed_in_period_order() {
        let app = test_app();
        let token = bearer_token();

        for period in ["2024-02", "2024-01", "2024-03"] {
            let (status, _) = send(
                &app,
                request(
                    "POST",
                    "/api/payouts",
                    Some(&token),
                    Some(json!({
                        "investorId": 1,
                        "periodMonth": period,
                        "payoutAmount": 10.0,
                        "reinvest": true,
                        "isWithdrawalProfit": false,
                        "isWithdrawalCapital": false
                    })),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, listed) = send(&app, request("GET", "/api/payouts", Some(&token), None)).await;
        let months: Vec<&str> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["period_month"].as_str().unwrap())
            .collect();
        assert_eq!(months, vec!["2024-01-01", "2024-02-01", "2024-03-01"]);

        // Every row exposes the legacy name alongside the canonical one.
        for payout in listed.as_array().unwrap() {
            assert_eq!(payout["period_date"], payout["period_month"]);
        }
    }

    #[tokio::test]
    async fn test_topup_records_a_topup_payout() {
        let app = test_app();
        let token = bearer_token();

        let (status, body) = send(
            &app,
            request(
                "POST",
                "/api/payouts/topup",
                Some(&token),
                Some(json!({"investorId": 5, "periodMonth": "2024-04", "amount": 250.0})),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["investor_id"], 5);
        assert_eq!(body["payout_amount"], 250.0);
        assert_eq!(body["is_topup"], true);
        assert_eq!(body["reinvest"], false);
        assert_eq!(body["is_withdrawal_profit"], false);
        assert_eq!(body["is_withdrawal_capital"], false);
    }

    #[tokio::test]
    async fn test_payout_routes_require_auth() {
        let app = test_app();

        for (method, uri) in [
            ("GET", "/api/payouts"),
            ("POST", "/api/payouts"),
            ("POST", "/api/payouts/topup"),
            ("GET", "/api/investors"),
            ("POST", "/api/investors"),
            ("PUT", "/api/investors/1"),
            ("DELETE", "/api/investors/1"),
        ] {
            let (status, body) = send(&app, request(method, uri, None, Some(json!({})))).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
            assert_eq!(body, json!({"error": "missing token"}), "{} {}", method, uri);
        }
    }
}
