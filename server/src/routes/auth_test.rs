use super::*;
use axum::body::to_bytes;
use axum::extract::FromRequestParts;
use axum::http::header;
use crate::state::test_helpers::test_app_state;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

fn login_request(username: &str, password: &str) -> Json<LoginRequest> {
    Json(LoginRequest { username: username.into(), password: password.into() })
}

#[test]
fn parse_bool_accepts_common_spellings() {
    assert_eq!(parse_bool("1"), Some(true));
    assert_eq!(parse_bool("TRUE"), Some(true));
    assert_eq!(parse_bool(" yes "), Some(true));
    assert_eq!(parse_bool("0"), Some(false));
    assert_eq!(parse_bool("off"), Some(false));
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

#[tokio::test]
async fn login_with_demo_credentials_sets_cookie() {
    let state = test_app_state();

    let response = login(State(state), CookieJar::new(), login_request("admin", "abc123")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set a cookie")
        .to_str()
        .expect("cookie header should be ascii")
        .to_owned();
    assert!(set_cookie.starts_with("session_token="));
    assert!(set_cookie.contains("HttpOnly"));

    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["username"], "admin");
}

#[tokio::test]
async fn login_with_wrong_credentials_is_unauthorized() {
    let state = test_app_state();

    let response = login(State(state), CookieJar::new(), login_request("admin", "nope")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid credentials. Use username: admin, password: abc123");
}

#[tokio::test]
async fn login_issues_server_side_session() {
    let state = test_app_state();

    let response = login(State(state.clone()), CookieJar::new(), login_request("admin", "abc123")).await;
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().expect("ascii").to_owned();
    let token = set_cookie
        .trim_start_matches("session_token=")
        .split(';')
        .next()
        .expect("cookie value");

    let user = state.sessions.validate(token).await.expect("session should exist");
    assert_eq!(user.username, "admin");
}

#[tokio::test]
async fn extractor_rejects_missing_cookie() {
    let state = test_app_state();

    let request = axum::http::Request::builder().body(()).expect("build request");
    let (mut parts, ()) = request.into_parts();

    let result = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn extractor_rejects_unknown_token() {
    let state = test_app_state();

    let request = axum::http::Request::builder()
        .header(header::COOKIE, "session_token=deadbeef")
        .body(())
        .expect("build request");
    let (mut parts, ()) = request.into_parts();

    let result = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn extractor_accepts_valid_session() {
    let state = test_app_state();
    let token = state.sessions.create("admin").await;

    let request = axum::http::Request::builder()
        .header(header::COOKIE, format!("session_token={token}"))
        .body(())
        .expect("build request");
    let (mut parts, ()) = request.into_parts();

    let auth = AuthUser::from_request_parts(&mut parts, &state).await.expect("valid session");
    assert_eq!(auth.user.username, "admin");
    assert_eq!(auth.token, token);
}

#[tokio::test]
async fn logout_deletes_session_and_expires_cookie() {
    let state = test_app_state();
    let token = state.sessions.create("admin").await;

    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, token.clone()));
    let response = logout(State(state.clone()), jar).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(state.sessions.validate(&token).await.is_none());

    let set_cookie: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().expect("ascii").to_owned())
        .collect();
    assert!(set_cookie.iter().any(|c| c.starts_with("session_token=") && c.contains("Max-Age=0")));
}

#[tokio::test]
async fn logout_without_session_still_succeeds() {
    let state = test_app_state();
    let response = logout(State(state), CookieJar::new()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn me_returns_session_user() {
    let state = test_app_state();
    let token = state.sessions.create("admin").await;
    let user = state.sessions.validate(&token).await.expect("session");

    let Json(body) = me(AuthUser { user, token }).await;
    assert_eq!(body.username, "admin");
}
