use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::info;

use crate::models::{AppState, LoginForm, LoginQuery};
use crate::session::SESSION_COOKIE;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", get(login_form).post(login_submit))
        .route("/logout", get(logout).post(logout))
        .with_state(state)
}

const PAGE_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; } \
.card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; max-width: 360px; } \
label { display: block; margin-top: 0.75rem; font-weight: 600; } \
input { width: 100%; padding: 0.5rem; } \
button { margin-top: 1rem; padding: 0.6rem 1rem; } \
.error { color: #b00020; }";

fn login_page(error: Option<&str>) -> Html<String> {
    let error_html = match error {
        Some(msg) => format!("<p class=\"error\">{}</p>", msg),
        None => String::new(),
    };
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Qubit Tracker - Login</title>
  <style>{style}</style>
</head>
<body>
  <h1>Qubit Tracker</h1>
  <div class="card">
    <h2>Sign in</h2>
    {error}
    <form method="post">
      <label>Username</label>
      <input name="username" autofocus />
      <label>Password</label>
      <input name="password" type="password" />
      <button type="submit">Sign in</button>
    </form>
  </div>
</body>
</html>"#,
        style = PAGE_STYLE,
        error = error_html,
    ))
}

async fn login_form() -> Html<String> {
    login_page(None)
}

async fn login_submit(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let valid = state
        .config
        .auth
        .users
        .iter()
        .any(|(user, pass)| *user == form.username && *pass == form.password);
    if !valid {
        return login_page(Some("Invalid username or password")).into_response();
    }

    let token = state.sessions.create(&form.username).await;
    info!(user = %form.username, "User logged in");

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();

    // Only follow local redirect targets.
    let next = match query.next {
        Some(ref next) if next.starts_with('/') => next.as_str(),
        _ => "/",
    };
    (jar.add(cookie), Redirect::to(next)).into_response()
}

async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.remove(cookie.value()).await;
    }
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(removal), Redirect::to("/login")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::{AuthConfig, Config, ServerConfig, SimulatorConfig};
    use crate::session::SessionStore;
    use crate::simulator::JobSimulator;

    fn test_state() -> AppState {
        let config = Config {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
                cors_allowed_origins: Vec::new(),
            },
            simulator: SimulatorConfig {
                max_jobs: 200,
                tick_secs: 2,
                display_tz: "UTC".to_string(),
            },
            auth: AuthConfig {
                users: vec![("admin".to_string(), "admin".to_string())],
            },
        };
        AppState {
            simulator: JobSimulator::new(config.simulator.clone()),
            sessions: SessionStore::default(),
            config,
        }
    }

    #[tokio::test]
    async fn test_login_sets_cookie_and_redirects() {
        let app = router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("username=admin&password=admin"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with(SESSION_COOKIE));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn test_bad_credentials_rerender_form() {
        let app = router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("username=admin&password=wrong"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Invalid username or password"));
    }

    #[tokio::test]
    async fn test_login_follows_local_next_only() {
        let app = router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login?next=https://evil.example/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("username=admin&password=admin"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }

    #[tokio::test]
    async fn test_logout_removes_session() {
        let state = test_state();
        let token = state.sessions.create("admin").await;
        let app = router(state.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/logout")
                    .header(header::COOKIE, format!("{}={}", SESSION_COOKIE, token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
        assert!(state.sessions.get(&token).await.is_none());
    }
}
