use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::CookieJar;

use crate::models::AppState;
use crate::session::SESSION_COOKIE;

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    let session = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.get(cookie.value()).await,
        None => None,
    };
    match session {
        Some(session) => dashboard_page(&session.user).into_response(),
        None => Redirect::to("/login?next=/").into_response(),
    }
}

const PAGE_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; } \
header { display: flex; justify-content: space-between; align-items: baseline; } \
table { border-collapse: collapse; width: 100%; margin-top: 1rem; } \
th, td { border: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; } \
th { background: #f6f8fa; } \
button { margin-right: 0.5rem; padding: 0.5rem 0.9rem; } \
.RUNNING { color: #0a60ff; } .QUEUED { color: #8a6d00; } \
.COMPLETED { color: #1a7f37; } .FAILED { color: #b00020; }";

const DASHBOARD_JS: &str = r#"
async function refresh() {
  const res = await fetch('/api/jobs?limit=50');
  const json = await res.json();
  if (!json.success) return;
  const rows = json.jobs.map(job => `
    <tr>
      <td>${job.id}</td>
      <td>${job.type}</td>
      <td class="${job.status}">${job.status}</td>
      <td>${job.created_at}</td>
      <td>${job.estimated_runtime}s</td>
      <td>${job.success_probability.toFixed(1)}%</td>
      <td>${job.manual ? 'manual' : 'auto'}</td>
    </tr>`);
  document.getElementById('jobsBody').innerHTML = rows.join('');
}

document.getElementById('createBtn').addEventListener('click', async () => {
  await fetch('/api/create_job', { method: 'POST' });
  refresh();
});

document.getElementById('clearBtn').addEventListener('click', async () => {
  const res = await fetch('/api/clear_completed', { method: 'POST' });
  const json = await res.json();
  document.getElementById('statusLine').textContent = json.message || '';
  refresh();
});

refresh();
setInterval(refresh, 2000);
"#;

fn dashboard_page(user: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Qubit Tracker - Dashboard</title>
  <style>{style}</style>
</head>
<body>
  <header>
    <h1>Quantum Jobs</h1>
    <div>Signed in as <strong>{user}</strong> &middot; <a href="/logout">Log out</a></div>
  </header>
  <div>
    <button id="createBtn">Create job</button>
    <button id="clearBtn">Clear completed</button>
    <span id="statusLine"></span>
  </div>
  <table>
    <thead>
      <tr>
        <th>ID</th><th>Algorithm</th><th>Status</th><th>Created</th>
        <th>Est. runtime</th><th>Success</th><th>Origin</th>
      </tr>
    </thead>
    <tbody id="jobsBody"></tbody>
  </table>
  <script>{js}</script>
</body>
</html>"#,
        style = PAGE_STYLE,
        user = user,
        js = DASHBOARD_JS,
    ))
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
    async fn test_anonymous_visitor_redirected_to_login() {
        let app = router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login?next=/"
        );
    }

    #[tokio::test]
    async fn test_session_holder_sees_dashboard() {
        let state = test_state();
        let token = state.sessions.create("admin").await;
        let app = router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, format!("{}={}", SESSION_COOKIE, token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Signed in as <strong>admin</strong>"));
    }
}
