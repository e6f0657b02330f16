// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test fixture: an in-process backend speaking the same REST
//! contract as production, with seeded demo data.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use skillswap::models::{SwapRequest, SwapStatus, SwapStatusUpdate, User};
use skillswap::storage::Storage;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub const DEMO_EMAIL: &str = "demo@example.com";
#[allow(dead_code)]
pub const DEMO_PASSWORD: &str = "password";

/// Backend state shared with the test body for assertions and fault
/// injection.
pub struct BackendState {
    pub users: Vec<User>,
    pub swaps: Mutex<Vec<SwapRequest>>,
    next_id: AtomicU64,
    /// When set, GET /users answers 500.
    pub fail_users: AtomicBool,
}

pub struct TestBackend {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

/// Spawn the fixture backend on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_backend() -> TestBackend {
    let state = Arc::new(BackendState {
        users: seed_users(),
        swaps: Mutex::new(Vec::new()),
        next_id: AtomicU64::new(1),
        fail_users: AtomicBool::new(false),
    });

    let app = Router::new()
        .route("/users", get(list_users))
        .route("/auth/login", post(login))
        .route("/swaps/my-swaps", get(list_my_swaps))
        .route("/swaps", post(create_swap))
        .route("/swaps/{id}/status", put(update_swap_status))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test backend");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test backend");
    });

    TestBackend {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// Per-test storage directory, wiped before use.
#[allow(dead_code)]
pub fn temp_storage(tag: &str) -> Storage {
    let dir = std::env::temp_dir().join(format!("skillswap-it-{}-{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    Storage::new(dir).expect("storage should open")
}

/// Seeded profiles. User "1" is the demo login identity.
#[allow(dead_code)]
pub fn seed_users() -> Vec<User> {
    vec![
        user(
            "1",
            "Alex Johnson",
            DEMO_EMAIL,
            &["React", "TypeScript", "Node.js"],
            &["Python", "Machine Learning", "AWS"],
            "evenings",
            true,
        ),
        user(
            "2",
            "Sarah Chen",
            "sarah@example.com",
            &["Python", "Data Science", "Machine Learning"],
            &["React", "Frontend Development"],
            "weekends",
            true,
        ),
        user(
            "3",
            "Marcus Rodriguez",
            "marcus@example.com",
            &["AWS", "DevOps", "Docker"],
            &["Mobile Development", "Swift"],
            "evenings",
            true,
        ),
        user(
            "4",
            "Emma Thompson",
            "emma@example.com",
            &["UI/UX Design", "Figma"],
            &["Vue.js", "Nuxt.js"],
            "flexible",
            true,
        ),
        user(
            "5",
            "David Park",
            "david@example.com",
            &["Mobile Development", "Flutter", "iOS"],
            &["Backend Development", "PostgreSQL"],
            "weekends",
            true,
        ),
    ]
}

fn user(
    id: &str,
    name: &str,
    email: &str,
    offered: &[&str],
    wanted: &[&str],
    availability: &str,
    is_public: bool,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        location: None,
        profile_photo: None,
        skills_offered: offered.iter().map(|s| s.to_string()).collect(),
        skills_wanted: wanted.iter().map(|s| s.to_string()).collect(),
        availability: availability.to_string(),
        is_public,
        average_rating: 0.0,
        review_count: 0,
    }
}

// ─── Handlers ────────────────────────────────────────────────────────

async fn list_users(State(state): State<Arc<BackendState>>) -> Response {
    if state.fail_users.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "backend down").into_response();
    }
    Json(state.users.clone()).into_response()
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login(State(state): State<Arc<BackendState>>, Json(body): Json<LoginBody>) -> Response {
    if body.email == DEMO_EMAIL && body.password == DEMO_PASSWORD {
        let user = state.users[0].clone();
        let token = format!("token-{}", user.id);
        return Json(serde_json::json!({ "user": user, "token": token })).into_response();
    }
    (StatusCode::UNAUTHORIZED, "invalid credentials").into_response()
}

/// Bearer tokens have the shape `token-{userId}`.
fn bearer_identity(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    token.strip_prefix("token-").map(|id| id.to_string())
}

async fn list_my_swaps(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    let Some(user_id) = bearer_identity(&headers) else {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    };

    let swaps = state.swaps.lock().unwrap();
    let mine: Vec<SwapRequest> = swaps
        .iter()
        .filter(|s| s.from_user_id == user_id || s.to_user_id == user_id)
        .cloned()
        .collect();
    Json(mine).into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSwapBody {
    to_user_id: String,
    offered_skill: String,
    wanted_skill: String,
    #[serde(default)]
    message: Option<String>,
}

async fn create_swap(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(body): Json<CreateSwapBody>,
) -> Response {
    let Some(from_user_id) = bearer_identity(&headers) else {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    };

    if body.to_user_id.is_empty() || body.offered_skill.is_empty() || body.wanted_skill.is_empty() {
        return (StatusCode::BAD_REQUEST, "missing required swap fields").into_response();
    }

    let from_user = state.users.iter().find(|u| u.id == from_user_id);
    let to_user = state.users.iter().find(|u| u.id == body.to_user_id);
    let (Some(from_user), Some(to_user)) = (from_user, to_user) else {
        return (StatusCode::BAD_REQUEST, "unknown participant").into_response();
    };

    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    let now = "2026-01-15T10:30:00Z".to_string();
    let swap = SwapRequest {
        id: format!("swap-{}", id),
        from_user_id,
        to_user_id: body.to_user_id,
        from_user: from_user.clone(),
        to_user: to_user.clone(),
        offered_skill: body.offered_skill,
        wanted_skill: body.wanted_skill,
        message: body.message,
        status: SwapStatus::Pending,
        created_at: now.clone(),
        updated_at: now,
    };

    state.swaps.lock().unwrap().push(swap.clone());
    Json(swap).into_response()
}

async fn update_swap_status(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(update): Json<SwapStatusUpdate>,
) -> Response {
    if bearer_identity(&headers).is_none() {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    }

    let mut swaps = state.swaps.lock().unwrap();
    let Some(swap) = swaps.iter_mut().find(|s| s.id == id) else {
        return (StatusCode::NOT_FOUND, "no such swap").into_response();
    };

    swap.status = update.status;
    swap.updated_at = update.updated_at;
    Json(swap.clone()).into_response()
}
