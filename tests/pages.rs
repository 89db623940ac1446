//! Router-level tests against a stub scheduling backend: a minimal axum app
//! on an ephemeral port that serves a canned room snapshot and records every
//! create/vote body it receives.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;

use meetsync::config::{BackendConfig, Config, DisplayConfig, ServerConfig};
use meetsync::models::{RoomSnapshot, RoomTime, RoomVote};
use meetsync::services::{rooms::RoomService, votes::VoteService};
use meetsync::AppState;

const ROOM_ID: &str = "0193a178-9a0b-7c8d-8a39-6a1f8f3a1b2c";

// ============================================================================
// Stub backend
// ============================================================================

#[derive(Clone)]
struct StubState {
    room: Option<RoomSnapshot>,
    created: Arc<Mutex<Vec<serde_json::Value>>>,
    votes: Arc<Mutex<Vec<serde_json::Value>>>,
}

async fn stub_get_room(State(stub): State<StubState>, Path(_id): Path<String>) -> Response {
    match &stub.room {
        Some(room) => Json(room.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn stub_create_room(
    State(stub): State<StubState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    stub.created.lock().await.push(body);
    Json(serde_json::json!({ "roomId": ROOM_ID })).into_response()
}

async fn stub_post_vote(
    State(stub): State<StubState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    stub.votes.lock().await.push(body);
    StatusCode::OK.into_response()
}

/// Spawn the stub on an ephemeral port; returns its base URL and the
/// recorders for received bodies.
async fn spawn_backend(room: Option<RoomSnapshot>) -> (String, StubState) {
    let stub = StubState {
        room,
        created: Arc::new(Mutex::new(Vec::new())),
        votes: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/api/room/:id", get(stub_get_room))
        .route("/api/room/", post(stub_create_room))
        .route("/api/vote", post(stub_post_vote))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), stub)
}

// ============================================================================
// Helpers
// ============================================================================

fn client_app(base_url: &str) -> Router {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        backend: BackendConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds: 5,
        },
        display: DisplayConfig {
            lang: "pt".to_string(),
        },
    };

    let rooms = RoomService::new(&config.backend).unwrap();
    let votes = VoteService::new(&config.backend).unwrap();
    meetsync::app(Arc::new(AppState {
        config,
        rooms,
        votes,
    }))
}

fn sample_room() -> RoomSnapshot {
    RoomSnapshot {
        room_id: ROOM_ID.to_string(),
        title: Some("Sprint Planning".to_string()),
        description: Some("Weekly sync".to_string()),
        emails: vec![],
        ending_at: "2099-01-01T12:00:00.000Z".to_string(),
        created_at: "2025-03-01T12:00:00.000Z".to_string(),
        updated_at: "2025-03-01T15:30:00.000Z".to_string(),
        times: vec![
            RoomTime {
                room_id: ROOM_ID.to_string(),
                time_id: "time-1".to_string(),
                date: "2025-03-10T12:00:00.000Z".to_string(),
                start: "2025-03-10T12:00:00.000Z".to_string(),
                end: "2025-03-10T13:30:00.000Z".to_string(),
                votes: vec![RoomVote {
                    vote_id: "vote-1".to_string(),
                    created_at: "2025-03-02T12:00:00.000Z".to_string(),
                    user_name: "Alice".to_string(),
                    time_id: "time-1".to_string(),
                }],
            },
            RoomTime {
                room_id: ROOM_ID.to_string(),
                time_id: "time-2".to_string(),
                date: "2025-03-11T18:00:00.000Z".to_string(),
                start: "2025-03-11T18:00:00.000Z".to_string(),
                end: "2025-03-11T19:00:00.000Z".to_string(),
                votes: vec![],
            },
        ],
    }
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

fn form_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ============================================================================
// Views
// ============================================================================

#[tokio::test]
async fn home_page_renders() {
    // The home view never touches the backend
    let app = client_app("http://127.0.0.1:9");

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("MeetSync"));
    assert!(body.contains("Criar uma sala"));
}

#[tokio::test]
async fn unmatched_paths_render_the_not_found_view() {
    let app = client_app("http://127.0.0.1:9");

    let response = app.oneshot(get_request("/definitely/missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("Página não encontrada"));
}

#[tokio::test]
async fn health_reports_the_crate_version() {
    let app = client_app("http://127.0.0.1:9");

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("healthy"));
    assert!(body.contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn room_view_renders_grid_and_podium_from_the_snapshot() {
    let (base_url, _stub) = spawn_backend(Some(sample_room())).await;
    let app = client_app(&base_url);

    let response = app
        .oneshot(get_request(&format!("/rooms/{}", ROOM_ID)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Sprint Planning"));
    // Raw stored wall-clock duration label
    assert!(body.contains("12:00 - 13:30"));
    // Grid cell carries the raw start as the selectable value
    assert!(body.contains(r#"value="2025-03-10T12:00:00.000Z""#));
    // Alice's vote puts the first slot on the podium
    assert!(body.contains("1º 🏅"));
    assert!(body.contains("1 voto(s)"));
}

#[tokio::test]
async fn unknown_room_renders_a_not_found_page() {
    let (base_url, _stub) = spawn_backend(None).await;
    let app = client_app(&base_url);

    let response = app
        .oneshot(get_request(&format!("/rooms/{}", ROOM_ID)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("Sala não encontrada"));
}

// ============================================================================
// Home form actions
// ============================================================================

#[tokio::test]
async fn join_rejects_a_malformed_room_id() {
    let app = client_app("http://127.0.0.1:9");

    let response = app
        .oneshot(form_request("/rooms/join", "room_id=abc".to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("ID inválido"));
}

#[tokio::test]
async fn join_redirects_to_the_room() {
    let app = client_app("http://127.0.0.1:9");

    let response = app
        .oneshot(form_request(
            "/rooms/join",
            format!("room_id={}", ROOM_ID),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("/rooms/{}", ROOM_ID)
    );
}

#[tokio::test]
async fn start_validates_the_organizer_name() {
    let app = client_app("http://127.0.0.1:9");

    let response = app
        .oneshot(form_request("/rooms/start", "name=Maria2".to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response)
        .await
        .contains("O nome deve conter apenas letras"));
}

// ============================================================================
// Room creation
// ============================================================================

fn valid_create_body() -> String {
    let slots = serde_json::json!([
        { "date": "2025-03-10", "times": [
            { "start": "09:00", "duration": "01:30" },
            { "start": "14:00", "duration": "01:00" },
        ]},
        { "date": "2025-03-11", "times": [{ "start": "10:00", "duration": "00:30" }] },
    ]);
    format!(
        "name=Maria%20Silva&title=Sprint%20Planning&description=Weekly&end_date=2025-03-20&end_time=12:00&slots={}",
        urlencoding::encode(&slots.to_string())
    )
}

#[tokio::test]
async fn create_room_converts_the_draft_and_redirects() {
    let (base_url, stub) = spawn_backend(None).await;
    let app = client_app(&base_url);

    let response = app
        .oneshot(form_request("/rooms", valid_create_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("/rooms/{}", ROOM_ID)
    );

    let created = stub.created.lock().await;
    assert_eq!(created.len(), 1);
    assert_eq!(created[0]["endingAt"], "2025-03-20T12:00:00.000Z");
    let times = created[0]["times"].as_array().unwrap();
    assert_eq!(times.len(), 3);
    assert_eq!(times[0]["start"], "2025-03-10T09:00:00.000Z");
    assert_eq!(times[0]["end"], "2025-03-10T10:30:00.000Z");
    assert_eq!(times[2]["start"], "2025-03-11T10:00:00.000Z");
}

#[tokio::test]
async fn create_room_validation_failure_never_reaches_the_backend() {
    let (base_url, stub) = spawn_backend(None).await;
    let app = client_app(&base_url);

    // Short title, no dates
    let response = app
        .oneshot(form_request(
            "/rooms",
            "name=Maria&title=Plan&end_date=2025-03-20&end_time=12:00&slots=".to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Título deve ter pelo menos 5 caracteres"));
    assert!(body.contains("Defina pelo menos uma data com um horário"));

    assert!(stub.created.lock().await.is_empty());
}

// ============================================================================
// Voting
// ============================================================================

#[tokio::test]
async fn vote_resolves_selected_slots_to_backend_ids() {
    let (base_url, stub) = spawn_backend(Some(sample_room())).await;
    let app = client_app(&base_url);

    let body = format!(
        "name=Bob&email=&slots={}&slots={}",
        urlencoding::encode("2025-03-10T12:00:00.000Z"),
        // Unknown value is silently dropped by the resolver
        urlencoding::encode("2099-01-01T00:00:00.000Z"),
    );
    let response = app
        .oneshot(form_request(&format!("/rooms/{}/votes", ROOM_ID), body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let votes = stub.votes.lock().await;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0]["userName"], "Bob");
    assert_eq!(votes[0]["times"], serde_json::json!(["time-1"]));
    // Empty optional email is omitted from the payload
    assert!(votes[0].get("email").is_none());
}

#[tokio::test]
async fn duplicate_voter_name_is_rejected_before_any_vote_call() {
    let (base_url, stub) = spawn_backend(Some(sample_room())).await;
    let app = client_app(&base_url);

    let body = format!(
        "name=Alice&slots={}",
        urlencoding::encode("2025-03-10T12:00:00.000Z")
    );
    let response = app
        .oneshot(form_request(&format!("/rooms/{}/votes", ROOM_ID), body))
        .await
        .unwrap();

    // Redirected back with a notification, nothing submitted
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(stub.votes.lock().await.is_empty());
}

#[tokio::test]
async fn vote_validation_failure_rerenders_with_field_messages() {
    let (base_url, stub) = spawn_backend(Some(sample_room())).await;
    let app = client_app(&base_url);

    let response = app
        .oneshot(form_request(
            &format!("/rooms/{}/votes", ROOM_ID),
            "name=Jo&email=not-an-email".to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("O nome deve ter pelo menos 3 caracteres"));
    assert!(body.contains("Digite um email válido"));
    assert!(body.contains("Selecione pelo menos um horário para votar."));

    assert!(stub.votes.lock().await.is_empty());
}

#[tokio::test]
async fn flash_notification_is_shown_once_after_a_redirect() {
    let (base_url, _stub) = spawn_backend(Some(sample_room())).await;

    let body = format!(
        "name=Carol&slots={}",
        urlencoding::encode("2025-03-11T18:00:00.000Z")
    );
    let response = client_app(&base_url)
        .oneshot(form_request(&format!("/rooms/{}/votes", ROOM_ID), body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    // Follow the redirect with the flash cookie attached
    let response = client_app(&base_url)
        .oneshot(
            Request::builder()
                .uri(&format!("/rooms/{}", ROOM_ID))
                .header(header::COOKIE, cookie.split(';').next().unwrap())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let cleared = response
        .headers()
        .get(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = body_string(response).await;
    assert!(body.contains("Voto registrado com sucesso."));
    // The cookie is cleared once rendered
    assert!(cleared.unwrap_or_default().contains("meetsync_flash="));
}
