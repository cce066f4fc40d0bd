// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! HTTP boundary for frame processing.
//!
//! One worker endpoint (`POST /process_frame`) plus health and model-info
//! routes, permissive CORS, and Swagger UI. The landmark model is shared
//! state behind a `tokio::sync::Mutex`: ort sessions take `&mut` to run, so
//! concurrent requests serialize on inference.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::error::{PostureError, Result};
use crate::model::LandmarkModel;
use crate::report::PostureReport;

/// Shared application state.
pub struct AppState {
    /// The pose landmark model; single-owner, serialized behind the mutex.
    model: Mutex<LandmarkModel>,
    /// Path the model was loaded from, for `/info`.
    model_path: String,
}

impl AppState {
    /// Wrap a loaded model into shared state.
    #[must_use]
    pub fn new(model: LandmarkModel, model_path: String) -> Self {
        Self {
            model: Mutex::new(model),
            model_path,
        }
    }
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    /// Error message
    error: String,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Server status
    status: String,
    /// API version
    version: String,
}

#[derive(Serialize, ToSchema)]
struct InfoResponse {
    /// Path to the loaded model
    model_path: String,
    /// Model input size (height, width)
    input_size: (usize, usize),
    /// Number of landmarks the model emits
    num_landmarks: usize,
}

// OpenAPI Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Posture Inference Server",
        description = "Cycling-posture analysis API. Upload a frame to get body landmarks and per-joint angle checks against ideal ranges.",
        version = "0.1.0"
    ),
    paths(root, health, info, process_frame),
    components(schemas(
        crate::landmarks::Landmark,
        crate::joints::JointAngle,
        PostureReport,
        ErrorResponse,
        HealthResponse,
        InfoResponse
    )),
    tags(
        (name = "posture", description = "Frame processing endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
struct ApiDoc;

/// Build the application router.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    // Browser clients post frames from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/process_frame", post(process_frame))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PostureError::ServerError(format!("Failed to bind {addr}: {e}")))?;

    let local = listener
        .local_addr()
        .map_err(|e| PostureError::ServerError(format!("Failed to read local addr: {e}")))?;
    tracing::info!("Server listening on {local}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| PostureError::ServerError(format!("Server failed: {e}")))
}

/// Root endpoint
///
/// Returns a welcome message.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Welcome message", body = String)
    )
)]
async fn root() -> &'static str {
    "Posture Inference Server - POST /process_frame with an image file. Swagger UI at /swagger-ui/"
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Model information endpoint
#[utoipa::path(
    get,
    path = "/info",
    tag = "posture",
    responses(
        (status = 200, description = "Model information", body = InfoResponse)
    )
)]
async fn info(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    let model = state.model.lock().await;
    Json(InfoResponse {
        model_path: state.model_path.clone(),
        input_size: model.input_size(),
        num_landmarks: model.num_landmarks(),
    })
}

/// Analyze a single frame
///
/// Upload an encoded image in the multipart field `file`. The response lists
/// every detected landmark and the measured joint angles with their
/// ideal-range classification. A frame with no body present yields empty
/// landmarks and angles with status 200.
#[utoipa::path(
    post,
    path = "/process_frame",
    tag = "posture",
    request_body(content_type = "multipart/form-data", description = "Image file to analyze"),
    responses(
        (status = 200, description = "Posture report", body = PostureReport),
        (status = 400, description = "Bad request - invalid image or missing field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn process_frame(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> std::result::Result<Json<PostureReport>, (StatusCode, Json<ErrorResponse>)> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let data = field.bytes().await.map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read field: {e}"),
                }),
            )
        })?;

        let img = image::load_from_memory(&data).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid image: {e}"),
                }),
            )
        })?;

        let mut model = state.model.lock().await;
        let detection = model.detect(&img).map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Inference failed: {e}"),
                }),
            )
        })?;
        drop(model);

        return Ok(Json(PostureReport::from_detection(detection)));
    }

    Err((
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Missing 'file' field".to_string(),
        }),
    ))
}
