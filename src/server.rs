//! HTTP extraction service
//!
//! Thin plumbing around the report parser for the upstream backend: a
//! health-check endpoint and a multipart upload endpoint that validates the
//! file type and report date, spools the upload to a scoped temporary file,
//! runs the extraction pipeline, and returns numeric markers as JSON.
//!
//! All validation happens before the core runs; per-record numeric
//! conversion failures are silently dropped rather than reported, matching
//! the extraction contract.

use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::app::models::{NumericMarker, ReportDate};
use crate::app::services::report_parser::ReportParser;
use crate::config::ServerConfig;
use crate::constants::is_pdf_filename;
use crate::{Error, Result};

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    parser: Arc<ReportParser>,
}

/// Response payload for the extraction endpoint
#[derive(Debug, Serialize)]
pub struct ExtractionResponse {
    pub success: bool,

    #[serde(rename = "reportDate")]
    pub report_date: String,

    pub markers: Vec<NumericMarker>,

    pub count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResponse {
    fn success(report_date: String, markers: Vec<NumericMarker>) -> Self {
        let count = markers.len();
        Self {
            success: true,
            report_date,
            markers,
            count,
            error: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            report_date: String::new(),
            markers: Vec::new(),
            count: 0,
            error: Some(message.into()),
        }
    }
}

type HandlerError = (StatusCode, Json<ExtractionResponse>);

fn reject(status: StatusCode, message: impl Into<String>) -> HandlerError {
    (status, Json(ExtractionResponse::failure(message)))
}

/// Build the service router for a validated configuration
pub fn router(config: &ServerConfig) -> Result<Router> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                Error::configuration(format!("Invalid allowed origin '{}': {}", origin, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Permissive policy scoped to the fixed upstream caller origins
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let state = AppState {
        parser: Arc::new(ReportParser::new()),
    };

    Ok(Router::new()
        .route("/health", get(health_check))
        .route("/extract-report", post(extract_report))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

/// Run the extraction service until ctrl-c
pub async fn serve(config: ServerConfig) -> Result<()> {
    config.validate()?;

    let addr = config.bind_addr()?;
    let app = router(&config)?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::io(format!("Failed to bind {}", addr), e))?;
    info!("Extraction service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::io("Server error", e))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    info!("Shutdown signal received, stopping service");
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "labreport-extractor",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Extract lab markers from an uploaded PDF report.
///
/// Expects multipart form fields `file`, `memberId`, and `reportDate`
/// (strict YYYY-MM-DD). Input validation failures are 400s; an unreadable
/// document is a 500 with no partial results.
async fn extract_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> std::result::Result<Json<ExtractionResponse>, HandlerError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut member_id: Option<String> = None;
    let mut report_date: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| reject(StatusCode::BAD_REQUEST, format!("Upload error: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let data = field.bytes().await.map_err(|e| {
                    reject(StatusCode::BAD_REQUEST, format!("Read error: {}", e))
                })?;
                file = Some((filename, data.to_vec()));
            }
            "memberId" => {
                member_id = Some(field.text().await.map_err(|e| {
                    reject(StatusCode::BAD_REQUEST, format!("Read error: {}", e))
                })?);
            }
            "reportDate" => {
                report_date = Some(field.text().await.map_err(|e| {
                    reject(StatusCode::BAD_REQUEST, format!("Read error: {}", e))
                })?);
            }
            _ => {}
        }
    }

    let (filename, data) =
        file.ok_or_else(|| reject(StatusCode::BAD_REQUEST, "No file provided"))?;
    let member_id =
        member_id.ok_or_else(|| reject(StatusCode::BAD_REQUEST, "No memberId provided"))?;
    let report_date =
        report_date.ok_or_else(|| reject(StatusCode::BAD_REQUEST, "No reportDate provided"))?;

    if !is_pdf_filename(&filename) {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "Only PDF files are supported",
        ));
    }

    let report_date = ReportDate::parse(&report_date).map_err(|_| {
        reject(
            StatusCode::BAD_REQUEST,
            "Invalid date format. Use YYYY-MM-DD",
        )
    })?;

    debug!(
        "Extracting '{}' for member {} ({} bytes)",
        filename,
        member_id,
        data.len()
    );

    // Spool to a scoped temp file; the file is removed when the guard drops,
    // including on every error path below.
    let mut temp_file = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| {
            reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create temporary file: {}", e),
            )
        })?;
    temp_file.write_all(&data).map_err(|e| {
        reject(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to write temporary file: {}", e),
        )
    })?;

    let result = state.parser.extract_file(temp_file.path()).map_err(|e| {
        reject(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Extraction failed: {}", e),
        )
    })?;

    // Drop records whose raw result does not convert to a finite number
    let markers: Vec<NumericMarker> = result
        .markers
        .iter()
        .filter_map(|marker| marker.to_numeric())
        .collect();

    info!(
        "Extracted {} numeric markers from '{}' for member {}",
        markers.len(),
        filename,
        member_id
    );

    Ok(Json(ExtractionResponse::success(
        report_date.to_string(),
        markers,
    )))
}
