//! HazSheet Hazard Extraction Service
//!
//! Upload a safety-data-sheet PDF, extract its GHS hazard codes, resolve
//! them against the reference workbook, and fetch the result table as JSON
//! or as a CSV download.

use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use hazsheet_extraction::pipeline::SdsProcessor;
use hazsheet_extraction::report;
use hazsheet_models::{HazardTable, ProcessingStatus};
use hazsheet_utils::{init_logging, AppConfig, ErrorResponse, HazSheetError};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.logging)?;
    info!("Starting HazSheet Hazard Extraction Service");

    let processor = SdsProcessor::new(&config.reference);

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/documents/upload", post(upload_document))
        .route("/api/v1/documents/:id", get(get_document))
        .route("/api/v1/documents/:id/extract", post(extract_codes))
        .route("/api/v1/documents/:id/export", get(export_csv))
        .layer(DefaultBodyLimit::max(config.server.max_request_size))
        .layer(TraceLayer::new_for_http())
        .with_state(processor);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(&addr).await?;
    info!("Hazard Extraction Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(error: HazSheetError) -> ApiError {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(error)))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "hazard-extraction",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Document upload response
#[derive(Debug, Serialize)]
pub struct DocumentUploadResponse {
    pub document_id: Uuid,
    pub file_name: String,
    pub file_type: String,
    pub file_size: usize,
    pub status: String,
}

/// Upload an SDS document. Only PDFs are accepted.
async fn upload_document(
    State(processor): State<SdsProcessor>,
    mut multipart: Multipart,
) -> Result<Json<DocumentUploadResponse>, ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| {
            error_response(HazSheetError::validation("file", format!("Upload error: {}", e)))
        })?
        .ok_or_else(|| error_response(HazSheetError::validation("file", "No file provided")))?;

    let file_name = field
        .file_name()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let file_type = field
        .content_type()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let data = field.bytes().await.map_err(|e| {
        error_response(HazSheetError::validation("file", format!("Read error: {}", e)))
    })?;

    let document_id = processor
        .store_document(&file_name, &file_type, &data)
        .await
        .map_err(error_response)?;

    Ok(Json(DocumentUploadResponse {
        document_id,
        file_name,
        file_type,
        file_size: data.len(),
        status: "uploaded".to_string(),
    }))
}

/// Document metadata plus the result table once extraction has run
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document_id: Uuid,
    pub file_name: String,
    pub file_type: String,
    pub file_size: usize,
    pub upload_date: DateTime<Utc>,
    pub processed_date: Option<DateTime<Utc>>,
    pub status: ProcessingStatus,
    pub result: Option<HazardTable>,
}

async fn get_document(
    State(processor): State<SdsProcessor>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let doc = processor
        .get_document(id)
        .await
        .ok_or_else(|| error_response(HazSheetError::not_found("document")))?;

    Ok(Json(DocumentResponse {
        document_id: doc.id,
        file_name: doc.file_name,
        file_type: doc.file_type,
        file_size: doc.file_size,
        upload_date: doc.upload_date,
        processed_date: doc.processed_date,
        status: doc.status,
        result: doc.result,
    }))
}

/// Extraction run response
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub document_id: Uuid,
    pub status: String,
    pub rows_found: usize,
    pub table: HazardTable,
}

/// Run the pipeline start-to-finish for a stored document.
async fn extract_codes(
    State(processor): State<SdsProcessor>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let table = processor.extract(id).await.map_err(error_response)?;

    Ok(Json(ExtractResponse {
        document_id: id,
        status: "extracted".to_string(),
        rows_found: table.len(),
        table,
    }))
}

/// Download the result table under the fixed export file name.
async fn export_csv(
    State(processor): State<SdsProcessor>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = processor.export(id).await.map_err(error_response)?;

    let headers = [
        (header::CONTENT_TYPE, report::EXPORT_MIME_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report::EXPORT_FILE_NAME),
        ),
    ];

    Ok((headers, bytes))
}
