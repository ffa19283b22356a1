//! SteriFlow BOM Service
//!
//! Compiles sink configurations into Bills of Materials against the
//! assembly catalog snapshot loaded at startup.

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use steriflow_models::{BomEntry, SinkConfiguration};
use steriflow_utils::{
    init_logging, validate_model, write_bom_csv, AppConfig, AssemblyCatalog, BomCompiler,
    CompileGap,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting SteriFlow BOM Service");

    // Load the catalog snapshot once; a failed load is fatal
    let catalog = AssemblyCatalog::load(&config.catalog.path)
        .with_context(|| format!("Failed to load assembly catalog from {}", config.catalog.path))?;
    info!("Assembly catalog loaded with {} entries", catalog.len());

    let compiler = BomCompiler::new(Arc::new(catalog));

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/assemblies/:code", get(get_assembly))
        .route("/api/v1/bom/compile", post(compile_bom))
        .route("/api/v1/bom/compile/batch", post(compile_batch))
        .route("/api/v1/bom/export", post(export_bom))
        .layer(TraceLayer::new_for_http())
        .with_state(compiler);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = TcpListener::bind(&addr).await?;
    info!("BOM Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check(State(compiler): State<BomCompiler>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "bom-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "catalog_assemblies": compiler.catalog().len()
    }))
}

/// Look up one assembly in the catalog snapshot
#[derive(Debug, Serialize)]
struct AssemblyResponse {
    assembly_code: String,
    name: String,
    is_kit: bool,
    can_order: bool,
    status: String,
}

async fn get_assembly(
    State(compiler): State<BomCompiler>,
    Path(code): Path<String>,
) -> Result<Json<AssemblyResponse>, (StatusCode, String)> {
    let record = compiler
        .catalog()
        .get(&code)
        .ok_or((StatusCode::NOT_FOUND, format!("Assembly {} not found", code)))?;

    Ok(Json(AssemblyResponse {
        assembly_code: code,
        name: record.name.clone(),
        is_kit: record.is_kit,
        can_order: record.can_order,
        status: record.status.clone(),
    }))
}

/// Compile one sink configuration
///
/// POST /api/v1/bom/compile
#[derive(Debug, Serialize)]
struct CompileResponse {
    build_number: String,
    entries: Vec<BomEntry>,
    entry_count: usize,
    gaps: Vec<CompileGap>,
}

async fn compile_bom(
    State(compiler): State<BomCompiler>,
    Json(configuration): Json<SinkConfiguration>,
) -> Result<Json<CompileResponse>, (StatusCode, String)> {
    validate_model(&configuration).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    if configuration.sink_model.basin_count() != configuration.basins.len() {
        warn!(
            build_number = %configuration.build_number,
            model = ?configuration.sink_model,
            basins = configuration.basins.len(),
            "Basin count does not match sink model"
        );
    }

    let compiled = compiler.compile_with_diagnostics(&configuration);

    Ok(Json(CompileResponse {
        build_number: compiled.build_number,
        entry_count: compiled.entries.len(),
        entries: compiled.entries,
        gaps: compiled.gaps,
    }))
}

/// Compile every configuration of a multi-unit order
///
/// POST /api/v1/bom/compile/batch
#[derive(Debug, Deserialize)]
struct BatchCompileRequest {
    configurations: Vec<SinkConfiguration>,
}

#[derive(Debug, Serialize)]
struct BatchCompileResponse {
    batch_id: Uuid,
    results: Vec<BatchCompileResult>,
    compiled: usize,
    rejected: usize,
}

#[derive(Debug, Serialize)]
struct BatchCompileResult {
    build_number: String,
    entries: Vec<BomEntry>,
    gaps: Vec<CompileGap>,
    error: Option<String>,
}

async fn compile_batch(
    State(compiler): State<BomCompiler>,
    Json(request): Json<BatchCompileRequest>,
) -> Json<BatchCompileResponse> {
    let batch_id = Uuid::new_v4();
    let mut results = Vec::with_capacity(request.configurations.len());
    let mut rejected = 0;

    for configuration in &request.configurations {
        match validate_model(configuration) {
            Ok(()) => {
                let compiled = compiler.compile_with_diagnostics(configuration);
                results.push(BatchCompileResult {
                    build_number: compiled.build_number,
                    entries: compiled.entries,
                    gaps: compiled.gaps,
                    error: None,
                });
            }
            Err(e) => {
                rejected += 1;
                results.push(BatchCompileResult {
                    build_number: configuration.build_number.clone(),
                    entries: Vec::new(),
                    gaps: Vec::new(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    info!(
        batch_id = %batch_id,
        total = request.configurations.len(),
        rejected,
        "Compiled BOM batch"
    );

    Json(BatchCompileResponse {
        batch_id,
        compiled: results.len() - rejected,
        rejected,
        results,
    })
}

/// Compile one configuration and render it as CSV
///
/// POST /api/v1/bom/export
async fn export_bom(
    State(compiler): State<BomCompiler>,
    Json(configuration): Json<SinkConfiguration>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    validate_model(&configuration).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let entries = compiler.compile(&configuration);
    let csv = write_bom_csv(&entries)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        csv,
    ))
}
