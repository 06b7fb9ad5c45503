use crate::collection::{apply_amount, generate_numbers, project};
use crate::errors::AppError;
use crate::export;
use crate::models::{AddRequest, AddResponse, CollectionKind, EntriesResponse, SearchQuery};
use crate::state::AppState;
use crate::storage::{clear_collection, persist_collection};
use crate::ui::{render_collection, render_index};
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn collection_page(Path(slug): Path<String>) -> Result<Html<String>, AppError> {
    let kind = parse_kind(&slug)?;
    Ok(Html(render_collection(kind)))
}

pub async fn get_entries(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<EntriesResponse>, AppError> {
    let kind = parse_kind(&slug)?;
    let search = query.search.unwrap_or_default();
    let ledger = state.ledger.lock().await;
    Ok(Json(project(ledger.snapshot(kind), kind.range(), &search)))
}

pub async fn add_amount(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<AddRequest>,
) -> Result<Json<AddResponse>, AppError> {
    let kind = parse_kind(&slug)?;
    let mut ledger = state.ledger.lock().await;

    let applied = apply_amount(
        ledger.snapshot(kind),
        kind.range(),
        &payload.number,
        &payload.amount,
    )?;

    // Persist first so a write failure leaves the in-memory snapshot as-is.
    persist_collection(&state.data_dir, kind, &applied.numbers).await?;
    *ledger.snapshot_mut(kind) = applied.numbers;

    Ok(Json(AddResponse {
        number: applied.number,
        amount: applied.amount,
        new_total: applied.new_total,
    }))
}

pub async fn export_collection(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&slug)?;
    let numbers = state.ledger.lock().await.snapshot(kind).clone();

    let exported_at = Local::now();
    let bytes = export::build_workbook(&numbers, kind.range(), exported_at)?;
    let filename = export::export_filename(kind.slug(), exported_at);

    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, bytes))
}

pub async fn reset_collection(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<EntriesResponse>, AppError> {
    let kind = parse_kind(&slug)?;
    let mut ledger = state.ledger.lock().await;

    clear_collection(&state.data_dir, kind).await?;
    let fresh = generate_numbers(kind.range());
    let view = project(&fresh, kind.range(), "");
    *ledger.snapshot_mut(kind) = fresh;

    Ok(Json(view))
}

fn parse_kind(slug: &str) -> Result<CollectionKind, AppError> {
    CollectionKind::from_slug(slug)
        .ok_or_else(|| AppError::not_found(format!("unknown collection '{slug}'")))
}
