use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;
use crate::db::models::Transaction;
use crate::db::queries;
use crate::error::AppError;
use crate::handlers::Pagination;
use crate::validation::validate_recipient;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewTransaction {
    pub recipient: String,
}

#[utoipa::path(
    post,
    path = "/transaction/",
    request_body = NewTransaction,
    responses(
        (status = 200, description = "Transaction created", body = Transaction),
        (status = 400, description = "Recipient code fails a format rule")
    ),
    tag = "Transaction"
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<NewTransaction>,
) -> Result<impl IntoResponse, AppError> {
    validate_recipient(&payload.recipient).map_err(|e| AppError::Format(e.message))?;

    let created = queries::insert_transaction(&state.db, &payload.recipient).await?;
    tracing::info!(id = created.id, recipient = %created.recipient, "transaction created");

    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/transactions/",
    params(Pagination),
    responses(
        (status = 200, description = "Transactions in insertion order", body = [Transaction])
    ),
    tag = "Transaction"
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let transactions =
        queries::list_transactions(&state.db, pagination.skip(), pagination.limit()).await?;

    Ok(Json(transactions))
}

/// Exact-match listing by recipient code. An unknown code yields an empty
/// list with 200, never 404.
#[utoipa::path(
    get,
    path = "/transactions/recipient/{code}",
    params(
        ("code" = String, Path, description = "Recipient code"),
        Pagination,
    ),
    responses(
        (status = 200, description = "Transactions for the recipient, possibly empty", body = [Transaction])
    ),
    tag = "Transaction"
)]
pub async fn list_transactions_by_recipient(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let transactions = queries::list_transactions_by_recipient(
        &state.db,
        &code,
        pagination.skip(),
        pagination.limit(),
    )
    .await?;

    Ok(Json(transactions))
}

#[utoipa::path(
    get,
    path = "/transaction/id/{id}",
    params(("id" = i32, Path, description = "Transaction id")),
    responses(
        (status = 200, description = "Transaction", body = Transaction),
        (status = 404, description = "No transaction with that id")
    ),
    tag = "Transaction"
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = queries::get_transaction_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))?;

    Ok(Json(transaction))
}
