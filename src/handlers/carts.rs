use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;
use crate::db::models::Cart;
use crate::db::queries;
use crate::error::AppError;
use crate::validation::validate_positive_quantity;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewCart {
    pub transaction_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

#[utoipa::path(
    post,
    path = "/cart/",
    request_body = NewCart,
    responses(
        (status = 200, description = "Cart line-item created", body = Cart),
        (status = 400, description = "Non-positive quantity")
    ),
    tag = "Cart"
)]
pub async fn create_cart(
    State(state): State<AppState>,
    Json(payload): Json<NewCart>,
) -> Result<impl IntoResponse, AppError> {
    validate_positive_quantity(payload.quantity)?;

    let created = queries::insert_cart(
        &state.db,
        payload.transaction_id,
        payload.product_id,
        payload.quantity,
    )
    .await?;
    tracing::info!(
        id = created.id,
        transaction_id = created.transaction_id,
        product_id = created.product_id,
        "cart line-item created"
    );

    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/cart/id/{id}",
    params(("id" = i32, Path, description = "Cart id")),
    responses(
        (status = 200, description = "Cart line-item", body = Cart),
        (status = 404, description = "No cart with that id")
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cart = queries::get_cart_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))?;

    Ok(Json(cart))
}

#[utoipa::path(
    get,
    path = "/cart/transaction/{transaction_id}",
    params(("transaction_id" = i32, Path, description = "Transaction id")),
    responses(
        (status = 200, description = "First cart line-item for the transaction", body = Cart),
        (status = 404, description = "No cart for that transaction")
    ),
    tag = "Cart"
)]
pub async fn get_cart_by_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cart = queries::get_cart_by_transaction(&state.db, transaction_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))?;

    Ok(Json(cart))
}

#[utoipa::path(
    get,
    path = "/cart/product/{product_id}",
    params(("product_id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "First cart line-item for the product", body = Cart),
        (status = 404, description = "No cart for that product")
    ),
    tag = "Cart"
)]
pub async fn get_cart_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cart = queries::get_cart_by_product(&state.db, product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))?;

    Ok(Json(cart))
}
