use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;
use crate::db::models::Product;
use crate::db::queries;
use crate::error::{AppError, conflict_on_unique};
use crate::handlers::Pagination;
use crate::validation::validate_required;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub product_type_id: i32,
}

#[utoipa::path(
    post,
    path = "/product/",
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, description = "Empty or duplicate name")
    ),
    tag = "Product"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("name", &payload.name)?;

    if queries::get_product_by_name(&state.db, &payload.name)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("name already occupied".to_string()));
    }

    let created = queries::insert_product(&state.db, &payload.name, payload.product_type_id)
        .await
        .map_err(conflict_on_unique)?;
    tracing::info!(id = created.id, name = %created.name, "product created");

    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/products/",
    params(Pagination),
    responses(
        (status = 200, description = "Products in insertion order", body = [Product])
    ),
    tag = "Product"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let products = queries::list_products(&state.db, pagination.skip(), pagination.limit()).await?;

    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/product/name/{name}",
    params(("name" = String, Path, description = "Unique product name")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "No product with that name")
    ),
    tag = "Product"
)]
pub async fn get_product_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = queries::get_product_by_name(&state.db, &name)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

#[utoipa::path(
    get,
    path = "/product/id/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "No product with that id")
    ),
    tag = "Product"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = queries::get_product_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}
