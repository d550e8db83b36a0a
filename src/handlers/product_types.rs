use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;
use crate::db::models::ProductType;
use crate::db::queries;
use crate::error::{AppError, conflict_on_unique};
use crate::handlers::Pagination;
use crate::validation::validate_required;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewProductType {
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/product_type/",
    request_body = NewProductType,
    responses(
        (status = 200, description = "Product type created", body = ProductType),
        (status = 400, description = "Empty or duplicate name")
    ),
    tag = "ProductType"
)]
pub async fn create_product_type(
    State(state): State<AppState>,
    Json(payload): Json<NewProductType>,
) -> Result<impl IntoResponse, AppError> {
    validate_required("name", &payload.name)?;

    if queries::get_product_type_by_name(&state.db, &payload.name)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("name already occupied".to_string()));
    }

    let created = queries::insert_product_type(&state.db, &payload.name)
        .await
        .map_err(conflict_on_unique)?;
    tracing::info!(id = created.id, name = %created.name, "product type created");

    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/product_types/",
    params(Pagination),
    responses(
        (status = 200, description = "Product types in insertion order", body = [ProductType])
    ),
    tag = "ProductType"
)]
pub async fn list_product_types(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, AppError> {
    let product_types =
        queries::list_product_types(&state.db, pagination.skip(), pagination.limit()).await?;

    Ok(Json(product_types))
}

#[utoipa::path(
    get,
    path = "/product_type/name/{name}",
    params(("name" = String, Path, description = "Unique product type name")),
    responses(
        (status = 200, description = "Product type", body = ProductType),
        (status = 404, description = "No product type with that name")
    ),
    tag = "ProductType"
)]
pub async fn get_product_type_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product_type = queries::get_product_type_by_name(&state.db, &name)
        .await?
        .ok_or_else(|| AppError::NotFound("Product type not found".to_string()))?;

    Ok(Json(product_type))
}

#[utoipa::path(
    get,
    path = "/product_type/id/{id}",
    params(("id" = i32, Path, description = "Product type id")),
    responses(
        (status = 200, description = "Product type", body = ProductType),
        (status = 404, description = "No product type with that id")
    ),
    tag = "ProductType"
)]
pub async fn get_product_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product_type = queries::get_product_type_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product type not found".to_string()))?;

    Ok(Json(product_type))
}
