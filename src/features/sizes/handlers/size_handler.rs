use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, FormPayload};
use crate::features::sizes::dtos::{CreateSizeDto, UpdateSizeDto};
use crate::features::sizes::models::Size;
use crate::features::sizes::services::SizeService;
use crate::shared::types::{ApiResponse, ReorderDto, StatusQuery};

#[utoipa::path(
    post,
    path = "/api/v1/size",
    request_body = CreateSizeDto,
    responses(
        (status = 201, description = "Size created", body = ApiResponse<Size>),
        (status = 400, description = "Validation failed")
    ),
    tag = "sizes"
)]
pub async fn create_size(
    State(service): State<Arc<SizeService>>,
    form: FormPayload,
) -> Result<(StatusCode, Json<ApiResponse<Size>>)> {
    let dto = form.into_validated::<CreateSizeDto>()?;
    let size = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Size created successfully", size)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/size",
    params(StatusQuery),
    responses(
        (status = 200, description = "Sizes ordered by orderCount", body = ApiResponse<Vec<Size>>)
    ),
    tag = "sizes"
)]
pub async fn list_sizes(
    State(service): State<Arc<SizeService>>,
    Query(filter): Query<StatusQuery>,
) -> Result<Json<ApiResponse<Vec<Size>>>> {
    let sizes = service.list(&filter).await?;
    Ok(Json(ApiResponse::ok("Sizes retrieved successfully", sizes)))
}

#[utoipa::path(
    get,
    path = "/api/v1/size/{id}",
    params(("id" = Uuid, Path, description = "Size id")),
    responses(
        (status = 200, description = "Size found", body = ApiResponse<Size>),
        (status = 404, description = "Size not found")
    ),
    tag = "sizes"
)]
pub async fn get_size(
    State(service): State<Arc<SizeService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Size>>> {
    let size = service.get(id).await?;
    Ok(Json(ApiResponse::ok("Size retrieved successfully", size)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/size/{id}",
    params(("id" = Uuid, Path, description = "Size id")),
    request_body = UpdateSizeDto,
    responses(
        (status = 200, description = "Size updated", body = ApiResponse<Size>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Size not found")
    ),
    tag = "sizes"
)]
pub async fn update_size(
    State(service): State<Arc<SizeService>>,
    Path(id): Path<Uuid>,
    form: FormPayload,
) -> Result<Json<ApiResponse<Size>>> {
    let dto = form.into_validated::<UpdateSizeDto>()?;
    let size = service.update(id, dto).await?;
    Ok(Json(ApiResponse::ok("Size updated successfully", size)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/size/{id}",
    params(("id" = Uuid, Path, description = "Size id")),
    responses(
        (status = 200, description = "Size deleted"),
        (status = 404, description = "Size not found")
    ),
    tag = "sizes"
)]
pub async fn delete_size(
    State(service): State<Arc<SizeService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok("Size deleted successfully", ())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/size/reorder",
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Sizes reordered"),
        (status = 400, description = "Empty or duplicate ids"),
        (status = 404, description = "Some ids do not exist")
    ),
    tag = "sizes"
)]
pub async fn reorder_sizes(
    State(service): State<Arc<SizeService>>,
    AppJson(dto): AppJson<ReorderDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.reorder(&dto.ids).await?;
    Ok(Json(ApiResponse::ok("Sizes reordered successfully", ())))
}

#[utoipa::path(
    get,
    path = "/api/v1/public/size",
    responses(
        (status = 200, description = "Active sizes", body = ApiResponse<Vec<Size>>)
    ),
    tag = "sizes"
)]
pub async fn list_public_sizes(
    State(service): State<Arc<SizeService>>,
) -> Result<Json<ApiResponse<Vec<Size>>>> {
    let sizes = service.list_public().await?;
    Ok(Json(ApiResponse::ok("Sizes retrieved successfully", sizes)))
}
