use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, FormPayload};
use crate::features::colors::dtos::{CreateColorDto, UpdateColorDto};
use crate::features::colors::models::Color;
use crate::features::colors::services::ColorService;
use crate::shared::types::{ApiResponse, ReorderDto, StatusQuery};

#[utoipa::path(
    post,
    path = "/api/v1/color",
    request_body = CreateColorDto,
    responses(
        (status = 201, description = "Color created", body = ApiResponse<Color>),
        (status = 400, description = "Validation failed")
    ),
    tag = "colors"
)]
pub async fn create_color(
    State(service): State<Arc<ColorService>>,
    form: FormPayload,
) -> Result<(StatusCode, Json<ApiResponse<Color>>)> {
    let dto = form.into_validated::<CreateColorDto>()?;
    let color = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Color created successfully", color)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/color",
    params(StatusQuery),
    responses(
        (status = 200, description = "Colors ordered by orderCount", body = ApiResponse<Vec<Color>>)
    ),
    tag = "colors"
)]
pub async fn list_colors(
    State(service): State<Arc<ColorService>>,
    Query(filter): Query<StatusQuery>,
) -> Result<Json<ApiResponse<Vec<Color>>>> {
    let colors = service.list(&filter).await?;
    Ok(Json(ApiResponse::ok("Colors retrieved successfully", colors)))
}

#[utoipa::path(
    get,
    path = "/api/v1/color/{id}",
    params(("id" = Uuid, Path, description = "Color id")),
    responses(
        (status = 200, description = "Color found", body = ApiResponse<Color>),
        (status = 404, description = "Color not found")
    ),
    tag = "colors"
)]
pub async fn get_color(
    State(service): State<Arc<ColorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Color>>> {
    let color = service.get(id).await?;
    Ok(Json(ApiResponse::ok("Color retrieved successfully", color)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/color/{id}",
    params(("id" = Uuid, Path, description = "Color id")),
    request_body = UpdateColorDto,
    responses(
        (status = 200, description = "Color updated", body = ApiResponse<Color>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Color not found")
    ),
    tag = "colors"
)]
pub async fn update_color(
    State(service): State<Arc<ColorService>>,
    Path(id): Path<Uuid>,
    form: FormPayload,
) -> Result<Json<ApiResponse<Color>>> {
    let dto = form.into_validated::<UpdateColorDto>()?;
    let color = service.update(id, dto).await?;
    Ok(Json(ApiResponse::ok("Color updated successfully", color)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/color/{id}",
    params(("id" = Uuid, Path, description = "Color id")),
    responses(
        (status = 200, description = "Color deleted"),
        (status = 404, description = "Color not found")
    ),
    tag = "colors"
)]
pub async fn delete_color(
    State(service): State<Arc<ColorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok("Color deleted successfully", ())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/color/reorder",
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Colors reordered"),
        (status = 400, description = "Empty or duplicate ids"),
        (status = 404, description = "Some ids do not exist")
    ),
    tag = "colors"
)]
pub async fn reorder_colors(
    State(service): State<Arc<ColorService>>,
    AppJson(dto): AppJson<ReorderDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.reorder(&dto.ids).await?;
    Ok(Json(ApiResponse::ok("Colors reordered successfully", ())))
}

#[utoipa::path(
    get,
    path = "/api/v1/public/color",
    responses(
        (status = 200, description = "Active colors", body = ApiResponse<Vec<Color>>)
    ),
    tag = "colors"
)]
pub async fn list_public_colors(
    State(service): State<Arc<ColorService>>,
) -> Result<Json<ApiResponse<Vec<Color>>>> {
    let colors = service.list_public().await?;
    Ok(Json(ApiResponse::ok("Colors retrieved successfully", colors)))
}
