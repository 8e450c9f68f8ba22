use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, FormPayload};
use crate::features::sliders::dtos::{CreateSliderDto, UpdateSliderDto};
use crate::features::sliders::models::Slider;
use crate::features::sliders::services::SliderService;
use crate::shared::types::{ApiResponse, ReorderDto, StatusQuery};

const IMAGE_FIELD: &str = "image";
const IMAGE_FOLDER: &str = "sliders";

/// Create a slider
///
/// Accepts JSON or multipart/form-data with the slide as the `image` file.
#[utoipa::path(
    post,
    path = "/api/v1/slider",
    request_body(content = CreateSliderDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Slider created", body = ApiResponse<Slider>),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "sliderId already in use")
    ),
    tag = "sliders"
)]
pub async fn create_slider(
    State(service): State<Arc<SliderService>>,
    mut form: FormPayload,
) -> Result<(StatusCode, Json<ApiResponse<Slider>>)> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<CreateSliderDto>() {
        Ok(dto) => service.create(dto).await,
        Err(e) => Err(e),
    };
    let slider = staged.settle(result).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Slider created successfully", slider)),
    ))
}

/// List sliders (admin)
#[utoipa::path(
    get,
    path = "/api/v1/slider",
    params(StatusQuery),
    responses(
        (status = 200, description = "Sliders ordered by orderCount", body = ApiResponse<Vec<Slider>>)
    ),
    tag = "sliders"
)]
pub async fn list_sliders(
    State(service): State<Arc<SliderService>>,
    Query(filter): Query<StatusQuery>,
) -> Result<Json<ApiResponse<Vec<Slider>>>> {
    let sliders = service.list(&filter).await?;
    Ok(Json(ApiResponse::ok("Sliders retrieved successfully", sliders)))
}

#[utoipa::path(
    get,
    path = "/api/v1/slider/{id}",
    params(("id" = Uuid, Path, description = "Slider id")),
    responses(
        (status = 200, description = "Slider found", body = ApiResponse<Slider>),
        (status = 404, description = "Slider not found")
    ),
    tag = "sliders"
)]
pub async fn get_slider(
    State(service): State<Arc<SliderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Slider>>> {
    let slider = service.get(id).await?;
    Ok(Json(ApiResponse::ok("Slider retrieved successfully", slider)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/slider/{id}",
    params(("id" = Uuid, Path, description = "Slider id")),
    request_body(content = UpdateSliderDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Slider updated", body = ApiResponse<Slider>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Slider not found"),
        (status = 409, description = "sliderId already in use")
    ),
    tag = "sliders"
)]
pub async fn update_slider(
    State(service): State<Arc<SliderService>>,
    Path(id): Path<Uuid>,
    mut form: FormPayload,
) -> Result<Json<ApiResponse<Slider>>> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<UpdateSliderDto>() {
        Ok(dto) => service.update(id, dto).await,
        Err(e) => Err(e),
    };
    let slider = staged.settle(result).await?;

    Ok(Json(ApiResponse::ok("Slider updated successfully", slider)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/slider/{id}",
    params(("id" = Uuid, Path, description = "Slider id")),
    responses(
        (status = 200, description = "Slider deleted"),
        (status = 404, description = "Slider not found")
    ),
    tag = "sliders"
)]
pub async fn delete_slider(
    State(service): State<Arc<SliderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok("Slider deleted successfully", ())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/slider/reorder",
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Sliders reordered"),
        (status = 400, description = "Empty or duplicate ids"),
        (status = 404, description = "Some ids do not exist")
    ),
    tag = "sliders"
)]
pub async fn reorder_sliders(
    State(service): State<Arc<SliderService>>,
    AppJson(dto): AppJson<ReorderDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.reorder(&dto.ids).await?;
    Ok(Json(ApiResponse::ok("Sliders reordered successfully", ())))
}

/// Active sliders for the storefront
#[utoipa::path(
    get,
    path = "/api/v1/public/slider",
    responses(
        (status = 200, description = "Active sliders ordered by orderCount", body = ApiResponse<Vec<Slider>>)
    ),
    tag = "sliders"
)]
pub async fn list_public_sliders(
    State(service): State<Arc<SliderService>>,
) -> Result<Json<ApiResponse<Vec<Slider>>>> {
    let sliders = service.list_public().await?;
    Ok(Json(ApiResponse::ok("Sliders retrieved successfully", sliders)))
}
