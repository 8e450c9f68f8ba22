use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, FormPayload};
use crate::features::banners::dtos::{
    BannerListQuery, CreateBannerDto, PublicBannerQuery, UpdateBannerDto,
};
use crate::features::banners::models::Banner;
use crate::features::banners::services::BannerService;
use crate::shared::types::{ApiResponse, ReorderDto};

const IMAGE_FIELD: &str = "bannerImage";
const IMAGE_FOLDER: &str = "banners";

/// Create a banner
///
/// Accepts JSON or multipart/form-data. In multipart form `bannerImage` is the
/// image file; it is uploaded first and its URL stored on the banner.
#[utoipa::path(
    post,
    path = "/api/v1/ecommerce-banner",
    request_body(content = CreateBannerDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Banner created", body = ApiResponse<Banner>),
        (status = 400, description = "Validation failed")
    ),
    tag = "banners"
)]
pub async fn create_banner(
    State(service): State<Arc<BannerService>>,
    mut form: FormPayload,
) -> Result<(StatusCode, Json<ApiResponse<Banner>>)> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<CreateBannerDto>() {
        Ok(dto) => service.create(dto).await,
        Err(e) => Err(e),
    };
    let banner = staged.settle(result).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Banner created successfully", banner)),
    ))
}

/// List banners (admin)
#[utoipa::path(
    get,
    path = "/api/v1/ecommerce-banner",
    params(BannerListQuery),
    responses(
        (status = 200, description = "Banners ordered by orderCount", body = ApiResponse<Vec<Banner>>)
    ),
    tag = "banners"
)]
pub async fn list_banners(
    State(service): State<Arc<BannerService>>,
    Query(filter): Query<BannerListQuery>,
) -> Result<Json<ApiResponse<Vec<Banner>>>> {
    let banners = service.list(&filter).await?;
    Ok(Json(ApiResponse::ok("Banners retrieved successfully", banners)))
}

/// Get a banner by id
#[utoipa::path(
    get,
    path = "/api/v1/ecommerce-banner/{id}",
    params(("id" = Uuid, Path, description = "Banner id")),
    responses(
        (status = 200, description = "Banner found", body = ApiResponse<Banner>),
        (status = 404, description = "Banner not found")
    ),
    tag = "banners"
)]
pub async fn get_banner(
    State(service): State<Arc<BannerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Banner>>> {
    let banner = service.get(id).await?;
    Ok(Json(ApiResponse::ok("Banner retrieved successfully", banner)))
}

/// Update a banner
///
/// Only supplied fields change. A new `bannerImage` replaces the stored one,
/// which is deleted from storage.
#[utoipa::path(
    patch,
    path = "/api/v1/ecommerce-banner/{id}",
    params(("id" = Uuid, Path, description = "Banner id")),
    request_body(content = UpdateBannerDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Banner updated", body = ApiResponse<Banner>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Banner not found")
    ),
    tag = "banners"
)]
pub async fn update_banner(
    State(service): State<Arc<BannerService>>,
    Path(id): Path<Uuid>,
    mut form: FormPayload,
) -> Result<Json<ApiResponse<Banner>>> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<UpdateBannerDto>() {
        Ok(dto) => service.update(id, dto).await,
        Err(e) => Err(e),
    };
    let banner = staged.settle(result).await?;

    Ok(Json(ApiResponse::ok("Banner updated successfully", banner)))
}

/// Delete a banner and its image
#[utoipa::path(
    delete,
    path = "/api/v1/ecommerce-banner/{id}",
    params(("id" = Uuid, Path, description = "Banner id")),
    responses(
        (status = 200, description = "Banner deleted"),
        (status = 404, description = "Banner not found")
    ),
    tag = "banners"
)]
pub async fn delete_banner(
    State(service): State<Arc<BannerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok("Banner deleted successfully", ())))
}

/// Reorder banners
///
/// Each listed banner gets `orderCount` equal to its index in `ids`.
#[utoipa::path(
    patch,
    path = "/api/v1/ecommerce-banner/reorder",
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Banners reordered"),
        (status = 400, description = "Empty or duplicate ids"),
        (status = 404, description = "Some ids do not exist")
    ),
    tag = "banners"
)]
pub async fn reorder_banners(
    State(service): State<Arc<BannerService>>,
    AppJson(dto): AppJson<ReorderDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.reorder(&dto.ids).await?;
    Ok(Json(ApiResponse::ok("Banners reordered successfully", ())))
}

/// Active banners for the storefront
#[utoipa::path(
    get,
    path = "/api/v1/public/ecommerce-banner",
    params(PublicBannerQuery),
    responses(
        (status = 200, description = "Active banners ordered by orderCount", body = ApiResponse<Vec<Banner>>)
    ),
    tag = "banners"
)]
pub async fn list_public_banners(
    State(service): State<Arc<BannerService>>,
    Query(query): Query<PublicBannerQuery>,
) -> Result<Json<ApiResponse<Vec<Banner>>>> {
    let banners = service.list_public(query.position).await?;
    Ok(Json(ApiResponse::ok("Banners retrieved successfully", banners)))
}
