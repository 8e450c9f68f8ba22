use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, FormPayload};
use crate::features::promo_codes::dtos::{
    ApplyPromoCodeDto, CreatePromoCodeDto, PromoCodeDiscountDto, PromoCodeListQuery,
    UpdatePromoCodeDto,
};
use crate::features::promo_codes::models::PromoCode;
use crate::features::promo_codes::services::PromoCodeService;
use crate::shared::types::ApiResponse;

const IMAGE_FIELD: &str = "icon";
const IMAGE_FOLDER: &str = "promo-codes";

/// Create a promo code
///
/// Accepts JSON or multipart/form-data; in multipart form `icon` may be an
/// image file.
#[utoipa::path(
    post,
    path = "/api/v1/promo-code",
    request_body(content = CreatePromoCodeDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Promo code created", body = ApiResponse<PromoCode>),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Code already in use")
    ),
    tag = "promo-codes"
)]
pub async fn create_promo_code(
    State(service): State<Arc<PromoCodeService>>,
    mut form: FormPayload,
) -> Result<(StatusCode, Json<ApiResponse<PromoCode>>)> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<CreatePromoCodeDto>() {
        Ok(dto) => service.create(dto).await,
        Err(e) => Err(e),
    };
    let promo = staged.settle(result).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Promo code created successfully", promo)),
    ))
}

/// List promo codes (admin), newest first
#[utoipa::path(
    get,
    path = "/api/v1/promo-code",
    params(PromoCodeListQuery),
    responses(
        (status = 200, description = "Promo codes", body = ApiResponse<Vec<PromoCode>>)
    ),
    tag = "promo-codes"
)]
pub async fn list_promo_codes(
    State(service): State<Arc<PromoCodeService>>,
    Query(filter): Query<PromoCodeListQuery>,
) -> Result<Json<ApiResponse<Vec<PromoCode>>>> {
    let promos = service.list(&filter).await?;
    Ok(Json(ApiResponse::ok(
        "Promo codes retrieved successfully",
        promos,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/promo-code/{id}",
    params(("id" = Uuid, Path, description = "Promo code id")),
    responses(
        (status = 200, description = "Promo code found", body = ApiResponse<PromoCode>),
        (status = 404, description = "Promo code not found")
    ),
    tag = "promo-codes"
)]
pub async fn get_promo_code(
    State(service): State<Arc<PromoCodeService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PromoCode>>> {
    let promo = service.get(id).await?;
    Ok(Json(ApiResponse::ok("Promo code retrieved successfully", promo)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/promo-code/{id}",
    params(("id" = Uuid, Path, description = "Promo code id")),
    request_body(content = UpdatePromoCodeDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Promo code updated", body = ApiResponse<PromoCode>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Promo code not found"),
        (status = 409, description = "Code already in use")
    ),
    tag = "promo-codes"
)]
pub async fn update_promo_code(
    State(service): State<Arc<PromoCodeService>>,
    Path(id): Path<Uuid>,
    mut form: FormPayload,
) -> Result<Json<ApiResponse<PromoCode>>> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<UpdatePromoCodeDto>() {
        Ok(dto) => service.update(id, dto).await,
        Err(e) => Err(e),
    };
    let promo = staged.settle(result).await?;

    Ok(Json(ApiResponse::ok("Promo code updated successfully", promo)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/promo-code/{id}",
    params(("id" = Uuid, Path, description = "Promo code id")),
    responses(
        (status = 200, description = "Promo code deleted"),
        (status = 404, description = "Promo code not found")
    ),
    tag = "promo-codes"
)]
pub async fn delete_promo_code(
    State(service): State<Arc<PromoCodeService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok("Promo code deleted successfully", ())))
}

/// Compute the discount a promo code gives on an order
#[utoipa::path(
    post,
    path = "/api/v1/promo-code/apply",
    request_body = ApplyPromoCodeDto,
    responses(
        (status = 200, description = "Discount computed", body = ApiResponse<PromoCodeDiscountDto>),
        (status = 400, description = "Code not usable for this order"),
        (status = 404, description = "Unknown code")
    ),
    tag = "promo-codes"
)]
pub async fn apply_promo_code(
    State(service): State<Arc<PromoCodeService>>,
    AppJson(dto): AppJson<ApplyPromoCodeDto>,
) -> Result<Json<ApiResponse<PromoCodeDiscountDto>>> {
    dto.validate()?;
    let applied = service.apply(dto).await?;
    Ok(Json(ApiResponse::ok("Promo code applied successfully", applied)))
}

/// Promo codes that can be used right now
#[utoipa::path(
    get,
    path = "/api/v1/public/promo-code",
    responses(
        (status = 200, description = "Live promo codes", body = ApiResponse<Vec<PromoCode>>)
    ),
    tag = "promo-codes"
)]
pub async fn list_public_promo_codes(
    State(service): State<Arc<PromoCodeService>>,
) -> Result<Json<ApiResponse<Vec<PromoCode>>>> {
    let promos = service.list_public().await?;
    Ok(Json(ApiResponse::ok(
        "Promo codes retrieved successfully",
        promos,
    )))
}
