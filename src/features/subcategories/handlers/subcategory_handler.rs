use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, FormPayload};
use crate::features::subcategories::dtos::{
    CreateSubcategoryDto, PublicSubcategoryQuery, SubcategoryListQuery, UpdateSubcategoryDto,
};
use crate::features::subcategories::models::Subcategory;
use crate::features::subcategories::services::SubcategoryService;
use crate::shared::types::{ApiResponse, ReorderDto};

const IMAGE_FIELD: &str = "image";
const IMAGE_FOLDER: &str = "subcategories";

/// Create a subcategory
///
/// The referenced category must exist.
#[utoipa::path(
    post,
    path = "/api/v1/subcategory",
    request_body(content = CreateSubcategoryDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Subcategory created", body = ApiResponse<Subcategory>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Slug already in use")
    ),
    tag = "subcategories"
)]
pub async fn create_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    mut form: FormPayload,
) -> Result<(StatusCode, Json<ApiResponse<Subcategory>>)> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<CreateSubcategoryDto>() {
        Ok(dto) => service.create(dto).await,
        Err(e) => Err(e),
    };
    let subcategory = staged.settle(result).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Subcategory created successfully",
            subcategory,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/subcategory",
    params(SubcategoryListQuery),
    responses(
        (status = 200, description = "Subcategories ordered by orderCount", body = ApiResponse<Vec<Subcategory>>)
    ),
    tag = "subcategories"
)]
pub async fn list_subcategories(
    State(service): State<Arc<SubcategoryService>>,
    Query(filter): Query<SubcategoryListQuery>,
) -> Result<Json<ApiResponse<Vec<Subcategory>>>> {
    let subcategories = service.list(&filter).await?;
    Ok(Json(ApiResponse::ok(
        "Subcategories retrieved successfully",
        subcategories,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/subcategory/{id}",
    params(("id" = Uuid, Path, description = "Subcategory id")),
    responses(
        (status = 200, description = "Subcategory found", body = ApiResponse<Subcategory>),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "subcategories"
)]
pub async fn get_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Subcategory>>> {
    let subcategory = service.get(id).await?;
    Ok(Json(ApiResponse::ok(
        "Subcategory retrieved successfully",
        subcategory,
    )))
}

#[utoipa::path(
    patch,
    path = "/api/v1/subcategory/{id}",
    params(("id" = Uuid, Path, description = "Subcategory id")),
    request_body(content = UpdateSubcategoryDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Subcategory updated", body = ApiResponse<Subcategory>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Subcategory or category not found"),
        (status = 409, description = "Slug already in use")
    ),
    tag = "subcategories"
)]
pub async fn update_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    Path(id): Path<Uuid>,
    mut form: FormPayload,
) -> Result<Json<ApiResponse<Subcategory>>> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<UpdateSubcategoryDto>() {
        Ok(dto) => service.update(id, dto).await,
        Err(e) => Err(e),
    };
    let subcategory = staged.settle(result).await?;

    Ok(Json(ApiResponse::ok(
        "Subcategory updated successfully",
        subcategory,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/subcategory/{id}",
    params(("id" = Uuid, Path, description = "Subcategory id")),
    responses(
        (status = 200, description = "Subcategory deleted"),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "subcategories"
)]
pub async fn delete_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok("Subcategory deleted successfully", ())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/subcategory/reorder",
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Subcategories reordered"),
        (status = 400, description = "Empty or duplicate ids"),
        (status = 404, description = "Some ids do not exist")
    ),
    tag = "subcategories"
)]
pub async fn reorder_subcategories(
    State(service): State<Arc<SubcategoryService>>,
    AppJson(dto): AppJson<ReorderDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.reorder(&dto.ids).await?;
    Ok(Json(ApiResponse::ok(
        "Subcategories reordered successfully",
        (),
    )))
}

/// Active subcategories of active categories, optionally for one category
#[utoipa::path(
    get,
    path = "/api/v1/public/subcategory",
    params(PublicSubcategoryQuery),
    responses(
        (status = 200, description = "Active subcategories", body = ApiResponse<Vec<Subcategory>>)
    ),
    tag = "subcategories"
)]
pub async fn list_public_subcategories(
    State(service): State<Arc<SubcategoryService>>,
    Query(query): Query<PublicSubcategoryQuery>,
) -> Result<Json<ApiResponse<Vec<Subcategory>>>> {
    let subcategories = service.list_public(query.category_id).await?;
    Ok(Json(ApiResponse::ok(
        "Subcategories retrieved successfully",
        subcategories,
    )))
}
