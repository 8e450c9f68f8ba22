use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, FormPayload};
use crate::features::categories::dtos::{
    CategoryListQuery, CategoryTreeDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, ReorderDto};

const IMAGE_FIELD: &str = "icon";
const IMAGE_FOLDER: &str = "categories";

/// Create a category
///
/// Accepts JSON or multipart/form-data; in multipart form `icon` may be an
/// image file.
#[utoipa::path(
    post,
    path = "/api/v1/category",
    request_body(content = CreateCategoryDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Slug already in use")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    mut form: FormPayload,
) -> Result<(StatusCode, Json<ApiResponse<Category>>)> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<CreateCategoryDto>() {
        Ok(dto) => service.create(dto).await,
        Err(e) => Err(e),
    };
    let category = staged.settle(result).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Category created successfully", category)),
    ))
}

/// List categories (admin)
#[utoipa::path(
    get,
    path = "/api/v1/category",
    params(CategoryListQuery),
    responses(
        (status = 200, description = "Categories ordered by orderCount", body = ApiResponse<Vec<Category>>)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    Query(filter): Query<CategoryListQuery>,
) -> Result<Json<ApiResponse<Vec<Category>>>> {
    let categories = service.list(&filter).await?;
    Ok(Json(ApiResponse::ok(
        "Categories retrieved successfully",
        categories,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Category>>> {
    let category = service.get(id).await?;
    Ok(Json(ApiResponse::ok("Category retrieved successfully", category)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body(content = UpdateCategoryDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Slug already in use")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
    mut form: FormPayload,
) -> Result<Json<ApiResponse<Category>>> {
    let staged = service
        .images()
        .stage(&mut form, IMAGE_FIELD, IMAGE_FOLDER)
        .await?;

    let result = match form.into_validated::<UpdateCategoryDto>() {
        Ok(dto) => service.update(id, dto).await,
        Err(e) => Err(e),
    };
    let category = staged.settle(result).await?;

    Ok(Json(ApiResponse::ok("Category updated successfully", category)))
}

/// Delete a category and its icon
///
/// Subcategories pointing at it are not deleted.
#[utoipa::path(
    delete,
    path = "/api/v1/category/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok("Category deleted successfully", ())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/category/reorder",
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Categories reordered"),
        (status = 400, description = "Empty or duplicate ids"),
        (status = 404, description = "Some ids do not exist")
    ),
    tag = "categories"
)]
pub async fn reorder_categories(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<ReorderDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.reorder(&dto.ids).await?;
    Ok(Json(ApiResponse::ok("Categories reordered successfully", ())))
}

/// Active categories with their active subcategories
#[utoipa::path(
    get,
    path = "/api/v1/public/category",
    responses(
        (status = 200, description = "Category tree", body = ApiResponse<Vec<CategoryTreeDto>>)
    ),
    tag = "categories"
)]
pub async fn list_public_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryTreeDto>>>> {
    let tree = service.list_public().await?;
    Ok(Json(ApiResponse::ok("Categories retrieved successfully", tree)))
}
