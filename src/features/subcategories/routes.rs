use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::subcategories::handlers;
use crate::features::subcategories::services::SubcategoryService;

/// Create routes for the subcategories feature
pub fn routes(service: Arc<SubcategoryService>) -> Router {
    Router::new()
        .route(
            "/api/v1/subcategory",
            get(handlers::list_subcategories).post(handlers::create_subcategory),
        )
        .route(
            "/api/v1/subcategory/reorder",
            patch(handlers::reorder_subcategories),
        )
        .route(
            "/api/v1/subcategory/{id}",
            get(handlers::get_subcategory)
                .patch(handlers::update_subcategory)
                .delete(handlers::delete_subcategory),
        )
        .route(
            "/api/v1/public/subcategory",
            get(handlers::list_public_subcategories),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::multipart::MultipartForm;
    use axum_test::TestServer;
    use serde_json::json;
    use uuid::Uuid;

    use crate::features::categories::dtos::CreateCategoryDto;
    use crate::features::categories::models::Category;
    use crate::features::categories::CategoryService;
    use crate::features::subcategories::models::Subcategory;
    use crate::modules::documents::memory::MemoryRepository;
    use crate::modules::documents::Repository;
    use crate::shared::test_helpers::{data, data_ids, png_part, TestContext};
    use crate::shared::types::EntityStatus;

    struct Fixture {
        categories: Arc<CategoryService>,
        server: TestServer,
    }

    fn fixture(ctx: &TestContext) -> Fixture {
        let subcategory_repo: Arc<dyn Repository<Subcategory>> =
            Arc::new(MemoryRepository::<Subcategory>::new());
        let categories = Arc::new(CategoryService::new(
            Arc::new(MemoryRepository::<Category>::new()),
            Arc::clone(&subcategory_repo),
            ctx.cache.clone(),
            Arc::clone(&ctx.images),
        ));
        let service = Arc::new(SubcategoryService::new(
            subcategory_repo,
            Arc::clone(&categories),
            ctx.cache.clone(),
            Arc::clone(&ctx.images),
        ));
        Fixture {
            categories,
            server: TestServer::new(routes(service)).unwrap(),
        }
    }

    async fn category(fixture: &Fixture, name: &str) -> Uuid {
        fixture
            .categories
            .create(CreateCategoryDto {
                name: name.to_string(),
                slug: None,
                icon: None,
                is_featured: false,
                status: EntityStatus::Active,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_multipart_create_under_category() {
        let ctx = TestContext::new();
        let fixture = fixture(&ctx);
        let fashion = category(&fixture, "Fashion").await;

        let created = fixture
            .server
            .post("/api/v1/subcategory")
            .multipart(
                MultipartForm::new()
                    .add_text("name", "Men's Shirts")
                    .add_text("categoryId", fashion.to_string())
                    .add_part("image", png_part("shirt.png")),
            )
            .await;
        created.assert_status(StatusCode::CREATED);

        let subcategory = data(&created);
        assert_eq!(subcategory["slug"], "men-s-shirts");
        assert_eq!(subcategory["categoryId"], fashion.to_string());
        assert_eq!(subcategory["status"], "active");
        assert!(ctx
            .storage
            .contains_url(subcategory["image"].as_str().unwrap())
            .await);
    }

    #[tokio::test]
    async fn test_unknown_category_discards_uploaded_image() {
        let ctx = TestContext::new();
        let fixture = fixture(&ctx);

        let response = fixture
            .server
            .post("/api/v1/subcategory")
            .multipart(
                MultipartForm::new()
                    .add_text("name", "Orphans")
                    .add_text("categoryId", Uuid::new_v4().to_string())
                    .add_part("image", png_part("o.png")),
            )
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(ctx.storage.keys().await.is_empty());
    }

    #[tokio::test]
    async fn test_public_list_filters_by_category() {
        let ctx = TestContext::new();
        let fixture = fixture(&ctx);
        let fashion = category(&fixture, "Fashion").await;
        let home = category(&fixture, "Home").await;

        let mut fashion_ids = Vec::new();
        for (name, category_id) in [("Shirts", fashion), ("Lamps", home), ("Shoes", fashion)] {
            let created = fixture
                .server
                .post("/api/v1/subcategory")
                .json(&json!({"name": name, "categoryId": category_id}))
                .await;
            created.assert_status(StatusCode::CREATED);
            if category_id == fashion {
                fashion_ids.push(data(&created)["id"].as_str().unwrap().to_string());
            }
        }

        let response = fixture
            .server
            .get("/api/v1/public/subcategory")
            .add_query_param("categoryId", fashion)
            .await;
        response.assert_status_ok();
        assert_eq!(data_ids(&response), fashion_ids);

        let all = fixture.server.get("/api/v1/public/subcategory").await;
        assert_eq!(data_ids(&all).len(), 3);
    }

    #[tokio::test]
    async fn test_update_moves_subcategory_and_reorder() {
        let ctx = TestContext::new();
        let fixture = fixture(&ctx);
        let fashion = category(&fixture, "Fashion").await;
        let home = category(&fixture, "Home").await;

        let mut ids = Vec::new();
        for name in ["Rugs", "Lamps"] {
            let created = fixture
                .server
                .post("/api/v1/subcategory")
                .json(&json!({"name": name, "categoryId": fashion}))
                .await;
            ids.push(data(&created)["id"].as_str().unwrap().to_string());
        }

        let moved = fixture
            .server
            .patch(&format!("/api/v1/subcategory/{}", ids[0]))
            .json(&json!({"categoryId": home}))
            .await;
        moved.assert_status_ok();
        assert_eq!(data(&moved)["categoryId"], home.to_string());
        assert_eq!(data(&moved)["name"], "Rugs");

        let order = vec![ids[1].clone(), ids[0].clone()];
        fixture
            .server
            .patch("/api/v1/subcategory/reorder")
            .json(&json!({"ids": order}))
            .await
            .assert_status_ok();
        assert_eq!(
            data_ids(&fixture.server.get("/api/v1/subcategory").await),
            order
        );

        fixture
            .server
            .delete(&format!("/api/v1/subcategory/{}", ids[0]))
            .await
            .assert_status_ok();
        fixture
            .server
            .get(&format!("/api/v1/subcategory/{}", ids[0]))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_conflicting_update_keeps_existing_image() {
        let ctx = TestContext::new();
        let fixture = fixture(&ctx);
        let fashion = category(&fixture, "Fashion").await;

        fixture
            .server
            .post("/api/v1/subcategory")
            .json(&json!({"name": "Shirts", "categoryId": fashion}))
            .await
            .assert_status(StatusCode::CREATED);
        let created = fixture
            .server
            .post("/api/v1/subcategory")
            .multipart(
                MultipartForm::new()
                    .add_text("name", "Shoes")
                    .add_text("categoryId", fashion.to_string())
                    .add_part("image", png_part("shoes.png")),
            )
            .await;
        let subcategory = data(&created);
        let id = subcategory["id"].as_str().unwrap();
        let image = subcategory["image"].as_str().unwrap();

        let response = fixture
            .server
            .patch(&format!("/api/v1/subcategory/{}", id))
            .multipart(
                MultipartForm::new()
                    .add_text("slug", "shirts")
                    .add_part("image", png_part("new.png")),
            )
            .await;
        response.assert_status(StatusCode::CONFLICT);

        let fetched = fixture
            .server
            .get(&format!("/api/v1/subcategory/{}", id))
            .await;
        assert_eq!(data(&fetched)["image"], image);
        assert!(ctx.storage.contains_url(image).await);
        assert_eq!(ctx.storage.keys().await.len(), 1);
    }
}
