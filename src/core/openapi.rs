use utoipa::{Modify, OpenApi};

use crate::features::banners::{
    dtos as banners_dtos, handlers as banners_handlers, models as banners_models,
};
use crate::features::categories::{
    dtos as categories_dtos, handlers as categories_handlers, models as categories_models,
};
use crate::features::colors::{
    dtos as colors_dtos, handlers as colors_handlers, models as colors_models,
};
use crate::features::promo_codes::{
    dtos as promo_codes_dtos, handlers as promo_codes_handlers, models as promo_codes_models,
};
use crate::features::sizes::{dtos as sizes_dtos, handlers as sizes_handlers, models as sizes_models};
use crate::features::sliders::{
    dtos as sliders_dtos, handlers as sliders_handlers, models as sliders_models,
};
use crate::features::subcategories::{
    dtos as subcategories_dtos, handlers as subcategories_handlers, models as subcategories_models,
};
use crate::features::support_tickets::{
    dtos as support_tickets_dtos, handlers as support_tickets_handlers,
    models as support_tickets_models,
};
use crate::shared::types::{ApiResponse, EntityStatus, Meta, ReorderDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Banners
        banners_handlers::create_banner,
        banners_handlers::list_banners,
        banners_handlers::get_banner,
        banners_handlers::update_banner,
        banners_handlers::delete_banner,
        banners_handlers::reorder_banners,
        banners_handlers::list_public_banners,
        // Sliders
        sliders_handlers::create_slider,
        sliders_handlers::list_sliders,
        sliders_handlers::get_slider,
        sliders_handlers::update_slider,
        sliders_handlers::delete_slider,
        sliders_handlers::reorder_sliders,
        sliders_handlers::list_public_sliders,
        // Categories
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        categories_handlers::reorder_categories,
        categories_handlers::list_public_categories,
        // Subcategories
        subcategories_handlers::create_subcategory,
        subcategories_handlers::list_subcategories,
        subcategories_handlers::get_subcategory,
        subcategories_handlers::update_subcategory,
        subcategories_handlers::delete_subcategory,
        subcategories_handlers::reorder_subcategories,
        subcategories_handlers::list_public_subcategories,
        // Colors
        colors_handlers::create_color,
        colors_handlers::list_colors,
        colors_handlers::get_color,
        colors_handlers::update_color,
        colors_handlers::delete_color,
        colors_handlers::reorder_colors,
        colors_handlers::list_public_colors,
        // Sizes
        sizes_handlers::create_size,
        sizes_handlers::list_sizes,
        sizes_handlers::get_size,
        sizes_handlers::update_size,
        sizes_handlers::delete_size,
        sizes_handlers::reorder_sizes,
        sizes_handlers::list_public_sizes,
        // Promo codes
        promo_codes_handlers::create_promo_code,
        promo_codes_handlers::list_promo_codes,
        promo_codes_handlers::get_promo_code,
        promo_codes_handlers::update_promo_code,
        promo_codes_handlers::delete_promo_code,
        promo_codes_handlers::apply_promo_code,
        promo_codes_handlers::list_public_promo_codes,
        // Support tickets
        support_tickets_handlers::create_support_ticket,
        support_tickets_handlers::list_support_tickets,
        support_tickets_handlers::get_support_ticket,
        support_tickets_handlers::update_support_ticket,
        support_tickets_handlers::update_support_ticket_status,
        support_tickets_handlers::delete_support_ticket,
    ),
    components(
        schemas(
            // Shared
            Meta,
            EntityStatus,
            ReorderDto,
            // Banners
            banners_models::Banner,
            banners_models::BannerPosition,
            banners_dtos::CreateBannerDto,
            banners_dtos::UpdateBannerDto,
            ApiResponse<banners_models::Banner>,
            ApiResponse<Vec<banners_models::Banner>>,
            // Sliders
            sliders_models::Slider,
            sliders_dtos::CreateSliderDto,
            sliders_dtos::UpdateSliderDto,
            ApiResponse<sliders_models::Slider>,
            ApiResponse<Vec<sliders_models::Slider>>,
            // Categories
            categories_models::Category,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryTreeDto,
            ApiResponse<categories_models::Category>,
            ApiResponse<Vec<categories_models::Category>>,
            ApiResponse<Vec<categories_dtos::CategoryTreeDto>>,
            // Subcategories
            subcategories_models::Subcategory,
            subcategories_dtos::CreateSubcategoryDto,
            subcategories_dtos::UpdateSubcategoryDto,
            ApiResponse<subcategories_models::Subcategory>,
            ApiResponse<Vec<subcategories_models::Subcategory>>,
            // Colors
            colors_models::Color,
            colors_dtos::CreateColorDto,
            colors_dtos::UpdateColorDto,
            ApiResponse<colors_models::Color>,
            ApiResponse<Vec<colors_models::Color>>,
            // Sizes
            sizes_models::Size,
            sizes_dtos::CreateSizeDto,
            sizes_dtos::UpdateSizeDto,
            ApiResponse<sizes_models::Size>,
            ApiResponse<Vec<sizes_models::Size>>,
            // Promo codes
            promo_codes_models::PromoCode,
            promo_codes_models::DiscountType,
            promo_codes_dtos::CreatePromoCodeDto,
            promo_codes_dtos::UpdatePromoCodeDto,
            promo_codes_dtos::ApplyPromoCodeDto,
            promo_codes_dtos::PromoCodeDiscountDto,
            ApiResponse<promo_codes_models::PromoCode>,
            ApiResponse<Vec<promo_codes_models::PromoCode>>,
            ApiResponse<promo_codes_dtos::PromoCodeDiscountDto>,
            // Support tickets
            support_tickets_models::SupportTicket,
            support_tickets_models::TicketStatus,
            support_tickets_models::TicketPriority,
            support_tickets_dtos::CreateSupportTicketDto,
            support_tickets_dtos::UpdateSupportTicketDto,
            support_tickets_dtos::UpdateTicketStatusDto,
            ApiResponse<support_tickets_models::SupportTicket>,
            ApiResponse<Vec<support_tickets_models::SupportTicket>>,
        )
    ),
    tags(
        (name = "banners", description = "Storefront banners by page position"),
        (name = "sliders", description = "Homepage hero sliders"),
        (name = "categories", description = "Product categories and the public category tree"),
        (name = "subcategories", description = "Subcategories attached to a category"),
        (name = "colors", description = "Product colors"),
        (name = "sizes", description = "Product sizes"),
        (name = "promo-codes", description = "Promo codes and checkout discounts"),
        (name = "support-tickets", description = "Customer support tickets (admin only)"),
    ),
    info(
        title = "Guptodhan Catalog API",
        version = "0.1.0",
        description = "Admin and storefront catalog endpoints",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
