pub mod banners;
pub mod categories;
pub mod colors;
pub mod promo_codes;
pub mod sizes;
pub mod sliders;
pub mod subcategories;
pub mod support_tickets;
