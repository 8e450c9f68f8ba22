use std::time::Duration;

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// PUBLIC READ CACHE TTLS
// =============================================================================

pub const BANNER_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

pub const SLIDER_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

pub const CATEGORY_CACHE_TTL: Duration = Duration::from_secs(6 * 60 * 60);

pub const COLOR_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub const SIZE_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Promo codes expire by date, keep the window short
pub const PROMO_CODE_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

// =============================================================================
// UPLOADS
// =============================================================================

/// Allowed MIME types for image uploads
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

/// Maximum image size in bytes (5MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;
