mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{CacheConfig, Config};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::banners::{models::Banner, routes as banners_routes, BannerService};
use crate::features::categories::{models::Category, routes as categories_routes, CategoryService};
use crate::features::colors::{models::Color, routes as colors_routes, ColorService};
use crate::features::promo_codes::{
    models::PromoCode, routes as promo_codes_routes, PromoCodeService,
};
use crate::features::sizes::{models::Size, routes as sizes_routes, SizeService};
use crate::features::sliders::{models::Slider, routes as sliders_routes, SliderService};
use crate::features::subcategories::{
    models::Subcategory, routes as subcategories_routes, SubcategoryService,
};
use crate::features::support_tickets::{
    models::SupportTicket, routes as support_tickets_routes, SupportTicketService,
};
use crate::modules::cache::{CacheBackend, CacheStore, InMemoryCache, RedisCache};
use crate::modules::documents::PgRepository;
use crate::modules::storage::{ImageStore, MinIOClient};
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// Redis when configured, otherwise a per-process map
async fn create_cache(config: &CacheConfig) -> anyhow::Result<CacheStore> {
    let backend: Arc<dyn CacheBackend> = match &config.redis_url {
        Some(url) => Arc::new(
            RedisCache::connect(url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to Redis: {}", e))?,
        ),
        None => {
            tracing::warn!("REDIS_URL not set, using in-process cache");
            Arc::new(InMemoryCache::new())
        }
    };
    Ok(CacheStore::new(backend, config.key_prefix.clone()))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize MinIO client for image storage
    let minio_client = MinIOClient::new(config.minio.clone())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize MinIO client: {}", e))?;
    tracing::info!(
        "MinIO client initialized for bucket: {}",
        minio_client.bucket_name()
    );
    let images = Arc::new(ImageStore::new(Arc::new(minio_client)));

    // Initialize read-path cache
    let cache = create_cache(&config.cache).await?;
    tracing::info!("Cache initialized (backend: {})", cache.backend_name());

    // Initialize entity services
    let banner_service = Arc::new(BannerService::new(
        Arc::new(PgRepository::<Banner>::new(pool.clone())),
        cache.clone(),
        Arc::clone(&images),
    ));
    let slider_service = Arc::new(SliderService::new(
        Arc::new(PgRepository::<Slider>::new(pool.clone())),
        cache.clone(),
        Arc::clone(&images),
    ));
    let category_service = Arc::new(CategoryService::new(
        Arc::new(PgRepository::<Category>::new(pool.clone())),
        Arc::new(PgRepository::<Subcategory>::new(pool.clone())),
        cache.clone(),
        Arc::clone(&images),
    ));
    let subcategory_service = Arc::new(SubcategoryService::new(
        Arc::new(PgRepository::<Subcategory>::new(pool.clone())),
        Arc::clone(&category_service),
        cache.clone(),
        Arc::clone(&images),
    ));
    let color_service = Arc::new(ColorService::new(
        Arc::new(PgRepository::<Color>::new(pool.clone())),
        cache.clone(),
    ));
    let size_service = Arc::new(SizeService::new(
        Arc::new(PgRepository::<Size>::new(pool.clone())),
        cache.clone(),
    ));
    let promo_code_service = Arc::new(PromoCodeService::new(
        Arc::new(PgRepository::<PromoCode>::new(pool.clone())),
        cache.clone(),
        Arc::clone(&images),
    ));
    let support_ticket_service = Arc::new(SupportTicketService::new(
        Arc::new(PgRepository::<SupportTicket>::new(pool.clone())),
        Arc::clone(&images),
    ));
    tracing::info!("Entity services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let api_routes = Router::new()
        .merge(banners_routes::routes(banner_service))
        .merge(sliders_routes::routes(slider_service))
        .merge(categories_routes::routes(category_service))
        .merge(subcategories_routes::routes(subcategory_service))
        .merge(colors_routes::routes(color_service))
        .merge(sizes_routes::routes(size_service))
        .merge(promo_codes_routes::routes(promo_code_service))
        .merge(support_tickets_routes::routes(support_ticket_service))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size));

    let app = Router::new()
        .merge(swagger)
        .merge(api_routes)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
