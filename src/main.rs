use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tankodex::cache::MangaCache;
use tankodex::catalog::{CatalogRepository, HttpCatalog};
use tankodex::library::{CollectionStore, SqliteCollection};
use tankodex::settings::Settings;
use tankodex::state::AppState;
use tankodex::{db, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    let catalog: Arc<dyn CatalogRepository> = Arc::new(
        HttpCatalog::new(&settings.api_url, settings.request_timeout)
            .context("Failed to create HTTP client")?,
    );

    let store = if settings.uses_memory_database() {
        tracing::warn!("Using an in-memory library, nothing will be saved");
        CollectionStore::in_memory()
    } else {
        let pool = db::init_db(&settings.database_url)
            .await
            .with_context(|| format!("Failed to open {}", settings.database_url))?;
        CollectionStore::new(Arc::new(SqliteCollection::new(pool)))
    };

    let cache = Arc::new(MangaCache::new(settings.cache_ttl));
    let state = AppState::new(catalog, store, cache, settings.items_per_page);

    state.library.load_collection().await?;
    tracing::info!("Library loaded: {} manga(s)", state.library.total_mangas());

    if let Err(e) = state.general.load_mangas().await {
        tracing::warn!("Initial feed load from {} failed: {}", settings.api_url, e);
    }

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
