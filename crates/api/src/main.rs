use std::sync::Arc;

use anyhow::Context;

use eventadmin_api::{AdminApi, AdminService, app, config::ApiConfig};
use eventadmin_infra::{InMemoryProviderFactory, InMemoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("failed to load configuration")?;
    eventadmin_observability::init(&config.observability);

    let factory = InMemoryProviderFactory::new(InMemoryStore::new());
    let admin: Arc<dyn AdminApi> = Arc::new(AdminService::new(&factory));
    let app = app::build_app(admin);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
