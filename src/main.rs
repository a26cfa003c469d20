pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::profile;

use crate::api::openapi::ApiDoc;
use crate::profile::adapter::outgoing::{
    DataUriPreviewReader, FileKeyValueStore, InMemoryKeyValueStore, KeyValueProfileRepository,
    StorageBackend, StorageConfig,
};
use crate::profile::application::domain::{policies::AvatarPolicy, validation::ProfileSchema};
use crate::profile::application::ports::outgoing::KeyValueStore;
use crate::profile::application::profile_form_use_cases::ProfileFormUseCases;
use crate::profile::application::services::ProfileFormService;
use crate::shared::api::{avatar_payload_config, custom_json_config};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile_form: ProfileFormUseCases,
}

/// Builds the profile form on top of the configured store.
pub fn build_profile_form(store: Arc<dyn KeyValueStore>) -> ProfileFormUseCases {
    let repository = KeyValueProfileRepository::new(store);
    let schema = ProfileSchema::new(AvatarPolicy::default());
    let service = ProfileFormService::new(repository, DataUriPreviewReader::new(), schema);

    ProfileFormUseCases::from_service(Arc::new(service))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .context("PORT must be a valid port number")?;

    let storage = StorageConfig::from_env()?;
    let store: Arc<dyn KeyValueStore> = match storage.backend {
        StorageBackend::File => {
            info!(directory = %storage.directory.display(), "Using file profile store");
            Arc::new(FileKeyValueStore::new(storage.directory.clone()))
        }
        StorageBackend::Memory => {
            info!("Using in-memory profile store, nothing survives a restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let profile_form = build_profile_form(Arc::clone(&store));
    let initial = profile_form.initialize.execute().await;
    info!(status = ?initial.status, "Profile form initialized");

    let state = AppState { profile_form };
    let openapi = ApiDoc::openapi();

    let server_url = format!("{host}:{port}");
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&store)))
            .app_data(custom_json_config())
            .app_data(avatar_payload_config())
            .configure(init_routes)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
    })
    .bind(&server_url)
    .with_context(|| format!("Cannot bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_form_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::reload_profile_form_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_field_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::select_avatar_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::submit_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::cancel_profile_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
