//! Portal driver: resolves the entry URL, looks the subject up, and
//! optionally signs in with configured credentials.

use std::sync::Arc;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use portal::SessionController;
use portal::domain::{Initialization, ProfilePanel};
use portal::outbound::http::HttpProfileApi;
use portal::outbound::location::FixedLocation;
use portal::outbound::storage::DirectoryDurableStore;
use portal::settings::PortalSettings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = PortalSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load portal settings: {err}"))?;

    let api = HttpProfileApi::with_timeout(settings.api_base_url()?, settings.request_timeout())
        .wrap_err("failed to build the HTTP client")?;
    let storage_dir = settings.storage_dir();
    let store = DirectoryDurableStore::open(&storage_dir)
        .wrap_err_with(|| format!("failed to open session storage at {}", storage_dir.display()))?;
    let location = FixedLocation::new(settings.entry_url()?);

    let mut controller = SessionController::new(
        Arc::new(api),
        store,
        location,
        settings.controller_options(),
    );

    match controller.initialize().await {
        Initialization::Resolved(id) => info!(subject = %id, "entry subject resolved"),
        Initialization::MissingSubject => warn!("entry url carries no subject id"),
        Initialization::AlreadyInitialized => {}
    }
    match controller.state().panel() {
        ProfilePanel::Info(subject) => {
            info!(subject = %subject.id(), fields = subject.fields().len(), "profile loaded");
        }
        ProfilePanel::Error(message) => warn!(error = %message, "profile unavailable"),
        ProfilePanel::Empty => {}
    }

    if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
        controller.show_login();
        controller.login(username, password).await;
        if let Some(notice) = controller.state().notice() {
            warn!(level = ?notice.level(), message = notice.message(), "login did not complete");
        }
        let labels: Vec<&str> = controller
            .state()
            .menu()
            .iter()
            .map(|item| item.label())
            .collect();
        info!(view = %controller.state().view(), menu = ?labels, "session state");
    }

    Ok(())
}
