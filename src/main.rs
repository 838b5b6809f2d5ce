use anyhow::Context;
use biblio_app::modules;
use biblio_kernel::settings::Settings;
use biblio_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Biblio settings")?;
    biblio_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        host = %settings.server.host,
        port = settings.server.port,
        "biblio-app bootstrap starting"
    );

    let library = biblio_store::shared();

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &library);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!("biblio-app bootstrap complete");

    biblio_http::start_server(&registry, &settings).await?;

    registry.stop_all().await?;
    Ok(())
}
