mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use std::sync::Arc;

        use dioxus_logger::tracing;

        use crate::server::{bot, config::Config, scheduler::loa_expiry, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Arc::new(Config::from_env()?);

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db, &config).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;

        let litebans =
            startup::connect_optional(config.litebans_database_url.as_deref(), "LiteBans").await;
        let checks =
            startup::connect_optional(config.checks_database_url.as_deref(), "checks").await;

        tracing::info!("Starting server");

        // Initialize Discord bot and extract HTTP client
        let (bot_client, discord_http) = bot::start::init_bot(config.clone(), db.clone()).await?;

        // Start Discord bot in a separate task
        tokio::spawn(async move {
            if let Err(e) = bot::start::start_bot(bot_client).await {
                tracing::error!("Discord bot error: {}", e);
            }
        });

        // Start LOA expiry scheduler
        let scheduler_db = db.clone();
        tokio::spawn(async move {
            if let Err(e) = loa_expiry::start_scheduler(scheduler_db).await {
                tracing::error!("LOA expiry scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config)?
            .with_state(AppState::new(
                db,
                http_client,
                oauth_client,
                discord_http,
                config.clone(),
                litebans,
                checks,
            ))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
