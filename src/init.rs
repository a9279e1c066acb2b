use std::{str::FromStr, sync::Arc};

use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    Pool, Sqlite,
};
use tokio::{net::TcpListener, signal};

use crate::{
    config::Config,
    constants::{INSECURE_SECRET_KEY, STARTUP_TIME},
    routes,
    seeder::{SeedOutcome, SeedSource, Seeder},
    store::QuoteStore,
    Data,
};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

fn is_in_memory(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

/// Opens the pool and brings the schema up to date.
pub async fn init_database(config: &Config) -> anyhow::Result<Pool<Sqlite>> {
    tracing::info!("initializing database connection...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .inspect_err(|e| tracing::error!(err = ?e, "invalid database url"))?
        .create_if_missing(true);

    // every connection to an in-memory database gets its own empty database,
    // so keep exactly one alive for the lifetime of the pool.
    let db = if is_in_memory(&config.database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(20)
            .connect_with(opts.journal_mode(SqliteJournalMode::Wal))
            .await?
    };

    run_migrations(&db).await?;

    Ok(db)
}

pub async fn run_migrations(db: &Pool<Sqlite>) -> anyhow::Result<()> {
    tracing::info!("running migrations...");
    MIGRATOR
        .run(db)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when running migrations"))?;
    tracing::info!("finished running migrations!");

    Ok(())
}

pub async fn init(config: Config) -> anyhow::Result<Data> {
    tracing::info!(environment = %config.environment, "initializing... please wait warmly.");

    for path in &config.settings_files {
        tracing::info!(path = %path.display(), "loaded settings file");
    }

    if config.secret_key == INSECURE_SECRET_KEY {
        tracing::warn!("SECRET_KEY is not set, using the insecure development key.");
    }

    let db = init_database(&config).await?;

    Ok(Data {
        config: Arc::new(config),
        store: QuoteStore::new(db),
    })
}

pub async fn seed_quotes(data: &Data) -> anyhow::Result<SeedOutcome> {
    let seeder = Seeder::new(data.store.clone(), SeedSource::from_config(&data.config));

    Ok(seeder.run().await?)
}

pub async fn serve(data: Data) -> anyhow::Result<()> {
    let _ = &*STARTUP_TIME;

    let address = data.config.bind_address();
    let app = routes::router(data);

    tracing::info!("binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, address = %address, "an error occurred when binding"))?;

    tracing::info!("finished initializing! serving on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down.");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(err = ?e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }

        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(err = ?e, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
