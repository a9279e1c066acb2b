use clap::{Parser, Subcommand};
use random_quotes::{config::Config, init, telemetry};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// configuration profile: development, testing or production.
    #[arg(long = "env", env = "APP_ENV", global = true)]
    environment: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Default)]
enum Command {
    /// run migrations and serve the web page.
    #[default]
    Serve,
    /// fill an empty database with quotes from SEED_DATA_FILE or the built-in samples.
    SeedQuotes,
    /// run database migrations and exit.
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = Config::load(cli.environment.as_deref())?;

    telemetry::init_telemetry(config.log_level)
        .map_err(|e| anyhow::anyhow!("failed to initialize telemetry: {e}"))?;

    let data = init::init(config).await?;

    match cli.command.unwrap_or_default() {
        Command::Serve => init::serve(data).await?,
        Command::SeedQuotes => {
            let outcome = init::seed_quotes(&data)
                .await
                .inspect_err(|e| tracing::error!(err = ?e, "seeding failed"))?;

            println!("{outcome}");
        }
        Command::Migrate => println!("migrations are up to date."),
    }

    Ok(())
}
