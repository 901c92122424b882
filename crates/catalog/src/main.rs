use anyhow::Result;
use catalog::{schema, settings::Settings, walkthrough, Backend};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Walk through the product catalog: list, filter, update, delete and insert")]
#[command(version)]
struct Cli {
    /// Database backend
    #[arg(long, value_enum, default_value_t = Backend::Sqlite)]
    driver: Backend,

    /// JSON file with `host`, `dbname`, `username` and `password`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Connection URL; takes precedence over `--config`
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Drop, recreate and seed the catalog tables first
    #[arg(long)]
    seed: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings {
        backend: cli.driver,
        database_url: cli.database_url,
        config_file: cli.config,
    };

    let driver = settings.driver()?;
    log::info!("using database {}", driver.url());

    if cli.seed {
        let mut connection = driver.connect()?;
        schema::reset(connection.as_mut(), settings.effective_backend())?;
    }

    let (mut products, mut categories) = catalog::mappers(driver);

    let stdout = std::io::stdout();
    walkthrough::run(&mut stdout.lock(), &mut products, &mut categories)?;

    Ok(())
}
