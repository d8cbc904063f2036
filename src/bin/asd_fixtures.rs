use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use asd_fixtures::config::FixtureConfig;
use asd_fixtures::error::log_catalog_error;
use asd_fixtures::{ServiceCatalog, ServiceType};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "asd_fixtures",
    about = "Inspect and validate the ASD service fixture catalog"
)]
struct Cli {
    /// Configuration file (defaults to the bundled assets/fixture_config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Read this catalog file instead; a missing file is an error
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List services, one per line
    List {
        #[arg(long = "type", value_enum)]
        service_type: Option<ServiceTypeArg>,
    },
    /// Print a single service as JSON
    Show {
        #[arg(long)]
        id: String,
    },
    /// Validate the catalog and compare it with the literal fixture
    Validate,
    /// Write the literal fixture as catalog JSON
    Dump {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Mirror of [`ServiceType`] for clap value parsing.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ServiceTypeArg {
    Api,
    Web,
}

impl From<ServiceTypeArg> for ServiceType {
    fn from(arg: ServiceTypeArg) -> Self {
        match arg {
            ServiceTypeArg::Api => ServiceType::Api,
            ServiceTypeArg::Web => ServiceType::Web,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => FixtureConfig::load_from_file(path),
        None => FixtureConfig::load(),
    };
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }

    match cli.command {
        Commands::List { service_type } => run_list(&config, service_type),
        Commands::Show { id } => run_show(&config, &id),
        Commands::Validate => run_validate(&config),
        Commands::Dump { output } => run_dump(&config, output),
    }
}

fn load_catalog(config: &FixtureConfig) -> Result<ServiceCatalog> {
    ServiceCatalog::load(&config.catalog)
        .inspect_err(|err| log_catalog_error(err, "load_catalog"))
        .context("loading service catalog")
}

fn run_list(config: &FixtureConfig, service_type: Option<ServiceTypeArg>) -> Result<ExitCode> {
    let catalog = load_catalog(config)?;
    let filter = service_type.map(ServiceType::from);

    for service in catalog.services() {
        if filter.is_some_and(|wanted| wanted != service.service_type) {
            continue;
        }
        println!("{}\t{}\t{}", service.id, service.service_type, service.url);
    }
    Ok(ExitCode::from(0))
}

fn run_show(config: &FixtureConfig, id: &str) -> Result<ExitCode> {
    let catalog = load_catalog(config)?;
    let Some(service) = catalog.find(id) else {
        eprintln!("Unknown service id: {id}");
        return Ok(ExitCode::from(2));
    };

    let json = if config.output.pretty {
        serde_json::to_string_pretty(service)?
    } else {
        serde_json::to_string(service)?
    };
    println!("{json}");
    Ok(ExitCode::from(0))
}

fn run_validate(config: &FixtureConfig) -> Result<ExitCode> {
    let catalog = load_catalog(config)?;
    let diff = catalog.diff(&ServiceCatalog::canonical());
    if diff.is_empty() {
        println!("catalog OK: {} services", catalog.len());
        return Ok(ExitCode::from(0));
    }

    eprintln!("{}", serde_json::to_string_pretty(&diff)?);
    Ok(ExitCode::from(2))
}

fn run_dump(config: &FixtureConfig, output_path: Option<PathBuf>) -> Result<ExitCode> {
    let json = ServiceCatalog::canonical().to_json(config.output.pretty)?;

    if let Some(path) = output_path {
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    } else {
        println!("{json}");
    }
    Ok(ExitCode::from(0))
}
