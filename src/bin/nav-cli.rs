use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use finance_nav::config::validation::validate_config;
use finance_nav::config::{load_config, AppConfig, ConfigError};
use finance_nav::observability::logging;
use finance_nav::routing::navigation::{self, active_tab, SettingsView};
use finance_nav::routing::{breadcrumbs, RouteRegistry};

#[derive(Parser)]
#[command(name = "nav-cli")]
#[command(about = "Inspect the finance dashboard route table offline", long_about = None)]
struct Cli {
    /// TOML configuration file. Uses the built-in route table when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the whole route tree
    Routes,
    /// Validate the configuration and report every problem
    Validate,
    /// Look up the route registered at a full path
    Lookup { path: String },
    /// Check whether a route is active for the current path
    Active { route: String, path: String },
    /// Print the breadcrumb trail for a path
    Breadcrumbs { path: String },
    /// Print the sidebar groups
    Sidebar {
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Print the settings tabs
    Tabs {
        #[arg(long, default_value = "/settings")]
        path: String,
    },
    /// Print the full navigation snapshot for a path
    Navigation {
        path: String,
        #[arg(long)]
        collapsed: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init("warn");

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(ConfigError::Validation(errors)) if matches!(cli.command, Commands::Validate) => {
                for error in &errors {
                    println!("invalid: {}", error);
                }
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => return Err(e.into()),
        },
        None => AppConfig::default(),
    };

    let registry = RouteRegistry::new(config.routes.clone())?;
    let nav = &config.navigation;

    match cli.command {
        Commands::Routes => print_json(&registry.routes())?,
        Commands::Validate => {
            // Defaults are checked here too; a loaded file was checked on load.
            if let Err(errors) = validate_config(&config) {
                for error in &errors {
                    println!("invalid: {}", error);
                }
                return Ok(ExitCode::FAILURE);
            }
            println!("ok: {} routes", registry.len());
        }
        Commands::Lookup { path } => match registry.get_route_by_path(&path) {
            Some(route) => print_json(route)?,
            None => {
                eprintln!("No route registered at {}", path);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Active { route, path } => {
            println!("{}", registry.is_route_active(&route, &path));
        }
        Commands::Breadcrumbs { path } => {
            print_json(&breadcrumbs::build(&registry, &path, &nav.home_title))?
        }
        Commands::Sidebar { path } => {
            print_json(&navigation::snapshot(&registry, nav, &path, false).sidebar)?
        }
        Commands::Tabs { path } => {
            let tabs = navigation::settings_tabs(&registry, &nav.settings_path);
            let active = active_tab(&tabs, &path).map(|tab| tab.path.clone());
            print_json(&SettingsView { tabs, active })?
        }
        Commands::Navigation { path, collapsed } => {
            print_json(&navigation::snapshot(&registry, nav, &path, collapsed))?
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
