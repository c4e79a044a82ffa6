use std::fmt;
use std::sync::Arc;

use aware_core::model::User;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    ApiConfig, AppServices, DashboardService, IdentityService, InMemoryTrainingApi, ModuleService,
    TrainingApi,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://aware.sqlite3";
const ENV_DB_URL: &str = "AWARE_DB_URL";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    initial_user: Option<User>,
}

impl UiApp for DesktopApp {
    fn identity(&self) -> Arc<IdentityService> {
        self.services.identity()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn modules(&self) -> Arc<ModuleService> {
        self.services.modules()
    }

    fn initial_user(&self) -> Option<User> {
        self.initial_user.clone()
    }
}

struct Args {
    api: ApiConfig,
    db_url: String,
    offline: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--db <sqlite_url>] [--offline]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", ApiConfig::DEFAULT_BASE_URL);
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("  --offline  use the built-in demo catalog instead of the training API");
    eprintln!();
    eprintln!("Environment (a .env file is loaded if present):");
    eprintln!("  {}, {ENV_DB_URL}, RUST_LOG", ApiConfig::ENV_BASE_URL);
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api = ApiConfig::from_env().map_err(|_| ArgsError::InvalidApiUrl {
            raw: std::env::var(ApiConfig::ENV_BASE_URL).unwrap_or_default(),
        })?;
        let mut db_url = std::env::var(ENV_DB_URL)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut offline = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    api = ApiConfig::parse(&value)
                        .map_err(|_| ArgsError::InvalidApiUrl { raw: value })?;
                }
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--offline" => offline = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api,
            db_url,
            offline,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    prepare_sqlite_file(&parsed.db_url)?;
    let services = if parsed.offline {
        tracing::info!(db = %parsed.db_url, "Starting with the offline demo catalog");
        let api: Arc<dyn TrainingApi> = Arc::new(InMemoryTrainingApi::demo());
        AppServices::with_api_sqlite(&parsed.db_url, api).await?
    } else {
        tracing::info!(api = %parsed.api.base_url(), db = %parsed.db_url, "Starting");
        AppServices::new_sqlite(&parsed.db_url, parsed.api).await?
    };

    // A stored identity skips the landing page.
    let initial_user = services.identity().current().await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        initial_user,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Security Awareness Training")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
