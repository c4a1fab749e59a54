use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use platform::{HostPlatform, PlatformError};
use services::{ClinicApi, ClinicApiConfig, ClinicBackend};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --api-base value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-base <url>] [--app-id <id>] [--token <access_token>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-base https://my-app.shotoharu.workers.dev");
    eprintln!("  --app-id dev");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CLINIC_API_BASE_URL, CLINIC_APP_ID, CLINIC_ACCESS_TOKEN");
}

struct Args {
    base_url: String,
    app_id: String,
    token: Option<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut base_url = std::env::var("CLINIC_API_BASE_URL")
            .unwrap_or_else(|_| "https://my-app.shotoharu.workers.dev".into());
        let mut app_id = std::env::var("CLINIC_APP_ID").unwrap_or_else(|_| "dev".into());
        let mut token = std::env::var("CLINIC_ACCESS_TOKEN").ok();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-base" => {
                    let value = require_value(args, "--api-base")?;
                    if value.trim().is_empty() || !value.starts_with("http") {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    base_url = value;
                }
                "--app-id" => {
                    app_id = require_value(args, "--app-id")?;
                }
                "--token" => {
                    token = Some(require_value(args, "--token")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            base_url,
            app_id,
            token,
        })
    }
}

/// Desktop stand-in for the messaging platform host. The access token comes
/// from the environment or the command line instead of an embedded web view,
/// so interactive login is unavailable here.
struct HostBridge {
    token: Option<String>,
}

#[async_trait]
impl HostPlatform for HostBridge {
    async fn init(&self, app_id: &str) -> Result<(), PlatformError> {
        if app_id.trim().is_empty() {
            return Err(PlatformError::Init("empty app id".into()));
        }
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    async fn login(&self) -> Result<(), PlatformError> {
        Err(PlatformError::LoginFailed(
            "interactive login is only available inside the messaging app".into(),
        ))
    }

    fn access_token(&self) -> Option<String> {
        self.token.clone()
    }

    async fn ready(&self) -> Result<(), PlatformError> {
        Ok(())
    }
}

struct DesktopApp {
    app_id: String,
    platform: Arc<dyn HostPlatform>,
    backend: Arc<dyn ClinicBackend>,
}

impl UiApp for DesktopApp {
    fn app_id(&self) -> String {
        self.app_id.clone()
    }

    fn platform(&self) -> Arc<dyn HostPlatform> {
        Arc::clone(&self.platform)
    }

    fn backend(&self) -> Arc<dyn ClinicBackend> {
        Arc::clone(&self.backend)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let parsed = Args::parse(&mut args).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let backend = Arc::new(ClinicApi::new(ClinicApiConfig {
        base_url: parsed.base_url,
    }));
    let platform = Arc::new(HostBridge {
        token: parsed.token,
    });

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        app_id: parsed.app_id,
        platform,
        backend,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Clinic Queue")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
