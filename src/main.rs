use clap::Parser;
use iem_reco::{cli, client, config, error, prompt, recommend, render};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use iem_reco_common::{Field, FormController, RenderConfig};
use render::Report;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Recommend { budget, genre, sound_character, server, json, no_input } => {
            let config = load_config()?;
            let server = config.resolve_server(server.as_deref());
            let transport =
                client::HttpTransport::new(&server, Duration::from_secs(config.timeout_seconds))?;

            let interactive = !no_input && std::io::stdin().is_terminal();
            let fields = prompt::complete_fields(budget, genre, sound_character, interactive)?;

            if json {
                let report = recommend::fetch_json(&fields, &transport).await?;
                return Ok(report.emit());
            }

            let render_config = RenderConfig::default().with_static_root(config.static_root_on(&server));
            let mut controller = FormController::new(render_config);
            recommend::submit(&mut controller, &fields, &transport, true).await;

            if let Some(report) = Report::from_state(controller.state()) {
                return Ok(report.emit());
            }
        }

        Commands::Options => {
            for field in Field::ALL {
                println!("{} (--{}):", field.label(), field.key().replace('_', "-"));
                for option in field.options() {
                    println!("  {:<18} {}", option.value, option.label);
                }
            }
        }

        Commands::Config { set_server, show } => {
            let mut config = load_config()?;

            if let Some(url) = set_server {
                config.set_server_url(url)?;
                config.save()?;
                println!("✔ Server set to {}", config.server_url);
            }

            if show {
                println!("Settings:");
                println!("  Server: {}", config.server_url);
                println!("  Static root: {}", config.static_root);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  Config file: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config() -> Result<Config> {
    let config = Config::load()?;
    tracing::debug!(?config, "config loaded");
    Ok(config)
}

/// `RUST_LOG` wins; otherwise warn, or info with `--verbose`
fn init_logging(verbose: bool) {
    let default = if verbose { "iem_reco=info" } else { "iem_reco=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
