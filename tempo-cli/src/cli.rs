use anyhow::Result;
use clap::{Parser, Subcommand};
use tempo_core::{Config, Session, provider_from_config, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tempo", version, about = "HG Brasil weather display")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the HG Brasil API key and the city to display.
    Configure,

    /// Fetch the weather once and render the display.
    Show,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show => show().await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("HG Brasil API key:")
        .with_initial_value(&config.api_key)
        .prompt()?;
    let city = inquire::Text::new("City (e.g. Recife,PE):")
        .with_initial_value(&config.city)
        .prompt()?;

    config.api_key = api_key.trim().to_string();
    config.city = city.trim().to_string();
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show() -> Result<()> {
    let config = Config::load()?;
    config.require_api_key()?;

    tracing::debug!(city = %config.city, "starting fetch session");

    let mut session = Session::new(provider_from_config(&config));
    print_state(&session);

    session.fetch_once().await;
    print_state(&session);

    if let Some(snapshot) = session.state().snapshot() {
        let local = snapshot.fetched_at.with_timezone(&chrono::Local);
        println!();
        println!("Atualizado às {}", local.format("%H:%M"));
    }

    Ok(())
}

fn print_state(session: &Session) {
    for line in render(session.state()) {
        println!("{line}");
    }
}
