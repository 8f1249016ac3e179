use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::{self, Config};

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();

    let assets = config
        .assets()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "public".to_string());
    let rows = [
        ("defaults.assets", assets),
        ("defaults.start_muted", config.start_muted().to_string()),
        ("defaults.auto_advance", config.auto_advance().to_string()),
        ("defaults.windowed", config.windowed().to_string()),
    ];
    for (key, value) in rows {
        println!("  {} {}", format!("{key:<24}").cyan(), value);
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value).with_context(|| {
        format!("Could not set {key} (valid keys: {})", config::KEYS.join(", "))
    })?;
    let path = config.save().context("Failed to save config")?;
    println!("{} {} = {}", "Set".green().bold(), key, value);
    println!("{}", format!("Saved to {}", path.display()).dimmed());
    Ok(())
}
