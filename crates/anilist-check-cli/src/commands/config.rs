use crate::output::{Output, OutputFormat};
use anilist_check_config::Config;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::PathBuf;

pub fn run_config(cmd: crate::ConfigCommands, config_file: PathBuf, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(&config_file, output),
        crate::ConfigCommands::Init { force } => init_config(&config_file, force, output),
    }
}

fn show_config(config_file: &PathBuf, output: &Output) -> Result<()> {
    let exists = config_file.exists();
    let config = super::load_config(config_file)?;

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Config File").add_attribute(comfy_table::Attribute::Bold),
                Cell::new(config_file.display().to_string()),
            ]);
            table.add_row(vec![Cell::new("Endpoint"), Cell::new(&config.anilist.endpoint)]);
            table.add_row(vec![Cell::new("User Agent"), Cell::new(&config.anilist.user_agent)]);
            table.add_row(vec![Cell::new("Watching List"), Cell::new(&config.lists.watching)]);
            table.add_row(vec![Cell::new("Paused List"), Cell::new(&config.lists.paused)]);
            table.add_row(vec![Cell::new("Planning List"), Cell::new(&config.lists.planning)]);
            table.add_row(vec![
                Cell::new("Default User"),
                Cell::new(config.default_user.as_deref().unwrap_or("-")),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", table);

            if !exists {
                println!("{}", "Config file not found, showing defaults".bright_black());
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "exists": exists,
                "config": {
                    "anilist": {
                        "endpoint": config.anilist.endpoint,
                        "user_agent": config.anilist.user_agent,
                    },
                    "lists": {
                        "watching": config.lists.watching,
                        "paused": config.lists.paused,
                        "planning": config.lists.planning,
                    },
                    "default_user": config.default_user,
                },
            }));
        }
    }

    Ok(())
}

fn init_config(config_file: &PathBuf, force: bool, output: &Output) -> Result<()> {
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration file already exists at {}. Use --force to overwrite it",
            config_file.display()
        ));
        return Ok(());
    }

    Config::default()
        .save_to_file(config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
