use crate::output::{Output, OutputFormat};
use anilist_check_config::Config;
use anilist_check_core::WatchChecker;
use anilist_check_models::{ListCollection, MediaRecord};
use chrono::Utc;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use serde_json::json;

/// Print a user's watching, paused and planning lists. Fetch errors surface as errors here.
pub fn run_lists(config: &Config, user: &str, output: &Output) -> Result<()> {
    let lists = WatchChecker::from_config(config)
        .fetch_lists(user)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to fetch {}'s lists: {}", user, e))?;

    match output.format() {
        OutputFormat::Human => {
            if !output.is_quiet() {
                print_tables(user, &lists);
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "user": user,
                "fetched_at": Utc::now().to_rfc3339(),
                "lists": lists,
            }));
        }
    }

    Ok(())
}

fn print_tables(user: &str, lists: &ListCollection) {
    println!("\n{} {}", "AniList lists for".bright_cyan().bold(), user.bold());
    println!();

    for (category, records) in lists.iter_scan_order() {
        if records.is_empty() {
            println!("{}", format!("{}: empty", capitalize(category.as_str())).bright_black());
            println!();
            continue;
        }

        let mut table = Table::new();
        table.set_header(vec![
            Cell::new(format!("{} ({})", capitalize(category.as_str()), records.len()))
                .fg(comfy_table::Color::Cyan)
                .add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        ]);
        for record in records {
            table.add_row(vec![Cell::new(record.id), Cell::new(title_cell(record))]);
        }
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        println!("{}", table);
        println!();
    }
}

fn title_cell(record: &MediaRecord) -> String {
    record.display_title().unwrap_or("(untitled)").to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
