use crate::output::{Output, OutputFormat};
use anilist_check_config::Config;
use anilist_check_core::WatchChecker;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_check_name(config: &Config, user: &str, show_name: &str, output: &Output) -> bool {
    let watching = WatchChecker::from_config(config).is_watching_by_name(user, show_name);
    report(user, "name", json!(show_name), show_name, watching, output);
    watching
}

/// `show_id` is passed through as typed so non-integers hit the invalid-id path
pub fn run_check_id(config: &Config, user: &str, show_id: &str, output: &Output) -> bool {
    let watching = WatchChecker::from_config(config).is_watching_by_id(user, show_id);
    report(user, "id", json!(show_id), &format!("#{}", show_id), watching, output);
    watching
}

fn report(user: &str, key: &str, target: serde_json::Value, label: &str, watching: bool, output: &Output) {
    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return;
            }
            if watching {
                println!("{} {} is tracking {}", "✓".green(), user.bold(), label);
            } else {
                println!("{} {} is not tracking {}", "✗".red(), user.bold(), label);
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let mut result = json!({ "user": user, "watching": watching });
            result[key] = target;
            output.json(&result);
        }
    }
}
