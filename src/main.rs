use clap::Parser;
use metis_formats::adapters::format_registry::FormatRegistry;
use metis_formats::cli::{Cli, Command};
use metis_formats::config::Settings;
use serde_json::json;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only generated values
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    info!(
        "Starting metis-formats (locale: {}, seed: {:?})",
        settings.generator.locale, settings.generator.seed
    );

    let registry = FormatRegistry::from_settings(&settings.generator);

    match cli.command {
        Command::Generate {
            format,
            min,
            max,
            count,
            json,
        } => {
            let min = min.unwrap_or(settings.defaults.min_length);
            let max = max.unwrap_or_else(|| {
                if min > settings.defaults.max_length {
                    warn!("--min {} exceeds the default maximum, using it as the maximum", min);
                }
                settings.defaults.max_length.max(min)
            });

            let values = (0..count)
                .map(|_| registry.generate(&format, min, max))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    if e.is_recoverable() {
                        warn!(
                            "Generation of '{}' failed: {} (widen the bounds or run `list` for valid keys)",
                            format, e
                        );
                    } else {
                        warn!("Generation of '{}' failed: {}", format, e);
                    }
                    e
                })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&values)?);
            } else {
                for value in values {
                    println!("{}", value);
                }
            }
        }
        Command::List { json } => {
            let entries: Vec<_> = registry
                .keys()
                .into_iter()
                .filter_map(|key| registry.family(key).map(|family| (key, family)))
                .collect();

            if json {
                let listing: Vec<_> = entries
                    .iter()
                    .map(|(key, family)| json!({ "key": key, "family": family }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for (key, family) in entries {
                    println!("{:<24} {}", key, family);
                }
            }
        }
    }

    Ok(())
}
