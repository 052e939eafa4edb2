use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::error;
use std::process::Command;

/// Manage the configuration file (view, check, migrate, edit).
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let config = Config::load();
            println!("📄 Current configuration:");
            match serde_yaml::to_string(&config) {
                Ok(yaml) => println!("{}", yaml),
                Err(e) => error(format!("Cannot render configuration: {}", e)),
            }
        }

        if *check {
            migrate::check()?;
        }

        if *do_migrate {
            migrate::migrate()?;
        }

        if *edit_config {
            let path = Config::config_file();

            // Default editor based on the platform
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            // Use the requested editor if available, otherwise fall back
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully with '{}'",
                        editor_to_use
                    );
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "⚠️  Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    );
                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            println!(
                                "✅ Configuration file edited successfully with fallback '{}'",
                                default_editor
                            );
                        }
                        Ok(_) | Err(_) => {
                            error(format!(
                                "Failed to edit configuration file with fallback '{}'",
                                default_editor
                            ));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
