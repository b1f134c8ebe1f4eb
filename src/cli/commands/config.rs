use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting::bold;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = &cli.command
    {
        let path = cli.config.clone().unwrap_or_else(Config::config_file);

        // ---- INIT CONFIG ----
        if *init {
            if path.exists() && !*force {
                messages::warning(format!(
                    "Configuration file {} already exists (use --force to overwrite)",
                    path.display()
                ));
            } else {
                Config::default().save(&path)?;
                messages::success(format!("Config file: {}", path.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("{}\n", bold(&format!("📄 Current configuration ({}):", path.display())));
            print!("{}", cfg.to_yaml()?);
        }

        if !*init && !*print_config {
            messages::info("Nothing to do: use --print or --init");
        }
    }

    Ok(())
}
