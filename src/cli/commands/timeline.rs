use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::io::{self, Write};

/// Handle the `timeline` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timeline {
        file,
        max_message_length,
        min_gap_ms,
        bar_multiplier,
        no_color,
        order,
    } = cmd
    {
        let path = file.as_ref().ok_or(AppError::MissingInput)?;

        let mut cfg = cfg.clone();
        if let Some(n) = max_message_length {
            cfg.max_message_length = *n;
        }
        if let Some(ms) = min_gap_ms {
            cfg.min_gap_ms = *ms;
        }
        if let Some(n) = bar_multiplier {
            cfg.bar_multiplier = *n;
        }
        if let Some(o) = order {
            cfg.order = *o;
        }
        if *no_color {
            cfg.color = false;
        }
        cfg.validate()?;

        let content = Core::read_input(path)?;
        let analysis = Core::analyze(&content, &cfg);

        if analysis.log.entries.is_empty() {
            messages::warning(format!("No line of {} matched the log format", path.display()));
        } else if analysis.stats.out_of_order_pairs > 0 {
            messages::warning(format!(
                "{} gaps are negative for {} order; try --order {}",
                analysis.stats.out_of_order_pairs,
                cfg.order.as_str(),
                cfg.order.opposite().as_str()
            ));
        }

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        Core::render(&analysis, &cfg, &mut out)?;
        out.flush().map_err(AppError::Render)?;
    }

    Ok(())
}
