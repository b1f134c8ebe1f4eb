use crate::config::Config;
use crate::core::calculator::gaps::{GapStatistics, analyze_gaps};
use crate::core::parser::{LineParser, ParsedLog};
use crate::core::render::TimelineRenderer;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Result of parsing and analyzing one log file.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub log: ParsedLog,
    pub stats: GapStatistics,
}

pub struct Core;

impl Core {
    /// Read the whole log. Invalid UTF-8 is replaced, not rejected: only the
    /// affected line may end up skipped.
    pub fn read_input(path: &Path) -> AppResult<String> {
        let bytes = fs::read(path).map_err(|source| AppError::UnreadableInput {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn analyze(content: &str, cfg: &Config) -> Analysis {
        let log = LineParser::from_config(cfg).parse_all(content);
        let stats = analyze_gaps(&log.entries, cfg.order);

        log::info!(
            "parsed {} entries ({} lines skipped), max gap {}ms, span {}ms",
            log.entries.len(),
            log.skipped,
            stats.max_gap_ms,
            stats.total_span_ms
        );

        Analysis { log, stats }
    }

    pub fn render<W: Write>(analysis: &Analysis, cfg: &Config, out: &mut W) -> AppResult<()> {
        TimelineRenderer::from_config(cfg)
            .render(&analysis.log.entries, &analysis.stats, out)
            .map_err(AppError::Render)
    }
}
