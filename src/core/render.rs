//! Timeline renderer: one line per entry, with a scaled bar block in front of
//! every entry whose preceding gap reaches the configured threshold.

use crate::config::Config;
use crate::core::calculator::gaps::{GapStatistics, gap_between};
use crate::models::gap_order::GapOrder;
use crate::models::log_entry::LogEntry;
use crate::utils::colors::Palette;
use crate::utils::formatting::{bar, percent_of};
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct TimelineRenderer {
    pub min_gap_ms: i64,
    pub bar_multiplier: usize,
    pub order: GapOrder,
    pub palette: Palette,
}

impl TimelineRenderer {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            min_gap_ms: cfg.min_gap_ms,
            bar_multiplier: cfg.bar_multiplier,
            order: cfg.order,
            palette: Palette::new(cfg.color),
        }
    }

    pub fn render<W: Write>(
        &self,
        entries: &[LogEntry],
        stats: &GapStatistics,
        out: &mut W,
    ) -> io::Result<()> {
        let mut prev: Option<&LogEntry> = None;

        for entry in entries {
            if let Some(p) = prev {
                let gap = gap_between(p, entry, self.order);
                if gap >= self.min_gap_ms {
                    self.write_gap_block(out, gap, stats)?;
                }
            }
            self.write_entry(out, entry)?;
            prev = Some(entry);
        }

        write!(out, "\n\nTotal: {}ms\n\n", stats.total_span_ms)
    }

    /// Bar width for `gap`, scaled so that the largest gap gets `bar_multiplier` columns.
    pub fn bar_length(&self, gap: i64, max_gap: i64) -> usize {
        if max_gap <= 0 || gap <= 0 {
            return 0;
        }
        ((gap as f64 / max_gap as f64) * self.bar_multiplier as f64) as usize
    }

    fn write_gap_block<W: Write>(
        &self,
        out: &mut W,
        gap: i64,
        stats: &GapStatistics,
    ) -> io::Result<()> {
        let rule = format!("{}|", bar(self.bar_length(gap, stats.max_gap_ms)));
        let took = format!(
            " > took: {}ms ({:.2}%)",
            gap,
            percent_of(gap, stats.total_span_ms)
        );

        writeln!(out, "{}", self.palette.rule.paint(rule.as_str()))?;
        writeln!(
            out,
            "{}{}",
            self.palette.rule.paint(rule.as_str()),
            self.palette.annotation.paint(took)
        )?;
        writeln!(out, "{}", self.palette.rule.paint(rule.as_str()))
    }

    fn write_entry<W: Write>(&self, out: &mut W, entry: &LogEntry) -> io::Result<()> {
        writeln!(
            out,
            "{}, {} {}: {}",
            self.palette.timestamp.paint(entry.timestamp_str()),
            entry.caller,
            entry.line_no,
            entry.message
        )
    }
}
