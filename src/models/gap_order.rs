use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Direction in which the log is expected to run.
///
/// Exported traces are usually newest-first, so the default treats each entry
/// as older than the one before it and computes `previous - current`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GapOrder {
    #[default]
    Descending,
    Ascending,
}

impl GapOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapOrder::Descending => "descending",
            GapOrder::Ascending => "ascending",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            GapOrder::Descending => GapOrder::Ascending,
            GapOrder::Ascending => GapOrder::Descending,
        }
    }
}
