//! Gap analysis: per-pair deltas between adjacent entries and the
//! aggregates needed to scale them.

use crate::models::gap_order::GapOrder;
use crate::models::log_entry::LogEntry;

/// Aggregates over the whole entry sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GapStatistics {
    /// Largest adjacent gap; never below 0.
    pub max_gap_ms: i64,
    /// First entry to last entry, independent of the individual gaps.
    pub total_span_ms: i64,
    /// Pairs whose gap is negative under the configured order.
    pub out_of_order_pairs: usize,
}

/// Gap in whole milliseconds between `prev` and `current`.
///
/// For the default descending order this is `prev - current`.
pub fn gap_between(prev: &LogEntry, current: &LogEntry, order: GapOrder) -> i64 {
    match order {
        GapOrder::Descending => prev.millis_since(current),
        GapOrder::Ascending => current.millis_since(prev),
    }
}

pub fn analyze_gaps(entries: &[LogEntry], order: GapOrder) -> GapStatistics {
    let (first, last) = match (entries.first(), entries.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return GapStatistics::default(),
    };

    let mut stats = GapStatistics {
        total_span_ms: gap_between(first, last, order),
        ..Default::default()
    };

    for w in entries.windows(2) {
        let gap = gap_between(&w[0], &w[1], order);
        if gap < 0 {
            stats.out_of_order_pairs += 1;
        }
        stats.max_gap_ms = stats.max_gap_ms.max(gap);
    }

    stats
}
