pub mod gap_order;
pub mod log_entry;
