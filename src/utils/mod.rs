//! Utilitários compartilhados

mod format;

pub use format::{format_duration, format_number, format_percent, format_throughput};
