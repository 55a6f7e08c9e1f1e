//! Logging de progresso no terminal

mod progress;

pub use progress::Progress;
