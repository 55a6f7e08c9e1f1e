// src/logger/progress.rs
//! Progress line rendered on stderr during batch tokenization

use parking_lot::Mutex;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::utils::{format_duration, format_number, format_throughput};

const REDRAW_EVERY: Duration = Duration::from_millis(200);

/// Shared counter; safe to bump from worker threads.
pub struct Progress {
    label: &'static str,
    total: usize,
    done: AtomicUsize,
    enabled: bool,
    start_time: Instant,
    last_draw: Mutex<Option<Instant>>,
}

impl Progress {
    pub fn new(label: &'static str, total: usize, enabled: bool) -> Self {
        Self {
            label,
            total,
            done: AtomicUsize::new(0),
            enabled,
            start_time: Instant::now(),
            last_draw: Mutex::new(None),
        }
    }

    pub fn hidden() -> Self {
        Self::new("", 0, false)
    }

    pub fn done(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }

    pub fn inc(&self, n: usize) {
        let done = self.done.fetch_add(n, Ordering::Relaxed) + n;
        if !self.enabled {
            return;
        }

        // Só um worker redesenha por janela
        let mut last = self.last_draw.lock();
        let now = Instant::now();
        if last.map_or(true, |t| now.duration_since(t) >= REDRAW_EVERY) {
            *last = Some(now);
            self.draw(done, false);
        }
    }

    pub fn finish(&self) {
        if self.enabled {
            self.draw(self.done(), true);
        }
    }

    fn draw(&self, done: usize, last: bool) {
        let line = self.render(done);
        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "\r{}", line);
        if last {
            let _ = writeln!(stderr);
        }
        let _ = stderr.flush();
    }

    fn render(&self, done: usize) -> String {
        let elapsed = self.start_time.elapsed();
        let pct = if self.total == 0 {
            100.0
        } else {
            done as f64 * 100.0 / self.total as f64
        };
        let rate = done as f64 / elapsed.as_secs_f64().max(1e-3);

        format!(
            "  {}: {}/{} docs ({:>5.1}%) | {} | {}",
            self.label,
            format_number(done),
            format_number(self.total),
            pct,
            format_throughput(rate, "doc"),
            format_duration(elapsed.as_secs()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_without_drawing() {
        let progress = Progress::hidden();
        progress.inc(3);
        progress.inc(4);
        progress.finish();
        assert_eq!(progress.done(), 7);
    }

    #[test]
    fn test_render_line() {
        let progress = Progress::new("Tokenizando", 200, false);
        let line = progress.render(50);
        assert!(line.contains("Tokenizando: 50/200 docs"), "{}", line);
        assert!(line.contains("25.0%"), "{}", line);
    }
}
