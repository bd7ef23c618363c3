// src/progress.rs
use tracing::info;

/// Status sink for the collection stages (page walk, mirrors).
/// Every hook has a no-op default, so sinks implement only what they show.
pub trait Progress {
    /// Number of items about to be processed, when known up front.
    fn begin(&mut self, _total: usize) {}

    fn log(&mut self, _msg: &str) {}

    /// One page or mirror done, with how many candidate rows it gave.
    fn item_done(&mut self, _label: &str, _rows: usize) {}

    fn finish(&mut self) {}
}

pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress as `info` lines (CLI).
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }

    fn item_done(&mut self, label: &str, rows: usize) {
        self.done += 1;
        if self.total > 0 {
            info!("[{}/{}] {label}: {rows} rows", self.done, self.total);
        } else {
            info!("[{}] {label}: {rows} rows", self.done);
        }
    }

    fn finish(&mut self) {
        self.total = 0;
        self.done = 0;
    }
}
