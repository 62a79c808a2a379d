use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide switches that can change while the server runs.
///
/// Cloning shares the underlying flag. The generator reads it once per call
/// and the toggle endpoint writes it.
#[derive(Debug, Clone, Default)]
pub struct RuntimeSettings {
    demo_mode: Arc<AtomicBool>,
}

impl RuntimeSettings {
    pub fn new(demo_mode: bool) -> Self {
        Self {
            demo_mode: Arc::new(AtomicBool::new(demo_mode)),
        }
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode.load(Ordering::SeqCst)
    }

    /// Returns the previous value
    pub fn set_demo_mode(&self, enabled: bool) -> bool {
        self.demo_mode.swap(enabled, Ordering::SeqCst)
    }
}
