use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Liveness flag shared between a mounted view and the async work it spawned.
///
/// The view releases the guard in `on_cleanup`; a task that resolves later
/// checks `is_mounted` before writing any state.
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_guard_is_mounted() {
        assert!(MountGuard::new().is_mounted());
    }

    #[test]
    fn release_is_seen_by_every_clone() {
        let guard = MountGuard::new();
        let task_side = guard.clone();
        guard.release();
        assert!(!task_side.is_mounted());
        assert!(!guard.is_mounted());
    }

    #[test]
    fn release_is_idempotent() {
        let guard = MountGuard::new();
        guard.release();
        guard.release();
        assert!(!guard.is_mounted());
    }
}
