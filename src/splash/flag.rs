use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Host-owned "splash is showing" flag. Starts true and can only ever be
/// cleared, once.
#[derive(Debug, Clone)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl ActiveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Returns true only for the call that actually cleared the flag.
    pub(crate) fn deactivate(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl Default for ActiveFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clears_exactly_once_across_clones() {
        let flag = ActiveFlag::new();
        let observer = flag.clone();
        assert!(observer.is_active());

        assert!(flag.deactivate());
        assert!(!flag.deactivate());
        assert!(!observer.is_active());
    }
}
