//! Scoped page-scroll locking for modal overlays.
//!
//! [`ScrollLocker::acquire`] hands out a [`ScrollLock`] guard; background
//! scrolling stays disabled while at least one guard is alive and is restored
//! when the last one drops. Overlays stack (project modal, then the media
//! viewer on top of it), so holders are counted rather than toggled.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The page element whose scrolling gets suppressed.
pub trait ScrollSurface: Send + Sync {
    /// Enable or disable background scrolling.
    fn set_locked(&self, locked: bool);
}

/// Shared handle that issues scroll lock guards.
#[derive(Clone)]
pub struct ScrollLocker {
    surface: Arc<dyn ScrollSurface>,
    holders: Arc<AtomicUsize>,
}

impl ScrollLocker {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            surface: Arc::new(surface),
            holders: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Lock background scrolling until the returned guard is dropped.
    pub fn acquire(&self) -> ScrollLock {
        if self.holders.fetch_add(1, Ordering::AcqRel) == 0 {
            self.surface.set_locked(true);
        }
        ScrollLock {
            locker: self.clone(),
        }
    }

    /// Whether any guard is currently alive.
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of live guards.
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }
}

impl fmt::Debug for ScrollLocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLocker")
            .field("holders", &self.holders())
            .finish()
    }
}

/// Guard keeping background scrolling disabled while alive.
#[must_use = "scrolling is unlocked as soon as the guard is dropped"]
pub struct ScrollLock {
    locker: ScrollLocker,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if self.locker.holders.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.locker.surface.set_locked(false);
        }
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.locker.holders())
            .finish()
    }
}

/// Surface that records every lock/unlock call, for tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RecordingSurface {
    pub calls: Arc<std::sync::Mutex<Vec<bool>>>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl ScrollSurface for RecordingSurface {
    fn set_locked(&self, locked: bool) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(locked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_guard_locks_and_unlocks() {
        let surface = RecordingSurface::default();
        let locker = ScrollLocker::new(surface.clone());

        let guard = locker.acquire();
        assert!(locker.is_locked());
        assert_eq!(surface.calls(), vec![true]);

        drop(guard);
        assert!(!locker.is_locked());
        assert_eq!(surface.calls(), vec![true, false]);
    }

    #[test]
    fn test_nested_guards_unlock_once() {
        let surface = RecordingSurface::default();
        let locker = ScrollLocker::new(surface.clone());

        let outer = locker.acquire();
        let inner = locker.acquire();
        assert_eq!(locker.holders(), 2);

        drop(inner);
        assert!(locker.is_locked());
        assert_eq!(surface.calls(), vec![true]);

        drop(outer);
        assert!(!locker.is_locked());
        assert_eq!(surface.calls(), vec![true, false]);
    }

    #[test]
    fn test_out_of_order_release() {
        let surface = RecordingSurface::default();
        let locker = ScrollLocker::new(surface.clone());

        let first = locker.acquire();
        let second = locker.acquire();
        drop(first);
        assert!(locker.is_locked());
        drop(second);
        assert_eq!(surface.calls(), vec![true, false]);
    }

    #[test]
    fn test_relock_after_release() {
        let surface = RecordingSurface::default();
        let locker = ScrollLocker::new(surface.clone());

        drop(locker.acquire());
        drop(locker.acquire());
        assert_eq!(surface.calls(), vec![true, false, true, false]);
    }

    #[test]
    fn test_debug_format() {
        let locker = ScrollLocker::new(RecordingSurface::default());
        let _guard = locker.acquire();
        let debug_str = format!("{:?}", locker);
        assert!(debug_str.contains("ScrollLocker"));
        assert!(debug_str.contains("holders: 1"));
    }
}
