//! # Detail Overlay
//!
//! At most one case study is open at a time. Opening the overlay locks the
//! page scroll; closing it (or dropping the overlay while open) releases the
//! lock.
//!
//! ```text
//!            select(a)               select(b)
//!   Closed ────────────▶ Open(a) ────────────▶ Open(b)
//!     ▲                    │  select(a): no-op
//!     └──── close() ───────┘
//! ```
//!
//! The lock is held by a [`ScrollGuard`], so release happens in `Drop` and
//! does not depend on every exit path remembering to call `close()`.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag the page consults before scrolling.
///
/// Cloning yields another handle to the same lock. The page and its overlay
/// live on the UI thread, so the count is not shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while any [`ScrollGuard`] from this lock is alive.
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// Suppress page scrolling until the returned guard is dropped.
    pub fn acquire(&self) -> ScrollGuard {
        self.holders.set(self.holders.get() + 1);
        ScrollGuard {
            holders: Rc::clone(&self.holders),
        }
    }
}

/// Keeps the page scroll locked for as long as it lives.
#[derive(Debug)]
pub struct ScrollGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.holders.set(self.holders.get().saturating_sub(1));
    }
}

/// Modal showing the full detail of one selected item, keyed by `K`.
#[derive(Debug)]
pub struct DetailOverlay<K> {
    selected: Option<K>,
    guard: Option<ScrollGuard>,
    scroll: u16,
}

impl<K> Default for DetailOverlay<K> {
    fn default() -> Self {
        Self {
            selected: None,
            guard: None,
            scroll: 0,
        }
    }
}

impl<K: PartialEq> DetailOverlay<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `item`, replacing whatever is open. Returns `false` when `item`
    /// was already the open one.
    pub fn select(&mut self, item: K, lock: &ScrollLock) -> bool {
        if self.selected.as_ref() == Some(&item) {
            return false;
        }
        // Switching items keeps the existing guard so the lock never lapses
        if self.guard.is_none() {
            self.guard = Some(lock.acquire());
        }
        self.selected = Some(item);
        self.scroll = 0;
        true
    }

    /// Close the overlay; a no-op when nothing is open.
    pub fn close(&mut self) {
        self.selected = None;
        self.guard = None;
        self.scroll = 0;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    /// Vertical scroll of the overlay body, in rows.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self, rows: u16, max: u16) {
        if self.is_open() {
            self.scroll = self.scroll.saturating_add(rows).min(max);
        }
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_locks_and_close_unlocks() {
        let lock = ScrollLock::new();
        let mut overlay = DetailOverlay::new();
        assert!(!lock.is_locked());

        assert!(overlay.select("p1", &lock));
        assert!(lock.is_locked());
        assert_eq!(overlay.selected(), Some(&"p1"));

        overlay.close();
        assert!(!overlay.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_selecting_another_item_replaces() {
        let lock = ScrollLock::new();
        let mut overlay = DetailOverlay::new();
        overlay.select("p1", &lock);
        overlay.select("p2", &lock);
        assert_eq!(overlay.selected(), Some(&"p2"));
        assert!(lock.is_locked());

        // One close is enough: the lock was never taken twice
        overlay.close();
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_reselecting_open_item_is_noop() {
        let lock = ScrollLock::new();
        let mut overlay = DetailOverlay::new();
        overlay.select("p1", &lock);
        overlay.scroll_down(4, 10);
        assert!(!overlay.select("p1", &lock));
        assert_eq!(overlay.scroll(), 4);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let lock = ScrollLock::new();
        let mut overlay: DetailOverlay<&str> = DetailOverlay::new();
        overlay.close();
        overlay.close();
        assert!(!overlay.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_lock_holds_until_last_guard_drops() {
        let lock = ScrollLock::new();
        let other = lock.clone();
        let first = lock.acquire();
        let second = other.acquire();
        drop(first);
        assert!(lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());
        assert!(!other.is_locked());
    }

    #[test]
    fn test_drop_while_open_releases_lock() {
        let lock = ScrollLock::new();
        {
            let mut overlay = DetailOverlay::new();
            overlay.select(7u32, &lock);
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_body_scroll_is_bounded_and_reset() {
        let lock = ScrollLock::new();
        let mut overlay = DetailOverlay::new();
        overlay.scroll_down(3, 10);
        assert_eq!(overlay.scroll(), 0, "closed overlay does not scroll");

        overlay.select("p1", &lock);
        overlay.scroll_down(30, 10);
        assert_eq!(overlay.scroll(), 10);
        overlay.scroll_up(4);
        assert_eq!(overlay.scroll(), 6);

        overlay.select("p2", &lock);
        assert_eq!(overlay.scroll(), 0);
    }
}
