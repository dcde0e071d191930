//! Screen-level orchestration over the pagination engine and the library.
//!
//! Coordinators are shared behind `Arc` and take `&self`; overlapping loads
//! on the same coordinator are turned away by its loading flag.

pub mod general;
pub mod library;
pub mod search;

use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

pub use general::GeneralCoordinator;
pub use library::{LibraryCoordinator, LibraryStats};
pub use search::{SearchCoordinator, SearchFilters};

/// What a page load request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutcome {
    Loaded,
    /// No metadata yet, or already on the last page.
    NothingToLoad,
    /// Another load was in flight on the same coordinator.
    Busy,
}

/// Holds a loading flag raised until dropped, so an abandoned load cannot
/// leave it stuck.
struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    /// Raises the flag only if it was down.
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }

}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Counts loads that may overlap; the count drops back when each guard goes.
struct InFlight<'a> {
    count: &'a AtomicUsize,
}

impl<'a> InFlight<'a> {
    fn enter(count: &'a AtomicUsize) -> Self {
        count.fetch_add(1, Ordering::AcqRel);
        Self { count }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Last failure of a coordinator, in displayable form.
#[derive(Default)]
struct ErrorMessage(Mutex<Option<String>>);

impl ErrorMessage {
    fn get(&self) -> Option<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, message: impl ToString) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_string());
    }

    fn clear(&self) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
