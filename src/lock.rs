use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;

use crate::Error;

/// Whether an [`InstanceHolder`] has been populated yet
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Initialized,
}

/// Process-wide storage for at most one value, built on first request
///
/// Unlike `once_cell::sync::Lazy`, the initializer may fail. A failed
/// initialization leaves the holder empty and the next [`get`](Self::get)
/// runs the initializer again.
///
/// # Example
///
/// ```
/// use chocolate_factory::lock::{InstanceHolder, State};
///
/// static ANSWER: InstanceHolder<u32> = InstanceHolder::new(|| Ok(42));
///
/// assert_eq!(ANSWER.state(), State::Uninitialized);
/// assert_eq!(ANSWER.get(), Ok(&42));
/// assert_eq!(ANSWER.state(), State::Initialized);
/// ```
pub struct InstanceHolder<T> {
    cell: OnceCell<T>,
    init: fn() -> Result<T, Error>,
    constructions: AtomicUsize,
}

impl<T> InstanceHolder<T> {
    pub const fn new(init: fn() -> Result<T, Error>) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
            constructions: AtomicUsize::new(0),
        }
    }

    /// Returns the held value, building it first if the holder is empty
    ///
    /// Concurrent first calls block on each other: exactly one of them runs
    /// the initializer and all of them observe the same value.
    pub fn get(&self) -> Result<&T, Error> {
        self.cell.get_or_try_init(|| {
            let type_name = std::any::type_name::<T>();
            tracing::debug!(type_name, "constructing shared instance");

            match (self.init)() {
                Ok(value) => {
                    self.constructions.fetch_add(1, Ordering::Release);
                    tracing::info!(type_name, "shared instance constructed");
                    Ok(value)
                }
                Err(err) => {
                    tracing::warn!(type_name, %err, "construction failed, holder left empty");
                    Err(err)
                }
            }
        })
    }

    /// Returns the held value without building it
    pub fn get_initialized(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn state(&self) -> State {
        if self.get_initialized().is_some() {
            State::Initialized
        } else {
            State::Uninitialized
        }
    }

    /// Number of successful constructions, at most 1
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::Acquire)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for InstanceHolder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceHolder")
            .field("state", &self.state())
            .field("value", &self.get_initialized())
            .field("constructions", &self.constructions())
            .finish_non_exhaustive()
    }
}
