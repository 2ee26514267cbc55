//! Synchronization utilities for robust lock handling
//!
//! This module provides utilities for handling lock poisoning in a
//! consistent manner across the codebase. A poisoned lock means a panic
//! occurred while the lock was held; the registry converts that into a
//! domain error instead of propagating the panic.

use std::sync::{LockResult, RwLockReadGuard, RwLockWriteGuard};

/// Handle poisoned mutex cases with consistent error handling
///
/// Converts mutex poison errors into application-specific errors using a
/// provided error constructor.
///
/// # Arguments
/// * `result` - The result from a mutex lock operation
/// * `error_constructor` - Function to create the appropriate error type
///
/// # Returns
/// The mutex guard on success, or an application error on poison/failure
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use tokreg::core::sync::handle_mutex_poison;
/// use tokreg::encoding::api::EncodingError;
///
/// let mutex = Mutex::new(42);
/// let guard = handle_mutex_poison(
///     mutex.lock(),
///     |msg| EncodingError::LockPoisoned { message: msg }
/// ).unwrap();
/// ```
pub fn handle_mutex_poison<T, E>(
    result: LockResult<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<T, E> {
    result.map_err(|poison_err| {
        error_constructor(
            format!(
                "Internal synchronisation error (mutex poisoned). This indicates a panic occurred while holding a lock. PoisonError: {:?}",
                poison_err
            )
        )
    })
}

/// Handle poisoned RwLock read operations with consistent error handling
///
/// Similar to handle_mutex_poison but specifically for RwLock read
/// operations. RwLocks can become poisoned when a writer panics while
/// holding the lock.
pub fn handle_rwlock_read<T, E>(
    result: LockResult<RwLockReadGuard<T>>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<RwLockReadGuard<T>, E> {
    result.map_err(|poison_err| {
        error_constructor(
            format!(
                "Internal synchronisation error (RwLock read poisoned). This indicates a panic occurred while holding a write lock. PoisonError: {:?}",
                poison_err
            )
        )
    })
}

/// Handle poisoned RwLock write operations with consistent error handling
pub fn handle_rwlock_write<T, E>(
    result: LockResult<RwLockWriteGuard<T>>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<RwLockWriteGuard<T>, E> {
    result.map_err(|poison_err| {
        error_constructor(
            format!(
                "Internal synchronisation error (RwLock write poisoned). This indicates a panic occurred while holding the lock. PoisonError: {:?}",
                poison_err
            )
        )
    })
}
