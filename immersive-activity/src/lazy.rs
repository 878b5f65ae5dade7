use std::sync::{Mutex, MutexGuard, OnceLock};

/// Callbacks that are only created the first time they are needed
///
/// Unlike a plain `OnceLock`, construction runs a one-off hook with the new
/// value before anyone gets to use it (the JNI bridge sets up logging there).
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
pub(crate) struct LazyCallbacks<C> {
    init: fn() -> C,
    cell: OnceLock<Mutex<C>>,
}

#[cfg_attr(not(target_os = "android"), allow(dead_code))]
impl<C> LazyCallbacks<C> {
    pub const fn new(init: fn() -> C) -> Self {
        Self {
            init,
            cell: OnceLock::new(),
        }
    }

    /// Locks the callbacks, creating them and running `on_init` first if this
    /// is the first call
    pub fn lock_or_init(&self, on_init: impl FnOnce(&C)) -> MutexGuard<'_, C> {
        self.cell
            .get_or_init(|| {
                let callbacks = (self.init)();
                on_init(&callbacks);
                Mutex::new(callbacks)
            })
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
