use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Tests that touch process-global state (environment variables, the global
/// providers) run serialized behind this lock.
pub(crate) fn global_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Holds the global lock, clears the given variables up front, and clears
/// them again on drop so tests observe a clean environment.
pub(crate) struct EnvGuard {
    _lock: MutexGuard<'static, ()>,
    vars: Vec<&'static str>,
}

impl EnvGuard {
    pub(crate) fn new(vars: &[&'static str]) -> Self {
        let lock = global_lock();
        for var in vars {
            env::remove_var(var);
        }
        Self {
            _lock: lock,
            vars: vars.to_vec(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in &self.vars {
            env::remove_var(var);
        }
    }
}
