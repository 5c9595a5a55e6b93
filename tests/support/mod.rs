use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Points `TICKDIAL_CONFIG_HOME` at a test directory and restores the
/// previous value on drop. Holds a global lock so concurrent tests never
/// observe each other's environment.
pub struct ConfigHomeGuard {
    previous: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl ConfigHomeGuard {
    pub fn set(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = std::env::var("TICKDIAL_CONFIG_HOME").ok();
        // SAFETY: tests run under a global lock to prevent concurrent env
        // mutations.
        unsafe {
            std::env::set_var("TICKDIAL_CONFIG_HOME", path);
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for ConfigHomeGuard {
    fn drop(&mut self) {
        if let Some(value) = self.previous.take() {
            // SAFETY: see `set`.
            unsafe {
                std::env::set_var("TICKDIAL_CONFIG_HOME", value);
            }
        } else {
            // SAFETY: see `set`.
            unsafe {
                std::env::remove_var("TICKDIAL_CONFIG_HOME");
            }
        }
    }
}
