use std::{
    path::Path,
    sync::{Mutex, MutexGuard, OnceLock},
};

use toxcheck::config::{API_URL_ENV, CONFIG_HOME_ENV};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Serializes env mutations across tests and restores previous values on drop.
pub struct EnvGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn new() -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = [CONFIG_HOME_ENV, API_URL_ENV]
            .into_iter()
            .map(|key| (key, std::env::var(key).ok()))
            .collect();
        let guard = Self {
            previous,
            _lock: lock,
        };
        guard.remove(API_URL_ENV);
        guard
    }

    pub fn set_config_home(&self, path: &Path) {
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(CONFIG_HOME_ENV, path);
        }
    }

    pub fn set_api_url(&self, value: &str) {
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(API_URL_ENV, value);
        }
    }

    fn remove(&self, key: &str) {
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
