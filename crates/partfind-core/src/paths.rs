//! Common filesystem paths used by partfind.

use std::path::PathBuf;

/// Base directory for partfind state (config, logs).
///
/// Defaults to `~/.config/partfind`, but can be overridden via
/// `PARTFIND_DIR` for testing or multi-instance setups.
pub fn partfind_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PARTFIND_DIR") {
        return PathBuf::from(dir);
    }

    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".config").join("partfind")
}

/// Path to the partfind configuration file.
pub fn config_path() -> PathBuf {
    partfind_dir().join("config.toml")
}

/// Path to the TUI log file.
pub fn tui_log_path() -> PathBuf {
    partfind_dir().join("partfind-tui.log")
}

#[doc(hidden)]
pub fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partfind_dir_honours_override() {
        let _guard = test_env_lock();
        let previous = std::env::var("PARTFIND_DIR").ok();

        std::env::set_var("PARTFIND_DIR", "/tmp/partfind-test-dir");
        assert_eq!(partfind_dir(), PathBuf::from("/tmp/partfind-test-dir"));
        assert_eq!(
            config_path(),
            PathBuf::from("/tmp/partfind-test-dir/config.toml")
        );

        match previous {
            Some(value) => std::env::set_var("PARTFIND_DIR", value),
            None => std::env::remove_var("PARTFIND_DIR"),
        }
    }
}
