//! Loads [`PlatformConfig`] for the running platform.
//!
//! - **Web** (WASM): built-in defaults, there is no file system.
//! - **Desktop** (native): `<config_dir>/mindconnect/mindconnect.toml` when it
//!   exists, defaults otherwise.

use session::PlatformConfig;

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> PlatformConfig {
    PlatformConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> PlatformConfig {
    let Some(dir) = dirs::config_dir() else {
        return PlatformConfig::default();
    };
    let path = dir.join("mindconnect").join(PlatformConfig::filename());

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return PlatformConfig::default(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return PlatformConfig::default();
        }
    };

    match PlatformConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            PlatformConfig::default()
        }
    }
}
