//! Configuration of game engine.

use std::time::Duration;

use semver::Version;

/// Name of the engine taken from Cargo metadata.
pub const ENGINE_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");

const ENGINE_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    /// Version of the engine taken from Cargo metadata.
    pub static ref ENGINE_VERSION: Version = ENGINE_VERSION_STR
        .parse()
        .unwrap_or_else(|_| Version::new(0, 0, 0));
}

/// Default duration of one frame, which is 60 frames per second.
pub const DEFAULT_FRAME_DELTA: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Configuration of the application which uses game engine.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    frame_limit: Option<u64>,
    frame_delta: Duration,
}

impl Config {
    /// Creates configuration which runs until the application asks to exit.
    pub fn new(name: String, version: Version) -> Self {
        Self {
            name,
            version,
            frame_limit: None,
            frame_delta: DEFAULT_FRAME_DELTA,
        }
    }

    /// Stops the application after given count of frames.
    pub fn with_frame_limit(mut self, frame_limit: u64) -> Self {
        self.frame_limit = Some(frame_limit);
        self
    }

    /// Sets fixed duration of each frame, which is passed to systems.
    pub fn with_frame_delta(mut self, frame_delta: Duration) -> Self {
        self.frame_delta = frame_delta;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn frame_limit(&self) -> Option<u64> {
        self.frame_limit
    }

    pub fn frame_delta(&self) -> Duration {
        self.frame_delta
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("Hello World".to_string(), Version::new(0, 0, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = Config::new("demo".to_string(), Version::new(1, 2, 3))
            .with_frame_limit(10)
            .with_frame_delta(Duration::from_millis(5));
        assert_eq!(config.name(), "demo");
        assert_eq!(config.version(), &Version::new(1, 2, 3));
        assert_eq!(config.frame_limit(), Some(10));
        assert_eq!(config.frame_delta(), Duration::from_millis(5));
    }

    #[test]
    fn test_engine_version() {
        assert_eq!(ENGINE_NAME, "lumen_core");
        assert_eq!(ENGINE_VERSION.to_string(), ENGINE_VERSION_STR);
        assert_eq!(Config::default().frame_limit(), None);
    }
}
