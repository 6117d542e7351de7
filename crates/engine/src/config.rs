//! Runtime configuration from environment variables.
//!
//! - `PONG_TICK_HZ`: tick rate (default: 60)
//! - `PONG_CELL_W` / `PONG_CELL_H`: pixels per terminal cell (default: 8 x 16)
//! - `PONG_LOG_PATH`: log file; logging is off when unset
//! - `PONG_LOG`: log filter (default: "info")
//!
//! Missing, unparsable or zero values fall back to the defaults, as do cell
//! sizes above [`MAX_CELL_PX`].

use std::time::Duration;

use crate::types::{CellScale, DEFAULT_CELL_H, DEFAULT_CELL_W, TICK_HZ};

pub const ENV_TICK_HZ: &str = "PONG_TICK_HZ";
pub const ENV_CELL_W: &str = "PONG_CELL_W";
pub const ENV_CELL_H: &str = "PONG_CELL_H";
pub const ENV_LOG_PATH: &str = "PONG_LOG_PATH";
pub const ENV_LOG_FILTER: &str = "PONG_LOG";

/// Largest accepted cell edge in pixels.
pub const MAX_CELL_PX: u16 = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_hz: u32,
    pub cell_w: u16,
    pub cell_h: u16,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,
            cell_w: DEFAULT_CELL_W,
            cell_h: DEFAULT_CELL_H,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map instead of the process env).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_hz = positive(get(ENV_TICK_HZ)).unwrap_or(defaults.tick_hz);
        let cell_w = positive(get(ENV_CELL_W))
            .filter(|&v| v <= MAX_CELL_PX)
            .unwrap_or(defaults.cell_w);
        let cell_h = positive(get(ENV_CELL_H))
            .filter(|&v| v <= MAX_CELL_PX)
            .unwrap_or(defaults.cell_h);

        let log_path = get(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let log_filter = get(ENV_LOG_FILTER)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            tick_hz,
            cell_w,
            cell_h,
            log_path,
            log_filter,
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.tick_hz.max(1) as u64)
    }

    pub fn scale(&self) -> CellScale {
        CellScale::new(self.cell_w, self.cell_h)
    }
}

fn positive<T>(raw: Option<String>) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    raw.and_then(|s| s.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.tick_period(), Duration::from_micros(16_666));
        assert_eq!(config.scale(), CellScale::new(8, 16));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_TICK_HZ, "120"),
            (ENV_CELL_W, " 10 "),
            (ENV_CELL_H, "20"),
            (ENV_LOG_PATH, "/tmp/pong.log"),
            (ENV_LOG_FILTER, "debug"),
        ]));
        assert_eq!(config.tick_hz, 120);
        assert_eq!(config.scale(), CellScale::new(10, 20));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/pong.log"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_TICK_HZ, "0"),
            (ENV_CELL_W, "wide"),
            (ENV_CELL_H, "-3"),
            (ENV_LOG_PATH, "   "),
        ]));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn oversized_cells_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_CELL_W, "65535"),
            (ENV_CELL_H, "257"),
        ]));
        assert_eq!(config.scale(), CellScale::default());

        let config = GameConfig::from_lookup(lookup(&[(ENV_CELL_W, "256")]));
        assert_eq!(config.cell_w, MAX_CELL_PX);
    }
}
