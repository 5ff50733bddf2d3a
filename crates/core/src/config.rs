//! Board size configuration.

use thiserror::Error;

use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, SPAWN_MIN_COLUMN, SPAWN_RIGHT_MARGIN};

/// Narrowest well with a non-empty spawn column range.
pub const MIN_WIDTH: usize = SPAWN_MIN_COLUMN + SPAWN_RIGHT_MARGIN;
pub const MAX_WIDTH: usize = 64;
pub const MIN_HEIGHT: usize = 4;
pub const MAX_HEIGHT: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {0} is out of range ({min}..={max})", min = MIN_WIDTH, max = MAX_WIDTH)]
    WidthOutOfRange(usize),
    #[error("board height {0} is out of range ({min}..={max})", min = MIN_HEIGHT, max = MAX_HEIGHT)]
    HeightOutOfRange(usize),
}

/// Validated board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    height: usize,
    width: usize,
}

impl BoardConfig {
    pub fn new(height: usize, width: usize) -> Result<Self, ConfigError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            return Err(ConfigError::WidthOutOfRange(width));
        }
        if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height) {
            return Err(ConfigError::HeightOutOfRange(height));
        }
        Ok(Self { height, width })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_BOARD_HEIGHT,
            width: DEFAULT_BOARD_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_twenty_by_ten() {
        let config = BoardConfig::default();
        assert_eq!((config.height(), config.width()), (20, 10));
        assert_eq!(BoardConfig::new(20, 10), Ok(config));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(BoardConfig::new(4, 6).is_ok());
        assert!(BoardConfig::new(64, 64).is_ok());
        assert_eq!(BoardConfig::new(20, 5), Err(ConfigError::WidthOutOfRange(5)));
        assert_eq!(BoardConfig::new(20, 65), Err(ConfigError::WidthOutOfRange(65)));
        assert_eq!(BoardConfig::new(3, 10), Err(ConfigError::HeightOutOfRange(3)));
    }

    #[test]
    fn error_message_names_the_range() {
        let err = BoardConfig::new(20, 2).unwrap_err();
        assert_eq!(err.to_string(), "board width 2 is out of range (6..=64)");
    }
}
