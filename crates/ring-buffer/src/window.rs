//! Read Window Configuration

use crate::error::RingBufferError;
use serde::{Deserialize, Serialize};

/// Default number of samples a consumer reads per window
pub const DEFAULT_WINDOW_LENGTH: usize = 32;

/// Shape of the window a consumer reads from the buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Number of most recent samples to read
    pub length: usize,
    /// Only read once the buffer has filled since the last clear
    pub require_full: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_WINDOW_LENGTH,
            require_full: true,
        }
    }
}

impl WindowConfig {
    /// Read the whole buffer, once it has filled
    pub fn whole(capacity: usize) -> Self {
        Self {
            length: capacity,
            require_full: true,
        }
    }

    /// Read the latest `length` samples as soon as that many exist
    pub fn streaming(length: usize) -> Self {
        Self {
            length,
            require_full: false,
        }
    }

    /// Check the window against a buffer capacity
    pub fn validate(&self, capacity: usize) -> Result<(), RingBufferError> {
        if self.length == 0 {
            return Err(RingBufferError::InvalidWindow("length must be non-zero"));
        }
        if self.length > capacity {
            return Err(RingBufferError::WindowExceedsCapacity {
                length: self.length,
                capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WindowConfig::default();
        assert_eq!(config.length, DEFAULT_WINDOW_LENGTH);
        assert!(config.require_full);
        assert!(config.validate(128).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_window() {
        let config = WindowConfig::streaming(0);
        assert_eq!(
            config.validate(8),
            Err(RingBufferError::InvalidWindow("length must be non-zero"))
        );
    }

    #[test]
    fn test_validate_rejects_oversized_window() {
        let config = WindowConfig::whole(16);
        assert!(config.validate(16).is_ok());
        assert_eq!(
            config.validate(8),
            Err(RingBufferError::WindowExceedsCapacity {
                length: 16,
                capacity: 8
            })
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: WindowConfig = serde_json::from_str(r#"{"length": 8}"#).unwrap();
        assert_eq!(config.length, 8);
        assert!(config.require_full);

        let config: WindowConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, WindowConfig::default());
    }
}
