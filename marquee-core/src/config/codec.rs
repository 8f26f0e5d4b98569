//! Binary encoding of the display configuration

use super::{DisplayConfig, CONFIG_VERSION};
use crate::error::MarqueeError;

/// Errors from encoding or decoding a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Buffer too small or value not encodable
    Serialize,
    /// Bytes are not a valid configuration
    Deserialize,
    /// Stored version does not match this build
    VersionMismatch,
    /// Configuration does not fit the display
    Invalid(MarqueeError),
}

impl From<MarqueeError> for ConfigError {
    fn from(e: MarqueeError) -> Self {
        ConfigError::Invalid(e)
    }
}

/// Serialize `config` into `buf`, returning the used part of the buffer
pub fn encode<'b>(config: &DisplayConfig, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|_| ConfigError::Serialize)
}

/// Deserialize a configuration and check its version
pub fn decode(bytes: &[u8]) -> Result<DisplayConfig, ConfigError> {
    let config: DisplayConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

    if config.version != CONFIG_VERSION {
        warn!(
            "Config version mismatch: expected {}, got {}",
            CONFIG_VERSION,
            config.version
        );
        return Err(ConfigError::VersionMismatch);
    }

    Ok(config)
}

/// Decode a configuration and validate it for a display
pub fn load(
    bytes: &[u8],
    column_count: u16,
    zone_count: usize,
) -> Result<DisplayConfig, ConfigError> {
    let config = decode(bytes)?;
    config.validate(column_count, zone_count)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ZoneLayout, ZoneSettings};
    use crate::effects::{SpriteKind, TextEffect};
    use crate::text::TextAlign;

    fn sample() -> DisplayConfig {
        let mut config = DisplayConfig::new();
        config.zones.push(ZoneLayout::modules(0, 1).unwrap()).unwrap();
        config
            .zones
            .push(ZoneLayout {
                start: 16,
                end: 31,
                settings: ZoneSettings {
                    align: TextAlign::Center,
                    effect_in: TextEffect::Sprite(SpriteKind::Rocket),
                    effect_out: TextEffect::ScrollUpLeft,
                    speed_ms: 25,
                    pause_ms: 2000,
                    char_spacing: 2,
                    inverted: true,
                    intensity: 3,
                },
            })
            .unwrap();
        config
    }

    #[test]
    fn test_encode_decode() {
        let config = sample();
        let mut buf = [0u8; 128];
        let bytes = encode(&config, &mut buf).unwrap();
        assert_eq!(decode(bytes).unwrap(), config);
    }

    #[test]
    fn test_version_mismatch() {
        let mut config = sample();
        config.version = CONFIG_VERSION + 1;
        let mut buf = [0u8; 128];
        let bytes = encode(&config, &mut buf).unwrap();
        assert_eq!(decode(bytes), Err(ConfigError::VersionMismatch));
    }

    #[test]
    fn test_load_validates() {
        let config = sample();
        let mut buf = [0u8; 128];
        let bytes = encode(&config, &mut buf).unwrap();
        assert_eq!(
            load(bytes, 24, 2),
            Err(ConfigError::Invalid(MarqueeError::InvalidColumnRange))
        );
        assert!(load(bytes, 32, 2).is_ok());
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(decode(&[]), Err(ConfigError::Deserialize));
    }

    #[test]
    fn test_small_buffer() {
        let mut buf = [0u8; 2];
        assert_eq!(encode(&sample(), &mut buf), Err(ConfigError::Serialize));
    }
}
