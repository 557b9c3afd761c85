use thiserror::Error;

pub type ColorResult<T> = std::result::Result<T, ColorError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format {input:?}: expected #rgb or #rrggbb")]
    InvalidColorFormat { input: String },
    #[error("channel {channel} out of range 0-255: {value}")]
    ChannelOutOfRange { channel: &'static str, value: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse threshold table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tier {level:?} has an invalid {field} ratio {value:?}")]
    InvalidRatio {
        level: String,
        field: &'static str,
        value: String,
    },
    #[error("tier {level:?} has a large-text floor ({large}) above its normal-text floor ({normal})")]
    InvertedTier { level: String, normal: f64, large: f64 },
    #[error("tier {higher:?} has a lower {field} floor ({higher_floor}) than tier {lower:?} ({lower_floor})")]
    TierOrder {
        lower: &'static str,
        higher: &'static str,
        field: &'static str,
        lower_floor: f64,
        higher_floor: f64,
    },
}
