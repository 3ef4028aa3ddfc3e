use thiserror::Error;

/// 调用方传入的牌值不合法
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("At least one card value is required")]
    Empty,
    #[error("At most {max} card values are allowed, got {count}")]
    TooMany { count: usize, max: usize },
    #[error("Card value must be finite: {0}")]
    NonFinite(f64),
}

/// 生成器配置不合法
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Attempt budget must be at least 1")]
    ZeroAttempts,
    #[error("Invalid card range: {min}..={max} (must lie within 1..=13)")]
    InvalidRange { min: u32, max: u32 },
    #[error("Fallback deal value out of range: {0}")]
    InvalidFallback(u32),
    #[error("Fallback deal {0:?} cannot make 24")]
    UnsolvableFallback([u32; 4]),
}


/// 库层面的错误汇总
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}
