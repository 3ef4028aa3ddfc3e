use crate::errors::ConfigError;
use crate::generator::levels::{Deal, FALLBACK_DEAL};
use crate::solver::Solver;

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;
pub const MIN_CARD_VALUE: u32 = 1;
pub const MAX_CARD_VALUE: u32 = 13;

/// 随机出题的配置
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// 随机抽牌的最大尝试次数
    pub max_attempts: usize,
    pub min_value: u32,
    pub max_value: u32,
    /// 尝试次数用尽时返回的牌组，必须有解
    pub fallback: Deal,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_value: MIN_CARD_VALUE,
            max_value: MAX_CARD_VALUE,
            fallback: FALLBACK_DEAL,
        }
    }
}

impl GeneratorConfig {
    /// # 错误
    ///
    /// 尝试次数为 0、牌值范围为空或超出 `1..=13`、保底牌组越界或无解时返回错误。
    pub fn validate(&self, solver: &Solver) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        let card_range = MIN_CARD_VALUE..=MAX_CARD_VALUE;
        if self.min_value > self.max_value
            || !card_range.contains(&self.min_value)
            || !card_range.contains(&self.max_value)
        {
            return Err(ConfigError::InvalidRange {
                min: self.min_value,
                max: self.max_value,
            });
        }

        if let Some(&bad) = self.fallback.iter().find(|v| !card_range.contains(v)) {
            return Err(ConfigError::InvalidFallback(bad));
        }

        let numbers: Vec<f64> = self.fallback.iter().map(|&v| f64::from(v)).collect();
        if !solver.is_solvable(&numbers) {
            return Err(ConfigError::UnsolvableFallback(self.fallback));
        }

        Ok(())
    }
}
