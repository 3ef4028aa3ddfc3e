use std::fmt;

use log::{debug, warn};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::card::Card;
use crate::errors::ConfigError;
use crate::generator::config::GeneratorConfig;
use crate::generator::levels::{curated_deal, Deal};
use crate::solver::Solver;

/// 牌组的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealSource {
    /// 关卡表中的固定牌组
    Curated { level: u32 },
    /// 随机抽取，`attempts` 为找到有解牌组所用的次数
    Random { attempts: usize },
    /// 尝试次数用尽后的保底牌组
    Fallback { attempts: usize },
}

impl fmt::Display for DealSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DealSource::Curated { level } => write!(f, "curated level {}", level),
            DealSource::Random { attempts } => {
                write!(f, "random draw after {} attempt(s)", attempts)
            }
            DealSource::Fallback { attempts } => {
                write!(f, "fallback deal after {} failed attempts", attempts)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedDeal {
    pub numbers: Deal,
    pub source: DealSource,
}

/// 出题器。
///
/// 关卡号落在关卡表范围内时直接返回表中的牌组；否则不断随机抽取 4 张牌，
/// 交给求解器筛选，直到得到有解的牌组或用尽尝试次数。
/// 用尽时返回保底牌组，调用方永远拿到一道有解的题。
pub struct ProblemGenerator<R: Rng> {
    rng: R,
    config: GeneratorConfig,
    solver: Solver,
}

impl ProblemGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
            config: GeneratorConfig::default(),
            solver: Solver::default(),
        }
    }
}

impl Default for ProblemGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ProblemGenerator<R> {
    /// # 错误
    ///
    /// `config` 未通过 [`GeneratorConfig::validate`] 时返回错误。
    pub fn with_rng(rng: R, config: GeneratorConfig) -> Result<Self, ConfigError> {
        let solver = Solver::default();
        config.validate(&solver)?;
        Ok(Self {
            rng,
            config,
            solver,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// 出一道题，返回 4 张原始牌
    pub fn generate(&mut self, level: Option<u32>) -> Vec<Card> {
        let deal = self.generate_deal(level);
        deal.numbers
            .iter()
            .map(|&value| Card::original(value, &mut self.rng))
            .collect()
    }

    pub fn generate_deal(&mut self, level: Option<u32>) -> GeneratedDeal {
        if let Some(level) = level {
            if let Some(numbers) = curated_deal(level) {
                debug!("Using curated deal {:?} for level {}", numbers, level);
                return GeneratedDeal {
                    numbers,
                    source: DealSource::Curated { level },
                };
            }
            debug!("Level {} is beyond the curated table, drawing randomly", level);
        }

        for attempt in 1..=self.config.max_attempts {
            let numbers = self.draw();
            let values: Vec<f64> = numbers.iter().map(|&v| f64::from(v)).collect();
            if self.solver.is_solvable(&values) {
                debug!("Drew solvable deal {:?} on attempt {}", numbers, attempt);
                return GeneratedDeal {
                    numbers,
                    source: DealSource::Random { attempts: attempt },
                };
            }
        }

        warn!(
            "No solvable deal in {} attempts, using fallback {:?}",
            self.config.max_attempts, self.config.fallback
        );
        GeneratedDeal {
            numbers: self.config.fallback,
            source: DealSource::Fallback {
                attempts: self.config.max_attempts,
            },
        }
    }

    /// 独立均匀地抽取 4 个数，可以重复，不做筛选
    pub fn draw(&mut self) -> Deal {
        let (min, max) = (self.config.min_value, self.config.max_value);
        [(); 4].map(|_| self.rng.gen_range(min..=max))
    }
}
