//! 出题：关卡表 + 随机抽牌筛选

mod config;
mod core;
pub mod levels;

pub use self::core::{DealSource, GeneratedDeal, ProblemGenerator};
pub use config::{GeneratorConfig, DEFAULT_MAX_ATTEMPTS, MAX_CARD_VALUE, MIN_CARD_VALUE};
pub use levels::{curated_deal, curated_level_count, Deal, CURATED_DEALS, FALLBACK_DEAL};
