//! make24 - 24 点出题与提示引擎
//!
//! 出题器从关卡表或随机抽牌中给出 4 张牌，求解器在整除、
//! 非负中间结果的规则下判断能否算出 24，并给出下一步提示。

pub mod card;
pub mod errors;
pub mod generator;
pub mod solver;
pub mod validation;

pub use card::Card;
pub use errors::{ConfigError, PuzzleError, ValidationError};
pub use generator::{DealSource, GeneratedDeal, GeneratorConfig, ProblemGenerator};
pub use solver::{Hint, Operator, Solver, SolverConfig, Step};
pub use validation::validate_values;

/// 用默认配置和线程随机数出一道题。
///
/// `level` 在关卡表范围内时返回固定牌组，否则随机出一道有解的题。
///
/// # Examples
///
/// ```
/// use make24::{generate_problem, is_solvable};
///
/// let cards = generate_problem(Some(1));
/// let values: Vec<f64> = cards.iter().map(|c| c.value).collect();
/// assert_eq!(values, vec![12.0, 12.0, 1.0, 1.0]);
/// assert!(is_solvable(&values));
/// ```
pub fn generate_problem(level: Option<u32>) -> Vec<Card> {
    ProblemGenerator::new().generate(level)
}

/// 按给定配置出一道题。
///
/// # 错误
///
/// 配置未通过校验时返回 [`PuzzleError::ConfigError`]。
pub fn generate_problem_with(
    config: GeneratorConfig,
    level: Option<u32>,
) -> Result<Vec<Card>, PuzzleError> {
    let mut generator = ProblemGenerator::with_rng(rand::thread_rng(), config)?;
    Ok(generator.generate(level))
}

pub fn is_solvable(values: &[f64]) -> bool {
    Solver::default().is_solvable(values)
}

pub fn solve(values: &[f64]) -> Option<Vec<Step>> {
    Solver::default().solve(values)
}

/// 对当前（可能已经合并过的）局面给出下一步提示
///
/// ```
/// let hint = make24::get_hint(&[3.0, 8.0]);
/// assert_eq!(hint.to_string(), "Hint: 3 × 8 = 24");
/// ```
pub fn get_hint(values: &[f64]) -> Hint {
    Solver::default().hint(values)
}

/// 先校验外部传入的牌值，再给出提示。
///
/// # 错误
///
/// 牌值未通过 [`validate_values`] 时返回 [`PuzzleError::ValidationError`]。
pub fn try_get_hint(values: &[f64]) -> Result<Hint, PuzzleError> {
    validate_values(values)?;
    Ok(get_hint(values))
}

/// 先校验牌值，再求完整路径
///
/// # 错误
///
/// 同 [`try_get_hint`]。
pub fn try_solve(values: &[f64]) -> Result<Option<Vec<Step>>, PuzzleError> {
    validate_values(values)?;
    Ok(solve(values))
}

pub fn hint_for_cards(cards: &[Card]) -> Hint {
    get_hint(&card::card_values(cards))
}
