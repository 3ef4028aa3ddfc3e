//! 24 点求解器：在整除、非负中间结果的规则下搜索第一条可行路径。

pub mod constants;
mod core;
mod hint;
mod operator;
mod step;

pub use self::core::{Solver, SolverConfig};
pub use hint::{Hint, NO_SOLUTION_MESSAGE, SOLVED_MESSAGE};
pub use operator::Operator;
pub use step::{format_value, Step};

#[cfg(test)]
mod tests;
