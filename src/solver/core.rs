use log::trace;

use crate::solver::constants::{EPSILON, TARGET};
use crate::solver::hint::Hint;
use crate::solver::operator::Operator;
use crate::solver::step::Step;

/// 求解器配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub target: f64,
    pub epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: TARGET,
            epsilon: EPSILON,
        }
    }
}

/// 递归归约求解器。
///
/// 每一层从当前数列里取出一对有序下标 `(i, j)`，按 `Operator::ALL` 的顺序
/// 计算 `a op b`，把结果放回数列末尾后继续递归，直到只剩一个数。
/// 搜索顺序固定为：外层下标升序、内层下标升序、运算符顺序，
/// 因此返回的总是该顺序下找到的第一条路径，而不是最短路径。
///
/// 4 个数时分支总数只有几百个，不需要记忆化。
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// 返回第一条可行路径的全部步骤。
    ///
    /// 只剩一个数且已等于目标时返回空路径；无解时返回 `None`。
    pub fn solve(&self, numbers: &[f64]) -> Option<Vec<Step>> {
        let path = self.search(numbers.to_vec(), Vec::new());
        trace!("Solved {:?}: {:?}", numbers, path);
        path
    }

    pub fn is_solvable(&self, numbers: &[f64]) -> bool {
        self.solve(numbers).is_some()
    }

    /// 只给出第一步的提示
    pub fn hint(&self, numbers: &[f64]) -> Hint {
        Hint::from_path(self.solve(numbers))
    }

    // 每个分支拿到自己的数列与历史副本，不需要回溯。
    fn search(&self, numbers: Vec<f64>, history: Vec<Step>) -> Option<Vec<Step>> {
        if numbers.len() == 1 {
            return if (numbers[0] - self.config.target).abs() < self.config.epsilon {
                Some(history)
            } else {
                None
            };
        }

        for (i, &a) in numbers.iter().enumerate() {
            for (j, &b) in numbers.iter().enumerate() {
                if i == j {
                    continue;
                }

                for op in Operator::ALL {
                    if op.is_commutative() && j < i {
                        continue;
                    }
                    let Some(value) = op.apply_exact(a, b, self.config.epsilon) else {
                        continue;
                    };

                    let mut next: Vec<f64> = numbers
                        .iter()
                        .enumerate()
                        .filter(|&(k, _)| k != i && k != j)
                        .map(|(_, &n)| n)
                        .collect();
                    next.push(value);

                    let mut next_history = history.clone();
                    next_history.push(Step::new(a, op, b, value));

                    if let Some(found) = self.search(next, next_history) {
                        return Some(found);
                    }
                }
            }
        }

        None
    }
}
