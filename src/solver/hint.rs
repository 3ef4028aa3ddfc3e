use std::fmt;

use crate::solver::step::Step;

pub const NO_SOLUTION_MESSAGE: &str = "No solution from here, try reset or undo?";
pub const SOLVED_MESSAGE: &str = "Already at 24!";

/// 对当前局面给出的提示，只包含下一步，不给出完整解法。
#[derive(Debug, Clone, PartialEq)]
pub enum Hint {
    Step(Step),
    /// 只剩一个数且已经等于 24
    Solved,
    NoSolution,
}

impl Hint {
    pub fn from_path(path: Option<Vec<Step>>) -> Self {
        match path {
            Some(steps) => match steps.first() {
                Some(step) => Hint::Step(*step),
                None => Hint::Solved,
            },
            None => Hint::NoSolution,
        }
    }

    pub fn step(&self) -> Option<&Step> {
        match self {
            Hint::Step(step) => Some(step),
            Hint::Solved | Hint::NoSolution => None,
        }
    }

    pub fn is_no_solution(&self) -> bool {
        matches!(self, Hint::NoSolution)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Hint::Step(step) => write!(f, "Hint: {}", step),
            Hint::Solved => write!(f, "{}", SOLVED_MESSAGE),
            Hint::NoSolution => write!(f, "{}", NO_SOLUTION_MESSAGE),
        }
    }
}
