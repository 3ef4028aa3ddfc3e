use std::fmt;

use crate::solver::constants::EPSILON;

/// 四则运算符。
///
/// `ALL` 的顺序即搜索顺序：加、乘、减、除。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Multiply,
    Subtract,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Multiply => '×',
            Operator::Subtract => '-',
            Operator::Divide => '÷',
        }
    }

    /// 交换律成立的运算只需要按一个方向尝试。
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply)
    }

    /// 按求解器的规则计算 `a op b`，不合规则时返回 `None`：
    /// - 减法要求 `a >= b`，不产生负数；
    /// - 除法要求除数绝对值大于 `epsilon`，且商在容差内是整数。
    ///
    /// 整除看的是商而不是余数：`0.3 % 0.1` 约等于 `0.1`，而不是 0。
    pub fn apply_exact(self, a: f64, b: f64, epsilon: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(a + b),
            Operator::Multiply => Some(a * b),
            Operator::Subtract if a >= b => Some(a - b),
            Operator::Subtract => None,
            Operator::Divide if b.abs() > epsilon => {
                let quotient = a / b;
                if (quotient - quotient.round()).abs() < epsilon {
                    Some(quotient)
                } else {
                    None
                }
            }
            Operator::Divide => None,
        }
    }

    /// 玩家手动合并两张牌时使用的运算，允许负数与小数结果。
    /// 只拦截除以零。
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(a + b),
            Operator::Multiply => Some(a * b),
            Operator::Subtract => Some(a - b),
            Operator::Divide if b.abs() > EPSILON => Some(a / b),
            Operator::Divide => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
