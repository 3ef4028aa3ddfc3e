use std::fmt;

use crate::solver::constants::EPSILON;
use crate::solver::operator::Operator;

/// 搜索路径上的一步：`lhs op rhs = result`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
}

impl Step {
    pub fn new(lhs: f64, operator: Operator, rhs: f64, result: f64) -> Self {
        Self {
            lhs,
            operator,
            rhs,
            result,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_value(self.lhs),
            self.operator,
            format_value(self.rhs),
            format_value(self.result)
        )
    }
}

/// 把数值格式化为展示用字符串。
///
/// 整数（容差内）按整数输出；否则保留至多两位小数并去掉末尾的 0。
pub fn format_value(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < EPSILON {
        // -0.0 也显示为 0
        return format!("{}", rounded as i64);
    }

    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
