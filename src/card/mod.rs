//! 牌面数据：玩家看到和操作的一张张牌。

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::solver::{format_value, Operator};

pub const ID_LENGTH: usize = 9;

/// 一张牌。
///
/// `id` 只用于界面上的选中状态，求解器只关心 `value`。
/// `is_original` 为 `false` 表示这张牌是由两张牌合并得到的。
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub value: f64,
    pub display_value: String,
    pub is_original: bool,
}

impl Card {
    /// 发牌时创建的原始牌
    pub fn original<R: Rng + ?Sized>(value: u32, rng: &mut R) -> Self {
        Self {
            id: generate_id(rng),
            value: f64::from(value),
            display_value: value.to_string(),
            is_original: true,
        }
    }

    /// 玩家把两张牌合并成一张新牌。
    ///
    /// 与求解器不同，这里允许负数和小数结果；只有除以零会返回 `None`。
    pub fn combine<R: Rng + ?Sized>(
        lhs: &Card,
        rhs: &Card,
        operator: Operator,
        rng: &mut R,
    ) -> Option<Self> {
        let value = operator.apply(lhs.value, rhs.value)?;
        Some(Self {
            id: generate_id(rng),
            value,
            display_value: format_value(value),
            is_original: false,
        })
    }
}

/// 只取出数值，交给求解器
pub fn card_values(cards: &[Card]) -> Vec<f64> {
    cards.iter().map(|card| card.value).collect()
}

pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
