use log::{debug, warn};

use crate::errors::ValidationError;

pub const MAX_CARDS: usize = 4;

/// 检查外部传入的牌值。求解器本身信任调用方，不做这一步。
///
/// # 错误
///
/// 牌值为空、超过 4 个或含有非有限数时返回错误。
pub fn validate_values(values: &[f64]) -> Result<(), ValidationError> {
    debug!("Validating card values: {:?}", values);

    if values.is_empty() {
        warn!("No card values supplied");
        return Err(ValidationError::Empty);
    }

    if values.len() > MAX_CARDS {
        warn!("Too many card values: {}", values.len());
        return Err(ValidationError::TooMany {
            count: values.len(),
            max: MAX_CARDS,
        });
    }

    if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
        warn!("Non-finite card value: {}", bad);
        return Err(ValidationError::NonFinite(bad));
    }

    Ok(())
}
