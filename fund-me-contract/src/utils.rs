use crate::*;

/// returns amount * numerator/denominator, or `None` if the result does not fit in a u128
pub fn checked_proportional(amount: u128, numerator: u128, denominator: u128) -> Option<u128> {
    let result = U256::from(amount) * U256::from(numerator) / U256::from(denominator);
    if result > U256::from(u128::MAX) {
        None
    } else {
        Some(result.as_u128())
    }
}
