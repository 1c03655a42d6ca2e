use crate::*;

/// Price of one NEAR quoted by the feed, normalized to `USD_DECIMALS`.
/// Returns `None` for answers a feed should never publish (zero or negative).
pub fn normalized_price(answer: i128, decimals: u8) -> Option<Balance> {
    if answer <= 0 {
        return None;
    }
    let answer = answer as u128;
    if decimals <= USD_DECIMALS {
        answer.checked_mul(10u128.pow((USD_DECIMALS - decimals) as u32))
    } else {
        10u128
            .checked_pow((decimals - USD_DECIMALS) as u32)
            .map(|divisor| answer / divisor)
    }
}

/// USD value (18 decimals) of `amount` yoctoNEAR at `price` USD per NEAR.
/// `None` when the value overflows a `Balance`.
#[inline]
pub fn conversion_rate(amount: Balance, price: Balance) -> Option<Balance> {
    checked_proportional(amount, price, NEAR)
}

impl RoundDataJSON {
    pub fn price(&self) -> Option<Balance> {
        normalized_price(self.answer.0, self.decimals)
    }
}
