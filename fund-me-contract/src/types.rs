use uint::construct_uint;

use near_sdk::json_types::{ValidAccountId, I128, U128, U64};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::AccountId;

pub type BalanceJSON = U128;

pub type FunderId = AccountId;
pub type FunderIdJSON = ValidAccountId;
pub type FunderIndex = u64;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

/// Round answered by the price feed aggregator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct RoundDataJSON {
    pub round_id: U64,
    pub answer: I128,
    pub decimals: u8,
    pub started_at: U64,
    pub updated_at: U64,
    pub answered_in_round: U64,
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct FunderJSON {
    pub funder_id: FunderId,
    pub amount_funded: BalanceJSON,
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct ContractStateJSON {
    pub owner_id: AccountId,
    pub price_feed: AccountId,
    pub minimum_usd: BalanceJSON,
    pub total_funded: BalanceJSON,
    pub total_funders: u64,
    pub pending_withdraw: BalanceJSON,
}
