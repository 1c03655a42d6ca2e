use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::{I128, U64};
use near_sdk::serde::{Deserialize, Serialize};

pub type RoundId = u64;

#[derive(BorshDeserialize, BorshSerialize, Clone, Debug)]
pub struct RoundData {
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct RoundDataJSON {
    pub round_id: U64,
    pub answer: I128,
    pub decimals: u8,
    pub started_at: U64,
    pub updated_at: U64,
    pub answered_in_round: U64,
}
