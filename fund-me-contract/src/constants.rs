use near_sdk::Gas;
use near_sdk::BorshIntoStorageKey;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

pub const NEAR: u128 = 1_000_000_000_000_000_000_000_000;

/// USD amounts are denominated with 18 decimals.
pub const USD_DECIMALS: u8 = 18;
pub const ONE_USD: u128 = 1_000_000_000_000_000_000;
pub const DEFAULT_MINIMUM_USD: u128 = 50 * ONE_USD;

pub const NO_DEPOSIT: u128 = 0;

pub const TGAS: Gas = 1_000_000_000_000;
pub const FIVE_TGAS: Gas = 5 * TGAS;
pub const GAS_FOR_PRICE_FEED: Gas = 10 * TGAS;
pub const GAS_FOR_FUND_CALLBACK: Gas = 30 * TGAS;
pub const GAS_FOR_WITHDRAW_CALLBACK: Gas = 10 * TGAS;
pub const GAS_FOR_REFUND_CALLBACK: Gas = 10 * TGAS;

pub const ERR_NOT_ENOUGH_FUNDS: &str = "You need to send more NEAR!";
pub const ERR_NOT_OWNER: &str = "FundMe__NotOwner";
pub const ERR_INDEX_OUT_OF_RANGE: &str = "Index is out of range!";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "Nothing to withdraw";
pub const ERR_WITHDRAW_PENDING: &str = "Withdrawal already in progress";

#[derive(BorshSerialize, BorshDeserialize)]
pub enum Keys {
    AmountFunded,
    Funders,
}

impl BorshIntoStorageKey for Keys {}
