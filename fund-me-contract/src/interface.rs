use crate::*;

use near_sdk::ext_contract;
use near_sdk::json_types::U128;

// methods we use on the price feed aggregator
#[ext_contract(ext_price_feed)]
pub trait PriceFeed {
    fn latest_round_data(&self) -> RoundDataJSON;
    fn version(&self) -> u64;
}

// callbacks on our own contract
#[ext_contract(ext_self)]
pub trait ExtSelfFundMe {
    fn on_price_for_fund(&mut self, funder_id: FunderId, amount: U128) -> bool;
    fn on_withdraw(&mut self, amount: U128);
    fn on_refund(&mut self, funder_id: FunderId, amount: U128);
}
