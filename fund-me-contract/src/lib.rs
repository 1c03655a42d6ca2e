use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LookupMap, Vector};
use near_sdk::json_types::ValidAccountId;
use near_sdk::{env, log, near_bindgen, AccountId, Balance, PanicOnDefault, Promise, PromiseResult};

mod constants;
mod internal;
mod types;

pub mod interface;
pub mod price;
pub mod utils;
pub mod withdraw;
pub use crate::utils::*;

use crate::{constants::*, interface::*, price::*, types::*};


#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct FundMe {
    /// Only account allowed to withdraw. Fixed at deployment.
    pub owner_id: AccountId,
    /// Aggregator contract quoting the NEAR/USD price.
    pub price_feed: AccountId,

    /// Min deposit accepted, in USD with 18 decimals.
    pub minimum_usd: Balance,

    pub amount_funded: LookupMap<FunderId, Balance>,
    // A funder is pushed on every accepted deposit, so it may appear more than once.
    pub funders: Vector<FunderId>,

    // Sum of the deposits held for the owner.
    pub total_funded: Balance,
    // Amount of the owner transfer waiting for its callback.
    pub pending_withdraw: Balance,
}

#[near_bindgen]
impl FundMe {
    /// The deploying account becomes the owner.
    #[init]
    pub fn new(price_feed: ValidAccountId, minimum_usd: Option<BalanceJSON>) -> Self {
        assert!(!env::state_exists(), "The contract is already initialized");
        let minimum_usd: Balance = minimum_usd.map(Balance::from).unwrap_or(DEFAULT_MINIMUM_USD);
        assert!(minimum_usd > 0, "minimum_usd must be positive");
        let owner_id = env::predecessor_account_id();
        log!(
            "INIT: owner {} price feed {} minimum {} USD",
            owner_id,
            price_feed.as_ref(),
            minimum_usd / ONE_USD
        );
        Self {
            owner_id,
            price_feed: price_feed.into(),
            minimum_usd,
            amount_funded: LookupMap::new(Keys::AmountFunded),
            funders: Vector::new(Keys::Funders),
            total_funded: 0,
            pending_withdraw: 0,
        }
    }

    /************************/
    /*        Funding       */
    /************************/

    /// Deposit the attached NEAR. The deposit is accepted once the price feed
    /// confirms it is worth at least `minimum_usd`, otherwise it is refunded.
    #[payable]
    pub fn fund(&mut self) -> Promise {
        let amount = env::attached_deposit();
        assert!(amount > 0, "{}", ERR_NOT_ENOUGH_FUNDS);
        let min_prepaid_gas = GAS_FOR_PRICE_FEED + GAS_FOR_FUND_CALLBACK + FIVE_TGAS;
        assert!(env::prepaid_gas() >= min_prepaid_gas, "gas required {}", min_prepaid_gas);

        let funder_id = env::predecessor_account_id();
        ext_price_feed::latest_round_data(&self.price_feed, NO_DEPOSIT, GAS_FOR_PRICE_FEED).then(
            ext_self::on_price_for_fund(
                funder_id,
                BalanceJSON::from(amount),
                &env::current_account_id(),
                NO_DEPOSIT,
                GAS_FOR_FUND_CALLBACK,
            ),
        )
    }

    // fn continues here after the price feed answers
    #[private]
    pub fn on_price_for_fund(&mut self, funder_id: FunderId, amount: BalanceJSON) -> bool {
        assert_eq!(env::promise_results_count(), 1, "This is a callback method");
        let amount = Balance::from(amount);

        let usd_value = match env::promise_result(0) {
            PromiseResult::NotReady => unreachable!(),
            PromiseResult::Failed => None,
            PromiseResult::Successful(result) => {
                near_sdk::serde_json::from_slice::<RoundDataJSON>(&result)
                    .ok()
                    .and_then(|round| round.price())
                    .and_then(|price| conversion_rate(amount, price))
            }
        };

        match usd_value {
            None => {
                log!("FAILED: no usable price from {}", self.price_feed);
                self.internal_refund(&funder_id, amount);
                false
            }
            Some(usd_value) if !self.is_above_minimum(usd_value) => {
                log!("{} {} is worth less than the minimum", ERR_NOT_ENOUGH_FUNDS, amount);
                self.internal_refund(&funder_id, amount);
                false
            }
            Some(_) => {
                self.internal_record_funding(&funder_id, amount);
                log!("FUND: {} yoctoNEAR from {}", amount, funder_id);
                true
            }
        }
    }

    #[private]
    pub fn on_refund(&mut self, funder_id: FunderId, amount: BalanceJSON) {
        let amount = Balance::from(amount);
        match env::promise_result(0) {
            PromiseResult::NotReady => unreachable!(),
            PromiseResult::Successful(_) => {
                log!("REFUND: {} yoctoNEAR returned to {}", amount, funder_id);
            }
            PromiseResult::Failed => {
                log!(
                    "FAILED: {} yoctoNEAR not returned to {}. Kept for the owner.",
                    amount,
                    funder_id
                );
                self.internal_restore_refund(amount);
            }
        }
    }

    /// Ask the price feed for its version.
    pub fn get_version(&self) -> Promise {
        ext_price_feed::version(&self.price_feed, NO_DEPOSIT, GAS_FOR_PRICE_FEED)
    }

    /************************/
    /*     View methods     */
    /************************/

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn get_price_feed(&self) -> AccountId {
        self.price_feed.clone()
    }

    pub fn get_minimum_usd(&self) -> BalanceJSON {
        BalanceJSON::from(self.minimum_usd)
    }

    pub fn get_amount_funded(&self, funder_id: FunderIdJSON) -> BalanceJSON {
        BalanceJSON::from(self.internal_get_amount_funded(funder_id.as_ref()))
    }

    pub fn get_funder(&self, index: FunderIndex) -> FunderId {
        self.funders.get(index).expect(ERR_INDEX_OUT_OF_RANGE)
    }

    pub fn get_funders_count(&self) -> u64 {
        self.funders.len()
    }

    pub fn get_funders(&self, from_index: FunderIndex, limit: u64) -> Vec<FunderJSON> {
        let funders_len = self.funders.len();
        let start = std::cmp::min(from_index, funders_len);
        let end = std::cmp::min(start.saturating_add(limit), funders_len);
        (start..end)
            .filter_map(|index| self.funders.get(index))
            .map(|funder_id| FunderJSON {
                amount_funded: BalanceJSON::from(self.internal_get_amount_funded(&funder_id)),
                funder_id,
            })
            .collect()
    }

    pub fn get_total_funded(&self) -> BalanceJSON {
        BalanceJSON::from(self.total_funded)
    }

    pub fn get_contract_state(&self) -> ContractStateJSON {
        ContractStateJSON {
            owner_id: self.owner_id.clone(),
            price_feed: self.price_feed.clone(),
            minimum_usd: BalanceJSON::from(self.minimum_usd),
            total_funded: BalanceJSON::from(self.total_funded),
            total_funders: self.funders.len(),
            pending_withdraw: BalanceJSON::from(self.pending_withdraw),
        }
    }
}
