//! Mock price feed aggregator for development networks and tests.
//! Answers are kept per round, like a V3 aggregator, and every update opens a new round.
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::LookupMap;
use near_sdk::json_types::{I128, U64};
use near_sdk::{env, log, near_bindgen, BorshIntoStorageKey, PanicOnDefault};

mod types;
pub use crate::types::*;

pub const VERSION: u64 = 4;
pub const DESCRIPTION: &str = "NEAR / USD mock price feed";

#[derive(BorshSerialize, BorshDeserialize)]
pub enum Keys {
    Rounds,
}

impl BorshIntoStorageKey for Keys {}

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct MockPriceFeed {
    pub decimals: u8,
    pub latest_round: RoundId,
    pub rounds: LookupMap<RoundId, RoundData>,
}

#[near_bindgen]
impl MockPriceFeed {
    #[init]
    pub fn new(decimals: u8, initial_answer: I128) -> Self {
        assert!(!env::state_exists(), "The contract is already initialized");
        let mut contract = Self {
            decimals,
            latest_round: 0,
            rounds: LookupMap::new(Keys::Rounds),
        };
        contract.update_answer(initial_answer);
        contract
    }

    /// Publish a new answer as the next round, stamped with the block time.
    pub fn update_answer(&mut self, answer: I128) {
        let now = get_current_epoch_seconds();
        self.latest_round += 1;
        self.rounds.insert(
            &self.latest_round,
            &RoundData {
                answer: answer.0,
                started_at: now,
                updated_at: now,
            },
        );
        log!("ANSWER: round {} answer {}", self.latest_round, answer.0);
    }

    /// Overwrite a round with explicit timestamps; it becomes the latest round.
    pub fn update_round_data(&mut self, round_id: U64, answer: I128, timestamp: U64, started_at: U64) {
        let round_id: RoundId = round_id.into();
        self.latest_round = round_id;
        self.rounds.insert(
            &round_id,
            &RoundData {
                answer: answer.0,
                started_at: started_at.into(),
                updated_at: timestamp.into(),
            },
        );
        log!("ANSWER: round {} answer {}", round_id, answer.0);
    }

    pub fn get_round_data(&self, round_id: U64) -> RoundDataJSON {
        let round_id: RoundId = round_id.into();
        let round = self.rounds.get(&round_id).expect("No data present");
        self.to_json(round_id, &round)
    }

    pub fn latest_round_data(&self) -> RoundDataJSON {
        self.get_round_data(U64::from(self.latest_round))
    }

    pub fn latest_answer(&self) -> I128 {
        self.latest_round_data().answer
    }

    pub fn latest_round(&self) -> U64 {
        U64::from(self.latest_round)
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn version(&self) -> u64 {
        VERSION
    }

    pub fn description(&self) -> String {
        DESCRIPTION.to_string()
    }
}

impl MockPriceFeed {
    fn to_json(&self, round_id: RoundId, round: &RoundData) -> RoundDataJSON {
        RoundDataJSON {
            round_id: U64::from(round_id),
            answer: I128::from(round.answer),
            decimals: self.decimals,
            started_at: U64::from(round.started_at),
            updated_at: U64::from(round.updated_at),
            answered_in_round: U64::from(round_id),
        }
    }
}

#[inline]
fn get_current_epoch_seconds() -> u64 {
    env::block_timestamp() / 1_000_000_000
}
