use crate::*;
use near_sdk::near_bindgen;
use std::collections::HashSet;

/// Withdraw sends every deposit to the **owner**. Both entry points leave the
/// same state behind, they differ only in how many storage reads and writes
/// they spend on the funders list.

/**********************/
/*   Owner Withdraw   */
/**********************/

#[near_bindgen]
impl FundMe {
    /// Reset every funder walking the stored list, one storage read per index.
    pub fn withdraw(&mut self) -> Promise {
        self.assert_only_owner();
        self.assert_no_pending_withdraw();
        for index in 0..self.funders.len() {
            let funder_id = self.funders.get(index).expect(ERR_INDEX_OUT_OF_RANGE);
            self.amount_funded.remove(&funder_id);
        }
        self.funders.clear();
        log!("WITHDRAW: funders reset by {}", self.owner_id);
        self.internal_transfer_to_owner()
    }

    /// Same as `withdraw`, but loads the funders list once and skips repeated funders.
    pub fn withdraw_cheaper_gas(&mut self) -> Promise {
        self.assert_only_owner();
        self.assert_no_pending_withdraw();
        let funders = self.funders.to_vec();
        let mut reset: HashSet<&FunderId> = HashSet::with_capacity(funders.len());
        for funder_id in funders.iter() {
            if reset.insert(funder_id) {
                self.amount_funded.remove(funder_id);
            }
        }
        self.funders.clear();
        log!("WITHDRAW: {} funders reset by {}", reset.len(), self.owner_id);
        self.internal_transfer_to_owner()
    }

    #[private]
    pub fn on_withdraw(&mut self, amount: BalanceJSON) {
        let amount = Balance::from(amount);
        match env::promise_result(0) {
            PromiseResult::NotReady => unreachable!(),
            PromiseResult::Successful(_) => {
                self.pending_withdraw = 0;
                log!("WITHDRAW: {} yoctoNEAR transferred to {}", amount, self.owner_id);
            }
            PromiseResult::Failed => {
                log!(
                    "FAILED: {} yoctoNEAR not transferred to {}. Recovering contract state.",
                    amount,
                    self.owner_id
                );
                self.internal_restore_withdraw(amount);
            }
        }
    }
}
