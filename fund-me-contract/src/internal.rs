use crate::*;

/*************/
/*  Asserts  */
/*************/

impl FundMe {
    #[inline]
    pub(crate) fn assert_only_owner(&self) {
        assert!(env::predecessor_account_id() == self.owner_id, "{}", ERR_NOT_OWNER);
    }

    #[inline]
    pub(crate) fn assert_no_pending_withdraw(&self) {
        assert!(self.pending_withdraw == 0, "{}", ERR_WITHDRAW_PENDING);
    }

    pub(crate) fn is_above_minimum(&self, usd_value: Balance) -> bool {
        usd_value >= self.minimum_usd
    }
}

/**********************/
/*  Internal methods  */
/**********************/

impl FundMe {
    pub(crate) fn internal_get_amount_funded(&self, funder_id: &FunderId) -> Balance {
        self.amount_funded.get(funder_id).unwrap_or_default()
    }

    /// Record an accepted deposit.
    pub(crate) fn internal_record_funding(&mut self, funder_id: &FunderId, amount: Balance) {
        let funded = self.internal_get_amount_funded(funder_id) + amount;
        self.amount_funded.insert(funder_id, &funded);
        self.funders.push(funder_id);
        self.total_funded += amount;
    }

    /// Send a rejected deposit back to the funder.
    pub(crate) fn internal_refund(&mut self, funder_id: &FunderId, amount: Balance) -> Promise {
        log!("REFUND: {} yoctoNEAR to {}", amount, funder_id);
        Promise::new(funder_id.clone()).transfer(amount).then(ext_self::on_refund(
            funder_id.clone(),
            BalanceJSON::from(amount),
            &env::current_account_id(),
            NO_DEPOSIT,
            GAS_FOR_REFUND_CALLBACK,
        ))
    }

    /// Move the whole funded balance to the owner. Funded amounts must be
    /// already reset by the caller.
    pub(crate) fn internal_transfer_to_owner(&mut self) -> Promise {
        let amount = self.total_funded;
        assert!(amount > 0, "{}", ERR_NOTHING_TO_WITHDRAW);
        self.total_funded = 0;
        self.pending_withdraw = amount;

        Promise::new(self.owner_id.clone()).transfer(amount).then(ext_self::on_withdraw(
            BalanceJSON::from(amount),
            &env::current_account_id(),
            NO_DEPOSIT,
            GAS_FOR_WITHDRAW_CALLBACK,
        ))
    }

    /// A refund that could not be delivered is kept for the owner.
    pub(crate) fn internal_restore_refund(&mut self, amount: Balance) {
        self.total_funded += amount;
    }

    pub(crate) fn internal_restore_withdraw(&mut self, amount: Balance) {
        self.total_funded += amount;
        self.pending_withdraw = 0;
    }
}
