multiversx_sc::imports!();

use crate::types::Allocation;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("tokensPurchased")]
    fn tokens_purchased_event(
        &self,
        #[indexed] purchaser: &ManagedAddress,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] payment_amount: &BigUint,
        allocation: &Allocation<Self::Api>,
    );

    #[event("manualSell")]
    fn manual_sell_event(
        &self,
        #[indexed] seller: &ManagedAddress,
        #[indexed] beneficiary: &ManagedAddress,
        allocation: &Allocation<Self::Api>,
    );

    #[event("rateUpdated")]
    fn rate_updated_event(
        &self,
        #[indexed] setter: &ManagedAddress,
        #[indexed] rate_egld_usd: &BigUint,
    );

    #[event("tokensDeposited")]
    fn tokens_deposited_event(
        &self,
        #[indexed] token_wallet: &ManagedAddress,
        #[indexed] amount: &BigUint,
        allowance: &BigUint,
    );

    #[event("tokensWithdrawn")]
    fn tokens_withdrawn_event(
        &self,
        #[indexed] token_wallet: &ManagedAddress,
        #[indexed] amount: &BigUint,
        allowance: &BigUint,
    );
}
