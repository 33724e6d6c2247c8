multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_ALLOWANCE, ERR_INVALID_AMOUNT, ERR_INVALID_TOKEN};

// ============================================================
// Token escrow
// The token wallet deposits sale tokens up front; the deposited
// balance is the allowance both allocation paths draw from.
// ============================================================

#[multiversx_sc::module]
pub trait TokenEscrowModule:
    crate::config::ConfigModule + crate::events::EventsModule
{
    #[payable("*")]
    #[endpoint(depositTokens)]
    fn deposit_tokens(&self) {
        let token_wallet = self.require_caller(&self.token_wallet().get());
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.token_id().get(),
            ERR_INVALID_TOKEN
        );

        self.token_allowance()
            .update(|allowance| *allowance += &payment.amount);

        self.tokens_deposited_event(
            &token_wallet,
            &payment.amount,
            &self.token_allowance().get(),
        );
    }

    /// Returns unallocated tokens to the token wallet. Allowed at any time.
    #[endpoint(withdrawTokens)]
    fn withdraw_tokens(&self, amount: BigUint) {
        let token_wallet = self.require_caller(&self.token_wallet().get());
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        self.transfer_from_token_wallet(&token_wallet, &amount);

        self.tokens_withdrawn_event(&token_wallet, &amount, &self.token_allowance().get());
    }

    fn transfer_from_token_wallet(&self, recipient: &ManagedAddress, amount: &BigUint) {
        let allowance = self.token_allowance().get();
        require!(*amount <= allowance, ERR_INSUFFICIENT_ALLOWANCE);

        self.token_allowance().set(&allowance - amount);
        self.send()
            .direct_esdt(recipient, &self.token_id().get(), 0, amount);
    }

    #[view(getRemainingTokens)]
    #[storage_mapper("tokenAllowance")]
    fn token_allowance(&self) -> SingleValueMapper<BigUint>;
}
