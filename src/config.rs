multiversx_sc::imports!();

use crate::errors::{ERR_OUTSIDE_SALE_WINDOW, ERR_UNAUTHORIZED};

/// Deployment-time configuration: role bindings, the sale window and the
/// limits derived from the USD targets. None of it changes after `init`.
#[multiversx_sc::module]
pub trait ConfigModule {
    /// Fails unless the caller is `role_holder`; returns the caller.
    fn require_caller(&self, role_holder: &ManagedAddress) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(caller == *role_holder, ERR_UNAUTHORIZED);
        caller
    }

    fn require_sale_open(&self) {
        require!(self.is_open(), ERR_OUTSIDE_SALE_WINDOW);
    }

    // Both ends of the window are inclusive.
    #[view(isOpen)]
    fn is_open(&self) -> bool {
        let now = self.blockchain().get_block_timestamp();
        now >= self.opening_time().get() && now <= self.closing_time().get()
    }

    #[view(hasClosed)]
    fn has_closed(&self) -> bool {
        self.blockchain().get_block_timestamp() > self.closing_time().get()
    }

    // ── Roles ──

    #[view(getWallet)]
    #[storage_mapper("wallet")]
    fn wallet(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTokenWallet)]
    #[storage_mapper("tokenWallet")]
    fn token_wallet(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getManualSeller)]
    #[storage_mapper("manualSeller")]
    fn manual_seller(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getRateSetter)]
    #[storage_mapper("rateSetter")]
    fn rate_setter(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Sale parameters ──

    #[view(getTokenId)]
    #[storage_mapper("tokenId")]
    fn token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getOpeningTime)]
    #[storage_mapper("openingTime")]
    fn opening_time(&self) -> SingleValueMapper<u64>;

    #[view(getClosingTime)]
    #[storage_mapper("closingTime")]
    fn closing_time(&self) -> SingleValueMapper<u64>;

    #[view(getKickCap)]
    #[storage_mapper("kickCap")]
    fn kick_cap(&self) -> SingleValueMapper<BigUint>;

    /// Minimum USD value of a single purchase, 18 decimals.
    #[view(getKickMinPay)]
    #[storage_mapper("kickMinPay")]
    fn kick_min_pay(&self) -> SingleValueMapper<BigUint>;
}
