multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Allocation: how a single purchase or manual sell is priced
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Allocation<M: ManagedTypeApi> {
    /// USD value of the purchase, 18 decimals
    pub usd_value: BigUint<M>,
    /// Tokens bought before bonus
    pub base_amount: BigUint<M>,
    /// Tier looked up from the allocated total before this purchase
    pub bonus_percentage: u64,
    /// floor(base_amount * bonus_percentage / 100)
    pub bonus_amount: BigUint<M>,
    /// base_amount + bonus_amount, the amount debited from the token wallet
    pub total: BigUint<M>,
}
