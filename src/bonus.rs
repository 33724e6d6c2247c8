multiversx_sc::imports!();

use crate::constants::{
    EARLY_BONUS_PERCENTAGE, LATE_BONUS_PERCENTAGE, NO_BONUS_PERCENTAGE, PERCENTAGE_DENOMINATOR,
};

#[multiversx_sc::module]
pub trait BonusModule {
    /// Step function of the tokens allocated so far: 20%, then 10%, then nothing.
    fn bonus_percentage(&self, purchased_so_far: &BigUint) -> u64 {
        if *purchased_so_far < self.bonus20_cap_boundary().get() {
            EARLY_BONUS_PERCENTAGE
        } else if *purchased_so_far < self.bonus10_cap_boundary().get() {
            LATE_BONUS_PERCENTAGE
        } else {
            NO_BONUS_PERCENTAGE
        }
    }

    // Truncating, so rounding never pushes an allocation over the cap.
    fn bonus_amount(&self, base_amount: &BigUint, percentage: u64) -> BigUint {
        base_amount * percentage / PERCENTAGE_DENOMINATOR
    }

    #[view(getBonus20CapBoundary)]
    #[storage_mapper("bonus20capBoundary")]
    fn bonus20_cap_boundary(&self) -> SingleValueMapper<BigUint>;

    #[view(getBonus10CapBoundary)]
    #[storage_mapper("bonus10capBoundary")]
    fn bonus10_cap_boundary(&self) -> SingleValueMapper<BigUint>;
}
