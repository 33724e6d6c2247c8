#![no_std]

multiversx_sc::imports!();

pub mod bonus;
pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod rates;
pub mod token_escrow;
pub mod types;

use errors::{
    ERR_BELOW_MIN_PAYMENT, ERR_CAP_EXCEEDED, ERR_INVALID_ADDRESS, ERR_INVALID_BONUS_BOUNDARIES,
    ERR_INVALID_CAP, ERR_INVALID_PURCHASE, ERR_INVALID_SALE_WINDOW, ERR_INVALID_TOKEN,
};
use types::Allocation;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait KicksCrowdsale:
    config::ConfigModule
    + rates::RatesModule
    + bonus::BonusModule
    + token_escrow::TokenEscrowModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `rate` is the USD price of one EGLD and the `usd_*` arguments are USD
    /// amounts, all with 18 decimals. The cap and the bonus boundaries are
    /// converted to token units once, here, and never follow later rate updates.
    #[init]
    fn init(
        &self,
        rate: BigUint,
        token_id: TokenIdentifier,
        wallet: ManagedAddress,
        token_wallet: ManagedAddress,
        manual_seller: ManagedAddress,
        rate_setter: ManagedAddress,
        opening_time: u64,
        closing_time: u64,
        usd_cap: BigUint,
        usd_min_pay: BigUint,
        usd_bonus20_boundary: BigUint,
        usd_bonus10_boundary: BigUint,
    ) {
        require!(token_id.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(
            !wallet.is_zero()
                && !token_wallet.is_zero()
                && !manual_seller.is_zero()
                && !rate_setter.is_zero(),
            ERR_INVALID_ADDRESS
        );

        let now = self.blockchain().get_block_timestamp();
        require!(
            opening_time >= now && opening_time < closing_time,
            ERR_INVALID_SALE_WINDOW
        );
        require!(usd_cap > 0u64, ERR_INVALID_CAP);
        require!(
            usd_bonus20_boundary <= usd_bonus10_boundary && usd_bonus10_boundary <= usd_cap,
            ERR_INVALID_BONUS_BOUNDARIES
        );

        self.store_rates(&rate);

        self.token_id().set(&token_id);
        self.wallet().set(&wallet);
        self.token_wallet().set(&token_wallet);
        self.manual_seller().set(&manual_seller);
        self.rate_setter().set(&rate_setter);
        self.opening_time().set(opening_time);
        self.closing_time().set(closing_time);

        self.kick_cap().set(self.usd_to_tokens(&usd_cap));
        self.kick_min_pay().set(&usd_min_pay);
        self.bonus20_cap_boundary()
            .set(self.usd_to_tokens(&usd_bonus20_boundary));
        self.bonus10_cap_boundary()
            .set(self.usd_to_tokens(&usd_bonus10_boundary));

        self.kick_purchased().set(BigUint::zero());
        self.token_allowance().set(BigUint::zero());
        self.total_raised().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: buyTokens
    // The attached EGLD is priced in USD, converted to tokens
    // with bonus, and forwarded in full to the wallet.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(buyTokens)]
    fn buy_tokens(&self, beneficiary: ManagedAddress) -> Allocation<Self::Api> {
        self.require_sale_open();

        let payment_amount = self.call_value().egld_value().clone_value();
        require!(
            payment_amount > 0u64 && !beneficiary.is_zero(),
            ERR_INVALID_PURCHASE
        );

        let usd_value = self.egld_to_usd(&payment_amount);
        let allocation = self.allocate(&beneficiary, usd_value);

        self.send().direct_egld(&self.wallet().get(), &payment_amount);
        self.total_raised()
            .update(|raised| *raised += &payment_amount);

        let caller = self.blockchain().get_caller();
        self.tokens_purchased_event(&caller, &beneficiary, &payment_amount, &allocation);

        allocation
    }

    // ========================================================
    // ENDPOINT: manualSell
    // Off-channel allocation of a USD amount. No EGLD moves.
    // ========================================================

    #[endpoint(manualSell)]
    fn manual_sell(
        &self,
        beneficiary: ManagedAddress,
        usd_amount: BigUint,
    ) -> Allocation<Self::Api> {
        let seller = self.require_caller(&self.manual_seller().get());
        self.require_sale_open();
        require!(
            usd_amount > 0u64 && !beneficiary.is_zero(),
            ERR_INVALID_PURCHASE
        );

        let allocation = self.allocate(&beneficiary, usd_amount);

        self.manual_sell_event(&seller, &beneficiary, &allocation);

        allocation
    }

    // ========================================================
    // INTERNAL: allocation shared by both sale paths
    // ========================================================

    fn allocate(&self, beneficiary: &ManagedAddress, usd_value: BigUint) -> Allocation<Self::Api> {
        require!(
            usd_value >= self.kick_min_pay().get(),
            ERR_BELOW_MIN_PAYMENT
        );

        let kick_purchased = self.kick_purchased().get();
        let allocation = self.price_allocation(usd_value, &kick_purchased);
        require!(allocation.base_amount > 0u64, ERR_INVALID_PURCHASE);
        require!(
            &kick_purchased + &allocation.total <= self.kick_cap().get(),
            ERR_CAP_EXCEEDED
        );

        self.transfer_from_token_wallet(beneficiary, &allocation.total);
        self.kick_purchased()
            .set(kick_purchased + &allocation.total);

        allocation
    }

    /// The tier comes from `purchased_so_far` for the whole amount, even if
    /// the allocation crosses a boundary.
    fn price_allocation(
        &self,
        usd_value: BigUint,
        purchased_so_far: &BigUint,
    ) -> Allocation<Self::Api> {
        let base_amount = self.usd_to_tokens(&usd_value);
        let bonus_percentage = self.bonus_percentage(purchased_so_far);
        let bonus_amount = self.bonus_amount(&base_amount, bonus_percentage);
        let total = &base_amount + &bonus_amount;

        Allocation {
            usd_value,
            base_amount,
            bonus_percentage,
            bonus_amount,
            total,
        }
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    /// Quote for an EGLD payment at the current rate and tier. Does not check
    /// the sale window, the minimum payment or the cap.
    #[view(getTokenAmount)]
    fn get_token_amount(&self, payment_amount: BigUint) -> Allocation<Self::Api> {
        let usd_value = self.egld_to_usd(&payment_amount);
        self.price_allocation(usd_value, &self.kick_purchased().get())
    }

    #[view(getCurrentBonusPercentage)]
    fn get_current_bonus_percentage(&self) -> u64 {
        self.bonus_percentage(&self.kick_purchased().get())
    }

    #[view(capReached)]
    fn cap_reached(&self) -> bool {
        self.kick_purchased().get() >= self.kick_cap().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Tokens allocated so far, bonuses and manual sells included.
    #[view(getKickPurchased)]
    #[storage_mapper("kickPurchased")]
    fn kick_purchased(&self) -> SingleValueMapper<BigUint>;

    /// EGLD received by `buyTokens` and forwarded to the wallet.
    #[view(getTotalRaised)]
    #[storage_mapper("totalRaised")]
    fn total_raised(&self) -> SingleValueMapper<BigUint>;
}
