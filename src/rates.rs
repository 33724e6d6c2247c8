multiversx_sc::imports!();

use crate::constants::{RATE_SCALE, TOKEN_PRICE_USD};
use crate::errors::ERR_INVALID_RATE;

/// Holds the EGLD/USD rate and the token/USD rate as reciprocal pairs.
/// All four values are rewritten together from the single EGLD/USD rate.
#[multiversx_sc::module]
pub trait RatesModule:
    crate::config::ConfigModule + crate::events::EventsModule
{
    /// `rate_egld_usd` is the USD price of one EGLD, scaled by 10^18.
    #[endpoint(setRate)]
    fn set_rate(&self, rate_egld_usd: BigUint) {
        let caller = self.require_caller(&self.rate_setter().get());
        self.store_rates(&rate_egld_usd);

        self.rate_updated_event(&caller, &rate_egld_usd);
    }

    fn store_rates(&self, rate_egld_usd: &BigUint) {
        require!(*rate_egld_usd > 0u64, ERR_INVALID_RATE);

        let scale = BigUint::from(RATE_SCALE);
        let scale_squared = &scale * &scale;
        let rate_kick_usd = &scale * TOKEN_PRICE_USD;

        self.rate_usd_egld().set(&scale_squared / rate_egld_usd);
        self.rate_egld_usd().set(rate_egld_usd);
        self.rate_usd_kick().set(&scale_squared / &rate_kick_usd);
        self.rate_kick_usd().set(rate_kick_usd);
    }

    fn egld_to_usd(&self, egld_amount: &BigUint) -> BigUint {
        egld_amount * &self.rate_egld_usd().get() / RATE_SCALE
    }

    fn usd_to_tokens(&self, usd_value: &BigUint) -> BigUint {
        usd_value * &self.rate_usd_kick().get() / RATE_SCALE
    }

    /// (egld→usd, usd→egld, kick→usd, usd→kick)
    #[view(getRates)]
    fn get_rates(&self) -> MultiValue4<BigUint, BigUint, BigUint, BigUint> {
        (
            self.rate_egld_usd().get(),
            self.rate_usd_egld().get(),
            self.rate_kick_usd().get(),
            self.rate_usd_kick().get(),
        )
            .into()
    }

    #[view(getRateEgldUsd)]
    #[storage_mapper("rateEgldUsd")]
    fn rate_egld_usd(&self) -> SingleValueMapper<BigUint>;

    #[view(getRateUsdEgld)]
    #[storage_mapper("rateUsdEgld")]
    fn rate_usd_egld(&self) -> SingleValueMapper<BigUint>;

    #[view(getRateKickUsd)]
    #[storage_mapper("rateKickUsd")]
    fn rate_kick_usd(&self) -> SingleValueMapper<BigUint>;

    #[view(getRateUsdKick)]
    #[storage_mapper("rateUsdKick")]
    fn rate_usd_kick(&self) -> SingleValueMapper<BigUint>;
}
