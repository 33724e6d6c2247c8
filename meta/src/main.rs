fn main() {
    multiversx_sc_meta_lib::cli_main::<kicks_crowdsale::AbiProvider>();
}
