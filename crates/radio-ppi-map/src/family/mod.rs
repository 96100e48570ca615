const _ENABLED_FAMILIES: u32 = 0
    + if cfg!(feature = "nrf52840") { 1 } else { 0 }
    + if cfg!(feature = "nrf52833") { 1 } else { 0 };
const _: () = if _ENABLED_FAMILIES > 1 {
    panic!("At most one hardware family feature may be enabled.");
};

// Ensure only one family table is compiled in
cfg_if::cfg_if! {
    if #[cfg(feature = "nrf52840")] {
        mod nrf52840;
        pub(crate) use nrf52840::*;
    }
    else if #[cfg(feature = "nrf52833")] {
        mod nrf52833;
        pub(crate) use nrf52833::*;
    } else {
        // By default, let's use the nRF52840 table.
        mod nrf52840;
        pub(crate) use nrf52840::*;
    }
}
