#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Cc1111::new()`](fn@crate::radio::Cc1111::new)
//! - [`Cc1111::init()`](fn@crate::radio::Cc1111::init)
//! - [`Cc1111::set_mode()`](radio/prelude/trait.RfModeControl.html#tymethod.set_mode)
//! - [`Cc1111::set_freq()`](radio/prelude/trait.RfFrequency.html#tymethod.set_freq)
//! - [`Cc1111::set_data_rate()`](radio/prelude/trait.RfDataRate.html#tymethod.set_data_rate)
//! - [`Cc1111::transmit()`](radio/prelude/trait.RfTransfer.html#tymethod.transmit)
//! - [`Cc1111::receive()`](radio/prelude/trait.RfTransfer.html#tymethod.receive)
//!
//! ## Configuration API
//!
//! - [`Cc1111::read_config()`](fn@crate::radio::Cc1111::read_config)
//! - [`Cc1111::write_config()`](fn@crate::radio::Cc1111::write_config)
//! - [`Cc1111::set_chan_bw()`](radio/prelude/trait.RfBandwidth.html#tymethod.set_chan_bw)
//! - [`Cc1111::set_chan_spc()`](radio/prelude/trait.RfChannelSpacing.html#tymethod.set_chan_spc)
//! - [`Cc1111::set_deviation()`](radio/prelude/trait.RfDeviation.html#tymethod.set_deviation)
//! - [`Cc1111::set_modulation()`](radio/prelude/trait.RfModulation.html#tymethod.set_modulation)
//! - [`Cc1111::set_sync_word()`](radio/prelude/trait.RfSync.html#tymethod.set_sync_word)
//! - [`Cc1111::set_power()`](radio/prelude/trait.RfPower.html#tymethod.set_power)
//!
//! ## Diagnostic API
//!
//! - [`Cc1111::listen()`](fn@crate::radio::Cc1111::listen)
//! - [`Cc1111::lowball()`](fn@crate::radio::Cc1111::lowball)
//! - [`Cc1111::lowball_restore()`](fn@crate::radio::Cc1111::lowball_restore)
//! - [`render::render_friendly()`]

mod types;
pub use types::{DeviceStatus, MarcState, Modulation, RadioMode, SyncMode};

pub mod radio;
pub mod render;

mod codec;
pub use codec::PayloadCodec;

mod transport;
pub use transport::{Transport, TransportError};

#[doc(inline)]
pub use radio::{Cc1111, Cc1111Error, LowballConfig, RadioConfig};
