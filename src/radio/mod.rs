//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod cc1111;
pub use cc1111::{registers, Cc1111, Cc1111Error, LowballConfig};
pub use cc1111::{MAX_RX_BLOCK, MAX_TX_BLOCK, MAX_TX_CHUNK, MAX_TX_LONG};

mod config;
pub use config::RadioConfig;
