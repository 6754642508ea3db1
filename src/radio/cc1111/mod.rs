use std::time::{Duration, SystemTime};

use thiserror::Error;

pub(crate) mod bit_fields;
mod constants;
pub use constants::{registers, MAX_RX_BLOCK, MAX_TX_BLOCK, MAX_TX_CHUNK, MAX_TX_LONG};
pub(crate) use constants::{apps, nic, sys, vco};
pub(crate) use constants::{
    DEFAULT_CHUNK_RETRY_LIMIT, EP5_BUFFER_SIZE, PRELOAD_CHUNKS, USB_RX_WAIT, USB_TX_WAIT,
};

mod bandwidth;
mod chan_spc;
mod channel;
mod data_rate;
mod details;
mod deviation;
mod freq;
mod lowball;
mod mode;
mod modulation;
mod packet;
mod power;
mod sync;
mod xfer;
pub use lowball::LowballConfig;

use crate::codec::PayloadCodec;
use crate::radio::config::RadioConfig;
use crate::radio::prelude::RfModeControl;
use crate::transport::{Transport, TransportError};
use crate::types::{DeviceStatus, MarcState, RadioMode};

/// A collection of error types to describe driver and device failures.
#[derive(Debug, PartialEq, Error)]
pub enum Cc1111Error<E> {
    /// The transport gave up waiting for a reply.
    ///
    /// Expected steady-state for receive paths; after a configuration
    /// write it leaves the register snapshot untrustworthy until the
    /// next full read.
    #[error("timed out waiting on the dongle")]
    Timeout,

    /// The underlying USB transport failed.
    #[error("transport fault")]
    Transport(E),

    /// A reply was shorter or shaped differently than the protocol
    /// requires.
    #[error("malformed reply from the dongle")]
    BinaryCorruption,

    /// A requested physical value has no exponent/mantissa encoding
    /// within the chip's search range. Nothing was written.
    #[error("{quantity} of {requested} Hz does not translate into acceptable parameters")]
    Unrepresentable {
        quantity: &'static str,
        requested: f64,
    },

    /// Device-side repeat/offset was requested for a payload that does
    /// not fit a single transmit block.
    #[error("payload of {0} bytes cannot be repeated by the device")]
    BlockSizeIncompatible(usize),

    /// The payload exceeds the chunked-transmit maximum.
    #[error("payload of {0} bytes exceeds the long-transmit maximum")]
    BlockTooLarge(usize),

    /// The requested receive block size exceeds the endpoint buffer.
    #[error("receive block size {0} exceeds the endpoint buffer")]
    BlockSizeTooLarge(u16),

    /// The requested fixed packet length exceeds the endpoint buffer.
    #[error("fixed packet length {0} exceeds the endpoint buffer")]
    PacketLengthTooLarge(u16),

    /// The device aborted a transfer with a non-retryable status byte.
    #[error("device rejected transfer: {0}")]
    Device(DeviceStatus),

    /// The device-side buffer never became available within the
    /// configured per-chunk resend budget.
    #[error("device buffer unavailable after {0} resend attempts")]
    RetriesExhausted(u32),

    /// A restore was requested with no saved configuration in the slot.
    #[error("no saved radio configuration; nothing to restore")]
    NoSavedState,
}

impl<E> From<TransportError<E>> for Cc1111Error<E> {
    fn from(err: TransportError<E>) -> Self {
        match err {
            TransportError::Timeout => Cc1111Error::Timeout,
            TransportError::Bus(e) => Cc1111Error::Transport(e),
        }
    }
}

/// Host-side driver for a CCxx11 USB radio dongle running NIC firmware.
///
/// The driver is synchronous and single-threaded: every operation is a
/// blocking round trip through the [`Transport`]. The register snapshot
/// and the return mode are unsynchronized mutable state, so concurrent
/// callers must serialize access per device handle.
pub struct Cc1111<T: Transport> {
    transport: T,
    /// Crystal frequency in MHz; every frequency-domain conversion is
    /// scaled by it.
    mhz: u32,
    config: RadioConfig,
    rf_mode: RadioMode,
    endec: Option<Box<dyn PayloadCodec>>,
    saved_config: Option<[u8; RadioConfig::LEN]>,
    chunk_retry_limit: u32,
}

impl<T: Transport> Cc1111<T> {
    /// Instantiate a driver over the given transport.
    ///
    /// The snapshot starts zeroed; call [`Cc1111::init()`] (or
    /// [`Cc1111::read_config()`]) before relying on derived getters.
    pub fn new(transport: T) -> Cc1111<T> {
        Cc1111 {
            transport,
            mhz: 24,
            config: RadioConfig::default(),
            rf_mode: RadioMode::Rx,
            endec: None,
            saved_config: None,
            chunk_retry_limit: DEFAULT_CHUNK_RETRY_LIMIT,
        }
    }

    /// Override the dongle's crystal frequency (MHz). CC1111 parts run
    /// at 24, CC2511 parts at 26.
    pub fn with_crystal_mhz(mut self, mhz: u32) -> Self {
        self.mhz = mhz;
        self
    }

    /// Attach (or with [`None`], detach) a payload transform applied
    /// around every transmit and receive.
    pub fn set_codec(&mut self, codec: Option<Box<dyn PayloadCodec>>) {
        self.endec = codec;
    }

    /// Bound the long-transmit flow-control resend loop. The device
    /// signals readiness promptly in normal operation; the bound only
    /// guards against a wedged dongle.
    pub fn set_chunk_retry_limit(&mut self, limit: u32) {
        self.chunk_retry_limit = limit;
    }

    /// The crystal frequency in MHz.
    pub fn crystal_mhz(&self) -> u32 {
        self.mhz
    }

    /// The current register snapshot.
    pub fn config(&self) -> &RadioConfig {
        &self.config
    }

    /// Mutable access to the register snapshot, for callers composing a
    /// configuration to push with [`Cc1111::write_config()`].
    pub fn config_mut(&mut self) -> &mut RadioConfig {
        &mut self.config
    }

    /// First contact: pull the register block and settle the radio into
    /// the default return mode.
    pub fn init(&mut self) -> Result<(), Cc1111Error<T::Error>> {
        self.read_config()?;
        self.set_mode(self.rf_mode)
    }

    pub(crate) fn send(
        &mut self,
        app: u8,
        command: u8,
        data: &[u8],
        timeout: Duration,
    ) -> Result<(Vec<u8>, SystemTime), Cc1111Error<T::Error>> {
        self.transport
            .send(app, command, data, timeout)
            .map_err(Cc1111Error::from)
    }

    /// Read `count` bytes of xdata starting at `addr`.
    pub fn peek(&mut self, addr: u16, count: u16) -> Result<Vec<u8>, Cc1111Error<T::Error>> {
        let mut payload = Vec::with_capacity(4);
        payload.extend_from_slice(&count.to_le_bytes());
        payload.extend_from_slice(&addr.to_le_bytes());
        let (reply, _) = self.send(apps::SYSTEM, sys::PEEK, &payload, USB_TX_WAIT)?;
        Ok(reply)
    }

    /// Write `data` into xdata starting at `addr`, with no mode
    /// bracketing. Radio registers normally go through
    /// [`RfModeControl::set_rf_register()`] instead.
    pub fn poke(&mut self, addr: u16, data: &[u8]) -> Result<(), Cc1111Error<T::Error>> {
        let mut payload = Vec::with_capacity(2 + data.len());
        payload.extend_from_slice(&addr.to_le_bytes());
        payload.extend_from_slice(data);
        self.send(apps::SYSTEM, sys::POKE, &payload, USB_TX_WAIT)?;
        Ok(())
    }

    /// Read the full configuration register block, replacing the
    /// snapshot.
    pub fn read_config(&mut self) -> Result<RadioConfig, Cc1111Error<T::Error>> {
        let block = self.peek(RadioConfig::BASE_ADDRESS, RadioConfig::LEN as u16)?;
        self.config = RadioConfig::parse(&block).ok_or(Cc1111Error::BinaryCorruption)?;
        Ok(self.config)
    }

    /// Push a configuration block to the chip and re-read it to
    /// confirm.
    ///
    /// With [`None`], the snapshot itself is pushed. The write is
    /// bracketed by an IDLE excursion keyed off the chip's *fresh*
    /// state, not the possibly stale snapshot.
    pub fn write_config(
        &mut self,
        block: Option<&[u8; RadioConfig::LEN]>,
    ) -> Result<(), Cc1111Error<T::Error>> {
        let block = match block {
            Some(bytes) => *bytes,
            None => self.config.emit(),
        };
        self.read_config()?;
        let marcstate = self.config.marc_state();
        if marcstate != MarcState::Idle {
            self.strobe_mode(RadioMode::Idle)?;
        }
        self.poke(RadioConfig::BASE_ADDRESS, &block)?;
        self.strobe_mode_return()?;
        self.read_config()?;
        Ok(())
    }
}
