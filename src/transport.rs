//! The seam between the radio driver and the USB command layer.
//!
//! The dongle firmware multiplexes several "applications" over one USB
//! endpoint pair; every exchange is addressed by an (application, command)
//! pair and carries an opaque payload. The concrete USB plumbing (device
//! discovery, endpoint management, command framing) lives outside this
//! crate; anything that can perform these two blocking exchanges can carry
//! the driver.

use std::time::{Duration, SystemTime};

use thiserror::Error;

/// A failure raised by a [`Transport`] implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TransportError<E> {
    /// No reply arrived within the allotted time.
    ///
    /// Recoverable for receive paths (no packet yet); fatal for
    /// configuration writes, after which the driver's register snapshot
    /// must be considered stale until re-read.
    #[error("timed out waiting on the dongle")]
    Timeout,
    /// The underlying bus failed.
    #[error("transport bus fault")]
    Bus(E),
}

/// Blocking command exchange with a NIC-firmware dongle.
///
/// Both calls return the reply payload together with the host-side
/// timestamp at which it was captured.
pub trait Transport {
    /// The bus-level error type of the implementation.
    type Error;

    /// Issue a command carrying `data` and wait up to `timeout` for its
    /// reply.
    fn send(
        &mut self,
        app: u8,
        command: u8,
        data: &[u8],
        timeout: Duration,
    ) -> Result<(Vec<u8>, SystemTime), TransportError<Self::Error>>;

    /// Wait up to `timeout` for an unsolicited message posted by the
    /// dongle for the given (application, command) pair.
    fn receive(
        &mut self,
        app: u8,
        command: u8,
        timeout: Duration,
    ) -> Result<(Vec<u8>, SystemTime), TransportError<Self::Error>>;
}
