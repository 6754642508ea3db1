use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::radio::cc1111::{registers, Cc1111, Cc1111Error, USB_RX_WAIT};
use crate::radio::prelude::RfTransfer;
use crate::render::{render_friendly, render_hex};
use crate::transport::Transport;

impl<T: Transport> Cc1111<T> {
    /// Raw RSSI register readback (two's-complement, half-dB steps,
    /// offset per the chip documentation).
    pub fn rssi(&mut self) -> Result<u8, Cc1111Error<T::Error>> {
        let reply = self.peek(registers::RSSI, 1)?;
        reply.first().copied().ok_or(Cc1111Error::BinaryCorruption)
    }

    /// Link quality indication for the last received packet.
    pub fn lqi(&mut self) -> Result<u8, Cc1111Error<T::Error>> {
        let reply = self.peek(registers::LQI, 1)?;
        reply.first().copied().ok_or(Cc1111Error::BinaryCorruption)
    }

    /// Receive frames and hand each to `on_frame` until `stop` is
    /// raised.
    ///
    /// A transport timeout just means no packet arrived yet and keeps
    /// the loop running; any other failure ends it. The stop flag is
    /// checked between receive attempts, so a raise takes effect within
    /// one receive wait.
    pub fn listen_with<F>(
        &mut self,
        stop: &AtomicBool,
        mut on_frame: F,
    ) -> Result<(), Cc1111Error<T::Error>>
    where
        F: FnMut(&[u8], SystemTime),
    {
        while !stop.load(Ordering::Relaxed) {
            match self.receive(USB_RX_WAIT, None) {
                Ok((frame, timestamp)) => on_frame(&frame, timestamp),
                Err(Cc1111Error::Timeout) => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Sit and dump packets as they come in, until `stop` is raised.
    ///
    /// Communications settings are left exactly as configured; this is
    /// a passive diagnostic.
    pub fn listen(&mut self, stop: &AtomicBool) -> Result<(), Cc1111Error<T::Error>> {
        self.listen_with(stop, |frame, timestamp| {
            let seconds = timestamp
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs_f64())
                .unwrap_or(0.0);
            println!(
                "({seconds:5.3}) Received:  {}  | {}",
                render_hex(frame),
                render_friendly(frame)
            );
        })
    }
}
