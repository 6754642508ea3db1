use crate::radio::cc1111::{registers, Cc1111, Cc1111Error};
use crate::radio::prelude::{RfBandwidth, RfModeControl};
use crate::transport::Transport;

/// Find the coarsest exponent whose mantissa represents a channel
/// filter bandwidth of `bw` Hz. The bandwidth is
/// `xtal / (8 * (4 + m) * 2^e)` with a 2-bit mantissa.
pub(crate) fn encode_chanbw(bw: f64, mhz: u32) -> Option<(u8, u8)> {
    let xtal = mhz as f64 * 1e6;
    for e in 0..4 {
        let m = (xtal / (bw * 2f64.powi(e) * 8.0) - 4.0).round();
        if m < 4.0 {
            if m < 0.0 {
                return None;
            }
            return Some((e as u8, m as u8));
        }
    }
    None
}

pub(crate) fn decode_chanbw(e: u8, m: u8, mhz: u32) -> f64 {
    mhz as f64 * 1e6 / (8.0 * (4.0 + m as f64) * 2f64.powi(e as i32))
}

impl<T: Transport> RfBandwidth for Cc1111<T> {
    type BandwidthErrorType = Cc1111Error<T::Error>;

    /// For best performance the signal should occupy at most 80% of the
    /// channel filter bandwidth, with crystal tolerance subtracted.
    ///
    /// Besides MDMCFG4, two bandwidth-dependent vendor presets are
    /// applied: FREND1 (front-end RX current) switches at 102 kHz, and
    /// TEST2/TEST1 switch at 325 kHz. The presets key off the
    /// *achieved* bandwidth, not the requested one.
    fn set_chan_bw(&mut self, bw_hz: f64) -> Result<f64, Self::BandwidthErrorType> {
        let (e, m) = encode_chanbw(bw_hz, self.mhz).ok_or(Cc1111Error::Unrepresentable {
            quantity: "channel bandwidth",
            requested: bw_hz,
        })?;
        let achieved = decode_chanbw(e, m, self.mhz);

        self.read_config()?;
        self.config.mdmcfg4 = self.config.mdmcfg4.with_chanbw_e(e).with_chanbw_m(m);
        self.set_rf_register(registers::MDMCFG4, self.config.mdmcfg4.into_bits(), false)?;

        let frend1 = if achieved > 102e3 { 0xB6 } else { 0x56 };
        self.config.frend1 = frend1;
        self.set_rf_register(registers::FREND1, frend1, false)?;

        let (test2, test1) = if achieved > 325e3 {
            (0x88, 0x31)
        } else {
            (0x81, 0x35)
        };
        self.config.test2 = test2;
        self.config.test1 = test1;
        self.set_rf_register(registers::TEST2, test2, false)?;
        self.set_rf_register(registers::TEST1, test1, false)?;

        Ok(achieved)
    }

    fn get_chan_bw(&mut self) -> Result<f64, Self::BandwidthErrorType> {
        self.read_config()?;
        Ok(decode_chanbw(
            self.config.mdmcfg4.chanbw_e(),
            self.config.mdmcfg4.chanbw_m(),
            self.mhz,
        ))
    }
}
