use crate::radio::cc1111::{registers, Cc1111, Cc1111Error};
use crate::radio::prelude::{RfChannelSpacing, RfModeControl};
use crate::transport::Transport;

/// Find the coarsest exponent whose mantissa represents a channel
/// spacing of `spacing` Hz. The spacing is
/// `xtal / 2^18 * (256 + m) * 2^e`.
pub(crate) fn encode_chanspc(spacing: f64, mhz: u32) -> Option<(u8, u8)> {
    let xtal = mhz as f64 * 1e6;
    for e in 0..4 {
        let m = (spacing * 2f64.powi(18) / (xtal * 2f64.powi(e)) - 256.0).round();
        if m < 256.0 {
            if m < 0.0 {
                return None;
            }
            return Some((e as u8, m as u8));
        }
    }
    None
}

pub(crate) fn decode_chanspc(e: u8, m: u8, mhz: u32) -> f64 {
    mhz as f64 * 1e6 / 2f64.powi(18) * (256.0 + m as f64) * 2f64.powi(e as i32)
}

impl<T: Transport> RfChannelSpacing for Cc1111<T> {
    type ChannelSpacingErrorType = Cc1111Error<T::Error>;

    fn set_chan_spc(&mut self, spacing_hz: f64) -> Result<f64, Self::ChannelSpacingErrorType> {
        let (e, m) = encode_chanspc(spacing_hz, self.mhz).ok_or(Cc1111Error::Unrepresentable {
            quantity: "channel spacing",
            requested: spacing_hz,
        })?;
        self.read_config()?;
        self.config.mdmcfg1 = self.config.mdmcfg1.with_chanspc_e(e);
        self.config.mdmcfg0 = m;

        self.set_rf_register(registers::MDMCFG1, self.config.mdmcfg1.into_bits(), false)?;
        self.set_rf_register(registers::MDMCFG0, self.config.mdmcfg0, false)?;
        Ok(decode_chanspc(e, m, self.mhz))
    }

    fn get_chan_spc(&mut self) -> Result<f64, Self::ChannelSpacingErrorType> {
        self.read_config()?;
        Ok(decode_chanspc(
            self.config.mdmcfg1.chanspc_e(),
            self.config.mdmcfg0,
            self.mhz,
        ))
    }
}
