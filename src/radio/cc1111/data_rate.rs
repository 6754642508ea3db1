use crate::radio::cc1111::{registers, Cc1111, Cc1111Error};
use crate::radio::prelude::{RfDataRate, RfModeControl};
use crate::transport::Transport;

/// Find the coarsest exponent whose mantissa represents `drate` baud.
///
/// The rate is `xtal * (256 + m) * 2^e / 2^28`; the search walks the
/// exponent up until the mantissa first fits below 256. Rates too slow
/// for a non-negative mantissa are unrepresentable.
pub(crate) fn encode_drate(drate: f64, mhz: u32) -> Option<(u8, u8)> {
    let xtal = mhz as f64 * 1e6;
    for e in 0..16 {
        let m = (drate * 2f64.powi(28) / (2f64.powi(e) * xtal) - 256.0).round();
        if m < 256.0 {
            if m < 0.0 {
                return None;
            }
            return Some((e as u8, m as u8));
        }
    }
    None
}

pub(crate) fn decode_drate(e: u8, m: u8, mhz: u32) -> f64 {
    mhz as f64 * 1e6 * (256.0 + m as f64) * 2f64.powi(e as i32) / 2f64.powi(28)
}

impl<T: Transport> RfDataRate for Cc1111<T> {
    type DataRateErrorType = Cc1111Error<T::Error>;

    fn set_data_rate(&mut self, drate_baud: f64) -> Result<f64, Self::DataRateErrorType> {
        let (e, m) = encode_drate(drate_baud, self.mhz).ok_or(Cc1111Error::Unrepresentable {
            quantity: "data rate",
            requested: drate_baud,
        })?;
        self.read_config()?;
        self.config.mdmcfg3 = m;
        self.config.mdmcfg4 = self.config.mdmcfg4.with_drate_e(e);

        self.set_rf_register(registers::MDMCFG3, self.config.mdmcfg3, false)?;
        self.set_rf_register(registers::MDMCFG4, self.config.mdmcfg4.into_bits(), false)?;
        Ok(decode_drate(e, m, self.mhz))
    }

    fn get_data_rate(&mut self) -> Result<f64, Self::DataRateErrorType> {
        self.read_config()?;
        Ok(decode_drate(
            self.config.mdmcfg4.drate_e(),
            self.config.mdmcfg3,
            self.mhz,
        ))
    }
}
