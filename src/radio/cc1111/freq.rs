use crate::radio::cc1111::{registers, vco, Cc1111, Cc1111Error};
use crate::radio::prelude::{RfFrequency, RfModeControl};
use crate::transport::Transport;
use crate::types::{MarcState, RadioMode};

/// Split a frequency in Hz into the chip's 24-bit frequency word.
pub(crate) fn encode_freq(freq_hz: f64, mhz: u32) -> (u8, u8, u8) {
    let word = (freq_hz * 65536.0 / (mhz as f64 * 1e6)).round() as u32;
    ((word >> 16) as u8, (word >> 8) as u8, word as u8)
}

/// Recover the frequency in Hz from the three frequency registers.
pub(crate) fn decode_freq(freq2: u8, freq1: u8, freq0: u8, mhz: u32) -> f64 {
    let word = (freq2 as u32) << 16 | (freq1 as u32) << 8 | freq0 as u32;
    word as f64 * (mhz as f64 * 1e6) / 65536.0
}

/// Pick the FSCAL2 VCO bias preset for `freq_hz`.
///
/// The lower window of each band takes the low-VCO core; above it
/// (below 1 GHz) the high-VCO core is selected. A wrong bias silently
/// mistunes the oscillator, so the boundary constants are carried
/// exactly as documented. [`None`] leaves FSCAL2 untouched.
pub(crate) fn vco_bias(freq_hz: f64) -> Option<u8> {
    if (freq_hz > vco::FREQ_EDGE_900 && freq_hz < vco::FREQ_MID_900)
        || (freq_hz > vco::FREQ_EDGE_400 && freq_hz < vco::FREQ_MID_400)
        || freq_hz < vco::FREQ_MID_300
    {
        Some(vco::FSCAL2_LOW_VCO)
    } else if freq_hz < 1e9
        && (freq_hz > vco::FREQ_MID_900
            || freq_hz > vco::FREQ_MID_400
            || freq_hz > vco::FREQ_MID_300)
    {
        Some(vco::FSCAL2_HIGH_VCO)
    } else {
        None
    }
}

impl<T: Transport> RfFrequency for Cc1111<T> {
    type FrequencyErrorType = Cc1111Error<T::Error>;

    /// The three frequency registers and FSCAL2 are pushed in one
    /// bracketed excursion rather than register-by-register, so the
    /// synthesizer never sees a half-updated word.
    fn set_freq(&mut self, freq_hz: f64) -> Result<f64, Self::FrequencyErrorType> {
        let (freq2, freq1, freq0) = encode_freq(freq_hz, self.mhz);
        self.config.freq2 = freq2;
        self.config.freq1 = freq1;
        self.config.freq0 = freq0;
        if let Some(bias) = vco_bias(freq_hz) {
            self.config.fscal2 = bias;
        }

        let marcstate = self.config.marc_state();
        if marcstate != MarcState::Idle {
            self.strobe_mode(RadioMode::Idle)?;
        }
        self.poke(registers::FREQ2, &[freq2, freq1, freq0])?;
        let fscal2 = self.config.fscal2;
        self.poke(registers::FSCAL2, &[fscal2])?;
        self.strobe_mode_return()?;

        Ok(decode_freq(freq2, freq1, freq0, self.mhz))
    }

    fn get_freq(&mut self) -> Result<f64, Self::FrequencyErrorType> {
        self.read_config()?;
        Ok(decode_freq(
            self.config.freq2,
            self.config.freq1,
            self.config.freq0,
            self.mhz,
        ))
    }

    fn set_freq_offset(&mut self, offset: u8) -> Result<(), Self::FrequencyErrorType> {
        self.read_config()?;
        self.config.fsctrl0 = offset;
        self.set_rf_register(registers::FSCTRL0, offset, false)
    }

    fn get_freq_offset(&mut self) -> Result<u8, Self::FrequencyErrorType> {
        self.read_config()?;
        Ok(self.config.fsctrl0)
    }

    fn get_freq_est(&mut self) -> Result<u8, Self::FrequencyErrorType> {
        self.read_config()?;
        Ok(self.config.freqest)
    }
}
