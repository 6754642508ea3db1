use crate::radio::cc1111::{registers, Cc1111, Cc1111Error};
use crate::radio::prelude::{RfDeviation, RfModeControl};
use crate::transport::Transport;

/// Find the coarsest exponent whose mantissa represents a frequency
/// deviation of `deviation` Hz. The deviation is
/// `xtal * (8 + m) * 2^e / 2^17` with a 3-bit mantissa.
pub(crate) fn encode_deviatn(deviation: f64, mhz: u32) -> Option<(u8, u8)> {
    let xtal = mhz as f64 * 1e6;
    for e in 0..8 {
        let m = (deviation * 2f64.powi(17) / (2f64.powi(e) * xtal) - 8.0).round();
        if m < 8.0 {
            if m < 0.0 {
                return None;
            }
            return Some((e as u8, m as u8));
        }
    }
    None
}

pub(crate) fn decode_deviatn(e: u8, m: u8, mhz: u32) -> f64 {
    mhz as f64 * 1e6 * (8.0 + m as f64) * 2f64.powi(e as i32) / 2f64.powi(17)
}

impl<T: Transport> RfDeviation for Cc1111<T> {
    type DeviationErrorType = Cc1111Error<T::Error>;

    fn set_deviation(&mut self, deviation_hz: f64) -> Result<f64, Self::DeviationErrorType> {
        let (e, m) = encode_deviatn(deviation_hz, self.mhz).ok_or(Cc1111Error::Unrepresentable {
            quantity: "deviation",
            requested: deviation_hz,
        })?;
        self.read_config()?;
        self.config.deviatn = self.config.deviatn.with_deviation_e(e).with_deviation_m(m);
        self.set_rf_register(registers::DEVIATN, self.config.deviatn.into_bits(), false)?;
        Ok(decode_deviatn(e, m, self.mhz))
    }

    fn get_deviation(&mut self) -> Result<f64, Self::DeviationErrorType> {
        self.read_config()?;
        Ok(decode_deviatn(
            self.config.deviatn.deviation_e(),
            self.config.deviatn.deviation_m(),
            self.mhz,
        ))
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::{decode_deviatn, encode_deviatn, RfDeviation};
    use crate::radio::Cc1111Error;
    use crate::test::{config_block, mk_radio, peek_config, Expect};

    #[test]
    fn achieved_deviation_within_one_step() {
        for requested in [5_100.0, 20e3, 47e3, 129e3] {
            let (e, m) = encode_deviatn(requested, 24).unwrap();
            let achieved = decode_deviatn(e, m, 24);
            let step = decode_deviatn(e, 1, 24) - decode_deviatn(e, 0, 24);
            assert!(
                (achieved - requested).abs() <= step,
                "{requested} Hz achieved {achieved} Hz (step {step})"
            );
        }
    }

    #[test]
    fn deviation_20khz_matches_preset() {
        // the documented 38.4 kBaud preset stores DEVIATN 0x36
        let (e, m) = encode_deviatn(20e3, 24).unwrap();
        assert_eq!((e, m), (3, 6));
    }

    #[test]
    fn unrepresentable_deviation_is_rejected() {
        // below the e=0, m=0 floor of ~1.46 kHz
        assert_eq!(encode_deviatn(500.0, 24), None);
        // above the e=7, m=7 ceiling of ~351.6 kHz
        assert_eq!(encode_deviatn(500e3, 24), None);
    }

    #[test]
    pub fn set_deviation_writes_register() {
        let expectations = [
            peek_config(&config_block(0x01)),
            Expect::send(0xFF, 0x81, vec![0x11, 0xDF, 0x36], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        let achieved = radio.set_deviation(20e3).unwrap();
        assert!((achieved - 20e3).abs() < 1e3);
        transport.done();
    }

    #[test]
    pub fn unrepresentable_deviation_fails_before_io() {
        let (mut radio, transport) = mk_radio(&[]);
        assert!(matches!(
            radio.set_deviation(500.0),
            Err(Cc1111Error::Unrepresentable { .. })
        ));
        transport.done();
    }
}
