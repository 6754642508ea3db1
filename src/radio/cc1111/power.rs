use crate::radio::cc1111::{registers, Cc1111, Cc1111Error};
use crate::radio::prelude::{RfModeControl, RfPower};
use crate::transport::Transport;
use crate::types::Modulation;

impl<T: Transport> RfPower for Cc1111<T> {
    type PowerErrorType = Cc1111Error<T::Error>;

    /// Standard power shaping: ASK/OOK keys the carrier by ramping
    /// between PA table entries 0 and 1, so the level lands in slot 1
    /// (slot 0 for inverted keying) and FREND0 ramps over both slots.
    /// Every other modulation transmits from slot 0 alone.
    fn set_power(&mut self, power: Option<u8>, invert: bool) -> Result<(), Self::PowerErrorType> {
        self.read_config()?;
        let modulation = Modulation::from_bits(self.config.mdmcfg2.mod_format());
        let ask_ook = modulation == Modulation::AskOok;

        if let Some(level) = power {
            if ask_ook && !invert {
                self.config.pa_table[0] = 0x00;
                self.config.pa_table[1] = level;
            } else {
                self.config.pa_table[0] = level;
                self.config.pa_table[1] = 0x00;
            }
            self.set_rf_register(registers::PA_TABLE0, self.config.pa_table[0], false)?;
            self.set_rf_register(registers::PA_TABLE1, self.config.pa_table[1], false)?;
        }

        self.config.frend0 = self.config.frend0.with_pa_power(u8::from(ask_ook));
        self.set_rf_register(registers::FREND0, self.config.frend0.into_bits(), false)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::RfPower;
    use crate::test::{config_block, mk_radio, peek_config, Expect};

    #[test]
    pub fn power_for_fsk_lands_in_slot_zero() {
        let expectations = [
            peek_config(&config_block(0x01)),
            Expect::send(0xFF, 0x81, vec![0x2E, 0xDF, 0xC0], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
            Expect::send(0xFF, 0x81, vec![0x2D, 0xDF, 0x00], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
            // PA ramp off outside ASK/OOK
            Expect::send(0xFF, 0x81, vec![0x1B, 0xDF, 0x00], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_power(Some(0xC0), false).unwrap();
        transport.done();
    }

    #[test]
    pub fn power_for_ook_lands_in_slot_one() {
        let mut block = config_block(0x01);
        block[0x0E] = 0x30; // ASK/OOK
        let expectations = [
            peek_config(&block),
            Expect::send(0xFF, 0x81, vec![0x2E, 0xDF, 0x00], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
            Expect::send(0xFF, 0x81, vec![0x2D, 0xDF, 0xC0], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
            // PA ramp on for ASK/OOK
            Expect::send(0xFF, 0x81, vec![0x1B, 0xDF, 0x01], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_power(Some(0xC0), false).unwrap();
        transport.done();
    }

    #[test]
    pub fn inverted_ook_swaps_slots() {
        let mut block = config_block(0x01);
        block[0x0E] = 0x30;
        let expectations = [
            peek_config(&block),
            Expect::send(0xFF, 0x81, vec![0x2E, 0xDF, 0xC0], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
            Expect::send(0xFF, 0x81, vec![0x2D, 0xDF, 0x00], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
            Expect::send(0xFF, 0x81, vec![0x1B, 0xDF, 0x01], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_power(Some(0xC0), true).unwrap();
        transport.done();
    }

    #[test]
    pub fn refresh_pa_selection_only() {
        // no level given: only FREND0 is rewritten
        let expectations = [
            peek_config(&config_block(0x01)),
            Expect::send(0xFF, 0x81, vec![0x1B, 0xDF, 0x00], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_power(None, false).unwrap();
        transport.done();
    }
}
