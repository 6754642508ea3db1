use crate::radio::cc1111::bit_fields::Pktctrl0;
use crate::radio::cc1111::{registers, Cc1111, Cc1111Error, EP5_BUFFER_SIZE, MAX_TX_BLOCK};
use crate::radio::prelude::{RfFraming, RfModeControl};
use crate::transport::Transport;

impl<T: Transport> RfFraming for Cc1111<T> {
    type FramingErrorType = Cc1111Error<T::Error>;

    fn set_fixed_packet_len(&mut self, length: u16) -> Result<(), Self::FramingErrorType> {
        if length as usize > EP5_BUFFER_SIZE - 4 {
            return Err(Cc1111Error::PacketLengthTooLarge(length));
        }
        self.read_config()?;
        self.config.pktctrl0 = self
            .config
            .pktctrl0
            .with_length_config(Pktctrl0::LENGTH_FIXED);
        // beyond one transmit block the firmware streams in infinite
        // mode and manages PKTLEN itself
        self.config.pktlen = if length as usize > MAX_TX_BLOCK {
            0x00
        } else {
            length as u8
        };
        self.set_rf_register(registers::PKTCTRL0, self.config.pktctrl0.into_bits(), false)?;
        self.set_rf_register(registers::PKTLEN, self.config.pktlen, false)
    }

    fn set_variable_packet_len(&mut self) -> Result<(), Self::FramingErrorType> {
        self.read_config()?;
        self.config.pktctrl0 = self
            .config
            .pktctrl0
            .with_length_config(Pktctrl0::LENGTH_VARIABLE);
        self.config.pktlen = MAX_TX_BLOCK as u8;
        self.set_rf_register(registers::PKTCTRL0, self.config.pktctrl0.into_bits(), false)?;
        self.set_rf_register(registers::PKTLEN, self.config.pktlen, false)
    }

    fn get_packet_len(&mut self) -> Result<(u8, u8), Self::FramingErrorType> {
        Ok((self.config.pktlen, self.config.pktctrl0.length_config()))
    }

    fn set_crc(&mut self, enable: bool) -> Result<(), Self::FramingErrorType> {
        self.read_config()?;
        self.config.pktctrl0 = self.config.pktctrl0.with_crc_en(enable);
        self.set_rf_register(registers::PKTCTRL0, self.config.pktctrl0.into_bits(), false)
    }

    fn get_crc(&mut self) -> Result<bool, Self::FramingErrorType> {
        self.read_config()?;
        Ok(self.config.pktctrl0.crc_en())
    }

    fn set_whitening(&mut self, enable: bool) -> Result<(), Self::FramingErrorType> {
        self.read_config()?;
        self.config.pktctrl0 = self.config.pktctrl0.with_white_data(enable);
        self.set_rf_register(registers::PKTCTRL0, self.config.pktctrl0.into_bits(), false)
    }

    fn get_whitening(&mut self) -> Result<bool, Self::FramingErrorType> {
        self.read_config()?;
        Ok(self.config.pktctrl0.white_data())
    }

    fn set_fec(&mut self, enable: bool) -> Result<(), Self::FramingErrorType> {
        self.read_config()?;
        self.config.mdmcfg1 = self.config.mdmcfg1.with_fec_en(enable);
        self.set_rf_register(registers::MDMCFG1, self.config.mdmcfg1.into_bits(), false)
    }

    fn get_fec(&mut self) -> Result<bool, Self::FramingErrorType> {
        self.read_config()?;
        Ok(self.config.mdmcfg1.fec_en())
    }

    fn set_pqt(&mut self, threshold: u8) -> Result<(), Self::FramingErrorType> {
        self.read_config()?;
        self.config.pktctrl1 = self.config.pktctrl1.with_pqt(threshold & 7);
        self.set_rf_register(registers::PKTCTRL1, self.config.pktctrl1.into_bits(), false)
    }

    fn get_pqt(&mut self) -> Result<u8, Self::FramingErrorType> {
        self.read_config()?;
        Ok(self.config.pktctrl1.pqt())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::RfFraming;
    use crate::radio::Cc1111Error;
    use crate::test::{config_block, mk_radio, peek_config, Expect};

    #[test]
    pub fn fixed_len_small_packet() {
        let expectations = [
            peek_config(&config_block(0x01)),
            Expect::send(0xFF, 0x81, vec![0x04, 0xDF, 0x00], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
            Expect::send(0xFF, 0x81, vec![0x02, 0xDF, 250], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_fixed_packet_len(250).unwrap();
        assert_eq!(radio.get_packet_len().unwrap(), (250, 0));
        transport.done();
    }

    #[test]
    pub fn fixed_len_streaming_packet_zeroes_pktlen() {
        let expectations = [
            peek_config(&config_block(0x01)),
            Expect::send(0xFF, 0x81, vec![0x04, 0xDF, 0x00], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
            Expect::send(0xFF, 0x81, vec![0x02, 0xDF, 0x00], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_fixed_packet_len(400).unwrap();
        transport.done();
    }

    #[test]
    pub fn fixed_len_beyond_buffer_fails_before_io() {
        let (mut radio, transport) = mk_radio(&[]);
        assert_eq!(
            radio.set_fixed_packet_len(513),
            Err(Cc1111Error::PacketLengthTooLarge(513))
        );
        transport.done();
    }

    #[test]
    pub fn variable_len() {
        let expectations = [
            peek_config(&config_block(0x01)),
            Expect::send(0xFF, 0x81, vec![0x04, 0xDF, 0x01], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
            Expect::send(0xFF, 0x81, vec![0x02, 0xDF, 0xFF], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_variable_packet_len().unwrap();
        assert_eq!(radio.get_packet_len().unwrap(), (0xFF, 1));
        transport.done();
    }

    #[test]
    pub fn crc_toggle() {
        let expectations = [
            peek_config(&config_block(0x01)),
            Expect::send(0xFF, 0x81, vec![0x04, 0xDF, 0x04], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_crc(true).unwrap();
        transport.done();
    }

    #[test]
    pub fn whitening_preserves_other_bits() {
        let mut block = config_block(0x01);
        block[0x04] = 0x05; // crc + variable length already set
        let expectations = [
            peek_config(&block),
            Expect::send(0xFF, 0x81, vec![0x04, 0xDF, 0x45], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_whitening(true).unwrap();
        transport.done();
    }

    #[test]
    pub fn fec_sets_mdmcfg1_high_bit() {
        let expectations = [
            peek_config(&config_block(0x01)),
            Expect::send(0xFF, 0x81, vec![0x0F, 0xDF, 0x80], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_fec(true).unwrap();
        transport.done();
    }

    #[test]
    pub fn pqt_is_masked_to_three_bits() {
        let expectations = [
            peek_config(&config_block(0x01)),
            Expect::send(0xFF, 0x81, vec![0x03, 0xDF, 0x60], vec![]),
            Expect::send(0xFF, 0x81, vec![0xE1, 0xDF, 0x02], vec![]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_pqt(11).unwrap(); // 11 & 7 == 3
        transport.done();
    }
}
