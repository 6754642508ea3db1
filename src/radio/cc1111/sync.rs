use crate::radio::cc1111::{registers, Cc1111, Cc1111Error};
use crate::radio::prelude::{RfModeControl, RfSync};
use crate::transport::Transport;
use crate::types::SyncMode;

impl<T: Transport> RfSync for Cc1111<T> {
    type SyncErrorType = Cc1111Error<T::Error>;

    fn set_sync_word(&mut self, word: u16) -> Result<(), Self::SyncErrorType> {
        self.read_config()?;
        self.config.set_sync_word(word);
        self.set_rf_register(registers::SYNC1, self.config.sync1, false)?;
        self.set_rf_register(registers::SYNC0, self.config.sync0, false)
    }

    fn get_sync_word(&mut self) -> Result<u16, Self::SyncErrorType> {
        self.read_config()?;
        Ok(self.config.sync_word())
    }

    fn set_sync_mode(&mut self, mode: SyncMode) -> Result<(), Self::SyncErrorType> {
        self.read_config()?;
        self.config.mdmcfg2 = self.config.mdmcfg2.with_sync_mode(mode.into_bits());
        self.set_rf_register(registers::MDMCFG2, self.config.mdmcfg2.into_bits(), false)
    }

    fn get_sync_mode(&mut self) -> Result<SyncMode, Self::SyncErrorType> {
        self.read_config()?;
        Ok(SyncMode::from_bits(self.config.mdmcfg2.sync_mode()))
    }
}
