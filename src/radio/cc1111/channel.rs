use crate::radio::cc1111::{registers, Cc1111, Cc1111Error};
use crate::radio::prelude::{RfChannel, RfModeControl};
use crate::transport::Transport;

impl<T: Transport> RfChannel for Cc1111<T> {
    type ChannelErrorType = Cc1111Error<T::Error>;

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.read_config()?;
        self.config.channr = channel;
        self.set_rf_register(registers::CHANNR, channel, false)
    }

    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.read_config()?;
        Ok(self.config.channr)
    }
}
