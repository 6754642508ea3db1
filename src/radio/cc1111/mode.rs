use crate::radio::cc1111::{apps, registers, sys, Cc1111, Cc1111Error, USB_TX_WAIT};
use crate::radio::prelude::RfModeControl;
use crate::transport::Transport;
use crate::types::{MarcState, RadioMode};

impl<T: Transport> RfModeControl for Cc1111<T> {
    type ModeErrorType = Cc1111Error<T::Error>;

    fn set_mode(&mut self, mode: RadioMode) -> Result<(), Self::ModeErrorType> {
        self.rf_mode = mode;
        self.send(apps::SYSTEM, sys::RFMODE, &[mode.into_bits()], USB_TX_WAIT)?;
        Ok(())
    }

    fn mode(&self) -> RadioMode {
        self.rf_mode
    }

    fn strobe_mode(&mut self, mode: RadioMode) -> Result<(), Self::ModeErrorType> {
        self.poke(registers::RFST, &[mode.into_bits()])
    }

    fn strobe_mode_return(&mut self) -> Result<(), Self::ModeErrorType> {
        self.poke(registers::RFST, &[self.rf_mode.into_bits()])
    }

    fn marc_state(&mut self) -> Result<MarcState, Self::ModeErrorType> {
        self.read_config()?;
        Ok(self.config.marc_state())
    }

    /// Writing most radio registers while the radio is actively
    /// receiving or transmitting corrupts in-flight state, so the write
    /// is bracketed: force IDLE (skipped when the snapshot already says
    /// idle), write, re-strobe the return mode. Every register setter
    /// funnels through here and inherits the property.
    fn set_rf_register(
        &mut self,
        addr: u16,
        value: u8,
        suppress: bool,
    ) -> Result<(), Self::ModeErrorType> {
        if suppress {
            return self.poke(addr, &[value]);
        }

        let marcstate = self.config.marc_state();
        if marcstate != MarcState::Idle {
            self.strobe_mode(RadioMode::Idle)?;
        }
        self.poke(addr, &[value])?;
        self.strobe_mode_return()
    }
}
