use crate::radio::cc1111::{registers, Cc1111, Cc1111Error};
use crate::radio::prelude::{RfModulation, RfModeControl};
use crate::transport::Transport;
use crate::types::Modulation;

impl<T: Transport> RfModulation for Cc1111<T> {
    type ModulationErrorType = Cc1111Error<T::Error>;

    fn set_modulation(&mut self, modulation: Modulation) -> Result<(), Self::ModulationErrorType> {
        self.read_config()?;
        self.config.mdmcfg2 = self.config.mdmcfg2.with_mod_format(modulation.into_bits());
        self.set_rf_register(registers::MDMCFG2, self.config.mdmcfg2.into_bits(), false)
    }

    fn get_modulation(&mut self) -> Result<Modulation, Self::ModulationErrorType> {
        self.read_config()?;
        Ok(Modulation::from_bits(self.config.mdmcfg2.mod_format()))
    }

    fn set_manchester(&mut self, enable: bool) -> Result<(), Self::ModulationErrorType> {
        self.read_config()?;
        self.config.mdmcfg2 = self.config.mdmcfg2.with_manchester_en(enable);
        self.set_rf_register(registers::MDMCFG2, self.config.mdmcfg2.into_bits(), false)
    }

    fn get_manchester(&mut self) -> Result<bool, Self::ModulationErrorType> {
        self.read_config()?;
        Ok(self.config.mdmcfg2.manchester_en())
    }

    /// The register bit is DEM_DCFILT_OFF, so "filter enabled" is the
    /// bit cleared.
    fn set_dc_filter(&mut self, enable: bool) -> Result<(), Self::ModulationErrorType> {
        self.read_config()?;
        self.config.mdmcfg2 = self.config.mdmcfg2.with_dem_dcfilt_off(!enable);
        self.set_rf_register(registers::MDMCFG2, self.config.mdmcfg2.into_bits(), false)
    }

    fn get_dc_filter(&mut self) -> Result<bool, Self::ModulationErrorType> {
        self.read_config()?;
        Ok(!self.config.mdmcfg2.dem_dcfilt_off())
    }
}
