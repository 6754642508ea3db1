//! This module defines the generic traits that may
//! need to be imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use cc1111::radio::prelude::*;
//! ```

use std::time::{Duration, SystemTime};

use crate::types::{MarcState, Modulation, RadioMode, SyncMode};

/// A trait to represent carrier-frequency control for a sub-GHz
/// transceiver.
pub trait RfFrequency {
    type FrequencyErrorType;

    /// Tune the radio to `freq_hz`.
    ///
    /// The 24-bit frequency word quantizes the request; the achieved
    /// frequency is returned. Tuning also selects the VCO bias preset
    /// for the band the frequency falls in.
    fn set_freq(&mut self, freq_hz: f64) -> Result<f64, Self::FrequencyErrorType>;

    /// Get the currently tuned frequency in Hz.
    fn get_freq(&mut self) -> Result<f64, Self::FrequencyErrorType>;

    /// Apply a manual frequency-offset trim (FSCTRL0).
    fn set_freq_offset(&mut self, offset: u8) -> Result<(), Self::FrequencyErrorType>;

    /// Get the manual frequency-offset trim.
    fn get_freq_offset(&mut self) -> Result<u8, Self::FrequencyErrorType>;

    /// Get the demodulator's frequency-offset estimate (FREQEST).
    fn get_freq_est(&mut self) -> Result<u8, Self::FrequencyErrorType>;
}

/// A trait to represent manipulation of the channel number
/// for a sub-GHz transceiver.
pub trait RfChannel {
    type ChannelErrorType;

    /// Set the channel number; the RF frequency is the base frequency
    /// plus channel times the configured channel spacing.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the currently selected channel number.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of the over-the-air data rate
/// for a sub-GHz transceiver.
pub trait RfDataRate {
    type DataRateErrorType;

    /// Set the data rate in baud; returns the achieved rate after
    /// exponent/mantissa quantization.
    fn set_data_rate(&mut self, drate_baud: f64) -> Result<f64, Self::DataRateErrorType>;

    /// Get the configured data rate in baud.
    fn get_data_rate(&mut self) -> Result<f64, Self::DataRateErrorType>;
}

/// A trait to represent manipulation of the channel filter bandwidth
/// for a sub-GHz transceiver.
pub trait RfBandwidth {
    type BandwidthErrorType;

    /// Set the channel filter bandwidth in Hz; returns the achieved
    /// bandwidth. Also applies the vendor's front-end and test-register
    /// presets for the achieved bandwidth.
    fn set_chan_bw(&mut self, bw_hz: f64) -> Result<f64, Self::BandwidthErrorType>;

    /// Get the configured channel filter bandwidth in Hz.
    fn get_chan_bw(&mut self) -> Result<f64, Self::BandwidthErrorType>;
}

/// A trait to represent manipulation of the channel spacing
/// for a sub-GHz transceiver.
pub trait RfChannelSpacing {
    type ChannelSpacingErrorType;

    /// Set the channel spacing in Hz; returns the achieved spacing.
    fn set_chan_spc(&mut self, spacing_hz: f64)
        -> Result<f64, Self::ChannelSpacingErrorType>;

    /// Get the configured channel spacing in Hz.
    fn get_chan_spc(&mut self) -> Result<f64, Self::ChannelSpacingErrorType>;
}

/// A trait to represent manipulation of the frequency deviation
/// for a sub-GHz transceiver.
pub trait RfDeviation {
    type DeviationErrorType;

    /// Set the FSK frequency deviation in Hz; returns the achieved
    /// deviation.
    fn set_deviation(&mut self, deviation_hz: f64) -> Result<f64, Self::DeviationErrorType>;

    /// Get the configured frequency deviation in Hz.
    fn get_deviation(&mut self) -> Result<f64, Self::DeviationErrorType>;
}

/// A trait to represent manipulation of the modulation format and
/// demodulator options for a sub-GHz transceiver.
pub trait RfModulation {
    type ModulationErrorType;

    fn set_modulation(&mut self, modulation: Modulation)
        -> Result<(), Self::ModulationErrorType>;

    fn get_modulation(&mut self) -> Result<Modulation, Self::ModulationErrorType>;

    /// Enable or disable Manchester encoding of the air data.
    fn set_manchester(&mut self, enable: bool) -> Result<(), Self::ModulationErrorType>;

    fn get_manchester(&mut self) -> Result<bool, Self::ModulationErrorType>;

    /// Enable or disable the DC-blocking filter ahead of the
    /// demodulator. Disabling it saves power at a sensitivity cost.
    fn set_dc_filter(&mut self, enable: bool) -> Result<(), Self::ModulationErrorType>;

    fn get_dc_filter(&mut self) -> Result<bool, Self::ModulationErrorType>;
}

/// A trait to represent manipulation of the sync word and its matching
/// strictness for a sub-GHz transceiver.
pub trait RfSync {
    type SyncErrorType;

    /// Set the 16-bit sync word transmitted ahead of every packet and
    /// matched by the receiver.
    fn set_sync_word(&mut self, word: u16) -> Result<(), Self::SyncErrorType>;

    fn get_sync_word(&mut self) -> Result<u16, Self::SyncErrorType>;

    /// Set how strictly incoming carrier must match the sync word to
    /// qualify as a packet start.
    fn set_sync_mode(&mut self, mode: SyncMode) -> Result<(), Self::SyncErrorType>;

    fn get_sync_mode(&mut self) -> Result<SyncMode, Self::SyncErrorType>;
}

/// A trait to represent packet framing and filtering configuration
/// for a sub-GHz transceiver.
pub trait RfFraming {
    type FramingErrorType;

    /// Configure fixed-length packets of `length` bytes.
    ///
    /// Lengths above one transmit block are handled by the firmware in
    /// streaming mode and leave PKTLEN at zero; lengths above the
    /// endpoint buffer are rejected outright.
    fn set_fixed_packet_len(&mut self, length: u16) -> Result<(), Self::FramingErrorType>;

    /// Configure variable-length packets (length byte on the air).
    fn set_variable_packet_len(&mut self) -> Result<(), Self::FramingErrorType>;

    /// Get `(PKTLEN, LENGTH_CONFIG)` as currently configured.
    fn get_packet_len(&mut self) -> Result<(u8, u8), Self::FramingErrorType>;

    /// Enable or disable the packet CRC.
    fn set_crc(&mut self, enable: bool) -> Result<(), Self::FramingErrorType>;

    fn get_crc(&mut self) -> Result<bool, Self::FramingErrorType>;

    /// Enable or disable PN9 data whitening.
    fn set_whitening(&mut self, enable: bool) -> Result<(), Self::FramingErrorType>;

    fn get_whitening(&mut self) -> Result<bool, Self::FramingErrorType>;

    /// Enable or disable forward error correction.
    fn set_fec(&mut self, enable: bool) -> Result<(), Self::FramingErrorType>;

    fn get_fec(&mut self) -> Result<bool, Self::FramingErrorType>;

    /// Set the preamble-quality threshold (0..=7) a packet must clear
    /// after carrier detect.
    fn set_pqt(&mut self, threshold: u8) -> Result<(), Self::FramingErrorType>;

    fn get_pqt(&mut self) -> Result<u8, Self::FramingErrorType>;
}

/// A trait to represent output-power control for a sub-GHz transceiver.
pub trait RfPower {
    type PowerErrorType;

    /// Write `power` into the PA table slot appropriate for the current
    /// modulation, and force the PA ramp for ASK/OOK.
    ///
    /// With `power` of [`None`] only the FREND0 PA_POWER selection is
    /// refreshed for the current modulation. `invert` swaps the ASK/OOK
    /// table slots for inverted keying.
    fn set_power(&mut self, power: Option<u8>, invert: bool)
        -> Result<(), Self::PowerErrorType>;
}

/// A trait to represent the radio-mode state machine of a sub-GHz
/// transceiver.
///
/// Two mode slots exist: the *return* mode, which the radio settles
/// into after transient excursions, and the transient state observable
/// through MARCSTATE.
pub trait RfModeControl {
    type ModeErrorType;

    /// Set both the current and the return mode, through the dongle's
    /// mode command.
    fn set_mode(&mut self, mode: RadioMode) -> Result<(), Self::ModeErrorType>;

    /// The configured return mode.
    fn mode(&self) -> RadioMode;

    /// Strobe the radio into `mode` without changing the return mode.
    fn strobe_mode(&mut self, mode: RadioMode) -> Result<(), Self::ModeErrorType>;

    /// Re-issue the strobe for the return mode, after a transient
    /// excursion.
    fn strobe_mode_return(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Read the radio state machine's current state from the chip.
    fn marc_state(&mut self) -> Result<MarcState, Self::ModeErrorType>;

    /// Write one radio register, bracketing the write with an IDLE
    /// excursion unless the radio is already idle (or `suppress` is set,
    /// in which case the caller asserts the write is safe).
    fn set_rf_register(
        &mut self,
        addr: u16,
        value: u8,
        suppress: bool,
    ) -> Result<(), Self::ModeErrorType>;
}

/// A trait to represent payload movement through a sub-GHz transceiver.
pub trait RfTransfer {
    type TransferErrorType;

    /// Transmit `data`, optionally repeating the block `repeat` extra
    /// times starting from byte `offset` of the block.
    ///
    /// Payloads longer than one transmit block are delegated to
    /// [`RfTransfer::transmit_long()`], which is incompatible with
    /// device-side repeat.
    fn transmit(&mut self, data: &[u8], repeat: u16, offset: u16)
        -> Result<(), Self::TransferErrorType>;

    /// Stream a payload larger than one transmit block through the
    /// device's bounded buffer using the chunked flow-controlled
    /// protocol.
    fn transmit_long(&mut self, data: &[u8]) -> Result<(), Self::TransferErrorType>;

    /// Receive one frame, waiting up to `timeout`.
    ///
    /// With `blocksize` given, the device is first switched into
    /// large-block receive mode (or back to normal with 0).
    fn receive(
        &mut self,
        timeout: Duration,
        blocksize: Option<u16>,
    ) -> Result<(Vec<u8>, SystemTime), Self::TransferErrorType>;
}
