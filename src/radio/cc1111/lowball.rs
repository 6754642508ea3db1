use crate::radio::cc1111::{Cc1111, Cc1111Error};
#[cfg(test)]
use crate::radio::config::RadioConfig;
use crate::radio::prelude::{RfFraming, RfSync};
use crate::transport::Transport;
use crate::types::SyncMode;

/// The minimal-filtering profile applied by [`Cc1111::lowball()`].
///
/// `level` selects how much qualification is left on the receive path:
/// 0 drops the sync requirement entirely (way more garbage), 1 requires
/// a carrier detection, 2 requires 15 of 16 sync word bits, and 3
/// requires carrier plus a full 16-bit sync word match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LowballConfig {
    pub level: u8,
    pub sync_word: u16,
    pub length: u16,
    pub pqt: u8,
    pub crc: bool,
    pub fec: bool,
    pub whitening: bool,
}

impl Default for LowballConfig {
    fn default() -> Self {
        LowballConfig {
            level: 1,
            sync_word: 0xAAAA,
            length: 250,
            pqt: 0,
            crc: false,
            fec: false,
            whitening: false,
        }
    }
}

impl LowballConfig {
    fn sync_mode(&self) -> SyncMode {
        match self.level {
            3 => SyncMode::CarrierBits16Of16,
            2 => SyncMode::Bits15Of16,
            1 => SyncMode::Carrier,
            _ => SyncMode::None,
        }
    }
}

impl<T: Transport> Cc1111<T> {
    /// Configure the radio to the lowest practical level of filtering,
    /// potentially letting raw radio noise through as data. Very useful
    /// when hunting for an unknown protocol.
    ///
    /// The first call snapshots the full configuration into a
    /// single-deep save slot; while a snapshot is held, further calls
    /// apply the profile without touching the slot, so the state from
    /// before the first `lowball()` is what
    /// [`lowball_restore()`](Cc1111::lowball_restore) brings back.
    pub fn lowball(&mut self, profile: &LowballConfig) -> Result<(), Cc1111Error<T::Error>> {
        if self.saved_config.is_some() {
            log::warn!(
                "not saving radio state: a saved configuration already exists; \
                 lowball_restore() it first"
            );
        } else {
            self.read_config()?;
            self.saved_config = Some(self.config.emit());
        }

        self.set_fixed_packet_len(profile.length)?;
        self.set_crc(profile.crc)?;
        self.set_fec(profile.fec)?;
        self.set_whitening(profile.whitening)?;
        self.set_sync_word(profile.sync_word)?;
        self.set_pqt(profile.pqt)?;
        self.set_sync_mode(profile.sync_mode())
    }

    /// Write the configuration saved by [`Cc1111::lowball()`] back to
    /// the chip verbatim and clear the save slot.
    ///
    /// The slot is cleared only after the restore round-trips, so a
    /// failed restore can be retried.
    pub fn lowball_restore(&mut self) -> Result<(), Cc1111Error<T::Error>> {
        let saved = self.saved_config.ok_or(Cc1111Error::NoSavedState)?;
        self.write_config(Some(&saved))?;
        self.saved_config = None;
        Ok(())
    }

    /// Is a pre-`lowball()` configuration currently held?
    pub fn has_saved_config(&self) -> bool {
        self.saved_config.is_some()
    }

    #[cfg(test)]
    pub(crate) fn saved_config_block(&self) -> Option<[u8; RadioConfig::LEN]> {
        self.saved_config
    }
}
