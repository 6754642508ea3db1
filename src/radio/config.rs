use crate::radio::cc1111::bit_fields::{
    Deviatn, Frend0, Mdmcfg1, Mdmcfg2, Mdmcfg4, Pktctrl0, Pktctrl1,
};
use crate::types::MarcState;

/// An in-memory mirror of the chip's configuration register block.
///
/// The block is read and written as one contiguous xdata range starting
/// at [`RadioConfig::BASE_ADDRESS`]. Immediately after a full read or
/// write the mirror and the chip agree; between those operations the
/// mirror is the source of truth for every derived getter. Status
/// registers (FREQEST..VCO_VC_DAC) are read-only on the chip and only
/// meaningful after a read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RadioConfig {
    pub sync1: u8,
    pub sync0: u8,
    pub pktlen: u8,
    pub pktctrl1: Pktctrl1,
    pub pktctrl0: Pktctrl0,
    pub addr: u8,
    pub channr: u8,
    pub fsctrl1: u8,
    pub fsctrl0: u8,
    pub freq2: u8,
    pub freq1: u8,
    pub freq0: u8,
    pub mdmcfg4: Mdmcfg4,
    pub mdmcfg3: u8,
    pub mdmcfg2: Mdmcfg2,
    pub mdmcfg1: Mdmcfg1,
    pub mdmcfg0: u8,
    pub deviatn: Deviatn,
    pub mcsm2: u8,
    pub mcsm1: u8,
    pub mcsm0: u8,
    pub foccfg: u8,
    pub bscfg: u8,
    pub agcctrl2: u8,
    pub agcctrl1: u8,
    pub agcctrl0: u8,
    pub frend1: u8,
    pub frend0: Frend0,
    pub fscal3: u8,
    pub fscal2: u8,
    pub fscal1: u8,
    pub fscal0: u8,
    reserved_20: [u8; 3],
    pub test2: u8,
    pub test1: u8,
    pub test0: u8,
    reserved_26: u8,
    /// PA output power table, indexed by table entry number
    /// (`pa_table[0]` is PA_TABLE0).
    pub pa_table: [u8; 8],
    pub iocfg2: u8,
    pub iocfg1: u8,
    pub iocfg0: u8,
    reserved_32: [u8; 4],
    pub partnum: u8,
    pub version: u8,
    pub freqest: u8,
    pub lqi: u8,
    pub rssi: u8,
    pub marcstate: u8,
    pub pktstatus: u8,
    pub vco_vc_dac: u8,
}

impl RadioConfig {
    /// xdata address the register block is mapped at.
    pub const BASE_ADDRESS: u16 = 0xDF00;
    /// Size of the register block in bytes.
    pub const LEN: usize = 0x3E;

    /// Parse a register block as read from the chip.
    ///
    /// Returns [`None`] unless `block` is exactly [`RadioConfig::LEN`]
    /// bytes. Reserved bytes are retained so a later
    /// [`emit()`](RadioConfig::emit) writes back what was read.
    pub fn parse(block: &[u8]) -> Option<Self> {
        if block.len() != Self::LEN {
            return None;
        }
        let mut cfg = RadioConfig {
            sync1: block[0x00],
            sync0: block[0x01],
            pktlen: block[0x02],
            pktctrl1: Pktctrl1::from_bits(block[0x03]),
            pktctrl0: Pktctrl0::from_bits(block[0x04]),
            addr: block[0x05],
            channr: block[0x06],
            fsctrl1: block[0x07],
            fsctrl0: block[0x08],
            freq2: block[0x09],
            freq1: block[0x0A],
            freq0: block[0x0B],
            mdmcfg4: Mdmcfg4::from_bits(block[0x0C]),
            mdmcfg3: block[0x0D],
            mdmcfg2: Mdmcfg2::from_bits(block[0x0E]),
            mdmcfg1: Mdmcfg1::from_bits(block[0x0F]),
            mdmcfg0: block[0x10],
            deviatn: Deviatn::from_bits(block[0x11]),
            mcsm2: block[0x12],
            mcsm1: block[0x13],
            mcsm0: block[0x14],
            foccfg: block[0x15],
            bscfg: block[0x16],
            agcctrl2: block[0x17],
            agcctrl1: block[0x18],
            agcctrl0: block[0x19],
            frend1: block[0x1A],
            frend0: Frend0::from_bits(block[0x1B]),
            fscal3: block[0x1C],
            fscal2: block[0x1D],
            fscal1: block[0x1E],
            fscal0: block[0x1F],
            reserved_20: [block[0x20], block[0x21], block[0x22]],
            test2: block[0x23],
            test1: block[0x24],
            test0: block[0x25],
            reserved_26: block[0x26],
            pa_table: [0; 8],
            iocfg2: block[0x2F],
            iocfg1: block[0x30],
            iocfg0: block[0x31],
            reserved_32: [block[0x32], block[0x33], block[0x34], block[0x35]],
            partnum: block[0x36],
            version: block[0x37],
            freqest: block[0x38],
            lqi: block[0x39],
            rssi: block[0x3A],
            marcstate: block[0x3B],
            pktstatus: block[0x3C],
            vco_vc_dac: block[0x3D],
        };
        // PA_TABLE7 sits at the lowest address, PA_TABLE0 at the highest
        for (i, byte) in block[0x27..0x2F].iter().enumerate() {
            cfg.pa_table[7 - i] = *byte;
        }
        Some(cfg)
    }

    /// Serialize the mirror back into the chip's wire layout.
    pub fn emit(&self) -> [u8; Self::LEN] {
        let mut block = [0u8; Self::LEN];
        block[0x00] = self.sync1;
        block[0x01] = self.sync0;
        block[0x02] = self.pktlen;
        block[0x03] = self.pktctrl1.into_bits();
        block[0x04] = self.pktctrl0.into_bits();
        block[0x05] = self.addr;
        block[0x06] = self.channr;
        block[0x07] = self.fsctrl1;
        block[0x08] = self.fsctrl0;
        block[0x09] = self.freq2;
        block[0x0A] = self.freq1;
        block[0x0B] = self.freq0;
        block[0x0C] = self.mdmcfg4.into_bits();
        block[0x0D] = self.mdmcfg3;
        block[0x0E] = self.mdmcfg2.into_bits();
        block[0x0F] = self.mdmcfg1.into_bits();
        block[0x10] = self.mdmcfg0;
        block[0x11] = self.deviatn.into_bits();
        block[0x12] = self.mcsm2;
        block[0x13] = self.mcsm1;
        block[0x14] = self.mcsm0;
        block[0x15] = self.foccfg;
        block[0x16] = self.bscfg;
        block[0x17] = self.agcctrl2;
        block[0x18] = self.agcctrl1;
        block[0x19] = self.agcctrl0;
        block[0x1A] = self.frend1;
        block[0x1B] = self.frend0.into_bits();
        block[0x1C] = self.fscal3;
        block[0x1D] = self.fscal2;
        block[0x1E] = self.fscal1;
        block[0x1F] = self.fscal0;
        block[0x20..0x23].copy_from_slice(&self.reserved_20);
        block[0x23] = self.test2;
        block[0x24] = self.test1;
        block[0x25] = self.test0;
        block[0x26] = self.reserved_26;
        for i in 0..8 {
            block[0x27 + i] = self.pa_table[7 - i];
        }
        block[0x2F] = self.iocfg2;
        block[0x30] = self.iocfg1;
        block[0x31] = self.iocfg0;
        block[0x32..0x36].copy_from_slice(&self.reserved_32);
        block[0x36] = self.partnum;
        block[0x37] = self.version;
        block[0x38] = self.freqest;
        block[0x39] = self.lqi;
        block[0x3A] = self.rssi;
        block[0x3B] = self.marcstate;
        block[0x3C] = self.pktstatus;
        block[0x3D] = self.vco_vc_dac;
        block
    }

    /// The radio state machine's state at the last full read.
    pub fn marc_state(&self) -> MarcState {
        MarcState::from_bits(self.marcstate)
    }

    /// The 16-bit sync word.
    pub fn sync_word(&self) -> u16 {
        (self.sync1 as u16) << 8 | self.sync0 as u16
    }

    pub fn set_sync_word(&mut self, word: u16) {
        self.sync1 = (word >> 8) as u8;
        self.sync0 = (word & 0xFF) as u8;
    }
}
