use std::time::Duration;

/// A private module encapsulating xdata addresses of the radio registers.
///
/// The configuration block proper spans SYNC1..=VCO_VC_DAC; RFST sits
/// outside it and is the strobe register the mode controller pokes.
pub mod registers {
    pub const SYNC1: u16 = 0xDF00;
    pub const SYNC0: u16 = 0xDF01;
    pub const PKTLEN: u16 = 0xDF02;
    pub const PKTCTRL1: u16 = 0xDF03;
    pub const PKTCTRL0: u16 = 0xDF04;
    pub const ADDR: u16 = 0xDF05;
    pub const CHANNR: u16 = 0xDF06;
    pub const FSCTRL1: u16 = 0xDF07;
    pub const FSCTRL0: u16 = 0xDF08;
    pub const FREQ2: u16 = 0xDF09;
    pub const FREQ1: u16 = 0xDF0A;
    pub const FREQ0: u16 = 0xDF0B;
    pub const MDMCFG4: u16 = 0xDF0C;
    pub const MDMCFG3: u16 = 0xDF0D;
    pub const MDMCFG2: u16 = 0xDF0E;
    pub const MDMCFG1: u16 = 0xDF0F;
    pub const MDMCFG0: u16 = 0xDF10;
    pub const DEVIATN: u16 = 0xDF11;
    pub const MCSM2: u16 = 0xDF12;
    pub const MCSM1: u16 = 0xDF13;
    pub const MCSM0: u16 = 0xDF14;
    pub const FOCCFG: u16 = 0xDF15;
    pub const BSCFG: u16 = 0xDF16;
    pub const AGCCTRL2: u16 = 0xDF17;
    pub const AGCCTRL1: u16 = 0xDF18;
    pub const AGCCTRL0: u16 = 0xDF19;
    pub const FREND1: u16 = 0xDF1A;
    pub const FREND0: u16 = 0xDF1B;
    pub const FSCAL3: u16 = 0xDF1C;
    pub const FSCAL2: u16 = 0xDF1D;
    pub const FSCAL1: u16 = 0xDF1E;
    pub const FSCAL0: u16 = 0xDF1F;
    pub const TEST2: u16 = 0xDF23;
    pub const TEST1: u16 = 0xDF24;
    pub const TEST0: u16 = 0xDF25;
    pub const PA_TABLE7: u16 = 0xDF27;
    pub const PA_TABLE1: u16 = 0xDF2D;
    pub const PA_TABLE0: u16 = 0xDF2E;
    pub const IOCFG2: u16 = 0xDF2F;
    pub const IOCFG1: u16 = 0xDF30;
    pub const IOCFG0: u16 = 0xDF31;
    pub const PARTNUM: u16 = 0xDF36;
    pub const VERSION: u16 = 0xDF37;
    pub const FREQEST: u16 = 0xDF38;
    pub const LQI: u16 = 0xDF39;
    pub const RSSI: u16 = 0xDF3A;
    pub const MARCSTATE: u16 = 0xDF3B;
    pub const PKTSTATUS: u16 = 0xDF3C;
    pub const VCO_VC_DAC: u16 = 0xDF3D;

    /// Radio strobe register; writing a strobe byte here switches the
    /// radio state machine immediately.
    pub const RFST: u16 = 0xDFE1;
}

/// A private module encapsulating the dongle's USB application ids.
pub mod apps {
    pub const NIC: u8 = 0x42;
    pub const SYSTEM: u8 = 0xFF;
}

/// Commands understood by the SYSTEM application.
pub mod sys {
    /// Read a range of xdata; payload is `u16 count, u16 addr` (LE).
    pub const PEEK: u8 = 0x80;
    /// Write a range of xdata; payload is `u16 addr` (LE) followed by
    /// the bytes to write.
    pub const POKE: u8 = 0x81;
    /// Select the radio mode the dongle settles into; payload is one
    /// strobe byte.
    pub const RFMODE: u8 = 0x88;
}

/// Commands understood by the NIC application.
pub mod nic {
    pub const RECV: u8 = 0x01;
    pub const XMIT: u8 = 0x02;
    pub const SET_RECV_LARGE: u8 = 0x05;
    pub const LONG_XMIT: u8 = 0x0C;
    pub const LONG_XMIT_MORE: u8 = 0x0D;
}

/// Size of the dongle's bulk endpoint data buffer.
pub const EP5_BUFFER_SIZE: usize = 516;
/// Maximum USB packet carried by the bulk endpoint.
pub const EP5_MAX_PACKET_SIZE: usize = 64;

/// Largest payload a single transmit transaction may carry.
pub const MAX_TX_BLOCK: usize = 255;
/// Largest payload the chunked long-transmit protocol may carry.
pub const MAX_TX_LONG: usize = 65535;
/// Chunk granularity of the long-transmit protocol: one USB packet minus
/// the 4-byte command header.
pub const MAX_TX_CHUNK: usize = EP5_MAX_PACKET_SIZE - 4;
/// Largest fixed packet length the receiver supports.
pub const MAX_RX_BLOCK: usize = EP5_BUFFER_SIZE - 4;

/// Chunks sent together with the long-transmit start command, sized to
/// fill the device-side buffer before flow control begins.
pub const PRELOAD_CHUNKS: usize = MAX_TX_BLOCK / MAX_TX_CHUNK;

/// Base reply wait for one transmit-block worth of data.
pub const USB_TX_WAIT: Duration = Duration::from_millis(1000);
/// Default wait for an inbound packet.
pub const USB_RX_WAIT: Duration = Duration::from_millis(1000);

/// Per-chunk resend budget for the long-transmit flow-control retry.
pub const DEFAULT_CHUNK_RETRY_LIMIT: u32 = 10_000;

/// Vendor-documented dual-VCO crossover points. Within each supported
/// band, frequencies in the lower window take the low-VCO FSCAL2 preset
/// and frequencies above it (below 1 GHz) take the high-VCO preset.
/// These are lookup constants from the chip documentation, not derived.
pub mod vco {
    pub const FREQ_EDGE_400: f64 = 369e6;
    pub const FREQ_MID_400: f64 = 424e6;
    pub const FREQ_EDGE_900: f64 = 739e6;
    pub const FREQ_MID_900: f64 = 848e6;
    pub const FREQ_MID_300: f64 = 318e6;

    pub const FSCAL2_LOW_VCO: u8 = 0x0A;
    pub const FSCAL2_HIGH_VCO: u8 = 0x2A;
}
