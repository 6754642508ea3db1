use bitfield_struct::bitfield;

/// PKTCTRL1: packet-filter control.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub struct Pktctrl1 {
    /// Preamble quality estimator threshold; a packet is accepted only
    /// when the estimate exceeds 4 * `pqt`. Zero accepts everything.
    #[bits(3)]
    pub pqt: u8,

    #[bits(2)]
    _pad0: u8,

    /// Append RSSI and LQI status bytes to received packets.
    pub append_status: bool,

    /// Hardware address-check mode.
    #[bits(2)]
    pub adr_chk: u8,
}

/// PKTCTRL0: packet format control.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub struct Pktctrl0 {
    #[bits(1)]
    _pad0: u8,

    /// Whiten payload data with a PN9 sequence.
    pub white_data: bool,

    #[bits(2)]
    pub pkt_format: u8,

    #[bits(1)]
    _pad1: u8,

    /// Append and verify a CRC-16 over the packet.
    pub crc_en: bool,

    /// 0 = fixed length, 1 = variable length, 2 = infinite/streaming.
    #[bits(2)]
    pub length_config: u8,
}

impl Pktctrl0 {
    pub const LENGTH_FIXED: u8 = 0;
    pub const LENGTH_VARIABLE: u8 = 1;
}

/// MDMCFG4: channel filter bandwidth and data-rate exponent.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub struct Mdmcfg4 {
    #[bits(2)]
    pub chanbw_e: u8,

    #[bits(2)]
    pub chanbw_m: u8,

    #[bits(4)]
    pub drate_e: u8,
}

/// MDMCFG2: demodulator and sync-word control.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub struct Mdmcfg2 {
    /// Disable the DC-blocking filter ahead of the demodulator.
    pub dem_dcfilt_off: bool,

    #[bits(3)]
    pub mod_format: u8,

    pub manchester_en: bool,

    #[bits(3)]
    pub sync_mode: u8,
}

/// MDMCFG1: FEC, preamble count, channel-spacing exponent.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub struct Mdmcfg1 {
    pub fec_en: bool,

    #[bits(3)]
    pub num_preamble: u8,

    #[bits(2)]
    _pad0: u8,

    #[bits(2)]
    pub chanspc_e: u8,
}

/// DEVIATN: frequency-deviation exponent and mantissa.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub struct Deviatn {
    #[bits(1)]
    _pad0: u8,

    #[bits(3)]
    pub deviation_e: u8,

    #[bits(1)]
    _pad1: u8,

    #[bits(3)]
    pub deviation_m: u8,
}

/// FREND0: front-end TX configuration.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq)]
pub struct Frend0 {
    #[bits(2)]
    _pad0: u8,

    #[bits(2)]
    pub lodiv_buf_current_tx: u8,

    #[bits(1)]
    _pad1: u8,

    /// Index into the PA power table; amplitude-shift keying ramps the
    /// PA by cycling table entries 0..=`pa_power`.
    #[bits(3)]
    pub pa_power: u8,
}
