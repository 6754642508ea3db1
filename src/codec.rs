//! Optional on-the-wire payload transform.

/// A payload transform applied transparently around every transmit and
/// receive, such as a line coding.
///
/// Attach one to the driver with
/// [`Cc1111::set_codec()`](fn@crate::radio::Cc1111::set_codec); without
/// one, payloads pass through unchanged. The capability belongs to the
/// driver instance, not to any single transfer.
pub trait PayloadCodec {
    /// Transform an outbound payload into its over-the-air form.
    fn encode(&self, data: &[u8]) -> Vec<u8>;

    /// Transform a received over-the-air payload back into user data.
    fn decode(&self, data: &[u8]) -> Vec<u8>;
}
