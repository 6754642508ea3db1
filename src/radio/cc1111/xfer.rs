use std::time::{Duration, SystemTime};

use crate::radio::cc1111::{
    apps, nic, Cc1111, Cc1111Error, EP5_BUFFER_SIZE, MAX_TX_BLOCK, MAX_TX_CHUNK, MAX_TX_LONG,
    PRELOAD_CHUNKS, USB_TX_WAIT,
};
use crate::radio::prelude::RfTransfer;
use crate::transport::Transport;
use crate::types::DeviceStatus;

/// The first reply byte of every transfer transaction is its status.
fn transfer_status<E>(reply: &[u8]) -> Result<DeviceStatus, Cc1111Error<E>> {
    reply
        .first()
        .map(|byte| DeviceStatus::from_bits(*byte))
        .ok_or(Cc1111Error::BinaryCorruption)
}

/// Reply wait sized to the amount of air time the payload needs.
fn tx_wait(waitlen: usize) -> Duration {
    USB_TX_WAIT * (waitlen / MAX_TX_BLOCK + 1) as u32
}

impl<T: Transport> Cc1111<T> {
    fn transmit_long_raw(&mut self, data: &[u8]) -> Result<(), Cc1111Error<T::Error>> {
        if data.len() > MAX_TX_LONG {
            return Err(Cc1111Error::BlockTooLarge(data.len()));
        }
        let wait = tx_wait(data.len());

        let preload_bytes = data.len().min(PRELOAD_CHUNKS * MAX_TX_CHUNK);
        let mut payload = Vec::with_capacity(3 + preload_bytes);
        payload.extend_from_slice(&(data.len() as u16).to_le_bytes());
        payload.push(PRELOAD_CHUNKS as u8);
        payload.extend_from_slice(&data[..preload_bytes]);
        let (reply, _) = self.send(
            apps::NIC,
            nic::LONG_XMIT,
            &payload,
            wait * PRELOAD_CHUNKS as u32,
        )?;
        match transfer_status(&reply)? {
            DeviceStatus::NoError => {}
            status => return Err(Cc1111Error::Device(status)),
        }

        // One chunk in flight at a time; the device paces us by holding
        // a chunk off with BufferNotAvailable until its ring has room.
        for chunk in data[preload_bytes..].chunks(MAX_TX_CHUNK) {
            let mut payload = Vec::with_capacity(1 + chunk.len());
            payload.push(chunk.len() as u8);
            payload.extend_from_slice(chunk);

            let mut attempts = 0u32;
            loop {
                let (reply, _) = self.send(apps::NIC, nic::LONG_XMIT_MORE, &payload, wait)?;
                match transfer_status(&reply)? {
                    DeviceStatus::NoError => break,
                    DeviceStatus::BufferNotAvailable => {
                        attempts += 1;
                        if attempts >= self.chunk_retry_limit {
                            return Err(Cc1111Error::RetriesExhausted(attempts));
                        }
                        log::debug!("device buffer busy, resending chunk (attempt {attempts})");
                    }
                    status => return Err(Cc1111Error::Device(status)),
                }
            }
        }

        // zero-length continuation closes the transfer
        let (reply, _) = self.send(apps::NIC, nic::LONG_XMIT_MORE, &[0], wait)?;
        match transfer_status(&reply)? {
            DeviceStatus::NoError => Ok(()),
            status => Err(Cc1111Error::Device(status)),
        }
    }
}

impl<T: Transport> RfTransfer for Cc1111<T> {
    type TransferErrorType = Cc1111Error<T::Error>;

    fn transmit(
        &mut self,
        data: &[u8],
        repeat: u16,
        offset: u16,
    ) -> Result<(), Self::TransferErrorType> {
        let encoded = match &self.endec {
            Some(codec) => codec.encode(data),
            None => data.to_vec(),
        };

        if encoded.len() > MAX_TX_BLOCK {
            // the device repeats out of its single-block buffer, so
            // repeat/offset cannot combine with a chunked transfer
            if repeat != 0 || offset != 0 {
                return Err(Cc1111Error::BlockSizeIncompatible(encoded.len()));
            }
            return self.transmit_long_raw(&encoded);
        }

        let waitlen =
            encoded.len() + repeat as usize * encoded.len().saturating_sub(offset as usize);
        let mut payload = Vec::with_capacity(6 + encoded.len());
        payload.extend_from_slice(&(encoded.len() as u16).to_le_bytes());
        payload.extend_from_slice(&repeat.to_le_bytes());
        payload.extend_from_slice(&offset.to_le_bytes());
        payload.extend_from_slice(&encoded);
        self.send(apps::NIC, nic::XMIT, &payload, tx_wait(waitlen))?;
        Ok(())
    }

    fn transmit_long(&mut self, data: &[u8]) -> Result<(), Self::TransferErrorType> {
        let encoded = match &self.endec {
            Some(codec) => codec.encode(data),
            None => data.to_vec(),
        };
        self.transmit_long_raw(&encoded)
    }

    fn receive(
        &mut self,
        timeout: Duration,
        blocksize: Option<u16>,
    ) -> Result<(Vec<u8>, SystemTime), Self::TransferErrorType> {
        if let Some(blocksize) = blocksize {
            if blocksize as usize > EP5_BUFFER_SIZE {
                return Err(Cc1111Error::BlockSizeTooLarge(blocksize));
            }
            self.send(
                apps::NIC,
                nic::SET_RECV_LARGE,
                &blocksize.to_le_bytes(),
                USB_TX_WAIT,
            )?;
        }

        let (data, timestamp) = self
            .transport
            .receive(apps::NIC, nic::RECV, timeout)
            .map_err(Cc1111Error::from)?;
        match &self.endec {
            Some(codec) => Ok((codec.decode(&data), timestamp)),
            None => Ok((data, timestamp)),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use std::time::SystemTime;

    use super::RfTransfer;
    use crate::codec::PayloadCodec;
    use crate::radio::Cc1111Error;
    use crate::test::{mk_radio, Expect};
    use crate::types::DeviceStatus;

    struct Reversed;
    impl PayloadCodec for Reversed {
        fn encode(&self, data: &[u8]) -> Vec<u8> {
            data.iter().rev().copied().collect()
        }
        fn decode(&self, data: &[u8]) -> Vec<u8> {
            data.iter().rev().copied().collect()
        }
    }

    fn ramp(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 256) as u8).collect()
    }

    #[test]
    pub fn bounded_transmit_wire_format() {
        let mut payload = vec![5, 0, 3, 0, 1, 0];
        payload.extend_from_slice(b"hello");
        let expectations = [Expect::send(0x42, 0x02, payload, vec![])];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.transmit(b"hello", 3, 1).unwrap();
        transport.done();
    }

    #[test]
    pub fn transmit_applies_codec() {
        let mut payload = vec![3, 0, 0, 0, 0, 0];
        payload.extend_from_slice(b"cba");
        let expectations = [Expect::send(0x42, 0x02, payload, vec![])];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_codec(Some(Box::new(Reversed)));
        radio.transmit(b"abc", 0, 0).unwrap();
        transport.done();
    }

    #[test]
    pub fn oversized_block_with_repeat_is_rejected() {
        let (mut radio, transport) = mk_radio(&[]);
        let data = ramp(300);
        assert_eq!(
            radio.transmit(&data, 1, 0),
            Err(Cc1111Error::BlockSizeIncompatible(300))
        );
        assert_eq!(
            radio.transmit(&data, 0, 1),
            Err(Cc1111Error::BlockSizeIncompatible(300))
        );
        transport.done();
    }

    #[test]
    pub fn oversized_block_delegates_to_long_transmit() {
        let data = ramp(300);
        let mut preload = vec![0x2C, 0x01, 4];
        preload.extend_from_slice(&data[..240]);
        let mut more = vec![60];
        more.extend_from_slice(&data[240..]);
        let expectations = [
            Expect::send(0x42, 0x0C, preload, vec![0]),
            Expect::send(0x42, 0x0D, more, vec![0]),
            Expect::send(0x42, 0x0D, vec![0], vec![0]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.transmit(&data, 0, 0).unwrap();
        transport.done();
    }

    #[test]
    pub fn long_transmit_chunk_count() {
        // 433 bytes: 240 preloaded, then ceil(193 / 60) = 4
        // continuations plus the terminator
        let data = ramp(433);
        let mut preload = vec![0xB1, 0x01, 4];
        preload.extend_from_slice(&data[..240]);
        let mut expectations = vec![Expect::send(0x42, 0x0C, preload, vec![0])];
        for chunk in data[240..].chunks(60) {
            let mut more = vec![chunk.len() as u8];
            more.extend_from_slice(chunk);
            expectations.push(Expect::send(0x42, 0x0D, more, vec![0]));
        }
        expectations.push(Expect::send(0x42, 0x0D, vec![0], vec![0]));
        assert_eq!(expectations.len(), 1 + 4 + 1);

        let (mut radio, transport) = mk_radio(&expectations);
        radio.transmit_long(&data).unwrap();
        transport.done();
    }

    #[test]
    pub fn long_transmit_shorter_than_preload() {
        // everything fits in the preload burst; only the terminator
        // follows
        let data = ramp(100);
        let mut preload = vec![100, 0, 4];
        preload.extend_from_slice(&data);
        let expectations = [
            Expect::send(0x42, 0x0C, preload, vec![0]),
            Expect::send(0x42, 0x0D, vec![0], vec![0]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.transmit_long(&data).unwrap();
        transport.done();
    }

    #[test]
    pub fn long_transmit_too_large() {
        let (mut radio, transport) = mk_radio(&[]);
        let data = ramp(65536);
        assert_eq!(
            radio.transmit_long(&data),
            Err(Cc1111Error::BlockTooLarge(65536))
        );
        transport.done();
    }

    #[test]
    pub fn long_transmit_retries_identical_chunk() {
        // two BufferNotAvailable replies: the same chunk goes out three
        // times, the terminator once
        let data = ramp(300);
        let mut preload = vec![0x2C, 0x01, 4];
        preload.extend_from_slice(&data[..240]);
        let mut more = vec![60];
        more.extend_from_slice(&data[240..]);
        let expectations = [
            Expect::send(0x42, 0x0C, preload, vec![0]),
            Expect::send(0x42, 0x0D, more.clone(), vec![0xFE]),
            Expect::send(0x42, 0x0D, more.clone(), vec![0xFE]),
            Expect::send(0x42, 0x0D, more, vec![0]),
            Expect::send(0x42, 0x0D, vec![0], vec![0]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.transmit_long(&data).unwrap();
        transport.done();
    }

    #[test]
    pub fn long_transmit_retry_budget_exhausts() {
        let data = ramp(300);
        let mut preload = vec![0x2C, 0x01, 4];
        preload.extend_from_slice(&data[..240]);
        let mut more = vec![60];
        more.extend_from_slice(&data[240..]);
        let expectations = [
            Expect::send(0x42, 0x0C, preload, vec![0]),
            Expect::send(0x42, 0x0D, more.clone(), vec![0xFE]),
            Expect::send(0x42, 0x0D, more.clone(), vec![0xFE]),
            Expect::send(0x42, 0x0D, more, vec![0xFE]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_chunk_retry_limit(3);
        assert_eq!(
            radio.transmit_long(&data),
            Err(Cc1111Error::RetriesExhausted(3))
        );
        transport.done();
    }

    #[test]
    pub fn long_transmit_preload_failure_aborts() {
        let data = ramp(300);
        let mut preload = vec![0x2C, 0x01, 4];
        preload.extend_from_slice(&data[..240]);
        let expectations = [Expect::send(0x42, 0x0C, preload, vec![0xEF])];
        let (mut radio, transport) = mk_radio(&expectations);
        assert_eq!(
            radio.transmit_long(&data),
            Err(Cc1111Error::Device(DeviceStatus::ModeIncompat))
        );
        transport.done();
    }

    #[test]
    pub fn long_transmit_fatal_chunk_status_aborts() {
        let data = ramp(300);
        let mut preload = vec![0x2C, 0x01, 4];
        preload.extend_from_slice(&data[..240]);
        let mut more = vec![60];
        more.extend_from_slice(&data[240..]);
        let expectations = [
            Expect::send(0x42, 0x0C, preload, vec![0]),
            Expect::send(0x42, 0x0D, more, vec![0xEC]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        assert_eq!(
            radio.transmit_long(&data),
            Err(Cc1111Error::Device(DeviceStatus::DroppedPacket))
        );
        transport.done();
    }

    #[test]
    pub fn long_transmit_empty_reply_is_corruption() {
        let data = ramp(300);
        let mut preload = vec![0x2C, 0x01, 4];
        preload.extend_from_slice(&data[..240]);
        let expectations = [Expect::send(0x42, 0x0C, preload, vec![])];
        let (mut radio, transport) = mk_radio(&expectations);
        assert_eq!(
            radio.transmit_long(&data),
            Err(Cc1111Error::BinaryCorruption)
        );
        transport.done();
    }

    #[test]
    pub fn receive_returns_frame_and_timestamp() {
        let expectations = [Expect::recv(0x42, 0x01, b"frame".to_vec())];
        let (mut radio, transport) = mk_radio(&expectations);
        let (frame, ts) = radio
            .receive(std::time::Duration::from_millis(100), None)
            .unwrap();
        assert_eq!(frame, b"frame");
        assert_eq!(ts, SystemTime::UNIX_EPOCH);
        transport.done();
    }

    #[test]
    pub fn receive_configures_large_blocks_first() {
        let expectations = [
            Expect::send(0x42, 0x05, vec![0x00, 0x02], vec![]),
            Expect::recv(0x42, 0x01, vec![0xAA; 512]),
        ];
        let (mut radio, transport) = mk_radio(&expectations);
        let (frame, _) = radio
            .receive(std::time::Duration::from_millis(100), Some(512))
            .unwrap();
        assert_eq!(frame.len(), 512);
        transport.done();
    }

    #[test]
    pub fn receive_blocksize_over_endpoint_fails_before_io() {
        let (mut radio, transport) = mk_radio(&[]);
        assert_eq!(
            radio
                .receive(std::time::Duration::from_millis(100), Some(517))
                .unwrap_err(),
            Cc1111Error::BlockSizeTooLarge(517)
        );
        transport.done();
    }

    #[test]
    pub fn receive_timeout_propagates() {
        let expectations = [Expect::recv_timeout(0x42, 0x01)];
        let (mut radio, transport) = mk_radio(&expectations);
        assert_eq!(
            radio
                .receive(std::time::Duration::from_millis(100), None)
                .unwrap_err(),
            Cc1111Error::Timeout
        );
        transport.done();
    }

    #[test]
    pub fn receive_decodes_payload_only() {
        let expectations = [Expect::recv(0x42, 0x01, b"cba".to_vec())];
        let (mut radio, transport) = mk_radio(&expectations);
        radio.set_codec(Some(Box::new(Reversed)));
        let (frame, ts) = radio
            .receive(std::time::Duration::from_millis(100), None)
            .unwrap();
        assert_eq!(frame, b"abc");
        assert_eq!(ts, SystemTime::UNIX_EPOCH);
        transport.done();
    }
}
