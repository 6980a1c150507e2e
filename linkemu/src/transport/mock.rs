// linkemu/src/transport/mock.rs

//! Recording transport for tests and scripted sessions

use crate::protocol::frame::Packet;
use crate::protocol::reassembler::split_packets;
use crate::transport::traits::Transport;
use crate::types::ConnectionId;
use crate::{Error, Result};

/// Mock transport for unit tests. It records every notification.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Notifications in send order
    pub sent: Vec<(ConnectionId, Vec<u8>)>,
    /// Testing hook: number of subsequent sends that should fail
    pub send_failures: usize,
    /// Testing hook: emulate a negotiated MTU
    pub mtu: Option<usize>,
}

impl MockTransport {
    /// Transport with unlimited notification size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport that splits notifications at `mtu` bytes.
    pub fn with_mtu(mtu: usize) -> Self {
        Self {
            mtu: Some(mtu),
            ..Self::default()
        }
    }

    /// Fail the next `n` sends.
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Drain recorded notifications.
    pub fn take_sent(&mut self) -> Vec<Vec<u8>> {
        self.sent.drain(..).map(|(_, b)| b).collect()
    }

    /// Decode the recorded notifications, joining MTU-split pieces.
    pub fn packets(&self) -> Result<Vec<Packet>> {
        let joined: Vec<u8> = self.sent.iter().flat_map(|(_, b)| b.iter().copied()).collect();
        split_packets(&joined)
    }
}

impl Transport for MockTransport {
    fn send_notification(&mut self, conn: ConnectionId, bytes: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Transport("notify failed".into()));
        }
        self.sent.push((conn, bytes.to_vec()));
        Ok(())
    }

    fn max_notification_len(&self) -> Option<usize> {
        self.mtu
    }
}
