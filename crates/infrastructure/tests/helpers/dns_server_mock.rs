#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock upstream replies to every query.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// NOERROR with one A record per address, owner name compressed to the question.
    Answer(Vec<Ipv4Addr>),
    /// Like `Answer`, with the TC bit set.
    Truncated(Vec<Ipv4Addr>),
    /// Empty reply carrying the given rcode.
    Rcode(u8),
    /// Valid reply with a transaction ID that does not match the query.
    WrongId,
    /// Reads queries and never answers.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral port on loopback.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_mock_response(&buf[..len], &behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_mock_response(query: &[u8], behavior: &MockBehavior) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let (rcode, addresses): (u8, &[Ipv4Addr]) = match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Answer(addresses) | MockBehavior::Truncated(addresses) => (0, addresses),
            MockBehavior::Rcode(code) => (*code, &[]),
            MockBehavior::WrongId => (0, &[]),
        };

        let mut response = Vec::with_capacity(512);

        if let MockBehavior::WrongId = behavior {
            let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(1);
            response.extend_from_slice(&id.to_be_bytes());
        } else {
            response.extend_from_slice(&query[0..2]);
        }

        // QR (+ TC) + RD, then RA + rcode
        if let MockBehavior::Truncated(_) = behavior {
            response.push(0x83);
        } else {
            response.push(0x81);
        }
        response.push(0x80 | (rcode & 0x0f));

        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&(addresses.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        for address in addresses {
            response.extend_from_slice(&[
                0xc0, 0x0c, // pointer to question name
                0x00, 0x01, // A
                0x00, 0x01, // IN
                0x00, 0x00, 0x00, 0x3c, // TTL 60
                0x00, 0x04,
            ]);
            response.extend_from_slice(&address.octets());
        }

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: [u8; 12] = [
        0xab, 0xcd, // id
        0x01, 0x00, // RD
        0x00, 0x01, // qdcount
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn test_answer_response_layout() {
        let response = MockDnsServer::build_mock_response(
            &QUERY,
            &MockBehavior::Answer(vec![Ipv4Addr::new(198, 51, 100, 7)]),
        )
        .unwrap();

        assert_eq!(response[0..2], [0xab, 0xcd]);
        assert_eq!(response[2], 0x81);
        assert_eq!(response[3] & 0x0f, 0);
        assert_eq!(response[6..8], [0x00, 0x01]);
        assert_eq!(response[response.len() - 4..], [198, 51, 100, 7]);
    }

    #[test]
    fn test_rcode_and_wrong_id() {
        let servfail = MockDnsServer::build_mock_response(&QUERY, &MockBehavior::Rcode(2)).unwrap();
        assert_eq!(servfail[3] & 0x0f, 2);

        let wrong = MockDnsServer::build_mock_response(&QUERY, &MockBehavior::WrongId).unwrap();
        assert_ne!(wrong[0..2], QUERY[0..2]);

        assert!(MockDnsServer::build_mock_response(&QUERY, &MockBehavior::Silent).is_none());

        let truncated =
            MockDnsServer::build_mock_response(&QUERY, &MockBehavior::Truncated(vec![])).unwrap();
        assert_eq!(truncated[2] & 0x02, 0x02);
    }
}
