// fixtures.rs: wire captures and payloads shared by the integration tests

use linkemu::protocol::Packet;

/// Ping as written by the client
pub fn ping_bytes() -> Vec<u8> {
    hex::decode("41620007000055").unwrap()
}

/// START for a 1800-byte image
pub fn start_1800_bytes() -> Vec<u8> {
    hex::decode("4162000f100002000000000007082c").unwrap()
}

/// Printer answer to a successful Mini Link 3 EXECUTE (status 12)
pub fn execute_ok_mini3() -> Packet {
    Packet::from_device(0x10, 0x80, vec![12])
}

/// Several client packets back to back, as one byte stream.
pub fn session_stream() -> Vec<u8> {
    let mut stream = ping_bytes();
    stream.extend(start_1800_bytes());
    stream.extend(
        Packet::to_device(0x00, 0x02, vec![0x02])
            .encode()
            .unwrap(),
    );
    stream
}
