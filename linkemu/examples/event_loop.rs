// Drive the emulator from a tokio task.
//
// The BLE glue would call `EventSender` from its GATT callbacks; here a
// second task plays the client and the control surface.
//
//   cargo run -p linkemu --example event_loop --features async

use std::sync::{Arc, Mutex};

use linkemu::device::event_loop;
use linkemu::prelude::*;
use linkemu::sink::MemorySink;
use linkemu::test_support::print_session;
use linkemu::transport::MockTransport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let transport = Arc::new(Mutex::new(MockTransport::new()));
    let sink = Arc::new(Mutex::new(MemorySink::new()));
    let emu = EmulatorBuilder::new()
        .with_transport(Box::new(transport.clone()))
        .with_sink(Box::new(sink.clone()))
        .build()?
        .initialize()?;

    let (tx, handle) = event_loop::spawn(emu, 64);
    let conn = ConnectionId(1);

    tx.connected(conn).await?;
    tx.config(ConfigCommand::SetFilm(2)).await?;
    for cmd in print_session(&[0x5a; 3000], 900) {
        tx.bytes_received(conn, cmd.encode()?).await?;
    }
    tx.config(ConfigCommand::SetCoverOpen(true)).await?;
    for cmd in print_session(&[0xa5; 100], 900) {
        tx.bytes_received(conn, cmd.encode()?).await?;
    }
    tx.disconnected(conn).await?;
    drop(tx);

    let emu = handle.await?;
    let answers = transport
        .lock()
        .map_err(|_| anyhow::anyhow!("transport lock poisoned"))?
        .packets()?;
    for p in answers.iter().filter(|p| p.opcode() == (0x10, 0x80)) {
        println!("EXECUTE answered {:#04x}", p.payload[0]);
    }
    println!(
        "{} image(s) committed, {} sheet(s) left",
        sink.lock()
            .map_err(|_| anyhow::anyhow!("sink lock poisoned"))?
            .committed
            .len(),
        emu.state().film_remaining
    );
    Ok(())
}
