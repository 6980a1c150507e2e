// Scripted client session against an emulated printer.
//
// Plays the sequence a phone app sends when printing: ping, the info
// queries, then START/DATA/END/EXECUTE. Every notification is printed as
// hex. Received images land in the system temp directory.
//
//   RUST_LOG=debug cargo run -p linkemu --example scripted_session -- wide

use linkemu::prelude::*;
use linkemu::protocol::commands::led::color_table_len;
use linkemu::sink::FileSink;
use linkemu::test_support::print_session;

/// Transport that prints notifications instead of sending them.
struct StdoutTransport;

impl Transport for StdoutTransport {
    fn send_notification(&mut self, conn: ConnectionId, bytes: &[u8]) -> Result<()> {
        println!("  <- {} {}", conn, describe_packet(bytes));
        Ok(())
    }

    fn max_notification_len(&self) -> Option<usize> {
        Some(182)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let model = std::env::args()
        .nth(1)
        .map(|name| Model::from_name(&name).ok_or_else(|| anyhow::anyhow!("unknown model {}", name)))
        .transpose()?
        .unwrap_or_default();
    let out_dir = std::env::temp_dir().join("linkemu-prints");

    let mut emu = EmulatorBuilder::new()
        .with_transport(Box::new(StdoutTransport))
        .with_sink(Box::new(FileSink::new(&out_dir)?))
        .with_config(EmulatorConfig {
            model,
            ..EmulatorConfig::default()
        })
        .build()?
        .initialize()?;
    let profile = emu.profile();
    println!(
        "Emulating {} as {:?} ({})",
        model,
        profile.advertised_name(&emu.state().device_name),
        hex::encode(profile.ble_address())
    );

    let conn = ConnectionId(1);
    emu.on_connect(conn);

    let mut script = vec![Command::Ping];
    for query in 0..=3 {
        script.push(Command::Info {
            dialect: InfoDialect::Legacy,
            query,
        });
    }
    script.push(Command::ColorCorrection {
        mode: Some(PrintMode::Rich.as_byte()),
        table: vec![0; color_table_len(PrintMode::Rich)],
    });

    let image: Vec<u8> = (0..4000u32).map(|i| (i % 256) as u8).collect();
    script.extend(print_session(&image, profile.chunk_size));

    for cmd in &script {
        let bytes = cmd.encode()?;
        println!("-> {}", bytes_to_hex_spaced(&bytes[..bytes.len().min(16)]));
        // deliver in MTU-sized writes like a real central
        for write in bytes.chunks(182) {
            emu.on_bytes_received(conn, write);
        }
    }

    emu.on_disconnect(conn);
    let state = emu.snapshot();
    println!(
        "Film left: {}, lifetime prints: {}, images in {}",
        state.film_remaining,
        state.lifetime_print_count,
        out_dir.display()
    );
    Ok(())
}
