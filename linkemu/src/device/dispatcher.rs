// linkemu/src/device/dispatcher.rs

//! Maps a decoded client packet to state changes and printer answers

use log::{debug, info, trace, warn};

use crate::constants::*;
use crate::device::job::{DeviceFault, ExecuteOutcome, JobPhase, PrintJob};
use crate::device::models::ModelProfile;
use crate::device::state::PrinterState;
use crate::protocol::commands::{Command, InfoDialect};
use crate::protocol::frame::Packet;
use crate::protocol::responses::{InfoBody, Response};
use crate::sink::ImageSink;
use crate::types::PrintMode;

/// Everything one packet may read or change.
pub struct DispatchContext<'a> {
    /// Printer state, mutated in place
    pub state: &'a mut PrinterState,
    /// Print job of the active connection
    pub job: &'a mut PrintJob,
    /// Profile of the current model
    pub profile: &'a ModelProfile,
    /// Destination of received image data
    pub sink: &'a mut dyn ImageSink,
    /// EXECUTE fails with low battery below this percentage
    pub low_battery_threshold: u8,
}

/// Answers to send, in order, and whether persisted state changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Responses to notify, in order
    pub responses: Vec<Response>,
    /// Persisted fields changed; save before the next packet
    pub state_dirty: bool,
}

impl Outcome {
    fn none() -> Self {
        Self::default()
    }

    fn reply(response: Response) -> Self {
        Self {
            responses: vec![response],
            state_dirty: false,
        }
    }

    fn dirty(mut self) -> Self {
        self.state_dirty = true;
        self
    }
}

/// Handle one client packet.
pub fn handle(packet: &Packet, ctx: &mut DispatchContext<'_>) -> Outcome {
    let (function, operation) = packet.opcode();
    let cmd = match Command::decode(packet) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => {
            warn!(
                "unknown command {:02x}/{:02x} ({} byte payload), ignored",
                function,
                operation,
                packet.payload.len()
            );
            return Outcome::none();
        }
        Err(e) if (function, operation) == (FUNC_PRINT, OP_PRINT_DATA) => {
            let err = ctx.job.abort(ctx.sink, format!("malformed DATA: {}", e));
            debug!("{}", err);
            return Outcome::reply(Response::status(function, operation, STATUS_REJECTED));
        }
        Err(e) => {
            warn!(
                "malformed {:02x}/{:02x} payload dropped: {}",
                function, operation, e
            );
            return Outcome::none();
        }
    };

    if matches!(cmd, Command::PrintData { .. }) {
        trace!("dispatch {:?}", cmd.opcode());
    } else {
        debug!("dispatch {:?}", cmd);
    }

    if ctx.profile.suppress_status_while_downloading
        && matches!(cmd, Command::Ping | Command::Info { .. })
        && ctx.job.phase() == JobPhase::Downloading
    {
        debug!("status query suppressed during download");
        return Outcome::none();
    }

    match cmd {
        Command::Ping => Outcome::reply(Response::Ping {
            model_byte: ctx.profile.ping_id_byte,
        }),
        Command::Info { dialect, query } => handle_info(dialect, query, ctx),

        Command::Shutdown | Command::Reset | Command::BleConnect => {
            Outcome::reply(Response::ack(function, operation))
        }
        Command::AutoSleep { minutes } => {
            let ack = Outcome::reply(Response::ack(function, operation));
            match minutes {
                Some(m) => {
                    ctx.state.set_auto_sleep(m);
                    info!(
                        "auto-sleep set to {} min{}",
                        m,
                        if m == 0 { " (never)" } else { "" }
                    );
                    ack.dirty()
                }
                None => {
                    warn!("auto-sleep command without payload");
                    ack
                }
            }
        }

        Command::PrintStart { size } => {
            let status = match ctx.job.start(size, ctx.profile.max_image_size, ctx.sink) {
                Ok(()) => STATUS_OK,
                Err(e) => {
                    warn!("print start rejected: {}", e);
                    STATUS_REJECTED
                }
            };
            Outcome::reply(Response::status(function, operation, status))
        }
        Command::PrintData { index, data } => {
            let status = match ctx.job.data(index, &data, ctx.sink) {
                Ok(()) => STATUS_OK,
                Err(e) => {
                    debug!("data chunk rejected: {}", e);
                    STATUS_REJECTED
                }
            };
            Outcome::reply(Response::status(function, operation, status))
        }
        Command::PrintEnd => {
            let status = match ctx.job.end(ctx.sink) {
                Ok(()) => STATUS_OK,
                Err(_) => STATUS_REJECTED,
            };
            Outcome::reply(Response::status(function, operation, status))
        }
        Command::PrintExecute => handle_execute(ctx),
        Command::PrintCancel => {
            ctx.job.cancel(ctx.sink);
            Outcome::reply(Response::ack(function, operation))
        }
        Command::RejectFilm => Outcome::reply(Response::ack(function, operation)),

        Command::AxisInfo => Outcome::reply(Response::Accelerometer(ctx.state.accelerometer)),
        Command::ColorCorrection { mode, table } => {
            match mode.map(PrintMode::try_from) {
                Some(Ok(m)) => {
                    debug!("print mode {} ({} byte table)", m, table.len());
                    ctx.state.set_print_mode(m);
                }
                Some(Err(e)) => warn!("{}; keeping {}", e, ctx.state.print_mode),
                None => warn!("colour correction without payload"),
            }
            // session-only, nothing to persist
            Outcome::reply(Response::ack(function, operation))
        }
        Command::LedSetting { .. } => Outcome::reply(Response::ack(function, operation)),
        Command::AdditionalInfo { query } => Outcome::reply(Response::AdditionalInfo {
            query,
            model_block: ctx.profile.additional_info_block,
        }),
    }
}

fn handle_info(dialect: InfoDialect, query: u8, ctx: &DispatchContext<'_>) -> Outcome {
    if let Some(body) = read_info(query, ctx.state, ctx.profile) {
        let mut out = Outcome::reply(Response::Info { dialect, body });
        if query == INFO_PRINT_HISTORY && ctx.profile.ready_after_history {
            out.responses.push(Response::Ready);
        }
        return out;
    }
    if dialect == InfoDialect::Official {
        if let Some(value) = identity_string(query, ctx.state, ctx.profile) {
            return Outcome::reply(Response::Identity {
                query,
                value: value.to_string(),
            });
        }
    }
    warn!("unknown info query {:#04x} ({:?})", query, dialect);
    Outcome::reply(Response::UnknownInfo { dialect })
}

/// State read shared by both info dialects.
pub fn read_info(query: u8, state: &PrinterState, profile: &ModelProfile) -> Option<InfoBody> {
    let body = match query {
        INFO_IMAGE_SUPPORT => InfoBody::ImageSupport {
            width: profile.width,
            height: profile.height,
            tail: profile.image_info_tail,
        },
        INFO_BATTERY => InfoBody::Battery {
            status_byte: profile.battery_status_byte,
            percent: state.battery_percent,
        },
        INFO_PRINTER_FUNCTION => InfoBody::PrinterFunction {
            capability: profile.encode_capability(state.film_remaining, state.charging),
        },
        INFO_PRINT_HISTORY => InfoBody::History {
            lifetime: state.lifetime_print_count,
            reserved: profile.history_reserved,
        },
        _ => return None,
    };
    Some(body)
}

fn identity_string<'a>(
    query: u8,
    state: &'a PrinterState,
    profile: &'a ModelProfile,
) -> Option<&'a str> {
    let s = match query {
        INFO_FIRMWARE_REVISION => profile.firmware_revision,
        INFO_HARDWARE_REVISION => profile.hardware_revision,
        INFO_SOFTWARE_REVISION => profile.software_revision,
        INFO_MANUFACTURER => MANUFACTURER_NAME,
        INFO_DEVICE_NAME => state.device_name.as_str(),
        INFO_VERSION => "00010012",
        INFO_VERSION_EXTRA => "00000001",
        _ => return None,
    };
    Some(s)
}

/// First simulated fault in priority order: cover open, no film, low
/// battery, busy.
pub fn device_fault(state: &PrinterState, low_battery_threshold: u8) -> Option<DeviceFault> {
    if state.cover_open {
        Some(DeviceFault::CoverOpen)
    } else if state.film_remaining == 0 {
        Some(DeviceFault::NoFilm)
    } else if state.battery_percent < low_battery_threshold {
        Some(DeviceFault::LowBattery)
    } else if state.busy {
        Some(DeviceFault::Busy)
    } else {
        None
    }
}

fn handle_execute(ctx: &mut DispatchContext<'_>) -> Outcome {
    let fault = device_fault(ctx.state, ctx.low_battery_threshold);
    let status = |code| Response::status(FUNC_PRINT, OP_PRINT_EXECUTE, code);
    match ctx.job.execute(fault, ctx.sink) {
        Ok(ExecuteOutcome::Committed) => {
            ctx.state.decrement_film_on_print();
            ctx.state.increment_lifetime();
            info!(
                "print #{} done, {} sheets left",
                ctx.state.lifetime_print_count, ctx.state.film_remaining
            );
            Outcome::reply(status(ctx.profile.success_code)).dirty()
        }
        Ok(ExecuteOutcome::Refused(fault)) => Outcome::reply(status(fault.code())),
        Err(e) => {
            warn!("execute rejected: {}", e);
            Outcome::reply(status(STATUS_REJECTED))
        }
    }
}
