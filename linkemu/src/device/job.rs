// linkemu/src/device/job.rs

//! Print job state machine
//!
//! `Idle -> Downloading -> Ended -> Executed`, with `Cancelled` from
//! Downloading/Ended. Executed and Cancelled are terminal for one job; the
//! machine is back in `Idle` as soon as the transition completes.

use log::{debug, info, warn};

use crate::constants::{STATUS_BUSY, STATUS_COVER_OPEN, STATUS_LOW_BATTERY, STATUS_NO_FILM};
use crate::sink::{ImageSink, SinkHandle};
use crate::{Error, Result};

/// Where a print job stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum JobPhase {
    /// No job
    #[default]
    Idle,
    /// START accepted, DATA chunks arriving
    Downloading,
    /// END received, waiting for EXECUTE
    Ended,
    /// Printed
    Executed,
    /// Cancelled or aborted
    Cancelled,
}

/// Simulated printer fault that blocks EXECUTE, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DeviceFault {
    /// Film door open
    #[display(fmt = "cover open")]
    CoverOpen,
    /// No sheets left
    #[display(fmt = "no film")]
    NoFilm,
    /// Battery under the configured threshold
    #[display(fmt = "low battery")]
    LowBattery,
    /// Busy flag set from the control surface
    #[display(fmt = "busy")]
    Busy,
}

impl DeviceFault {
    /// Status byte reported to the client
    pub fn code(&self) -> u8 {
        match self {
            DeviceFault::CoverOpen => STATUS_COVER_OPEN,
            DeviceFault::NoFilm => STATUS_NO_FILM,
            DeviceFault::LowBattery => STATUS_LOW_BATTERY,
            DeviceFault::Busy => STATUS_BUSY,
        }
    }
}

/// What EXECUTE did with the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// Image handed to the sink; film consumed
    Committed,
    /// Not printed; the image is discarded
    Refused(DeviceFault),
}

/// State of the print job on the active connection.
#[derive(Debug, Default)]
pub struct PrintJob {
    phase: JobPhase,
    declared_size: u32,
    received_bytes: u32,
    next_chunk_index: u32,
    sink_handle: Option<SinkHandle>,
    last_terminal: Option<JobPhase>,
}

impl PrintJob {
    /// Idle job.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> JobPhase {
        self.phase
    }

    /// True when no job is in progress.
    pub fn is_idle(&self) -> bool {
        self.phase == JobPhase::Idle
    }

    /// Image size announced by START, in bytes.
    pub fn declared_size(&self) -> u32 {
        self.declared_size
    }

    /// Image bytes accepted so far.
    pub fn received_bytes(&self) -> u32 {
        self.received_bytes
    }

    /// Index the next DATA chunk must carry.
    pub fn next_chunk_index(&self) -> u32 {
        self.next_chunk_index
    }

    /// Sink job opened by START, while the job is live.
    pub fn sink_handle(&self) -> Option<SinkHandle> {
        self.sink_handle
    }

    /// How the previous job ended (Executed or Cancelled), if any.
    pub fn last_terminal_phase(&self) -> Option<JobPhase> {
        self.last_terminal
    }

    /// Idle -> Downloading. A job already in progress is discarded first.
    /// On error the machine stays Idle.
    pub fn start(
        &mut self,
        declared_size: u32,
        max_size: u32,
        sink: &mut dyn ImageSink,
    ) -> Result<()> {
        if !self.is_idle() {
            warn!("START during {}: discarding previous job", self.phase);
            self.discard(sink);
        }
        if declared_size > max_size {
            return Err(Error::ProtocolViolation(format!(
                "declared size {} exceeds model maximum {}",
                declared_size, max_size
            )));
        }
        let handle = sink.open(declared_size)?;
        self.phase = JobPhase::Downloading;
        self.declared_size = declared_size;
        self.received_bytes = 0;
        self.next_chunk_index = 0;
        self.sink_handle = Some(handle);
        info!("print job started: {} bytes ({})", declared_size, handle);
        Ok(())
    }

    /// Accept one DATA chunk. Any mismatch aborts the whole job.
    pub fn data(&mut self, index: u32, bytes: &[u8], sink: &mut dyn ImageSink) -> Result<()> {
        if self.phase != JobPhase::Downloading {
            return Err(self.abort(sink, format!("DATA during {}", self.phase)));
        }
        if index != self.next_chunk_index {
            let reason = format!(
                "chunk index {} but expected {}",
                index, self.next_chunk_index
            );
            return Err(self.abort(sink, reason));
        }
        let total = self
            .received_bytes
            .checked_add(bytes.len() as u32)
            .filter(|&t| t <= self.declared_size);
        let total = match total {
            Some(t) => t,
            None => {
                let reason = format!(
                    "chunk {} overruns declared size {}",
                    index, self.declared_size
                );
                return Err(self.abort(sink, reason));
            }
        };
        let handle = match self.sink_handle {
            Some(h) => h,
            None => return Err(self.abort(sink, "no sink handle".to_string())),
        };
        if let Err(e) = sink.write(handle, index, bytes) {
            self.discard(sink);
            return Err(e);
        }
        self.received_bytes = total;
        self.next_chunk_index += 1;
        Ok(())
    }

    /// Downloading -> Ended. The byte count is checked at EXECUTE.
    pub fn end(&mut self, sink: &mut dyn ImageSink) -> Result<()> {
        if self.phase != JobPhase::Downloading {
            return Err(self.abort(sink, format!("END during {}", self.phase)));
        }
        debug!(
            "print end: {}/{} bytes in {} chunks",
            self.received_bytes, self.declared_size, self.next_chunk_index
        );
        self.phase = JobPhase::Ended;
        Ok(())
    }

    /// Ended -> Executed -> Idle. With a fault the image is discarded and
    /// the fault returned; otherwise the sink commits.
    pub fn execute(
        &mut self,
        fault: Option<DeviceFault>,
        sink: &mut dyn ImageSink,
    ) -> Result<ExecuteOutcome> {
        if self.phase != JobPhase::Ended {
            return Err(self.abort(sink, format!("EXECUTE during {}", self.phase)));
        }
        if self.received_bytes != self.declared_size {
            let reason = format!(
                "EXECUTE with {}/{} bytes",
                self.received_bytes, self.declared_size
            );
            return Err(self.abort(sink, reason));
        }

        if let Some(fault) = fault {
            warn!("print refused: {} ({:#04x})", fault, fault.code());
            self.discard(sink);
            self.last_terminal = Some(JobPhase::Executed);
            return Ok(ExecuteOutcome::Refused(fault));
        }

        let handle = self.sink_handle.take();
        self.clear();
        self.last_terminal = Some(JobPhase::Executed);
        if let Some(h) = handle {
            sink.finalize(h, true)?;
        }
        info!("print job executed");
        Ok(ExecuteOutcome::Committed)
    }

    /// Drop the current job. Returns false if there was nothing to cancel.
    pub fn cancel(&mut self, sink: &mut dyn ImageSink) -> bool {
        if self.is_idle() {
            return false;
        }
        info!("print job cancelled during {}", self.phase);
        self.discard(sink);
        self.last_terminal = Some(JobPhase::Cancelled);
        true
    }

    /// Link dropped: discard whatever is in flight.
    pub fn reset_on_disconnect(&mut self, sink: &mut dyn ImageSink) {
        if !self.is_idle() {
            info!("disconnect during {}: discarding job", self.phase);
            self.discard(sink);
        }
    }

    /// Discard the job after a protocol violation and return the error.
    pub fn abort(&mut self, sink: &mut dyn ImageSink, reason: String) -> Error {
        warn!("print job aborted: {}", reason);
        self.discard(sink);
        Error::ProtocolViolation(reason)
    }

    fn discard(&mut self, sink: &mut dyn ImageSink) {
        if let Some(h) = self.sink_handle.take() {
            if let Err(e) = sink.finalize(h, false) {
                warn!("sink discard failed for {}: {}", h, e);
            }
        }
        self.clear();
    }

    fn clear(&mut self) {
        self.phase = JobPhase::Idle;
        self.declared_size = 0;
        self.received_bytes = 0;
        self.next_chunk_index = 0;
        self.sink_handle = None;
    }
}
