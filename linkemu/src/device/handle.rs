// linkemu/src/device/handle.rs

//! The emulator handle and its type-state lifecycle

use std::marker::PhantomData;

use log::{debug, error, info, warn};

use crate::device::config::{ConfigCommand, EmulatorConfig};
use crate::device::dispatcher::{self, DispatchContext};
use crate::device::event::Event;
use crate::device::job::PrintJob;
use crate::device::models::{ModelProfile, profile_for};
use crate::device::state::PrinterState;
use crate::protocol::reassembler::FrameReassembler;
use crate::protocol::responses::Response;
use crate::sink::ImageSink;
use crate::store::StateStore;
use crate::transport::Transport;
use crate::types::ConnectionId;
use crate::{Error, Result};

/// Type-state marker: built, state not loaded yet
pub struct Uninitialized;
/// Type-state marker: ready for events
pub struct Initialized;

/// Owned notification channel
pub type BoxedTransport = Box<dyn Transport + Send>;
/// Owned image sink
pub type BoxedSink = Box<dyn ImageSink + Send>;
/// Owned state store
pub type BoxedStore = Box<dyn StateStore + Send>;

/// Emulated printer. Owns the printer state, the print job and the
/// reassembly buffer; every mutation goes through `&mut self`, so the
/// handle itself is the single serialization point.
pub struct Emulator<State = Uninitialized> {
    transport: BoxedTransport,
    sink: BoxedSink,
    store: BoxedStore,
    config: EmulatorConfig,
    state: PrinterState,
    job: PrintJob,
    reassembler: FrameReassembler,
    active_conn: Option<ConnectionId>,
    _state: PhantomData<State>,
}

impl Emulator<Uninitialized> {
    /// Create an emulator from its collaborators. Nothing is loaded until
    /// `initialize`.
    pub fn new(
        transport: BoxedTransport,
        sink: BoxedSink,
        store: BoxedStore,
        config: EmulatorConfig,
    ) -> Self {
        let state = config.initial_state();
        let reassembler = FrameReassembler::new(profile_for(state.model).reassembly_limit());
        Self {
            transport,
            sink,
            store,
            config,
            state,
            job: PrintJob::new(),
            reassembler,
            active_conn: None,
            _state: PhantomData,
        }
    }

    /// Validate the configuration and restore persisted state. A first run
    /// (no saved state) starts from the configuration defaults and saves
    /// them; an unreadable store or an out-of-range saved state is logged
    /// and treated the same way.
    pub fn initialize(self) -> Result<Emulator<Initialized>> {
        self.config.validate()?;
        let mut this = self;

        let loaded = match this.store.load_state() {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("could not load saved state, using defaults: {}", e);
                None
            }
        };
        let loaded = loaded.and_then(|state| match state.validate() {
            Ok(()) => Some(state),
            Err(e) => {
                warn!("saved state rejected, using defaults: {}", e);
                None
            }
        });
        let fresh = loaded.is_none();
        if let Some(mut state) = loaded {
            state.end_session();
            this.state = state;
        }
        this.reassembler.set_limit(this.profile().reassembly_limit());

        let mut ready = Emulator {
            transport: this.transport,
            sink: this.sink,
            store: this.store,
            config: this.config,
            state: this.state,
            job: this.job,
            reassembler: this.reassembler,
            active_conn: None,
            _state: PhantomData,
        };
        if fresh {
            ready.persist();
        }
        info!(
            "emulating {} ({} sheets, battery {}%)",
            ready.state.model, ready.state.film_remaining, ready.state.battery_percent
        );
        Ok(ready)
    }
}

impl<S> Emulator<S> {
    /// Profile of the current model.
    pub fn profile(&self) -> &'static ModelProfile {
        profile_for(self.state.model)
    }

    /// Startup configuration.
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Current printer state.
    pub fn state(&self) -> &PrinterState {
        &self.state
    }
}

impl Emulator<Initialized> {
    /// Copy of the current state for display.
    pub fn snapshot(&self) -> PrinterState {
        self.state.clone()
    }

    /// Print job of the active connection.
    pub fn job(&self) -> &PrintJob {
        &self.job
    }

    /// Connection whose bytes are processed, if any.
    pub fn active_connection(&self) -> Option<ConnectionId> {
        self.active_conn
    }

    /// Apply one event. Events must be fed in arrival order.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Connected(conn) => self.on_connect(conn),
            Event::BytesReceived(conn, bytes) => {
                self.on_bytes_received(conn, &bytes);
            }
            Event::Disconnected(conn) => self.on_disconnect(conn),
            Event::Config(cmd) => return self.apply_config(cmd),
        }
        Ok(())
    }

    /// A client connected. Only one link exists at a time; a new one
    /// replaces a stale one.
    pub fn on_connect(&mut self, conn: ConnectionId) {
        if let Some(old) = self.active_conn {
            if old != conn {
                warn!("{} connected while {} still active, dropping it", conn, old);
                self.end_session();
            }
        }
        info!("{} connected", conn);
        self.active_conn = Some(conn);
        self.state.connected = true;
    }

    /// Feed one transport write. Returns the number of packets handled.
    pub fn on_bytes_received(&mut self, conn: ConnectionId, bytes: &[u8]) -> usize {
        if self.active_conn != Some(conn) {
            warn!("{} bytes from inactive {}, ignored", bytes.len(), conn);
            return 0;
        }

        let packets = self.reassembler.feed(bytes);
        for e in self.reassembler.take_errors() {
            debug!("framing error on {}: {}", conn, e);
        }

        let count = packets.len();
        for packet in packets {
            #[cfg(feature = "diagnostics")]
            if let Ok(raw) = packet.encode() {
                log::trace!("rx {}", crate::utils::describe_packet(&raw));
            }

            let profile = profile_for(self.state.model);
            let mut ctx = DispatchContext {
                state: &mut self.state,
                job: &mut self.job,
                profile,
                sink: &mut *self.sink,
                low_battery_threshold: self.config.low_battery_threshold,
            };
            let outcome = dispatcher::handle(&packet, &mut ctx);

            for response in outcome.responses {
                self.notify(conn, response);
            }
            if outcome.state_dirty {
                self.persist();
            }
        }
        count
    }

    /// The link dropped. Any job in flight is discarded.
    pub fn on_disconnect(&mut self, conn: ConnectionId) {
        if self.active_conn != Some(conn) {
            debug!("disconnect from inactive {}", conn);
            return;
        }
        info!("{} disconnected", conn);
        self.end_session();
    }

    /// Apply a control-surface change. Invalid values and a model switch
    /// during a print job are rejected without touching the state.
    pub fn apply_config(&mut self, cmd: ConfigCommand) -> Result<()> {
        let model_switch = match &cmd {
            ConfigCommand::SetModel(m) => Some(*m),
            _ => None,
        };
        if model_switch.is_some() && !self.job.is_idle() {
            warn!("model switch refused during {}", self.job.phase());
            return Err(Error::JobInProgress);
        }

        debug!("config: {:?}", cmd);
        cmd.apply(&mut self.state)?;

        if let Some(model) = model_switch {
            self.reassembler.set_limit(self.profile().reassembly_limit());
            info!("now emulating {}", model);
        }
        self.persist();
        Ok(())
    }

    fn end_session(&mut self) {
        self.job.reset_on_disconnect(&mut *self.sink);
        self.reassembler.reset();
        self.state.end_session();
        self.active_conn = None;
    }

    fn notify(&mut self, conn: ConnectionId, response: Response) {
        let bytes = match response.encode() {
            Ok(b) => b,
            Err(e) => {
                error!("could not encode {:?}: {}", response, e);
                return;
            }
        };

        #[cfg(feature = "diagnostics")]
        log::trace!("tx {}", crate::utils::describe_packet(&bytes));

        let piece = self
            .transport
            .max_notification_len()
            .filter(|&n| n > 0)
            .unwrap_or(bytes.len().max(1));
        for chunk in bytes.chunks(piece) {
            if let Err(e) = self.transport.send_notification(conn, chunk) {
                error!("notification to {} failed: {}", conn, e);
                return;
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save_state(&self.state) {
            warn!("state not saved: {}", e);
        }
    }
}
