// linkemu/src/device/config.rs

//! Startup configuration and runtime control commands

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::MAX_FILM;
use crate::device::state::PrinterState;
use crate::types::{Accelerometer, Model};
use crate::{Error, Result};

/// Longest device name / serial number accepted
pub const MAX_IDENTITY_LEN: usize = 31;

/// Default low-battery threshold (percent)
pub const DEFAULT_LOW_BATTERY_THRESHOLD: u8 = 20;

/// Startup settings. Only used when the store has no saved state, except
/// the battery threshold which always applies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmulatorConfig {
    /// Model used when no saved state exists
    pub model: Model,
    /// EXECUTE reports low battery below this percentage
    pub low_battery_threshold: u8,
    /// Film count on first run, 0..=10
    pub default_film: u8,
    /// Battery percentage on first run
    pub default_battery: u8,
    /// Start in demo mode (film count never decreases)
    pub suspend_film_decrement: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            low_battery_threshold: DEFAULT_LOW_BATTERY_THRESHOLD,
            default_film: MAX_FILM,
            default_battery: 100,
            suspend_film_decrement: false,
        }
    }
}

impl EmulatorConfig {
    /// Range-check every field.
    pub fn validate(&self) -> Result<()> {
        check_battery(self.default_battery)?;
        check_battery(self.low_battery_threshold)?;
        check_film(self.default_film)?;
        Ok(())
    }

    /// State used on first run.
    pub fn initial_state(&self) -> PrinterState {
        let mut state = PrinterState::new(self.model);
        state.film_remaining = self.default_film;
        state.battery_percent = self.default_battery;
        state.suspend_film_decrement = self.suspend_film_decrement;
        state
    }

    /// Parse and validate a JSON configuration.
    #[cfg(feature = "serde")]
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file. Missing keys take
    /// their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Runtime change requested by the control surface. Applied between
/// packets through the emulator's event path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Rejected while a print job is in progress
    SetModel(Model),
    /// Percentage, 0..=100
    SetBattery(u8),
    /// Sheets left, 0..=10
    SetFilm(u8),
    /// Charger attached
    SetCharging(bool),
    /// Film door state
    SetCoverOpen(bool),
    /// Simulate a busy printer
    SetBusy(bool),
    /// Motion sensor reading reported to Link 3 clients
    SetAccelerometer(Accelerometer),
    /// Demo mode: keep the film count after prints
    SetSuspendDecrement(bool),
    /// Advertised device name, 1..=31 bytes
    SetDeviceName(String),
    /// Serial number, 1..=31 ASCII digits
    SetSerialNumber(String),
    /// Lifetime print counter
    SetLifetimeCount(u32),
}

impl ConfigCommand {
    /// Check the argument without touching any state.
    pub fn validate(&self) -> Result<()> {
        match self {
            ConfigCommand::SetBattery(p) => check_battery(*p),
            ConfigCommand::SetFilm(n) => check_film(*n),
            ConfigCommand::SetDeviceName(name) => check_identity("device name", name, false),
            ConfigCommand::SetSerialNumber(serial) => check_identity("serial number", serial, true),
            _ => Ok(()),
        }
    }

    /// Validate and apply to `state`. The caller is responsible for the
    /// job-idle check of `SetModel`.
    pub fn apply(self, state: &mut PrinterState) -> Result<()> {
        self.validate()?;
        match self {
            ConfigCommand::SetModel(m) => state.apply_model(m),
            ConfigCommand::SetBattery(p) => state.battery_percent = p,
            ConfigCommand::SetFilm(n) => state.film_remaining = n,
            ConfigCommand::SetCharging(on) => state.charging = on,
            ConfigCommand::SetCoverOpen(on) => state.cover_open = on,
            ConfigCommand::SetBusy(on) => state.busy = on,
            ConfigCommand::SetAccelerometer(a) => state.accelerometer = a,
            ConfigCommand::SetSuspendDecrement(on) => state.suspend_film_decrement = on,
            ConfigCommand::SetDeviceName(name) => state.device_name = name,
            ConfigCommand::SetSerialNumber(serial) => state.serial_number = serial,
            ConfigCommand::SetLifetimeCount(n) => state.lifetime_print_count = n,
        }
        Ok(())
    }
}

pub(crate) fn check_battery(percent: u8) -> Result<()> {
    if percent > 100 {
        return Err(Error::InvalidValue(format!(
            "battery {}% out of range 0..=100",
            percent
        )));
    }
    Ok(())
}

pub(crate) fn check_film(count: u8) -> Result<()> {
    if count > MAX_FILM {
        return Err(Error::InvalidValue(format!(
            "film count {} out of range 0..={}",
            count, MAX_FILM
        )));
    }
    Ok(())
}

pub(crate) fn check_identity(what: &str, value: &str, digits_only: bool) -> Result<()> {
    if value.is_empty() || value.len() > MAX_IDENTITY_LEN {
        return Err(Error::InvalidValue(format!(
            "{} must be 1..={} bytes, got {}",
            what,
            MAX_IDENTITY_LEN,
            value.len()
        )));
    }
    if digits_only && !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidValue(format!("{} must be digits: {:?}", what, value)));
    }
    Ok(())
}
