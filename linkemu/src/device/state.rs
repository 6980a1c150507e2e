// linkemu/src/device/state.rs

//! Persistent printer state

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::constants::MAX_FILM;
use crate::device::config::{check_battery, check_film, check_identity};
use crate::device::models::profile_for;
use crate::types::{Accelerometer, Model, PrintMode, battery_level};

/// Observable state of the emulated printer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrinterState {
    /// Emulated variant; selects the profile
    pub model: Model,
    /// 0..=100
    pub battery_percent: u8,
    /// Charger attached
    pub charging: bool,
    /// Sheets left, 0..=10
    pub film_remaining: u8,
    /// Prints since manufacture
    pub lifetime_print_count: u32,
    /// Film door open
    pub cover_open: bool,
    /// Refuse prints as busy
    pub busy: bool,
    /// 0 = never sleep
    pub auto_sleep_timeout_min: u8,
    /// Session-only; clients resend it before every print.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub print_mode: PrintMode,
    /// Reported to Link 3 clients
    pub accelerometer: Accelerometer,
    /// A client is connected
    #[cfg_attr(feature = "serde", serde(skip))]
    pub connected: bool,
    /// Digits only
    pub serial_number: String,
    /// Advertised name
    pub device_name: String,
    /// Keep the film count fixed after prints (demo mode)
    pub suspend_film_decrement: bool,
}

impl PrinterState {
    /// Fresh state for `model` with identity strings from its profile.
    pub fn new(model: Model) -> Self {
        let profile = profile_for(model);
        Self {
            model,
            battery_percent: 100,
            charging: false,
            film_remaining: MAX_FILM,
            lifetime_print_count: 0,
            cover_open: false,
            busy: false,
            auto_sleep_timeout_min: 0,
            print_mode: PrintMode::Rich,
            accelerometer: Accelerometer::default(),
            connected: false,
            serial_number: profile.serial_number.to_string(),
            device_name: profile.device_name.to_string(),
            suspend_film_decrement: false,
        }
    }

    /// Consume one sheet. Saturates at zero; skipped while decrement is
    /// suspended. Returns true if the count changed.
    pub fn decrement_film_on_print(&mut self) -> bool {
        if self.suspend_film_decrement {
            debug!("film decrement suspended, keeping {}", self.film_remaining);
            return false;
        }
        let before = self.film_remaining;
        self.film_remaining = self.film_remaining.saturating_sub(1);
        before != self.film_remaining
    }

    /// Count one more print. Saturates.
    pub fn increment_lifetime(&mut self) {
        self.lifetime_print_count = self.lifetime_print_count.saturating_add(1);
    }

    /// Any minute value is accepted; 0 disables auto sleep.
    pub fn set_auto_sleep(&mut self, minutes: u8) {
        self.auto_sleep_timeout_min = minutes;
    }

    /// Mode from the latest colour-correction upload.
    pub fn set_print_mode(&mut self, mode: PrintMode) {
        self.print_mode = mode;
    }

    /// Coarse 0..=3 level derived from the percentage
    pub fn battery_level(&self) -> u8 {
        battery_level(self.battery_percent)
    }

    /// Switch model and reset identity strings to the new profile's values.
    pub fn apply_model(&mut self, model: Model) {
        let profile = profile_for(model);
        self.model = model;
        self.serial_number = profile.serial_number.to_string();
        self.device_name = profile.device_name.to_string();
    }

    /// Check the ranges a control command would enforce. Used on state
    /// restored from a store, which may have been edited by hand.
    pub fn validate(&self) -> Result<()> {
        check_battery(self.battery_percent)?;
        check_film(self.film_remaining)?;
        check_identity("device name", &self.device_name, false)?;
        check_identity("serial number", &self.serial_number, true)?;
        Ok(())
    }

    /// Forget session-only settings (disconnect).
    pub fn end_session(&mut self) {
        self.connected = false;
        self.print_mode = PrintMode::Rich;
    }
}

impl Default for PrinterState {
    fn default() -> Self {
        Self::new(Model::default())
    }
}
