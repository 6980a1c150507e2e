// linkemu/src/device/models/capability.rs

//! Film-count / charging encoding used in the printer-function answer

use crate::constants::MAX_FILM;

const CHARGING_BIT: u8 = 0x80;
const FILM_MASK: u8 = 0x0F;

/// The two bytes of the printer-function answer that carry film state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityBytes {
    /// Base flags, charging bit and (nibble models) film count
    pub capability: u8,
    /// Film count as a plain byte
    pub film_byte: u8,
}

/// How a model packs film count and charging state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityEncoding {
    /// Film count in the low nibble of the capability byte, charging in bit 7.
    /// The legacy film byte repeats the count for clients that read it.
    Nibble {
        /// Model flag bits
        base: u8,
    },
    /// Capability byte holds only the base flags and charging bit; the film
    /// count travels in its own byte.
    SeparateByte {
        /// Model flag bits
        base: u8,
    },
}

impl CapabilityEncoding {
    /// Pack film count (clamped to 0..=10) and charging state.
    pub fn encode(&self, film: u8, charging: bool) -> CapabilityBytes {
        let film = film.min(MAX_FILM);
        let charge = if charging { CHARGING_BIT } else { 0 };
        match *self {
            CapabilityEncoding::Nibble { base } => CapabilityBytes {
                capability: base | (film & FILM_MASK) | charge,
                film_byte: film,
            },
            CapabilityEncoding::SeparateByte { base } => CapabilityBytes {
                capability: base | charge,
                film_byte: film,
            },
        }
    }

    /// Recover (film, charging) from the encoded bytes.
    pub fn decode(&self, bytes: CapabilityBytes) -> (u8, bool) {
        let charging = bytes.capability & CHARGING_BIT != 0;
        let film = match self {
            CapabilityEncoding::Nibble { .. } => bytes.capability & FILM_MASK,
            CapabilityEncoding::SeparateByte { .. } => bytes.film_byte,
        };
        (film, charging)
    }

    /// Model flag bits.
    pub fn base(&self) -> u8 {
        match *self {
            CapabilityEncoding::Nibble { base } | CapabilityEncoding::SeparateByte { base } => base,
        }
    }
}
