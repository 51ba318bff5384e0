//! Compile-time boot configuration.
//!
//! Nothing is read at run time: the routine runs before any device that could
//! hold configuration is usable. Cargo features pick the variant:
//!
//! * `attribute` - store the whole cell, glyph plus [`BOOT_ATTRIBUTE`].
//! * `idle-spin` - park in [`TerminalMode::Idle`] instead of halting.

use crate::terminal::TerminalMode;
use crate::vga::{Attribute, Color};

/// ASCII `X`.
pub const BOOT_GLYPH: u8 = b'X';
/// White on green.
pub const BOOT_ATTRIBUTE: Attribute = Attribute::new(Color::White, Color::Green);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootConfig {
    pub glyph: u8,
    /// `None` leaves the attribute byte as the boot collaborator left it.
    pub attribute: Option<Attribute>,
    pub terminal: TerminalMode,
}

impl BootConfig {
    /// Glyph only, halting afterwards.
    pub const fn new(glyph: u8) -> Self {
        BootConfig {
            glyph,
            attribute: None,
            terminal: TerminalMode::Halt,
        }
    }

    pub const fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    pub const fn with_terminal(mut self, terminal: TerminalMode) -> Self {
        self.terminal = terminal;
        self
    }
}

const BASE: BootConfig = BootConfig::new(BOOT_GLYPH);

#[cfg(feature = "attribute")]
const WITH_ATTRIBUTE: BootConfig = BASE.with_attribute(BOOT_ATTRIBUTE);
#[cfg(not(feature = "attribute"))]
const WITH_ATTRIBUTE: BootConfig = BASE;

#[cfg(feature = "idle-spin")]
pub const BOOT_CONFIG: BootConfig = WITH_ATTRIBUTE.with_terminal(TerminalMode::Idle);
#[cfg(not(feature = "idle-spin"))]
pub const BOOT_CONFIG: BootConfig = WITH_ATTRIBUTE;
