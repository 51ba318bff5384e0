//! First code to run after the boot loader hands over control.
//!
//! The kernel does one thing: store a glyph into the top-left cell of the VGA
//! text buffer, then park the processor. See [`entry::run`].

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod entry;
pub mod logger;
pub mod terminal;
pub mod vga;

pub use config::{BootConfig, BOOT_CONFIG};
pub use entry::{Activation, Stage};
pub use terminal::TerminalMode;
pub use vga::{Attribute, Color, ScreenCell, TextSink, VgaTextBuffer};

/// Kernel name, as reported in log lines.
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
