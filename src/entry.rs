//! The entry routine proper.
//!
//! An [`Activation`] is one pass through the routine. It starts in
//! [`Stage::Entered`], issues a single store into the text buffer and moves to
//! [`Stage::WriteIssued`], after which [`run`] parks the processor.

use crate::config::BootConfig;
use crate::terminal;
use crate::vga::{ScreenCell, TextSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Entered,
    WriteIssued,
}

pub struct Activation<'a, S: TextSink> {
    screen: &'a mut S,
    config: &'a BootConfig,
    stage: Stage,
}

impl<'a, S: TextSink> Activation<'a, S> {
    pub fn new(screen: &'a mut S, config: &'a BootConfig) -> Self {
        Activation {
            screen,
            config,
            stage: Stage::Entered,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Performs the visible write. Only the first call stores anything.
    pub fn issue_write(&mut self) -> Stage {
        if self.stage == Stage::WriteIssued {
            return self.stage;
        }

        let config = self.config;
        match config.attribute {
            Some(attribute) => {
                log::trace!(
                    "storing {:#04x} / {:#04x} into cell 0",
                    config.glyph,
                    attribute.as_byte()
                );
                self.screen.write_cell(ScreenCell::new(config.glyph, attribute));
            }
            None => {
                log::trace!("storing {:#04x} into cell 0", config.glyph);
                self.screen.write_character(config.glyph);
            }
        }

        self.stage = Stage::WriteIssued;
        self.stage
    }
}

/// Body of the entry routine: one store, then the configured terminal state.
pub fn run<S: TextSink>(screen: &mut S, config: &BootConfig) -> ! {
    let mut activation = Activation::new(screen, config);
    activation.issue_write();
    terminal::park(config.terminal)
}
