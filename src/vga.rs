//! VGA text-mode buffer: geometry, cell encoding and the single raw store.
//!
//! Every other module talks to the screen through [`TextSink`]. The only code
//! in the crate that dereferences a raw screen address is
//! `VgaTextBuffer::store_byte` and `VgaTextBuffer::store_cell`.

use core::ptr;

use static_assertions::{assert_eq_align, assert_eq_size, const_assert_eq};

// --- VGA text mode constants ---
/// Physical base of the colour text buffer in mode 03h.
pub const VGA_TEXT_BUFFER_ADDR: usize = 0xb8000;
pub const BUFFER_WIDTH: usize = 80;
pub const BUFFER_HEIGHT: usize = 25;
/// Size of the buffer in bytes (two bytes per cell).
pub const BUFFER_BYTES: usize = BUFFER_WIDTH * BUFFER_HEIGHT * 2;
/// Byte offset of the top-left cell's character byte.
pub const ORIGIN_OFFSET: usize = 0;

const_assert_eq!(VGA_TEXT_BUFFER_ADDR, 0xb8000);
const_assert_eq!(ORIGIN_OFFSET, 0);

// --- Colours and attributes ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// Attribute byte of a cell: foreground in bits 0-3, background in bits 4-6,
/// blink in bit 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Attribute(u8);

impl Attribute {
    /// Background only has three bits; bright backgrounds fold onto their
    /// dark counterpart.
    pub const fn new(foreground: Color, background: Color) -> Self {
        Attribute(((background as u8 & 0x07) << 4) | (foreground as u8))
    }

    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct ScreenCell {
    pub character: u8,
    pub attribute: Attribute,
}

assert_eq_size!(ScreenCell, u16);
assert_eq_align!(ScreenCell, u8);

impl ScreenCell {
    pub const fn new(character: u8, attribute: Attribute) -> Self {
        ScreenCell { character, attribute }
    }

    /// Cell as the controller reads it: character in the low byte.
    pub const fn as_u16(self) -> u16 {
        ((self.attribute.as_byte() as u16) << 8) | self.character as u16
    }
}

// --- Screen access ---
/// Where the top-left cell can be stored. Each call is exactly one store.
pub trait TextSink {
    /// Store `character` into the top-left character byte, leaving the
    /// attribute byte untouched.
    fn write_character(&mut self, character: u8);

    /// Store character and attribute of the top-left cell together.
    fn write_cell(&mut self, cell: ScreenCell);
}

/// The memory-mapped text buffer.
#[derive(Debug)]
pub struct VgaTextBuffer {
    base: *mut u8,
}

impl VgaTextBuffer {
    /// # Safety
    /// The text buffer must be mapped and writable at
    /// [`VGA_TEXT_BUFFER_ADDR`], and nothing else may write it while the
    /// returned handle is alive.
    pub unsafe fn conventional() -> Self {
        Self::at(VGA_TEXT_BUFFER_ADDR as *mut u8)
    }

    /// # Safety
    /// `base` must point to [`BUFFER_BYTES`] writable bytes, aligned to 2, that
    /// no one else writes while the returned handle is alive.
    pub const unsafe fn at(base: *mut u8) -> Self {
        VgaTextBuffer { base }
    }

    fn store_byte(&mut self, value: u8) {
        // SAFETY: the first byte lies inside the buffer the constructor's
        // caller vouched for.
        unsafe { ptr::write_volatile(self.base.add(ORIGIN_OFFSET), value) }
    }

    fn store_cell(&mut self, value: u16) {
        // SAFETY: as in store_byte; the base is 2-aligned.
        unsafe { ptr::write_volatile(self.base.add(ORIGIN_OFFSET).cast::<u16>(), value) }
    }
}

impl TextSink for VgaTextBuffer {
    fn write_character(&mut self, character: u8) {
        self.store_byte(character);
    }

    fn write_cell(&mut self, cell: ScreenCell) {
        // The controller reads cells little-endian: character first.
        self.store_cell(cell.as_u16().to_le());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A host stand-in for the text buffer, 2-aligned like the real one.
    #[repr(C, align(2))]
    pub(crate) struct HostBuffer(pub [u8; BUFFER_BYTES]);

    impl HostBuffer {
        pub(crate) fn filled(byte: u8) -> Self {
            HostBuffer([byte; BUFFER_BYTES])
        }

        pub(crate) fn sink(&mut self) -> VgaTextBuffer {
            unsafe { VgaTextBuffer::at(self.0.as_mut_ptr()) }
        }
    }

    #[test]
    fn attribute_packs_foreground_low_background_high() {
        assert_eq!(Attribute::new(Color::White, Color::Green).as_byte(), 0x2f);
        assert_eq!(Attribute::new(Color::LightGray, Color::Black).as_byte(), 0x07);
    }

    #[test]
    fn bright_background_folds_to_three_bits() {
        let attr = Attribute::new(Color::Black, Color::LightRed);
        assert_eq!(attr.as_byte(), 0x40);
        assert_eq!(attr.as_byte() & 0x80, 0);
    }

    #[test]
    fn cell_is_character_low_attribute_high() {
        let cell = ScreenCell::new(b'X', Attribute::new(Color::White, Color::Green));
        assert_eq!(cell.as_u16(), 0x2f58);
        assert_eq!(core::mem::size_of::<ScreenCell>(), 2);
    }

    #[test]
    fn write_character_touches_only_the_first_byte() {
        let mut host = HostBuffer::filled(0x11);
        host.sink().write_character(b'Q');

        assert_eq!(host.0[0], b'Q');
        assert!(host.0[1..].iter().all(|&b| b == 0x11));
    }

    #[test]
    fn write_cell_lays_out_character_then_attribute() {
        let mut host = HostBuffer::filled(0);
        let cell = ScreenCell::new(b'X', Attribute::new(Color::White, Color::Green));
        host.sink().write_cell(cell);

        assert_eq!(&host.0[..2], &[b'X', 0x2f]);
        assert!(host.0[2..].iter().all(|&b| b == 0));
    }
}
