//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//! Drawing goes to a local frame buffer through `embedded-graphics`;
//! [`Ssd1306::flush`] pushes the whole buffer to the panel.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use tiltlink_core::traits::{DisplayError, DisplaySurface};
use tiltlink_hal::I2cBus;

/// SSD1306 I2C address (0x3C, or 0x3D with SA0 high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Control byte: the rest of the transfer is commands
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: the rest of the transfer is display data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Power-up sequence for a 128x64 panel with the internal charge pump
const INIT_SEQUENCE: [u8; 26] = [
    CONTROL_COMMAND,
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    0x00,                  // Horizontal addressing
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_FROM_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// Select the full screen as the write window
const FULL_WINDOW: [u8; 7] = [
    CONTROL_COMMAND,
    cmd::SET_COLUMN_ADDR,
    0,
    (WIDTH - 1) as u8,
    cmd::SET_PAGE_ADDR,
    0,
    (PAGES - 1) as u8,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame buffer (1 bit per pixel, organized as pages of 8 rows)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C: I2cBus> Ssd1306<I2C> {
    /// Create a new SSD1306 driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a new SSD1306 driver at a specific address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Initialize the display
    ///
    /// The panel RAM holds garbage after power-up; follow with a clear and
    /// flush before anything is shown.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &INIT_SEQUENCE)
            .map_err(|_| DisplayError::Communication)
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.command(&[cmd::SET_CONTRAST, contrast])
    }

    /// Read back one pixel of the frame buffer
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn command(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        let mut data = [0u8; 3];
        let len = commands.len() + 1;
        if len > data.len() {
            return Err(DisplayError::BufferOverflow);
        }
        data[0] = CONTROL_COMMAND;
        data[1..len].copy_from_slice(commands);
        self.i2c
            .write(self.address, &data[..len])
            .map_err(|_| DisplayError::Communication)
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if !in_bounds(x, y) {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let bit = 1 << (y % 8);
        if on {
            self.buffer[y / 8][x] |= bit;
        } else {
            self.buffer[y / 8][x] &= !bit;
        }
    }
}

fn in_bounds(x: i32, y: i32) -> bool {
    (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y)
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C: I2cBus> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

impl<I2C: I2cBus> DisplaySurface for Ssd1306<I2C> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError> {
        if !in_bounds(x, y) {
            return Err(DisplayError::InvalidCoordinates);
        }
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(self)
            .map_err(|never| match never {})?;
        Ok(())
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError> {
        if !in_bounds(x0, y0) || !in_bounds(x1, y1) {
            return Err(DisplayError::InvalidCoordinates);
        }
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(self)
            .map_err(|never| match never {})
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &FULL_WINDOW)
            .map_err(|_| DisplayError::Communication)?;

        // Horizontal addressing wraps to the next page on its own
        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;
        for page in 0..PAGES {
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c
                .write(self.address, &data)
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }
}
