//! Display surface trait
//!
//! The consumer core renders through this trait and knows nothing about the
//! panel behind it. Drawing goes to an off-screen buffer; nothing becomes
//! visible until [`DisplaySurface::flush`].

/// Errors that can occur drawing to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display controller
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Text or command did not fit a buffer
    BufferOverflow,
}

/// Pixel drawing surface with an explicit flush
///
/// Coordinates are in pixels with the origin at the top-left corner.
/// Text is anchored at its top-left corner.
pub trait DisplaySurface {
    /// Clear the off-screen buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError>;

    /// Draw a one-pixel line between two points, inclusive
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError>;

    /// Send the off-screen buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}
