//! Tilt dashboard layout
//!
//! Screen layout on a 128×64 panel:
//! ```text
//!   Monitoramento
//! ───────────────────────
//!   IMU    MPU6050
//! ───────────────────────
//!   roll    │  pitch
//!   -12.3   │   45.6
//! ```
//! The whole screen is redrawn for every message.

use core::fmt::Write;

use heapless::String;

use crate::traits::{DisplayError, DisplaySurface};
use tiltlink_protocol::Orientation;

/// Title line text and position
pub const TITLE: (&str, i32, i32) = ("Monitoramento", 8, 9);

/// Subtitle line text and position
pub const SUBTITLE: (&str, i32, i32) = ("IMU    MPU6050", 10, 28);

/// Divider lines as (x0, y0, x1, y1)
pub const DIVIDERS: [(i32, i32, i32, i32); 3] = [
    (3, 37, 123, 37),
    (63, 37, 63, 60),
    (3, 17, 123, 17),
];

/// Column labels and positions
pub const ROLL_LABEL: (&str, i32, i32) = ("roll", 14, 41);
pub const PITCH_LABEL: (&str, i32, i32) = ("pitch", 73, 41);

/// Value positions
pub const ROLL_VALUE_POS: (i32, i32) = (14, 52);
pub const PITCH_VALUE_POS: (i32, i32) = (73, 52);

/// Longest value text: sign, three digits, point, one decimal, with room
/// for saturated values
pub const VALUE_LEN: usize = 20;

/// Format an angle right-aligned in five characters with one decimal
pub fn format_angle(degrees: f32) -> Result<String<VALUE_LEN>, DisplayError> {
    let mut text = String::new();
    write!(text, "{:5.1}", degrees).map_err(|_| DisplayError::BufferOverflow)?;
    Ok(text)
}

/// Redraw the whole dashboard for one orientation and flush it
pub fn render<D: DisplaySurface>(
    display: &mut D,
    orientation: &Orientation,
) -> Result<(), DisplayError> {
    let roll = format_angle(orientation.roll)?;
    let pitch = format_angle(orientation.pitch)?;

    display.clear()?;

    display.draw_text(TITLE.0, TITLE.1, TITLE.2)?;
    display.draw_text(SUBTITLE.0, SUBTITLE.1, SUBTITLE.2)?;
    for (x0, y0, x1, y1) in DIVIDERS {
        display.draw_line(x0, y0, x1, y1)?;
    }

    display.draw_text(ROLL_LABEL.0, ROLL_LABEL.1, ROLL_LABEL.2)?;
    display.draw_text(PITCH_LABEL.0, PITCH_LABEL.1, PITCH_LABEL.2)?;

    display.draw_text(&roll, ROLL_VALUE_POS.0, ROLL_VALUE_POS.1)?;
    display.draw_text(&pitch, PITCH_VALUE_POS.0, PITCH_VALUE_POS.1)?;

    display.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawOp, RecordingDisplay};

    #[test]
    fn test_format_angle_pads_to_five() {
        assert_eq!(format_angle(0.0).unwrap().as_str(), "  0.0");
        assert_eq!(format_angle(-12.34).unwrap().as_str(), "-12.3");
        assert_eq!(format_angle(45.67).unwrap().as_str(), " 45.7");
    }

    #[test]
    fn test_format_angle_wider_than_five() {
        assert_eq!(format_angle(-179.99).unwrap().as_str(), "-180.0");
        assert_eq!(format_angle(180.0).unwrap().as_str(), "180.0");
    }

    #[test]
    fn test_render_sequence() {
        let mut display = RecordingDisplay::new();

        render(&mut display, &Orientation::new(1.26, -3.54)).unwrap();

        assert_eq!(display.ops.first(), Some(&DrawOp::Clear));
        assert_eq!(display.ops.last(), Some(&DrawOp::Flush));
        assert_eq!(display.text_at(8, 9), Some("Monitoramento"));
        assert_eq!(display.text_at(10, 28), Some("IMU    MPU6050"));
        assert_eq!(display.text_at(14, 41), Some("roll"));
        assert_eq!(display.text_at(73, 41), Some("pitch"));
        assert_eq!(display.text_at(14, 52), Some("  1.3"));
        assert_eq!(display.text_at(73, 52), Some(" -3.5"));

        let lines = display
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line(..)))
            .count();
        assert_eq!(lines, 3);
        assert!(display.ops.contains(&DrawOp::Line(63, 37, 63, 60)));
    }

    #[test]
    fn test_render_propagates_flush_error() {
        let mut display = RecordingDisplay::new();
        display.fail_flush = true;

        let result = render(&mut display, &Orientation::default());

        assert_eq!(result, Err(DisplayError::Communication));
    }
}
