//! Fixed-point encoding and two-word framing
//!
//! - [`encode`] / [`decode`]: floating-point degrees ⇄ hundredths of a degree
//! - [`WireMessage::to_words`] / [`WireMessage::from_words`]: message ⇄ FIFO words
//! - [`WordAssembler`]: rebuilds messages from a word-at-a-time stream

/// Fixed-point scale: one wire unit is 1/100 of a degree
pub const FIXED_POINT_SCALE: f32 = 100.0;

/// Number of FIFO words that make up one message
pub const WORDS_PER_MESSAGE: usize = 2;

/// Tilt angles in degrees
///
/// Roll and pitch are in [-180, 180]. This is a plain value with no history:
/// every orientation is computed from a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    /// Rotation about the X axis, degrees
    pub roll: f32,
    /// Rotation about the Y axis, degrees
    pub pitch: f32,
}

impl Orientation {
    pub const fn new(roll: f32, pitch: f32) -> Self {
        Self { roll, pitch }
    }
}

/// An orientation in its wire representation
///
/// Both fields are in hundredths of a degree. This is the only form an
/// orientation takes on the inter-core FIFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireMessage {
    /// Roll × 100
    pub roll: i32,
    /// Pitch × 100
    pub pitch: i32,
}

impl WireMessage {
    pub const fn new(roll: i32, pitch: i32) -> Self {
        Self { roll, pitch }
    }

    /// Split into FIFO words, in push order
    pub const fn to_words(self) -> [u32; WORDS_PER_MESSAGE] {
        [self.roll as u32, self.pitch as u32]
    }

    /// Rebuild from FIFO words, in pop order
    pub const fn from_words(words: [u32; WORDS_PER_MESSAGE]) -> Self {
        Self {
            roll: words[0] as i32,
            pitch: words[1] as i32,
        }
    }
}

/// Convert one angle to hundredths of a degree
///
/// Rounds to the nearest hundredth. The `as` cast saturates, so out-of-range
/// values clamp to `i32::MIN`/`i32::MAX` and NaN becomes 0.
fn to_fixed(degrees: f32) -> i32 {
    libm::roundf(degrees * FIXED_POINT_SCALE) as i32
}

fn from_fixed(hundredths: i32) -> f32 {
    hundredths as f32 / FIXED_POINT_SCALE
}

/// Encode an orientation for the inter-core FIFO
pub fn encode(orientation: Orientation) -> WireMessage {
    WireMessage {
        roll: to_fixed(orientation.roll),
        pitch: to_fixed(orientation.pitch),
    }
}

/// Decode a wire message back to degrees
///
/// Inverse of [`encode`] up to quantisation: each axis comes back within
/// half a hundredth of a degree.
pub fn decode(message: WireMessage) -> Orientation {
    Orientation {
        roll: from_fixed(message.roll),
        pitch: from_fixed(message.pitch),
    }
}

/// Where the assembler is within a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssemblerState {
    /// Next word is treated as roll
    AwaitingRoll,
    /// Holding roll, next word is treated as pitch
    AwaitingPitch,
}

/// Rebuilds messages from a stream of FIFO words
///
/// The assembler only counts words. It cannot tell a roll word from a pitch
/// word, so after a dropped or extra word it keeps pairing them one position
/// off, forever. There is no resynchronisation.
#[derive(Debug, Clone)]
pub struct WordAssembler {
    state: AssemblerState,
    roll: u32,
}

impl Default for WordAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl WordAssembler {
    /// Create an assembler waiting for the first word of a message
    pub const fn new() -> Self {
        Self {
            state: AssemblerState::AwaitingRoll,
            roll: 0,
        }
    }

    /// Current position within a message
    pub fn state(&self) -> AssemblerState {
        self.state
    }

    /// Feed a single word
    ///
    /// Returns `Some(message)` on every second word, `None` otherwise.
    pub fn feed(&mut self, word: u32) -> Option<WireMessage> {
        match self.state {
            AssemblerState::AwaitingRoll => {
                self.roll = word;
                self.state = AssemblerState::AwaitingPitch;
                None
            }
            AssemblerState::AwaitingPitch => {
                self.state = AssemblerState::AwaitingRoll;
                Some(WireMessage::from_words([self.roll, word]))
            }
        }
    }
}
