//! Inter-core wire format
//!
//! This crate defines how an orientation crosses from the sensor core to the
//! display core. The link is a hardware FIFO of 32-bit unsigned words with no
//! floating-point support and no framing of its own, so both sides agree on
//! a fixed encoding out of band.
//!
//! # Wire Overview
//!
//! One message is exactly two consecutive words, always in this order:
//! ```text
//! ┌──────────────────────┬──────────────────────┐
//! │ WORD 0               │ WORD 1               │
//! │ roll  × 100 (i32)    │ pitch × 100 (i32)    │
//! └──────────────────────┴──────────────────────┘
//! ```
//!
//! Each angle is carried as a signed fixed-point integer in hundredths of a
//! degree, reinterpreted bit-for-bit as `u32` for the FIFO slot. There is no
//! tag, length or checksum: if the two sides ever disagree on the word count,
//! every later pair is silently shifted.

#![no_std]
#![deny(unsafe_code)]

pub mod wire;

pub use wire::{
    decode, encode, AssemblerState, Orientation, WireMessage, WordAssembler, FIXED_POINT_SCALE,
    WORDS_PER_MESSAGE,
};
