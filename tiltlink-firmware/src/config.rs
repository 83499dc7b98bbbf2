//! Board configuration
//!
//! `BOARD` is generated by build.rs from board.toml, which is validated at
//! compile time. There is no runtime configuration.

use tiltlink_core::config::{AccelRange, PipelineConfig};

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
