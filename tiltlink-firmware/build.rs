//! Build script for tiltlink-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time
//! - Generates the board configuration constant from board.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let board = validate_config();
    generate_board_config(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated contents of board.toml
struct BoardSettings {
    bus_frequency_hz: i64,
    sensor_address: i64,
    accel_range_g: i64,
    verify_identity: bool,
    display_address: i64,
    interval_ms: i64,
}

/// Validate board.toml configuration at compile time
fn validate_config() -> BoardSettings {
    // Re-run if board.toml changes
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the tiltlink-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let bus_frequency_hz = integer(&config, "bus", "frequency_hz", &mut errors);
    if !(10_000..=1_000_000).contains(&bus_frequency_hz) {
        errors.push("[bus] frequency_hz must be 10000-1000000".to_string());
    }

    let sensor_address = integer(&config, "sensor", "address", &mut errors);
    if ![0x68, 0x69].contains(&sensor_address) {
        errors.push("[sensor] address must be 0x68 or 0x69".to_string());
    }

    let accel_range_g = integer(&config, "sensor", "accel_range_g", &mut errors);
    if ![2, 4, 8, 16].contains(&accel_range_g) {
        errors.push("[sensor] accel_range_g must be 2, 4, 8 or 16".to_string());
    }

    let verify_identity = match section(&config, "sensor").and_then(|s| s.get("verify_identity"))
    {
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push("[sensor] verify_identity must be true or false".to_string());
            true
        }
        None => true,
    };

    let display_address = integer(&config, "display", "address", &mut errors);
    if ![0x3C, 0x3D].contains(&display_address) {
        errors.push("[display] address must be 0x3C or 0x3D".to_string());
    }

    let interval_ms = integer(&config, "sampling", "interval_ms", &mut errors);
    if !(1..=60_000).contains(&interval_ms) {
        errors.push("[sampling] interval_ms must be 1-60000".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=board.toml validated successfully");

    BoardSettings {
        bus_frequency_hz,
        sensor_address,
        accel_range_g,
        verify_identity,
        display_address,
        interval_ms,
    }
}

/// Look up a top-level table
fn section<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::value::Table> {
    config.get(name).and_then(|s| s.as_table())
}

/// Look up a required integer, recording an error if it is missing
fn integer(config: &toml::Value, table: &str, key: &str, errors: &mut Vec<String>) -> i64 {
    let Some(section) = section(config, table) else {
        errors.push(format!("Missing [{}] section", table));
        return -1;
    };
    match section.get(key) {
        Some(toml::Value::Integer(value)) => *value,
        Some(_) => {
            errors.push(format!("[{}] '{}' must be an integer", table, key));
            -1
        }
        None => {
            errors.push(format!("[{}] missing '{}'", table, key));
            -1
        }
    }
}

/// Write board_config.rs into OUT_DIR
fn generate_board_config(board: &BoardSettings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let source = format!(
        "/// Board configuration generated from board.toml\n\
         pub const BOARD: PipelineConfig = PipelineConfig {{\n\
         \x20   sample_interval_ms: {},\n\
         \x20   accel_range: AccelRange::G{},\n\
         \x20   sensor_address: {:#04x},\n\
         \x20   display_address: {:#04x},\n\
         \x20   bus_frequency_hz: {},\n\
         \x20   verify_identity: {},\n\
         }};\n",
        board.interval_ms,
        board.accel_range_g,
        board.sensor_address,
        board.display_address,
        board.bus_frequency_hz,
        board.verify_identity,
    );

    fs::write(out_dir.join("board_config.rs"), source).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
