//! Build script for wardeck-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates console.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
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

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate console.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=console.toml");

    let config_path = Path::new("console.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: console.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds console.toml from the wardeck-firmware      ║\n\
            ║  directory. Create one (an empty file selects all defaults).     ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read console.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in console.toml                      ║\n\
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
    validate_sections(&config, &mut errors);
    validate_display(&config, &mut errors);
    validate_input(&config, &mut errors);
    validate_timing(&config, &mut errors);
    validate_defaults(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid console configuration                            ║\n\
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

    println!("cargo:warning=console.toml validated successfully");
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

/// Keys accepted per section; mirrors the boot-time parser
const SECTIONS: &[(&str, &[&str])] = &[
    ("display", &["kind", "address", "frequency_hz"]),
    (
        "input",
        &[
            "kind",
            "active_low",
            "debounce_ms",
            "settle_ms",
            "release_poll_ms",
            "joystick_low",
            "joystick_high",
        ],
    ),
    ("timing", &["menu_tick_ms", "running_tick_ms", "finished_tick_ms"]),
    ("defaults", &["attack_type", "timeout_s"]),
];

fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let root = match config.as_table() {
        Some(t) => t,
        None => return,
    };

    for (name, value) in root {
        let known = match SECTIONS.iter().find(|(section, _)| section == name) {
            Some((_, keys)) => keys,
            None => {
                errors.push(format!("unknown section or key '{}'", name));
                continue;
            }
        };

        let table = match value.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", name));
                continue;
            }
        };

        for key in table.keys() {
            if !known.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", name, key));
            }
        }
    }
}

fn section<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::value::Table> {
    config.get(name).and_then(|v| v.as_table())
}

/// Check an optional integer key against an inclusive range
fn check_int(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match table.get(key) {
        None => None,
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => Some(*v),
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            None
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
    }
}

/// Check an optional string key against a set of choices
fn check_choice(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    choices: &[&str],
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::String(s)) if choices.contains(&s.to_ascii_lowercase().as_str()) => {}
        Some(_) => errors.push(format!(
            "[{}] {} must be one of {}",
            section,
            key,
            choices.join(", ")
        )),
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = section(config, "display") else {
        return;
    };

    check_choice(display, "display", "kind", &["ssd1306", "lcd1602", "headless"], errors);
    check_int(display, "display", "address", 0x08, 0x77, errors);
    check_int(display, "display", "frequency_hz", 10_000, 1_000_000, errors);
}

fn validate_input(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(input) = section(config, "input") else {
        return;
    };

    check_choice(input, "input", "kind", &["buttons", "joystick"], errors);
    if let Some(v) = input.get("active_low") {
        if !v.is_bool() {
            errors.push("[input] active_low must be true or false".to_string());
        }
    }
    check_int(input, "input", "debounce_ms", 0, 1000, errors);
    check_int(input, "input", "settle_ms", 0, 5000, errors);
    check_int(input, "input", "release_poll_ms", 1, 1000, errors);
    let low = check_int(input, "input", "joystick_low", 0, 4095, errors).unwrap_or(1000);
    let high = check_int(input, "input", "joystick_high", 0, 4095, errors).unwrap_or(3000);
    if low >= high {
        errors.push("[input] joystick_low must be below joystick_high".to_string());
    }
}

fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(timing) = section(config, "timing") else {
        return;
    };

    for key in ["menu_tick_ms", "running_tick_ms", "finished_tick_ms"] {
        check_int(timing, "timing", key, 1, 10_000, errors);
    }
}

fn validate_defaults(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(defaults) = section(config, "defaults") else {
        return;
    };

    check_choice(
        defaults,
        "defaults",
        "attack_type",
        &["passive", "handshake", "pmkid", "dos"],
        errors,
    );
    if let Some(timeout) = check_int(defaults, "defaults", "timeout_s", 5, 255, errors) {
        if timeout % 5 != 0 {
            errors.push("[defaults] timeout_s must be a multiple of 5".to_string());
        }
    }
}
