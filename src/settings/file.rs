//! Settings file persistence.
//!
//! One line, comma separated: `length,number,upper,lower,digits,symbols`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;

const FIELDS: usize = 6;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(format_line(settings).as_bytes())?;
    debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !path.exists() {
        return save(settings);
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !parse_line(line.trim(), settings) {
        warn!("malformed settings in {}, rewriting defaults", path.display());
        *settings = Settings::default();
        save(settings)?;
    }

    Ok(())
}

fn format_line(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.include_upper,
        settings.include_lower,
        settings.include_digits,
        settings.include_symbols,
    )
}

/// Fill `settings` from a saved line. Returns false if the line is unusable;
/// individual fields that fail to parse keep their current value.
fn parse_line(line: &str, settings: &mut Settings) -> bool {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.include_upper = parts[2].parse().unwrap_or(settings.include_upper);
    settings.include_lower = parts[3].parse().unwrap_or(settings.include_lower);
    settings.include_digits = parts[4].parse().unwrap_or(settings.include_digits);
    settings.include_symbols = parts[5].parse().unwrap_or(settings.include_symbols);
    true
}

#[inline]
fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/strongpass/settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_round_trips() {
        let settings = Settings {
            pass_length: 24,
            number_of_passwords: 3,
            include_upper: false,
            include_lower: true,
            include_digits: true,
            include_symbols: false,
        };
        let line = format_line(&settings);
        assert_eq!(line, "24,3,false,true,true,false\n");

        let mut parsed = Settings::default();
        assert!(parse_line(line.trim(), &mut parsed));
        assert_eq!(parsed, settings);
    }

    #[test]
    fn bad_fields_keep_current_values() {
        let mut settings = Settings::default();
        assert!(parse_line("abc,2,yes,false,true,true", &mut settings));
        assert_eq!(settings.pass_length, Settings::default().pass_length);
        assert_eq!(settings.number_of_passwords, 2);
        assert!(settings.include_upper);
        assert!(!settings.include_lower);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let mut settings = Settings::default();
        assert!(!parse_line("12,1,true", &mut settings));
        assert!(!parse_line("", &mut settings));
        assert_eq!(settings, Settings::default());
    }
}
