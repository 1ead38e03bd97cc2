//! Text formatting for menu output.
//!
//! Writers take any `io::Write` so tests can render into a `Vec<u8>`.

use crate::catalog::MonkeySpecies;
use std::io::{self, Write};

/// Format an integer with comma thousands separators (`200000` → `200,000`).
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Coordinates with one decimal place, latitude first.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.1}, {longitude:.1}")
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Monkey App Menu:")?;
    writeln!(out, "1. List all monkeys")?;
    writeln!(out, "2. Get details for a specific monkey by name")?;
    writeln!(out, "3. Get a random monkey")?;
    writeln!(out, "4. Exit app")?;
    write!(out, "Select an option (1-4): ")?;
    out.flush()
}

/// Table of every species: index, name, location, population.
pub fn write_species_table<W: Write>(out: &mut W, species: &[MonkeySpecies]) -> io::Result<()> {
    writeln!(
        out,
        "| #  | Name                 | Location                        | Population |"
    )?;
    writeln!(
        out,
        "|----|----------------------|---------------------------------|------------|"
    )?;
    for (idx, entry) in species.iter().enumerate() {
        writeln!(
            out,
            "| {:<2} | {:<20} | {:<31} | {:>10} |",
            idx + 1,
            entry.name,
            entry.location,
            group_digits(entry.population)
        )?;
    }
    Ok(())
}

pub fn write_species_details<W: Write>(out: &mut W, species: &MonkeySpecies) -> io::Result<()> {
    writeln!(out, "Name: {}", species.name)?;
    writeln!(out, "Location: {}", species.location)?;
    writeln!(out, "Population: {}", group_digits(species.population))?;
    writeln!(
        out,
        "Coordinates: {}",
        format_coordinates(species.latitude, species.longitude)
    )?;
    writeln!(out, "Details: {}", species.details)?;
    if !species.image.is_empty() {
        writeln!(out, "Image: {}", species.image)?;
    }
    Ok(())
}

/// Miss message followed by every known name as a recovery aid.
pub fn write_not_found<'a, W, I>(out: &mut W, query: &str, names: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    writeln!(out, "Monkey '{}' not found.", query.trim())?;
    writeln!(out, "Available monkeys:")?;
    for name in names {
        writeln!(out, "  - {name}")?;
    }
    Ok(())
}
