//! Flat-file persistence for country catalogues
//!
//! Data files hold one country per line as four comma-separated fields:
//! name, continent, population, area. Blank lines are skipped and
//! whitespace around fields is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use gazetteer_catalogue::{Country, CountryCatalogue};
use tracing::{debug, info};

use crate::error::StorageError;

/// Read a catalogue from a comma-separated data file
///
/// Countries appear in the catalogue in file order. Returns a parse error
/// naming the offending line if any record is malformed.
pub fn read_catalogue(path: impl AsRef<Path>) -> Result<CountryCatalogue, StorageError> {
    let path = path.as_ref();
    debug!(path = ?path, "Reading catalogue data file");

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut catalogue = CountryCatalogue::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        catalogue.add(parse_line(&line, index + 1)?);
    }

    info!(path = ?path, count = catalogue.len(), "Loaded catalogue");
    Ok(catalogue)
}

/// Write a catalogue as a comma-separated data file
///
/// The output can be read back with [`read_catalogue`].
pub fn write_catalogue(
    path: impl AsRef<Path>,
    catalogue: &CountryCatalogue,
) -> Result<(), StorageError> {
    let path = path.as_ref();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for country in catalogue {
        writeln!(writer, "{}", data_line(country))?;
    }
    writer.flush()?;

    info!(path = ?path, count = catalogue.len(), "Wrote catalogue data file");
    Ok(())
}

/// Write a catalogue as a human-readable listing, one display line per country
pub fn write_listing(
    path: impl AsRef<Path>,
    catalogue: &CountryCatalogue,
) -> Result<(), StorageError> {
    let path = path.as_ref();
    std::fs::write(path, catalogue.to_string())?;

    info!(path = ?path, count = catalogue.len(), "Wrote catalogue listing");
    Ok(())
}

/// Render a country as one data file line
pub fn data_line(country: &Country) -> String {
    format!(
        "{},{},{},{}",
        country.name, country.continent, country.population, country.area
    )
}

/// Parse one data file line into a country
///
/// `number` is the 1-based line number used in parse errors.
fn parse_line(line: &str, number: usize) -> Result<Country, StorageError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(StorageError::parse(
            number,
            format!("Expected 4 comma-separated fields, got {}", fields.len()),
        ));
    }

    let name = fields[0].trim();
    let continent = fields[1].trim();
    let population = fields[2]
        .trim()
        .parse::<u64>()
        .map_err(|e| StorageError::parse(number, format!("Invalid population: {e}")))?;
    let area = fields[3]
        .trim()
        .parse::<f64>()
        .map_err(|e| StorageError::parse(number, format!("Invalid area: {e}")))?;

    Ok(Country::new(name, continent, population, area))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_reads_four_fields() {
        let country = parse_line("Canada,North America,34207000,9976140.0", 1).unwrap();
        assert_eq!(country, Country::new("Canada", "North America", 34_207_000, 9_976_140.0));
    }

    #[test]
    fn test_parse_line_trims_whitespace() {
        let country = parse_line(" Japan , Asia , 127560000 , 377835 ", 1).unwrap();
        assert_eq!(country, Country::new("Japan", "Asia", 127_560_000, 377_835.0));
    }

    #[test]
    fn test_parse_line_rejects_short_records() {
        let err = parse_line("Canada,North America", 3).unwrap_err();
        assert!(matches!(err, StorageError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_parse_line_rejects_bad_population() {
        let err = parse_line("Canada,North America,many,9976140.0", 2).unwrap_err();
        assert!(matches!(err, StorageError::Parse { line: 2, .. }));
        assert!(err.to_string().contains("population"));
    }

    #[test]
    fn test_parse_line_rejects_bad_area() {
        let err = parse_line("Canada,North America,34207000,vast", 5).unwrap_err();
        assert!(matches!(err, StorageError::Parse { line: 5, .. }));
        assert!(err.to_string().contains("area"));
    }

    #[test]
    fn test_data_line_round_trips_through_parse() {
        let country = Country::new("Canada", "North America", 34_207_000, 9_976_140.0);
        let parsed = parse_line(&data_line(&country), 1).unwrap();
        assert_eq!(parsed, country);
    }
}
