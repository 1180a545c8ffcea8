use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use thiserror::Error;

use super::model::{GdpDataset, GdpPoint};

// ---------------------------------------------------------------------------
// Typed loader errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("Missing required '{0}' column")]
    MissingColumn(&'static str),
    #[error("File contains no data rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a GDP time series from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `Year` and `GDP-Per` columns
/// * `.json` – records-oriented array (pandas `df.to_json(orient='records')`):
///   `[{ "Year": 1960, "GDP-Per": 2259.25 }, ...]`
pub fn load_file(path: &Path) -> Result<GdpDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming at least `Year` and `GDP-Per`.
/// Any other columns are ignored.
fn load_csv(path: &Path) -> Result<GdpDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

fn read_csv<R: Read>(reader: R) -> Result<GdpDataset> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers().context("reading CSV headers")?;
    for required in ["Year", "GDP-Per"] {
        if !headers.iter().any(|h| h == required) {
            bail!(LoadError::MissingColumn(required));
        }
    }

    let mut points = Vec::new();
    for (row_no, result) in reader.deserialize::<GdpPoint>().enumerate() {
        let point = result.with_context(|| format!("CSV row {row_no}"))?;
        points.push(point);
    }

    if points.is_empty() {
        bail!(LoadError::Empty);
    }
    Ok(GdpDataset::from_points(points))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<GdpDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let points: Vec<GdpPoint> =
        serde_json::from_str(&text).context("parsing JSON records")?;

    if points.is_empty() {
        bail!(LoadError::Empty);
    }
    Ok(GdpDataset::from_points(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_parses_required_columns() {
        let csv = "Year,GDP-Per,Country\n1960,2259.25,Canada\n1961,2240.43,Canada\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.lookup.get(&1961), Some(&2240.43));
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let csv = "Year,gdp\n1960,2259.25\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("GDP-Per"));
    }

    #[test]
    fn csv_malformed_value_names_the_row() {
        let csv = "Year,GDP-Per\n1960,2259.25\n1961,not-a-number\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("row 1"));
    }

    #[test]
    fn csv_without_rows_is_an_error() {
        let err = read_csv("Year,GDP-Per\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("no data rows"));
    }

    #[test]
    fn json_records_parse() {
        let json = r#"[{"Year": 1960, "GDP-Per": 2259.25}, {"Year": 1961, "GDP-Per": 2240.43}]"#;
        let points: Vec<GdpPoint> = serde_json::from_str(json).unwrap();
        let ds = GdpDataset::from_points(points);
        assert_eq!(ds.year_span(), Some((1960, 1961)));
    }
}
