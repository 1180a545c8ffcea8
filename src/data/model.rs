use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GdpPoint – one row of the source table
// ---------------------------------------------------------------------------

/// A single observation: one year of GDP per capita.
///
/// Field names are mapped to the `Year` / `GDP-Per` columns the source
/// files use, so the same type deserializes from both CSV and JSON records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GdpPoint {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "GDP-Per")]
    pub gdp_per_capita: f64,
}

// ---------------------------------------------------------------------------
// GdpDataset – the complete loaded time series
// ---------------------------------------------------------------------------

/// The full parsed dataset with a pre-computed exact-value lookup.
#[derive(Debug, Clone)]
pub struct GdpDataset {
    /// All rows, in file order.
    pub points: Vec<GdpPoint>,
    /// Year → recorded GDP per capita. On duplicate years the last row wins.
    pub lookup: BTreeMap<i32, f64>,
}

impl GdpDataset {
    /// Build the lookup index from the loaded rows.
    pub fn from_points(points: Vec<GdpPoint>) -> Self {
        let lookup = points
            .iter()
            .map(|p| (p.year, p.gdp_per_capita))
            .collect();
        GdpDataset { points, lookup }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Inclusive (first, last) year of the series, if any rows are loaded.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = *self.lookup.keys().next()?;
        let last = *self.lookup.keys().next_back()?;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year: i32, gdp: f64) -> GdpPoint {
        GdpPoint {
            year,
            gdp_per_capita: gdp,
        }
    }

    #[test]
    fn lookup_keeps_last_duplicate() {
        let ds = GdpDataset::from_points(vec![
            point(1990, 21_500.0),
            point(1991, 21_800.0),
            point(1990, 21_600.0),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.lookup.get(&1990), Some(&21_600.0));
    }

    #[test]
    fn year_span_covers_unsorted_input() {
        let ds = GdpDataset::from_points(vec![
            point(2000, 24_200.0),
            point(1960, 2_259.0),
            point(1980, 11_200.0),
        ]);
        assert_eq!(ds.year_span(), Some((1960, 2000)));
        assert_eq!(GdpDataset::from_points(Vec::new()).year_span(), None);
    }
}
