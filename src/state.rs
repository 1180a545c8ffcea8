use std::ops::RangeInclusive;

use crate::data::model::GdpDataset;
use crate::predictor::{Prediction, Predictor};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<GdpDataset>,

    /// Lookup table + fitted polynomial, rebuilt whenever a dataset loads.
    pub predictor: Option<Predictor>,

    /// Year currently entered in the query widget.
    pub year_input: i32,

    /// Result of the last "Predict GDP" click.
    pub prediction: Option<Prediction>,

    /// Whether the raw data table is shown above the chart.
    pub show_raw_data: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            predictor: None,
            year_input: 2000,
            prediction: None,
            show_raw_data: false,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Upper bound of the year query widget.
    pub const MAX_QUERY_YEAR: i32 = 2100;

    /// Ingest a newly loaded dataset and fit the predictor from the same
    /// snapshot.  A failed fit leaves the dataset viewable and reports the
    /// error through the status line.
    pub fn set_dataset(&mut self, dataset: GdpDataset) {
        match Predictor::fit(&dataset) {
            Ok(predictor) => {
                self.predictor = Some(predictor);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to fit model: {e:#}");
                self.predictor = None;
                self.status_message = Some(format!("Fit error: {e:#}"));
            }
        }

        self.year_input = dataset
            .year_span()
            .map(|(first, _)| first)
            .unwrap_or(self.year_input);
        self.prediction = None;
        self.dataset = Some(dataset);
        self.loading = false;
    }

    /// Allowed range for the year widget: first dataset year through 2100.
    pub fn year_bounds(&self) -> RangeInclusive<i32> {
        let first = self
            .dataset
            .as_ref()
            .and_then(|ds| ds.year_span())
            .map(|(first, _)| first)
            .unwrap_or(1900);
        first..=Self::MAX_QUERY_YEAR
    }

    /// Answer the current year query.  No-op until a predictor exists.
    pub fn run_prediction(&mut self) {
        if let Some(predictor) = &self.predictor {
            self.prediction = Some(predictor.predict(self.year_input));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::GdpPoint;
    use crate::predictor::PredictionSource;

    #[test]
    fn set_dataset_fits_and_resets_the_query() {
        let points = (1960..=1990)
            .map(|year| GdpPoint {
                year,
                gdp_per_capita: 2000.0 + 300.0 * f64::from(year - 1960),
            })
            .collect();

        let mut state = AppState::default();
        state.set_dataset(GdpDataset::from_points(points));

        assert!(state.predictor.is_some());
        assert!(state.status_message.is_none());
        assert_eq!(state.year_input, 1960);
        assert_eq!(state.year_bounds(), 1960..=AppState::MAX_QUERY_YEAR);

        state.run_prediction();
        let pred = state.prediction.unwrap();
        assert_eq!(pred.source, PredictionSource::Recorded);
        assert_eq!(pred.gdp_per_capita, 2000.0);
    }

    #[test]
    fn too_small_dataset_reports_a_fit_error() {
        let points = vec![
            GdpPoint { year: 1960, gdp_per_capita: 2259.0 },
            GdpPoint { year: 1961, gdp_per_capita: 2240.0 },
        ];

        let mut state = AppState::default();
        state.set_dataset(GdpDataset::from_points(points));

        assert!(state.predictor.is_none());
        assert!(state.dataset.is_some());
        assert!(state.status_message.as_deref().unwrap().starts_with("Fit error"));
    }
}
