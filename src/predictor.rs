use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;

use crate::data::model::GdpDataset;
use crate::regression::PolynomialModel;

/// Polynomial degree used for the GDP fit.
pub const POLY_DEGREE: usize = 4;

// ---------------------------------------------------------------------------
// Predictor – exact lookup backed by a fitted polynomial
// ---------------------------------------------------------------------------

/// Answers year queries: recorded values for years present in the dataset,
/// model estimates for everything else.
///
/// Both the lookup table and the model are built from one dataset snapshot,
/// so they can never disagree about which years are "known".
#[derive(Debug, Clone)]
pub struct Predictor {
    lookup: BTreeMap<i32, f64>,
    model: PolynomialModel,
}

impl Predictor {
    /// Fit the polynomial and take the lookup table from the same snapshot.
    pub fn fit(dataset: &GdpDataset) -> Result<Self> {
        let years: Vec<f64> = dataset.points.iter().map(|p| f64::from(p.year)).collect();
        let values: Vec<f64> = dataset.points.iter().map(|p| p.gdp_per_capita).collect();
        let model = PolynomialModel::fit(&years, &values, POLY_DEGREE)?;

        Ok(Predictor {
            lookup: dataset.lookup.clone(),
            model,
        })
    }

    /// Lookup-first policy: prefer the recorded value whenever available,
    /// otherwise evaluate the polynomial.  Years outside the dataset range
    /// are silently extrapolated.
    pub fn predict(&self, year: i32) -> Prediction {
        match self.lookup.get(&year) {
            Some(&gdp) => Prediction {
                year,
                gdp_per_capita: gdp,
                source: PredictionSource::Recorded,
            },
            None => Prediction {
                year,
                gdp_per_capita: self.model.evaluate(f64::from(year)),
                source: PredictionSource::Model,
            },
        }
    }

    /// The fitted polynomial, used by the chart's prediction curve.
    pub fn model(&self) -> &PolynomialModel {
        &self.model
    }
}

// ---------------------------------------------------------------------------
// Prediction – one answered query
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    /// Exact value from the historical table.
    Recorded,
    /// Evaluated from the fitted polynomial.
    Model,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub year: i32,
    pub gdp_per_capita: f64,
    pub source: PredictionSource,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            PredictionSource::Recorded => {
                write!(f, "Year {}: actual GDP = {}", self.year, self.gdp_per_capita)
            }
            PredictionSource::Model => {
                write!(
                    f,
                    "Year {}: predicted GDP (model) = {:.2}",
                    self.year, self.gdp_per_capita
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::GdpPoint;

    fn sample_dataset() -> GdpDataset {
        // Loosely Canada-shaped growth, enough rows for a quartic.
        let points = (1960..=2000)
            .map(|year| {
                let t = f64::from(year - 1960);
                GdpPoint {
                    year,
                    gdp_per_capita: 2259.0 + 420.0 * t + 9.5 * t * t,
                }
            })
            .collect();
        GdpDataset::from_points(points)
    }

    #[test]
    fn recorded_years_return_the_exact_value() {
        let ds = sample_dataset();
        let predictor = Predictor::fit(&ds).unwrap();

        for p in &ds.points {
            let pred = predictor.predict(p.year);
            assert_eq!(pred.source, PredictionSource::Recorded);
            assert_eq!(pred.gdp_per_capita, p.gdp_per_capita);
        }
    }

    #[test]
    fn absent_years_fall_back_to_the_model() {
        let ds = sample_dataset();
        let predictor = Predictor::fit(&ds).unwrap();

        let pred = predictor.predict(2050);
        assert_eq!(pred.source, PredictionSource::Model);
        assert_eq!(pred.gdp_per_capita, predictor.model().evaluate(2050.0));
    }

    #[test]
    fn messages_tag_their_source() {
        let ds = sample_dataset();
        let predictor = Predictor::fit(&ds).unwrap();

        let recorded = predictor.predict(1960).to_string();
        assert_eq!(recorded, "Year 1960: actual GDP = 2259");

        let modeled = predictor.predict(2050).to_string();
        assert!(modeled.starts_with("Year 2050: predicted GDP (model) = "));
    }
}
