//! Long-form state × year emission panel.

use serde::{Deserialize, Serialize};
use tracing::info;

use raster_io::RasterIndex;

use crate::cache::CachedAggregator;
use crate::error::Result;

/// Tonnes per million tonnes; panel values are reported in Mt.
pub const TONNES_PER_MEGATONNE: f64 = 1e6;

/// One row of the panel: a state's emission total for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRow {
    /// State name
    pub state: String,
    /// Data year
    pub year: i32,
    /// Emission total in million tonnes
    pub emission_mt: f64,
}

/// Long-form table of (state, year, emission) rows covering every
/// indexed year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionPanel {
    rows: Vec<PanelRow>,
}

impl EmissionPanel {
    /// Aggregate every indexed year and concatenate the results.
    ///
    /// Rows are ordered year-ascending, states in boundary order
    /// within a year. All sums flow through the aggregator's cache,
    /// so building the panel after serving per-year requests (or vice
    /// versa) reuses prior work.
    pub fn build(index: &RasterIndex, aggregator: &CachedAggregator) -> Result<Self> {
        let boundaries = aggregator.boundaries();
        let mut rows = Vec::with_capacity(index.len() * boundaries.len());

        for (year, files) in index.iter() {
            let sums = aggregator.sums_for_year(year, files)?;
            for (boundary, &sum) in boundaries.iter().zip(sums.iter()) {
                rows.push(PanelRow {
                    state: boundary.name.clone(),
                    year,
                    emission_mt: sum / TONNES_PER_MEGATONNE,
                });
            }
        }

        info!(
            years = index.len(),
            states = boundaries.len(),
            rows = rows.len(),
            "built emission panel"
        );

        Ok(Self { rows })
    }

    /// All rows in build order.
    pub fn rows(&self) -> &[PanelRow] {
        &self.rows
    }

    /// Distinct state names, sorted.
    pub fn states(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rows.iter().map(|r| r.state.as_str()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.rows.iter().map(|r| r.year).collect();
        years.sort();
        years.dedup();
        years
    }

    /// Time series for one state, sorted by year.
    ///
    /// Returns an empty vector for an unknown state.
    pub fn state_series(&self, state: &str) -> Vec<&PanelRow> {
        let mut series: Vec<&PanelRow> = self.rows.iter().filter(|r| r.state == state).collect();
        series.sort_by_key(|r| r.year);
        series
    }

    /// All states for one year, sorted descending by emission (the
    /// bar-chart and table order).
    pub fn year_slice(&self, year: i32) -> Vec<&PanelRow> {
        let mut slice: Vec<&PanelRow> = self.rows.iter().filter(|r| r.year == year).collect();
        slice.sort_by(|a, b| b.emission_mt.total_cmp(&a.emission_mt));
        slice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> EmissionPanel {
        EmissionPanel {
            rows: vec![
                PanelRow {
                    state: "Kansas".into(),
                    year: 2019,
                    emission_mt: 10.0,
                },
                PanelRow {
                    state: "Texas".into(),
                    year: 2019,
                    emission_mt: 40.0,
                },
                PanelRow {
                    state: "Kansas".into(),
                    year: 2020,
                    emission_mt: 12.0,
                },
                PanelRow {
                    state: "Texas".into(),
                    year: 2020,
                    emission_mt: 38.0,
                },
            ],
        }
    }

    #[test]
    fn test_state_series_sorted_by_year() {
        let p = panel();
        let series = p.state_series("Kansas");
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].year, 2019);
        assert_eq!(series[1].year, 2020);
        assert!(p.state_series("Atlantis").is_empty());
    }

    #[test]
    fn test_year_slice_sorted_descending() {
        let p = panel();
        let slice = p.year_slice(2019);
        assert_eq!(slice[0].state, "Texas");
        assert_eq!(slice[1].state, "Kansas");
    }

    #[test]
    fn test_states_and_years() {
        let p = panel();
        assert_eq!(p.states(), vec!["Kansas", "Texas"]);
        assert_eq!(p.years(), vec![2019, 2020]);
    }
}
