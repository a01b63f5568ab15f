use serde::{Deserialize, Serialize};

/// One row of a distance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceExport {
    pub query: String,
    pub reference: String,
    pub distance: f64,
    /// True when `distance` is the mean of both comparison directions.
    pub symmetric: bool,
}

impl DistanceExport {
    pub fn to_tsv_row(&self) -> String {
        format!("{}\t{}\t{:.6}", self.query, self.reference, self.distance)
    }
}
