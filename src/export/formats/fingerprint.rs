use crate::sequence_processor::ProcessingStats;
use crate::sketch::Fingerprint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerprintExport {
    pub path: String,
    pub hexdigest: String,
    pub parameters: FingerprintParameters,
    pub statistics: FingerprintStatistics,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashes: Option<Vec<u64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintParameters {
    pub kmer_size: usize,
    pub sketch_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintStatistics {
    pub sequences_processed: u64,
    pub too_short: u64,
    pub filled_slots: usize,
}

impl FingerprintExport {
    pub fn new(
        path: impl Into<String>,
        fingerprint: &Fingerprint,
        stats: &ProcessingStats,
        include_hashes: bool,
    ) -> Self {
        Self {
            path: path.into(),
            hexdigest: fingerprint.hexdigest(),
            parameters: FingerprintParameters {
                kmer_size: fingerprint.kmer_size(),
                sketch_size: fingerprint.sketch_size(),
            },
            statistics: FingerprintStatistics {
                sequences_processed: stats.processed,
                too_short: stats.too_short,
                filled_slots: fingerprint.filled(),
            },
            hashes: include_hashes.then(|| fingerprint.hashes().to_vec()),
        }
    }
}
