pub mod distance;
pub mod fingerprint;
