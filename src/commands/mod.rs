pub mod dist;
pub mod sketch;
