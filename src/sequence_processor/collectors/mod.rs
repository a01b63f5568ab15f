mod sketch;

pub use sketch::SketchCollector;
