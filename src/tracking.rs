mod run;

pub use run::{TrackingError, TrackingRun};
