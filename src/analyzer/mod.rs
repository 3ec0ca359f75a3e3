pub mod increment;

pub use increment::{aggregate, IncrementReport, UnclassifiedCommit};
