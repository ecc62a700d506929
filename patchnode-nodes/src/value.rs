mod config;
mod zip_values;

pub use config::{AbsentPositions, ZipValuesConfig};
pub use zip_values::{ZipValues, ZipValuesError, ZipValuesInput};
