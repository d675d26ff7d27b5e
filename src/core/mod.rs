// Core RAW8 semantics: constants, dates, modes and derived radiometry
pub mod constants;
pub mod date;
pub mod mode;
pub mod radiometry;

pub use date::{decode_date, DateError, FileDate};
pub use mode::{mode_label, MeasurementMode};
pub use radiometry::{black_body_radiance, planck, relative_irradiance};
