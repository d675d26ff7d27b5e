// Bit-packed acquisition date stored in the RAW8 `SPCfiledate` field

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DateError {
    #[error("Packed date {0} is not a valid calendar date")]
    OutOfRange(FileDate),
}

pub type Result<T> = std::result::Result<T, DateError>;

/// Date components as stored in the file, unvalidated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Unpack `SPCfiledate`.
///
/// Layout (MSB first): year in bits 20.., month 16..20, day 11..16,
/// hour 6..11, minute 0..6. Out-of-range components are kept as is.
pub fn decode_date(packed: u32) -> FileDate {
    FileDate {
        year: packed >> 20,
        month: (packed >> 16) & 0xF,
        day: (packed >> 11) & 0x1F,
        hour: (packed >> 6) & 0x1F,
        minute: packed & 0x3F,
    }
}

impl FileDate {
    /// Naive calendar timestamp; no timezone is applied
    pub fn to_datetime(&self) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year as i32, self.month, self.day)
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, 0))
            .ok_or(DateError::OutOfRange(*self))
    }
}

impl From<u32> for FileDate {
    fn from(packed: u32) -> Self {
        decode_date(packed)
    }
}

impl fmt::Display for FileDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
