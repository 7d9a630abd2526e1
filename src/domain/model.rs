use crate::core::format::format_timestamp;
use crate::core::pad::pad;
use crate::utils::error::{Result, StampError};
use crate::utils::validation::{validate_range, Validate};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 六個時間欄位，不做任何日曆檢查。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Timestamp {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// 目前的本地時間
    pub fn now() -> Self {
        Local::now().naive_local().into()
    }

    pub fn format(&self) -> String {
        format_timestamp(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// 嚴格模式：轉成 chrono 的 `NaiveDateTime`，不合法的日期會回傳錯誤
    pub fn to_naive_datetime(&self) -> Result<NaiveDateTime> {
        validate_range("month", self.month, 1, 12)?;
        validate_range("hour", self.hour, 0, 23)?;
        validate_range("minute", self.minute, 0, 59)?;
        validate_range("second", self.second, 0, 59)?;

        if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none() {
            return Err(StampError::InvalidComponent {
                field: "year".to_string(),
                value: self.year.to_string(),
                reason: format!(
                    "Year must be between {} and {}",
                    NaiveDate::MIN.year(),
                    NaiveDate::MAX.year()
                ),
            });
        }

        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            StampError::InvalidComponent {
                field: "day".to_string(),
                value: self.day.to_string(),
                reason: format!(
                    "Day does not exist in {}-{}",
                    self.year,
                    pad(self.month, 2)
                ),
            }
        })?;

        date.and_hms_opt(self.hour, self.minute, self.second)
            .ok_or_else(|| StampError::InvalidComponent {
                field: "time".to_string(),
                value: format!("{}:{}:{}", self.hour, self.minute, self.second),
                reason: "Time of day is out of range".to_string(),
            })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
        )
    }
}

impl Validate for Timestamp {
    fn validate(&self) -> Result<()> {
        if let Err(e) = self.to_naive_datetime() {
            tracing::debug!("Rejected timestamp {}: {}", self, e);
            return Err(e);
        }
        Ok(())
    }
}
