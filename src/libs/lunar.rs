//! # Lunar Calendar Library
//!
//! Gregorian-to-lunar lookup tables (農曆)
//!
//! Pure table lookups, no astronomical computation. The new-year table
//! covers a fixed set of documented years; a year outside the table yields
//! the 0 sentinel, an ordinal outside the name tables yields "".

use std::collections::HashMap;

use tracing::trace;

use crate::error::{Result, WenError};
use crate::runtime::values::Value;

/// Lunar new year dates keyed by Gregorian year, encoded month * 100 + day
/// (131 is January 31).
const NEW_YEAR_DATES: &[(i64, i64)] = &[
    (1900, 131),
    (1901, 219),
    (1902, 208),
    (1920, 220),
    (2000, 205),
    (2010, 214),
    (2011, 203),
    (2012, 123),
    (2013, 210),
    (2014, 131),
    (2015, 219),
    (2016, 208),
    (2017, 128),
    (2018, 216),
    (2019, 205),
    (2020, 125),
    (2021, 212),
    (2022, 201),
    (2023, 122),
    (2024, 210),
    (2025, 129),
];

/// Traditional month names; the first month is 正月, the last 臘月.
const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月",
    "七月", "八月", "九月", "十月", "十一月", "臘月",
];

/// Traditional day names for the 30 days of a lunar month.
const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

lazy_static::lazy_static! {
    /// Year-indexed view of the new year table
    static ref NEW_YEAR_BY_YEAR: HashMap<i64, i64> =
        NEW_YEAR_DATES.iter().copied().collect();
}

/// Lunar calendar lookups
pub struct LunarOps;

impl LunarOps {
    /// Lunar new year date for a Gregorian year, encoded month * 100 + day
    /// (1900 maps to 131, January 31). Years outside the table yield 0.
    pub fn new_year_date(year: &Value) -> Result<Value> {
        match year {
            Value::Int(year) => {
                let date = NEW_YEAR_BY_YEAR.get(year).copied().unwrap_or(0);
                if date == 0 {
                    trace!(year = *year, "no lunar new year entry");
                }
                Ok(Value::Int(date))
            }
            _ => Err(WenError::Type(
                "new_year_date() requires an integer year".to_string(),
            )),
        }
    }

    /// Traditional name of lunar month 1..=12; "" for any other ordinal.
    pub fn month_name(month: &Value) -> Result<Value> {
        match month {
            Value::Int(month) => Ok(Value::String(lookup_name(&MONTH_NAMES, *month))),
            _ => Err(WenError::Type(
                "month_name() requires an integer month".to_string(),
            )),
        }
    }

    /// Traditional name of lunar day 1..=30; "" for any other ordinal.
    pub fn day_name(day: &Value) -> Result<Value> {
        match day {
            Value::Int(day) => Ok(Value::String(lookup_name(&DAY_NAMES, *day))),
            _ => Err(WenError::Type(
                "day_name() requires an integer day".to_string(),
            )),
        }
    }
}

fn lookup_name(names: &[&str], ordinal: i64) -> String {
    if ordinal < 1 || ordinal > names.len() as i64 {
        return String::new();
    }
    names[ordinal as usize - 1].to_string()
}
