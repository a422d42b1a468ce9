//! # String Library
//!
//! Character-indexed string operations (字符串經)
//!
//! All positions are 1-based and count characters (Unicode scalar values),
//! so `length("中文")` is 2. Out-of-range positions and negative counts
//! never raise an error; they degrade to the empty string or 0 sentinel.
//! The algorithms work character by character on purpose, the way the
//! wenyan 字符串經 library defines them, rather than deferring to `str`
//! methods.

use tracing::trace;

use crate::error::{Result, WenError};
use crate::runtime::values::Value;

/// Code distance between the ASCII lowercase and uppercase ranges.
const CASE_SHIFT: u32 = 'a' as u32 - 'A' as u32;

/// String manipulation operations
pub struct StringOps;

impl StringOps {
    /// Character count; 0 for the empty string.
    pub fn length(s: &Value) -> Result<Value> {
        match s {
            Value::String(string) => Ok(Value::Int(string.chars().count() as i64)),
            _ => Err(WenError::Type("length() requires a string".to_string())),
        }
    }

    /// `a` followed by `b`; the empty string is the identity.
    pub fn concat(a: &Value, b: &Value) -> Result<Value> {
        match (a, b) {
            (Value::String(s1), Value::String(s2)) => {
                Ok(Value::String(format!("{}{}", s1, s2)))
            }
            _ => Err(WenError::Type("concat() requires two strings".to_string())),
        }
    }

    /// Lexicographic order by code point: -1, 0 or 1.
    ///
    /// The comparison is pinned to code-point order explicitly instead of
    /// relying on the host string ordering.
    pub fn compare(a: &Value, b: &Value) -> Result<Value> {
        match (a, b) {
            (Value::String(s1), Value::String(s2)) => {
                Ok(Value::Int(compare_impl(s1, s2)))
            }
            _ => Err(WenError::Type("compare() requires two strings".to_string())),
        }
    }

    pub fn is_empty(s: &Value) -> Result<Value> {
        match s {
            Value::String(string) => Ok(Value::Bool(string.chars().next().is_none())),
            _ => Err(WenError::Type("is_empty() requires a string".to_string())),
        }
    }

    /// Character at 1-based `position`, or "" when the position is out of
    /// range or the string is empty.
    pub fn char_at(s: &Value, position: &Value) -> Result<Value> {
        match (s, position) {
            (Value::String(string), Value::Int(position)) => {
                let chars: Vec<char> = string.chars().collect();
                let result = match char_at_impl(&chars, *position) {
                    Some(c) => c.to_string(),
                    None => String::new(),
                };
                Ok(Value::String(result))
            }
            _ => Err(WenError::Type(
                "char_at() requires a string and an integer position".to_string(),
            )),
        }
    }

    /// Characters from 1-based `start` to `end` inclusive.
    ///
    /// Bounds are clamped before extraction: `start` below 1 becomes 1,
    /// `end` past the last character becomes the length. A clamped range
    /// with `start > end` yields "".
    pub fn substring(s: &Value, start: &Value, end: &Value) -> Result<Value> {
        match (s, start, end) {
            (Value::String(string), Value::Int(start), Value::Int(end)) => {
                let chars: Vec<char> = string.chars().collect();
                Ok(Value::String(substring_impl(&chars, *start, *end)))
            }
            _ => Err(WenError::Type(
                "substring() requires a string and two integer positions".to_string(),
            )),
        }
    }

    /// True when `needle` occurs in `haystack`; the empty needle always
    /// matches.
    pub fn contains(haystack: &Value, needle: &Value) -> Result<Value> {
        match (haystack, needle) {
            (Value::String(hay), Value::String(needle)) => {
                Ok(Value::Bool(scan_impl(hay, needle) != 0))
            }
            _ => Err(WenError::Type("contains() requires two strings".to_string())),
        }
    }

    /// 1-based position of the first occurrence of `needle`, 0 when absent;
    /// the empty needle matches at position 1.
    pub fn find(haystack: &Value, needle: &Value) -> Result<Value> {
        match (haystack, needle) {
            (Value::String(hay), Value::String(needle)) => {
                Ok(Value::Int(scan_impl(hay, needle)))
            }
            _ => Err(WenError::Type("find() requires two strings".to_string())),
        }
    }

    /// `s` concatenated with itself `count` times; `count` below 1 yields "".
    pub fn repeat(s: &Value, count: &Value) -> Result<Value> {
        match (s, count) {
            (Value::String(string), Value::Int(count)) => {
                Ok(Value::String(repeat_impl(string, *count)))
            }
            _ => Err(WenError::Type(
                "repeat() requires a string and an integer count".to_string(),
            )),
        }
    }

    /// Strips leading and trailing ASCII spaces only, not tabs or newlines.
    pub fn trim(s: &Value) -> Result<Value> {
        match s {
            Value::String(string) => {
                let chars: Vec<char> = string.chars().collect();
                Ok(Value::String(trim_impl(&chars)))
            }
            _ => Err(WenError::Type("trim() requires a string".to_string())),
        }
    }

    /// True iff the value is a single character in `a`-`z`.
    pub fn is_lower(c: &Value) -> Result<Value> {
        match c {
            Value::String(string) => {
                Ok(Value::Bool(single_char(string).is_some_and(is_lower_impl)))
            }
            _ => Err(WenError::Type("is_lower() requires a string".to_string())),
        }
    }

    /// True iff the value is a single character in `A`-`Z`.
    pub fn is_upper(c: &Value) -> Result<Value> {
        match c {
            Value::String(string) => {
                Ok(Value::Bool(single_char(string).is_some_and(is_upper_impl)))
            }
            _ => Err(WenError::Type("is_upper() requires a string".to_string())),
        }
    }

    /// Uppercases a single lowercase ASCII letter; anything else passes
    /// through unchanged.
    pub fn to_upper_char(c: &Value) -> Result<Value> {
        match c {
            Value::String(string) => {
                let result = match single_char(string) {
                    Some(c) => to_upper_impl(c).to_string(),
                    None => string.clone(),
                };
                Ok(Value::String(result))
            }
            _ => Err(WenError::Type("to_upper_char() requires a string".to_string())),
        }
    }

    /// Lowercases a single uppercase ASCII letter; anything else passes
    /// through unchanged.
    pub fn to_lower_char(c: &Value) -> Result<Value> {
        match c {
            Value::String(string) => {
                let result = match single_char(string) {
                    Some(c) => to_lower_impl(c).to_string(),
                    None => string.clone(),
                };
                Ok(Value::String(result))
            }
            _ => Err(WenError::Type("to_lower_char() requires a string".to_string())),
        }
    }

    /// Uppercases every ASCII letter; other characters pass through.
    pub fn to_upper(s: &Value) -> Result<Value> {
        match s {
            Value::String(string) => {
                let chars: Vec<char> = string.chars().collect();
                Ok(Value::String(convert_impl(&chars, to_upper_impl)))
            }
            _ => Err(WenError::Type("to_upper() requires a string".to_string())),
        }
    }

    /// Lowercases every ASCII letter; other characters pass through.
    pub fn to_lower(s: &Value) -> Result<Value> {
        match s {
            Value::String(string) => {
                let chars: Vec<char> = string.chars().collect();
                Ok(Value::String(convert_impl(&chars, to_lower_impl)))
            }
            _ => Err(WenError::Type("to_lower() requires a string".to_string())),
        }
    }
}

fn compare_impl(a: &str, b: &str) -> i64 {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return 0,
            (None, Some(_)) => return -1,
            (Some(_), None) => return 1,
            (Some(x), Some(y)) => {
                if x < y {
                    return -1;
                }
                if x > y {
                    return 1;
                }
            }
        }
    }
}

fn char_at_impl(chars: &[char], position: i64) -> Option<char> {
    if position < 1 || position > chars.len() as i64 {
        return None;
    }
    Some(chars[position as usize - 1])
}

fn substring_impl(chars: &[char], start: i64, end: i64) -> String {
    let length = chars.len() as i64;
    let start = start.max(1);
    let end = end.min(length);
    if length == 0 || start > end {
        return String::new();
    }
    if start == 1 && end == length {
        return chars.iter().collect();
    }
    if start == end {
        return match char_at_impl(chars, start) {
            Some(c) => c.to_string(),
            None => String::new(),
        };
    }
    let mut result = String::new();
    let mut position = start;
    while position <= end {
        if let Some(c) = char_at_impl(chars, position) {
            result.push(c);
        }
        position += 1;
    }
    result
}

/// First 1-based position where `needle` occurs in `haystack`, 0 when it
/// never does. Shared by `contains` and `find`.
///
/// Intentionally the naive scan: every candidate start position extracts a
/// needle-length window and compares it whole.
fn scan_impl(haystack: &str, needle: &str) -> i64 {
    if needle.is_empty() {
        return 1;
    }
    if haystack.is_empty() {
        return 0;
    }
    if haystack == needle {
        return 1;
    }
    let hay: Vec<char> = haystack.chars().collect();
    let hay_length = hay.len() as i64;
    let needle_length = needle.chars().count() as i64;
    if needle_length > hay_length {
        return 0;
    }
    let mut position = 1;
    while position + needle_length - 1 <= hay_length {
        let window = substring_impl(&hay, position, position + needle_length - 1);
        if window == needle {
            trace!(position, "needle matched");
            return position;
        }
        position += 1;
    }
    0
}

fn repeat_impl(s: &str, count: i64) -> String {
    if count < 1 {
        return String::new();
    }
    if count == 1 {
        return s.to_string();
    }
    if s.is_empty() {
        return String::new();
    }
    let mut result = String::new();
    let mut done = 1;
    while done <= count {
        result.push_str(s);
        done += 1;
    }
    result
}

fn trim_impl(chars: &[char]) -> String {
    let length = chars.len() as i64;
    if length == 0 {
        return String::new();
    }
    let mut start = 1;
    while start <= length && char_at_impl(chars, start) == Some(' ') {
        start += 1;
    }
    // all spaces
    if start > length {
        return String::new();
    }
    let mut end = length;
    while end >= start && char_at_impl(chars, end) == Some(' ') {
        end -= 1;
    }
    substring_impl(chars, start, end)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn is_lower_impl(c: char) -> bool {
    ('a'..='z').contains(&c)
}

fn is_upper_impl(c: char) -> bool {
    ('A'..='Z').contains(&c)
}

fn to_upper_impl(c: char) -> char {
    if is_lower_impl(c) {
        char::from_u32(c as u32 - CASE_SHIFT).unwrap_or(c)
    } else {
        c
    }
}

fn to_lower_impl(c: char) -> char {
    if is_upper_impl(c) {
        char::from_u32(c as u32 + CASE_SHIFT).unwrap_or(c)
    } else {
        c
    }
}

fn convert_impl(chars: &[char], convert: fn(char) -> char) -> String {
    let length = chars.len() as i64;
    let mut result = String::new();
    let mut position = 1;
    while position <= length {
        if let Some(c) = char_at_impl(chars, position) {
            result.push(convert(c));
        }
        position += 1;
    }
    result
}
