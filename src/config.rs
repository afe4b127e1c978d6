use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;
use crate::splitter::Splitter;

/// One entry of a bulk split configuration.
///
/// Every field is optional and may hold any JSON value; see
/// [SplitRecord::payload], [SplitRecord::weight] and [SplitRecord::params]
/// for how each is interpreted. The field names `object` and `split` are
/// accepted as aliases for `payload` and `weight`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SplitRecord {
    #[serde(default, alias = "object")]
    payload: Option<Value>,
    #[serde(default, alias = "split")]
    weight: Option<Value>,
    #[serde(default)]
    params: Option<Value>
}

impl SplitRecord {
    /// Build a record from raw values.
    pub fn new(payload: Option<Value>, weight: Option<Value>, params: Option<Value>) -> SplitRecord {
        SplitRecord { payload, weight, params }
    }

    /// The payload, trimmed. Missing or non-string payloads become `""`.
    pub fn payload(&self) -> String {
        match &self.payload {
            Some(Value::String(s)) => s.trim().to_string(),
            _ => String::new()
        }
    }

    /// The weight as a number.
    ///
    /// Numbers are used as-is, strings are read by their leading numeric
    /// prefix (`"12.5%"` is 12.5), `true` is 1.0 and anything else is 0.0.
    pub fn weight(&self) -> f64 {
        match &self.weight {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => leading_number(s),
            Some(Value::Bool(true)) => 1.0,
            _ => 0.0
        }
    }

    /// The params, if present and not null.
    pub fn params(&self) -> Option<Value> {
        match &self.params {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.clone())
        }
    }
}

/// Parse the longest numeric prefix of a string, ignoring leading whitespace.
fn leading_number(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
        end += 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break
        }
        end += 1;
    }

    if !seen_digit {
        return 0.0;
    }

    s[..end].parse().unwrap_or(0.0)
}

impl Splitter<String, Value> {
    /// Build a splitter from bulk records, defaulting any missing fields.
    pub fn from_records<I: IntoIterator<Item = SplitRecord>>(records: I) -> Splitter<String, Value> {
        let mut s = Splitter::new();
        for r in records {
            s.add_item(r.payload(), r.weight(), r.params());
        }
        log::debug!("loaded {} split items", s.len());
        s
    }

    /// Build a splitter from a JSON array of records.
    ///
    /// ```
    /// use switchable::splitter::Splitter;
    ///
    /// let s = Splitter::from_json(r##"[
    ///     {"payload": "red", "weight": 70},
    ///     {"object": "blue", "split": "30", "params": {"color": "#00f"}}
    /// ]"##).unwrap();
    ///
    /// assert_eq!(2, s.len());
    /// assert_eq!(30.0, s.items()[1].weight());
    /// ```
    pub fn from_json(json: &str) -> Result<Splitter<String, Value>, ConfigError> {
        let records: Vec<SplitRecord> = serde_json::from_str(json)?;
        Ok(Splitter::from_records(records))
    }

    /// Build a splitter from a reader yielding a JSON array of records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Splitter<String, Value>, ConfigError> {
        let records: Vec<SplitRecord> = serde_json::from_reader(reader)?;
        Ok(Splitter::from_records(records))
    }
}
