//! GST state codes
//!
//! The first two characters of a GSTIN encode the registration state.
//! Intra- versus inter-state supply is decided by comparing the party's
//! state code with the business's home state.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// GST state-code registry: code → state name
const STATE_NAMES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("25", "Daman and Diu"),
    ("26", "Dadra and Nagar Haveli"),
    ("27", "Maharashtra"),
    ("28", "Andhra Pradesh"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh (New)"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
    ("99", "Centre Jurisdiction"),
];

/// A two-character GST state code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateCode([u8; 2]);

impl Serialize for StateCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StateCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.as_bytes().len() < 2 {
            return Err(de::Error::invalid_length(s.len(), &"a two-character code"));
        }
        Ok(StateCode::from(s.as_str()))
    }
}

impl StateCode {
    /// Creates a state code from its two digits, e.g. `StateCode::new(*b"23")`
    pub fn new(code: [u8; 2]) -> Self {
        Self(code)
    }

    /// Resolves the party state from a GSTIN.
    ///
    /// Takes the first two characters; a missing or malformed GSTIN
    /// (shorter than two characters) falls back to `home`. Purchases
    /// are self-supplied, so callers pass `home` directly there.
    pub fn from_gstin(gstin: Option<&str>, home: StateCode) -> Self {
        match gstin {
            Some(g) if g.len() >= 2 => {
                let bytes = g.as_bytes();
                Self([bytes[0], bytes[1]])
            }
            _ => home,
        }
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        // Construction only ever stores the leading bytes of a GSTIN,
        // which are ASCII digits.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }

    /// Returns the registered state name, or "Unknown" for unlisted codes
    pub fn name(&self) -> &'static str {
        STATE_NAMES
            .iter()
            .find(|(code, _)| *code == self.as_str())
            .map(|(_, name)| *name)
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for StateCode {
    fn from(s: &str) -> Self {
        let bytes = s.as_bytes();
        if bytes.len() >= 2 {
            Self([bytes[0], bytes[1]])
        } else {
            Self(*b"??")
        }
    }
}
