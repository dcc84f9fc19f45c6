// src/model/states.rs
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Two-letter state/territory code → name, the shape of the public
/// `states_hash.json` lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateLookup {
    names: BTreeMap<String, String>,
}

const BUILTIN: &[(&str, &str)] = &[
    ("AL", "Alabama"), ("AK", "Alaska"), ("AS", "American Samoa"), ("AZ", "Arizona"),
    ("AR", "Arkansas"), ("CA", "California"), ("CO", "Colorado"), ("CT", "Connecticut"),
    ("DE", "Delaware"), ("DC", "District Of Columbia"), ("FL", "Florida"), ("GA", "Georgia"),
    ("GU", "Guam"), ("HI", "Hawaii"), ("ID", "Idaho"), ("IL", "Illinois"),
    ("IN", "Indiana"), ("IA", "Iowa"), ("KS", "Kansas"), ("KY", "Kentucky"),
    ("LA", "Louisiana"), ("ME", "Maine"), ("MD", "Maryland"), ("MA", "Massachusetts"),
    ("MI", "Michigan"), ("MN", "Minnesota"), ("MS", "Mississippi"), ("MO", "Missouri"),
    ("MT", "Montana"), ("NE", "Nebraska"), ("NV", "Nevada"), ("NH", "New Hampshire"),
    ("NJ", "New Jersey"), ("NM", "New Mexico"), ("NY", "New York"), ("NC", "North Carolina"),
    ("ND", "North Dakota"), ("MP", "Northern Mariana Islands"), ("OH", "Ohio"), ("OK", "Oklahoma"),
    ("OR", "Oregon"), ("PA", "Pennsylvania"), ("PR", "Puerto Rico"), ("RI", "Rhode Island"),
    ("SC", "South Carolina"), ("SD", "South Dakota"), ("TN", "Tennessee"), ("TX", "Texas"),
    ("UT", "Utah"), ("VT", "Vermont"), ("VI", "Virgin Islands"), ("VA", "Virginia"),
    ("WA", "Washington"), ("WV", "West Virginia"), ("WI", "Wisconsin"), ("WY", "Wyoming"),
];

impl StateLookup {
    /// Offline table: states, DC and the territories that send delegates.
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN.iter().map(|(c, n)| (s!(*c), s!(*n))).collect(),
        }
    }

    /// Parse a `{"AL": "Alabama", ...}` object. Codes are upper-cased.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let obj = value
            .as_object()
            .ok_or_else(|| Error::MalformedResponse(s!("states lookup is not a JSON object")))?;
        let names = obj
            .iter()
            .filter_map(|(code, name)| name.as_str().map(|n| (code.trim().to_ascii_uppercase(), s!(n))))
            .collect();
        Ok(Self { names })
    }

    /// Same object shape `from_json` reads.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.names)?)
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(&code.trim().to_ascii_uppercase()).map(String::as_str)
    }

    /// (code, name) pairs sorted by code.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_states_and_dc() {
        let states = StateLookup::builtin();
        assert_eq!(states.name("ny"), Some("New York"));
        assert_eq!(states.name("DC"), Some("District Of Columbia"));
        assert!(states.len() >= 51);
    }

    #[test]
    fn from_json_skips_non_string_names() {
        let states = StateLookup::from_json(r#"{"vt": "Vermont", "XX": 5}"#).unwrap();
        assert_eq!(states.name("VT"), Some("Vermont"));
        assert_eq!(states.len(), 1);
        assert!(StateLookup::from_json("[1,2]").is_err());
    }
}
