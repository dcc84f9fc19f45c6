// src/model/party.rs
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Canonical party buckets. Ordering is display order: D, R, I.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Party {
    #[serde(rename = "D")]
    Democratic,
    #[serde(rename = "R")]
    Republican,
    #[serde(rename = "I")]
    Independent,
}

impl Party {
    pub const ALL: [Party; 3] = [Party::Democratic, Party::Republican, Party::Independent];

    /// Map a raw API code to a bucket. `ID` (independent caucusing with
    /// Democrats) folds into Independent. Unknown codes give `None`.
    pub fn from_code(code: &str) -> Option<Party> {
        match code.trim().to_ascii_uppercase().as_str() {
            "D" => Some(Party::Democratic),
            "R" => Some(Party::Republican),
            "I" | "ID" => Some(Party::Independent),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Party::Democratic => "D",
            Party::Republican => "R",
            Party::Independent => "I",
        }
    }

    /// Label used in the statistics tables.
    pub fn label(self) -> &'static str {
        match self {
            Party::Democratic => "Democratic",
            Party::Republican => "Republican",
            Party::Independent => "Independent",
        }
    }

    /// Label used in the members roster.
    pub fn member_label(self) -> &'static str {
        match self {
            Party::Democratic => "Democrat",
            Party::Republican => "Republican",
            Party::Independent => "Independent",
        }
    }

    /// Parse `"D,R"` style lists. An empty list is allowed and selects nothing.
    pub fn parse_list(s: &str) -> Result<BTreeSet<Party>, Error> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for Party {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Party::from_code(s).ok_or_else(|| Error::UnknownParty(s!(s.trim())))
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_folds_into_independent() {
        assert_eq!(Party::from_code("ID"), Some(Party::Independent));
        assert_eq!(Party::from_code(" id "), Some(Party::Independent));
        assert_eq!(Party::from_code("I"), Some(Party::Independent));
    }

    #[test]
    fn unknown_codes_have_no_bucket() {
        assert_eq!(Party::from_code("L"), None);
        assert_eq!(Party::from_code(""), None);
        assert!("G".parse::<Party>().is_err());
    }

    #[test]
    fn parse_list_dedups_and_orders() {
        let set = Party::parse_list("R, D,R").unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![Party::Democratic, Party::Republican]);
        assert!(Party::parse_list("").unwrap().is_empty());
        assert!(Party::parse_list("D,X").is_err());
    }
}
