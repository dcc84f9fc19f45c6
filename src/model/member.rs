// src/model/member.rs
use serde::{Deserialize, Serialize};

use super::party::Party;
use super::serde_helpers;

/// One member of a chamber as the REST API reports it. Only the fields the
/// app reads are kept; everything else in the payload is ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub last_name: String,
    /// Raw party code. See [`MemberRecord::party`] for the bucket.
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub party: String,
    #[serde(default, deserialize_with = "serde_helpers::string")]
    pub state: String,
    /// Years in office; text in the API.
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub seniority: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::number")]
    pub votes_with_party_pct: Option<f64>,
    #[serde(default, deserialize_with = "serde_helpers::number")]
    pub votes_against_party_pct: Option<f64>,
    #[serde(default, deserialize_with = "serde_helpers::count")]
    pub missed_votes: Option<u32>,
    #[serde(default, deserialize_with = "serde_helpers::number")]
    pub missed_votes_pct: Option<f64>,
    #[serde(default, deserialize_with = "serde_helpers::count")]
    pub total_votes: Option<u32>,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub in_office: Option<bool>,
}

impl MemberRecord {
    /// Party bucket, or `None` for an unrecognized code.
    pub fn party(&self) -> Option<Party> {
        Party::from_code(&self.party)
    }

    /// "First Middle Last", skipping empty parts.
    pub fn full_name(&self) -> String {
        [Some(self.first_name.as_str()), self.middle_name.as_deref(), Some(self.last_name.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_shaped_record() {
        let json = r#"{
            "id": "A000360", "first_name": "Lamar", "middle_name": null,
            "last_name": "Alexander", "party": "R", "state": "TN",
            "seniority": "17", "votes_with_party_pct": 95.2,
            "votes_against_party_pct": 4.8, "missed_votes": 12,
            "missed_votes_pct": 2.1, "total_votes": 600,
            "url": "https://www.alexander.senate.gov/public", "in_office": true,
            "twitter_account": "SenAlexander"
        }"#;
        let m: MemberRecord = serde_json::from_str(json).unwrap();
        assert_eq!(m.party(), Some(Party::Republican));
        assert_eq!(m.full_name(), "Lamar Alexander");
        assert_eq!(m.seniority.as_deref(), Some("17"));
        assert_eq!(m.missed_votes, Some(12));
        assert_eq!(m.votes_with_party_pct, Some(95.2));
        assert_eq!(m.in_office, Some(true));
    }

    #[test]
    fn wrong_typed_metrics_decode_as_absent() {
        let json = r#"{
            "party": "D", "votes_with_party_pct": "95.2",
            "missed_votes": -3, "missed_votes_pct": null,
            "total_votes": 12.5, "seniority": 4
        }"#;
        let m: MemberRecord = serde_json::from_str(json).unwrap();
        assert_eq!(m.votes_with_party_pct, None);
        assert_eq!(m.missed_votes, None);
        assert_eq!(m.missed_votes_pct, None);
        assert_eq!(m.total_votes, None);
        assert_eq!(m.seniority.as_deref(), Some("4"));
        assert_eq!(m.first_name, "");
    }

    #[test]
    fn full_name_includes_middle_name() {
        let m = MemberRecord {
            first_name: s!("Mary"),
            middle_name: Some(s!("K.")),
            last_name: s!("Smith"),
            ..Default::default()
        };
        assert_eq!(m.full_name(), "Mary K. Smith");
    }
}
