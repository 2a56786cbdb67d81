// ********* Public data structures ***********

use std::error::Error;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::stance::Stance;

/// The fixed age brackets, in display and sort order.
pub const AGE_BRACKETS: [&str; 6] = ["20代", "30代", "40代", "50代", "60代", "70代以上"];

/// The label recorded when a candidate did not state an age bracket.
pub const UNSPECIFIED_AGE: &str = "年代未設定";

/// The party recorded when the survey answer was left blank.
pub const UNAFFILIATED: &str = "無所属";

/// Shown on cards when no photo reference was provided.
pub const PLACEHOLDER_PHOTO: &str = "https://placehold.co/300x300/EFEFEF/AAAAAA?text=候補者";

/// Sort position of an age bracket label.
///
/// Labels outside the fixed enumeration rank after every recognized
/// bracket. Their relative order is whatever the stable sort preserves.
pub fn age_bracket_rank(label: &str) -> usize {
    AGE_BRACKETS
        .iter()
        .position(|b| *b == label)
        .unwrap_or(AGE_BRACKETS.len())
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum CandidacyStatus {
    #[serde(rename = "現職")]
    Incumbent,
    #[serde(rename = "新人")]
    Newcomer,
}

impl CandidacyStatus {
    /// Parses the survey answer. Anything that is not the incumbent label
    /// counts as a newcomer, including a blank answer.
    pub fn from_label(s: &str) -> CandidacyStatus {
        if s.trim() == "現職" {
            CandidacyStatus::Incumbent
        } else {
            CandidacyStatus::Newcomer
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CandidacyStatus::Incumbent => "現職",
            CandidacyStatus::Newcomer => "新人",
        }
    }
}

/// One registered candidate, as admitted into the board.
///
/// Records are immutable after construction except for the single
/// administrative photo replacement on the board.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub furigana: String,
    #[serde(rename = "age")]
    pub age_bracket: String,
    pub occupation: String,
    pub district: String,
    pub party: String,
    pub catchphrase: String,
    pub photo: String,
    pub website: String,
    pub email: String,
    pub status: CandidacyStatus,
    /// Ordered per [`crate::mapper::POLICY_TOPICS`]. Every known topic is
    /// present; unanswered topics carry [`Stance::NoResponse`].
    /// Serializes as a JSON object keyed by topic, in this order.
    #[serde(with = "policy_map")]
    pub policies: Vec<(String, Stance)>,
    #[serde(rename = "mainPolicy")]
    pub main_policy: String,
    pub vision: String,
    pub message: String,
}

impl CandidateRecord {
    /// The stance declared for a policy topic, if the topic is known.
    pub fn stance_for(&self, topic: &str) -> Option<Stance> {
        self.policies
            .iter()
            .find(|(name, _)| name == topic)
            .map(|(_, stance)| *stance)
    }

    /// The key used for name ordering: the furigana reading when the
    /// candidate provided one, the name itself otherwise. Kana readings
    /// give the dictionary order expected for Japanese display text.
    pub fn reading_key(&self) -> &str {
        if self.furigana.trim().is_empty() {
            &self.name
        } else {
            &self.furigana
        }
    }
}

// The natural serde shape of Vec<(String, Stance)> would be an array
// of pairs; the published document wants an object keyed by topic,
// keeping the topic order.
mod policy_map {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use crate::stance::Stance;

    pub fn serialize<S>(
        policies: &Vec<(String, Stance)>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(policies.len()))?;
        for (topic, stance) in policies {
            map.serialize_entry(topic, stance)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, Stance)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PolicyMapVisitor;

        impl<'de> Visitor<'de> for PolicyMapVisitor {
            type Value = Vec<(String, Stance)>;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map from policy topic to stance")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((topic, stance)) = access.next_entry()? {
                    entries.push((topic, stance));
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(PolicyMapVisitor)
    }
}

/// The status filter of a board query.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum StatusFilter {
    All,
    Incumbent,
    Newcomer,
}

impl StatusFilter {
    pub fn admits(&self, status: CandidacyStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Incumbent => status == CandidacyStatus::Incumbent,
            StatusFilter::Newcomer => status == CandidacyStatus::Newcomer,
        }
    }
}

/// The sort key of a board query.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum SortKey {
    ByName,
    /// Incumbents first, ties broken by name.
    ByStatusThenName,
    ByAgeBracket,
}

/// Errors raised by the parsing pipeline and the board operations.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum BoardError {
    /// The input had fewer than two lines: no header row plus data rows.
    MalformedInput,
    /// Parsing succeeded but no row resolved a non-empty candidate name.
    EmptyResult,
    /// The photo replacement target does not exist on the board.
    UnknownCandidate(String),
}

impl Error for BoardError {}

impl Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::MalformedInput => {
                write!(f, "the CSV input does not contain a header row and data rows")
            }
            BoardError::EmptyResult => {
                write!(f, "no row with a usable candidate name was found")
            }
            BoardError::UnknownCandidate(name) => {
                write!(f, "no candidate named {:?} is on the board", name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> CandidateRecord {
        CandidateRecord {
            name: "田中 太郎".to_string(),
            furigana: "たなか たろう".to_string(),
            age_bracket: "40代".to_string(),
            occupation: String::new(),
            district: String::new(),
            party: UNAFFILIATED.to_string(),
            catchphrase: String::new(),
            photo: PLACEHOLDER_PHOTO.to_string(),
            website: String::new(),
            email: String::new(),
            status: CandidacyStatus::Incumbent,
            policies: vec![
                ("観光振興".to_string(), Stance::StronglySupport),
                ("環境保護".to_string(), Stance::NoResponse),
            ],
            main_policy: String::new(),
            vision: String::new(),
            message: String::new(),
        }
    }

    #[test]
    fn record_serializes_to_the_published_document_shape() {
        let js = serde_json::to_value(record()).unwrap();
        assert_eq!(js["name"], json!("田中 太郎"));
        assert_eq!(js["age"], json!("40代"));
        assert_eq!(js["status"], json!("現職"));
        // Policies are an object keyed by topic, not an array of pairs.
        let policies = js["policies"].as_object().unwrap();
        assert_eq!(policies["観光振興"], json!("積極的に推進"));
        assert_eq!(policies["環境保護"], json!("未回答"));
        assert_eq!(js["mainPolicy"], json!(""));
    }

    #[test]
    fn record_serialization_round_trips() {
        let original = record();
        let js = serde_json::to_value(&original).unwrap();
        let back: CandidateRecord = serde_json::from_value(js).unwrap();
        assert_eq!(back, original);
    }
}
