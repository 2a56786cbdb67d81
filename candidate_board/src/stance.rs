// Normalization of free-text policy answers into the closed vocabulary.

use serde::{Deserialize, Serialize};

/// A candidate's declared position on a policy topic.
///
/// This closed enumeration is the single stance schema of the crate.
/// The survey's alternative 1-5 scale is only derivable through
/// [`Stance::scale`], never stored, so the two representations cannot
/// be mixed within one build.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Stance {
    #[serde(rename = "積極的に推進")]
    StronglySupport,
    #[serde(rename = "賛成")]
    Support,
    #[serde(rename = "中立")]
    Neutral,
    #[serde(rename = "慎重")]
    Cautious,
    #[serde(rename = "反対")]
    Oppose,
    #[serde(rename = "未回答")]
    NoResponse,
}

// Ordered priority table for substring matching. The long survey
// phrasings come before the short canonical labels they contain, and
// the canonical labels themselves are listed so that normalization is
// idempotent on already-normalized values.
const STANCE_PHRASES: &[(&str, Stance)] = &[
    ("積極的に推進すべき", Stance::StronglySupport),
    ("ある程度推進すべき", Stance::Support),
    ("現状維持が適切", Stance::Neutral),
    ("慎重に検討すべき", Stance::Cautious),
    ("優先度は低い", Stance::Oppose),
    ("積極的に推進", Stance::StronglySupport),
    ("賛成", Stance::Support),
    ("中立", Stance::Neutral),
    ("慎重", Stance::Cautious),
    ("反対", Stance::Oppose),
    ("未回答", Stance::NoResponse),
];

impl Stance {
    /// Maps a free-text answer to the closed vocabulary.
    ///
    /// Matching is substring-based, first match in priority order wins.
    /// Blank or unmatched input maps to [`Stance::NoResponse`].
    pub fn normalize(text: &str) -> Stance {
        let t = text.trim();
        if t.is_empty() {
            return Stance::NoResponse;
        }
        for (phrase, stance) in STANCE_PHRASES {
            if t.contains(phrase) {
                return *stance;
            }
        }
        Stance::NoResponse
    }

    /// The canonical display label.
    pub fn label(&self) -> &'static str {
        match self {
            Stance::StronglySupport => "積極的に推進",
            Stance::Support => "賛成",
            Stance::Neutral => "中立",
            Stance::Cautious => "慎重",
            Stance::Oppose => "反対",
            Stance::NoResponse => "未回答",
        }
    }

    /// The 1-5 survey scale: 1 is the most supportive, 5 the least.
    /// A missing answer sits in the middle of the scale.
    pub fn scale(&self) -> u8 {
        match self {
            Stance::StronglySupport => 1,
            Stance::Support => 2,
            Stance::Neutral => 3,
            Stance::Cautious => 4,
            Stance::Oppose => 5,
            Stance::NoResponse => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_phrasings_map_to_the_vocabulary() {
        assert_eq!(Stance::normalize("積極的に推進すべき"), Stance::StronglySupport);
        assert_eq!(Stance::normalize("ある程度推進すべき"), Stance::Support);
        assert_eq!(Stance::normalize("現状維持が適切"), Stance::Neutral);
        assert_eq!(Stance::normalize("慎重に検討すべき"), Stance::Cautious);
        assert_eq!(Stance::normalize("優先度は低い"), Stance::Oppose);
    }

    #[test]
    fn normalization_is_idempotent_on_canonical_labels() {
        for stance in [
            Stance::StronglySupport,
            Stance::Support,
            Stance::Neutral,
            Stance::Cautious,
            Stance::Oppose,
            Stance::NoResponse,
        ] {
            assert_eq!(Stance::normalize(stance.label()), stance);
        }
    }

    #[test]
    fn substring_match_tolerates_surrounding_text() {
        assert_eq!(
            Stance::normalize("どちらかといえば賛成です"),
            Stance::Support
        );
    }

    #[test]
    fn blank_and_unmatched_input_default_to_no_response() {
        assert_eq!(Stance::normalize(""), Stance::NoResponse);
        assert_eq!(Stance::normalize("   "), Stance::NoResponse);
        assert_eq!(Stance::normalize("わからない"), Stance::NoResponse);
    }

    #[test]
    fn scale_is_ordered_from_most_to_least_supportive() {
        assert_eq!(Stance::StronglySupport.scale(), 1);
        assert_eq!(Stance::Oppose.scale(), 5);
        assert_eq!(Stance::NoResponse.scale(), 3);
    }
}
