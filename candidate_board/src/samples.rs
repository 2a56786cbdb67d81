// The built-in sample records shown when no real data can be loaded.

use crate::config::*;
use crate::mapper::POLICY_TOPICS;
use crate::stance::Stance;

#[allow(clippy::too_many_arguments)]
fn sample(
    name: &str,
    furigana: &str,
    age_bracket: &str,
    status: CandidacyStatus,
    occupation: &str,
    district: &str,
    catchphrase: &str,
    photo: &str,
    stances: &[(&str, Stance)],
) -> CandidateRecord {
    let policies = POLICY_TOPICS
        .iter()
        .map(|topic| {
            let stance = stances
                .iter()
                .find(|(t, _)| t == topic)
                .map(|(_, s)| *s)
                .unwrap_or(Stance::NoResponse);
            (topic.to_string(), stance)
        })
        .collect();
    CandidateRecord {
        name: name.to_string(),
        furigana: furigana.to_string(),
        age_bracket: age_bracket.to_string(),
        occupation: occupation.to_string(),
        district: district.to_string(),
        party: UNAFFILIATED.to_string(),
        catchphrase: catchphrase.to_string(),
        photo: photo.to_string(),
        website: String::new(),
        email: String::new(),
        status,
        policies,
        main_policy: String::new(),
        vision: String::new(),
        message: String::new(),
    }
}

/// The fixed fallback sample set.
///
/// Used whole or not at all: the loader never mixes sample records with
/// partially loaded real data.
pub fn sample_records() -> Vec<CandidateRecord> {
    vec![
        sample(
            "田中 太郎",
            "たなか たろう",
            "40代",
            CandidacyStatus::Incumbent,
            "元市役所職員、NPO法人代表",
            "加賀温泉駅周辺",
            "市民の声を市政に",
            "https://placehold.co/300x300/4A90E2/FFFFFF?text=田中太郎",
            &[
                ("子育て支援の充実", Stance::StronglySupport),
                ("高齢者福祉の向上", Stance::Support),
                ("観光振興", Stance::StronglySupport),
                ("教育環境の整備", Stance::Support),
                ("防災対策の強化", Stance::StronglySupport),
            ],
        ),
        sample(
            "佐藤 花子",
            "さとう はなこ",
            "30代",
            CandidacyStatus::Newcomer,
            "弁護士、市民活動家",
            "山中温泉地区",
            "若い力で加賀を変える",
            "https://placehold.co/300x300/E94B3C/FFFFFF?text=佐藤花子",
            &[
                ("子育て支援の充実", Stance::StronglySupport),
                ("高齢者福祉の向上", Stance::Support),
                ("観光振興", Stance::Support),
                ("教育環境の整備", Stance::StronglySupport),
                ("防災対策の強化", Stance::Support),
            ],
        ),
        sample(
            "山田 次郎",
            "やまだ じろう",
            "50代",
            CandidacyStatus::Incumbent,
            "農業従事者、JA理事",
            "大聖寺地区",
            "農業と観光の両立",
            "https://placehold.co/300x300/50C878/FFFFFF?text=山田次郎",
            &[
                ("子育て支援の充実", Stance::Support),
                ("高齢者福祉の向上", Stance::StronglySupport),
                ("観光振興", Stance::StronglySupport),
                ("教育環境の整備", Stance::Support),
                ("防災対策の強化", Stance::StronglySupport),
            ],
        ),
        sample(
            "鈴木 美咲",
            "すずき みさき",
            "20代",
            CandidacyStatus::Newcomer,
            "小学校教諭、教育コンサルタント",
            "片山津温泉地区",
            "教育で未来を創る",
            "https://placehold.co/300x300/9B59B6/FFFFFF?text=鈴木美咲",
            &[
                ("子育て支援の充実", Stance::StronglySupport),
                ("高齢者福祉の向上", Stance::Support),
                ("観光振興", Stance::Support),
                ("教育環境の整備", Stance::StronglySupport),
                ("防災対策の強化", Stance::Support),
            ],
        ),
        sample(
            "高橋 健一",
            "たかはし けんいち",
            "60代",
            CandidacyStatus::Incumbent,
            "建設会社経営、商工会議所会頭",
            "加賀市中央",
            "経験と実績で安心の市政",
            "https://placehold.co/300x300/F39C12/FFFFFF?text=高橋健一",
            &[
                ("子育て支援の充実", Stance::Support),
                ("高齢者福祉の向上", Stance::StronglySupport),
                ("観光振興", Stance::StronglySupport),
                ("教育環境の整備", Stance::Support),
                ("防災対策の強化", Stance::StronglySupport),
            ],
        ),
        sample(
            "伊藤 恵子",
            "いとう けいこ",
            "40代",
            CandidacyStatus::Newcomer,
            "デザイナー、文化活動推進",
            "動橋地区",
            "文化と芸術で豊かな街づくり",
            "https://placehold.co/300x300/1ABC9C/FFFFFF?text=伊藤恵子",
            &[
                ("子育て支援の充実", Stance::StronglySupport),
                ("高齢者福祉の向上", Stance::Support),
                ("観光振興", Stance::StronglySupport),
                ("教育環境の整備", Stance::StronglySupport),
                ("防災対策の強化", Stance::Support),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_satisfy_the_record_invariants() {
        let records = sample_records();
        assert_eq!(records.len(), 6);
        for r in &records {
            assert!(!r.name.trim().is_empty());
            assert_eq!(r.policies.len(), POLICY_TOPICS.len());
            assert_ne!(age_bracket_rank(&r.age_bracket), AGE_BRACKETS.len());
        }
    }
}
