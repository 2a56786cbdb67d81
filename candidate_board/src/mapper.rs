// Maps a header row plus a value row into a candidate record.

use log::debug;

use crate::config::*;
use crate::stance::Stance;

/// Semantic fields of the candidate survey.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Field {
    Timestamp,
    Name,
    Furigana,
    Age,
    Photo,
    Occupation,
    District,
    Party,
    Status,
    Catchphrase,
    Website,
    Email,
    MainPolicy,
    Vision,
    Message,
}

// Exact survey header text to semantic field, evaluated in order.
// Later survey revisions reworded some questions; all known variants
// are listed and the first non-empty value wins per row. Unrecognized
// headers are ignored, so extra spreadsheet columns are harmless.
const HEADER_FIELDS: &[(&str, Field)] = &[
    ("Timestamp", Field::Timestamp),
    ("タイムスタンプ", Field::Timestamp),
    ("氏名", Field::Name),
    ("氏名（漢字）", Field::Name),
    ("お名前", Field::Name),
    ("ふりがな", Field::Furigana),
    ("氏名（ふりがな）", Field::Furigana),
    ("年代", Field::Age),
    ("年齢層", Field::Age),
    ("顔写真について", Field::Photo),
    ("顔写真URL", Field::Photo),
    ("職業・経歴", Field::Occupation),
    ("職業", Field::Occupation),
    ("居住地区", Field::District),
    ("所属政党・会派", Field::Party),
    ("所属政党", Field::Party),
    ("立候補区分", Field::Status),
    ("キャッチフレーズ・スローガン", Field::Catchphrase),
    ("キャッチフレーズ", Field::Catchphrase),
    ("公式サイト・SNSのURL", Field::Website),
    ("連絡先メールアドレス", Field::Email),
    ("最も重視する政策・公約", Field::MainPolicy),
    ("加賀市政への想い・ビジョン", Field::Vision),
    ("有権者へのメッセージ", Field::Message),
];

// Survey policy-question headers to the canonical topic names shown on
// the site.
const POLICY_HEADERS: &[(&str, &str)] = &[
    ("政策1: 子育て支援・教育予算の拡充について", "子育て支援の充実"),
    ("政策2: 地域産業（伝統工芸・観光業）の振興について", "観光振興"),
    ("政策3: 高齢者福祉・医療制度の充実について", "高齢者福祉の向上"),
    ("政策4: 防災・減災対策の強化について", "防災対策の強化"),
    ("政策5: 市の財政健全化について", "財政健全化"),
    ("政策6: デジタル化・DX推進について", "デジタル化推進"),
    ("政策7: 環境保護・脱炭素社会の実現について", "環境保護"),
    ("政策8: 若者の定住促進・人口減少対策について", "人口減少対策"),
];

/// The canonical policy topics, in display order. Every admitted record
/// carries a stance for each of these, never an absent key.
pub const POLICY_TOPICS: [&str; 9] = [
    "子育て支援の充実",
    "教育環境の整備",
    "観光振興",
    "防災対策の強化",
    "高齢者福祉の向上",
    "財政健全化",
    "デジタル化推進",
    "環境保護",
    "人口減少対策",
];

fn field_for_header(header: &str) -> Option<Field> {
    HEADER_FIELDS
        .iter()
        .find(|(text, _)| *text == header)
        .map(|(_, field)| *field)
}

fn topic_for_header(header: &str) -> Option<&'static str> {
    POLICY_HEADERS
        .iter()
        .find(|(text, _)| *text == header)
        .map(|(_, topic)| *topic)
}

/// Builds a candidate record from one data row.
///
/// Returns `None` when the row cannot be admitted: shorter than the
/// header by more than one field, or no non-empty name resolved. Both
/// are row-local conditions, the caller skips the row and continues.
pub fn map_row(headers: &[String], values: &[String]) -> Option<CandidateRecord> {
    if values.len() + 1 < headers.len() {
        debug!(
            "map_row: dropping row with {} fields against {} headers",
            values.len(),
            headers.len()
        );
        return None;
    }

    let mut fields: Vec<(Field, &str)> = Vec::new();
    let mut stances: Vec<(&str, Stance)> = Vec::new();

    for (idx, header) in headers.iter().enumerate() {
        let value = match values.get(idx) {
            Some(v) if !v.trim().is_empty() => v.trim(),
            _ => continue,
        };
        if let Some(field) = field_for_header(header) {
            // First non-empty match wins when synonym headers collide.
            if !fields.iter().any(|(f, _)| *f == field) {
                fields.push((field, value));
            }
        } else if let Some(topic) = topic_for_header(header) {
            if !stances.iter().any(|(t, _)| *t == topic) {
                stances.push((topic, Stance::normalize(value)));
            }
        }
    }

    let lookup = |field: Field| -> String {
        fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.to_string())
            .unwrap_or_default()
    };

    let name = lookup(Field::Name);
    if name.trim().is_empty() {
        debug!("map_row: dropping row without a candidate name");
        return None;
    }

    // Every known topic is present; unanswered ones carry NoResponse.
    let policies: Vec<(String, Stance)> = POLICY_TOPICS
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

    let party = lookup(Field::Party);
    let age = lookup(Field::Age);
    let photo = lookup(Field::Photo);

    Some(CandidateRecord {
        name,
        furigana: lookup(Field::Furigana),
        age_bracket: if age.is_empty() {
            UNSPECIFIED_AGE.to_string()
        } else {
            age
        },
        occupation: lookup(Field::Occupation),
        district: lookup(Field::District),
        party: if party.is_empty() {
            UNAFFILIATED.to_string()
        } else {
            party
        },
        catchphrase: lookup(Field::Catchphrase),
        photo: if photo.is_empty() {
            PLACEHOLDER_PHOTO.to_string()
        } else {
            photo
        },
        website: lookup(Field::Website),
        email: lookup(Field::Email),
        status: CandidacyStatus::from_label(&lookup(Field::Status)),
        policies,
        main_policy: lookup(Field::MainPolicy),
        vision: lookup(Field::Vision),
        message: lookup(Field::Message),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn values(vals: &[&str]) -> Vec<String> {
        vals.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn maps_basic_fields_and_defaults() {
        let h = headers(&["氏名", "年代", "所属政党・会派", "立候補区分"]);
        let v = values(&["山本 一郎", "40代", "", ""]);
        let r = map_row(&h, &v).unwrap();
        assert_eq!(r.name, "山本 一郎");
        assert_eq!(r.age_bracket, "40代");
        assert_eq!(r.party, UNAFFILIATED);
        assert_eq!(r.status, CandidacyStatus::Newcomer);
        assert_eq!(r.photo, PLACEHOLDER_PHOTO);
    }

    #[test]
    fn every_known_topic_is_present() {
        let h = headers(&["氏名", "政策1: 子育て支援・教育予算の拡充について"]);
        let v = values(&["山本 一郎", "積極的に推進すべき"]);
        let r = map_row(&h, &v).unwrap();
        assert_eq!(r.policies.len(), POLICY_TOPICS.len());
        assert_eq!(r.stance_for("子育て支援の充実"), Some(Stance::StronglySupport));
        assert_eq!(r.stance_for("環境保護"), Some(Stance::NoResponse));
    }

    #[test]
    fn synonym_headers_first_non_empty_wins() {
        let h = headers(&["お名前", "氏名", "年齢層"]);
        let v = values(&["", "佐々木 文", "30代"]);
        let r = map_row(&h, &v).unwrap();
        assert_eq!(r.name, "佐々木 文");
        assert_eq!(r.age_bracket, "30代");

        let v2 = values(&["田村 健", "別名 無視", "30代"]);
        let r2 = map_row(&h, &v2).unwrap();
        assert_eq!(r2.name, "田村 健");
    }

    #[test]
    fn unrecognized_headers_are_ignored() {
        let h = headers(&["氏名", "集計メモ"]);
        let v = values(&["山本 一郎", "内部用"]);
        let r = map_row(&h, &v).unwrap();
        assert_eq!(r.name, "山本 一郎");
    }

    #[test]
    fn row_much_shorter_than_header_is_rejected() {
        let h = headers(&["氏名", "年代", "居住地区", "職業・経歴"]);
        // One field short is tolerated, two is not.
        assert!(map_row(&h, &values(&["山本 一郎", "40代", "中央"])).is_some());
        assert!(map_row(&h, &values(&["山本 一郎", "40代"])).is_none());
    }

    #[test]
    fn row_without_a_name_is_rejected() {
        let h = headers(&["氏名", "年代"]);
        assert!(map_row(&h, &values(&["  ", "40代"])).is_none());
    }

    #[test]
    fn incumbent_label_is_recognized() {
        let h = headers(&["氏名", "立候補区分"]);
        let r = map_row(&h, &values(&["山本 一郎", "現職"])).unwrap();
        assert_eq!(r.status, CandidacyStatus::Incumbent);
    }
}
