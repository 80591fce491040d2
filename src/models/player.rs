// Player record returned by the info API
// Every section and field is optional; the API omits whole sections freely
// and mixes JSON numbers with numeric strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a JSON number or a numeric string, otherwise None.
fn flex_i64<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(match v {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accept a JSON string or number, rendered as text.
fn flex_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(match v {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    #[serde(rename = "basicInfo")]
    pub basic_info: Option<BasicInfo>,
    #[serde(rename = "captainBasicInfo")]
    pub captain_basic_info: Option<CaptainInfo>,
    #[serde(rename = "clanBasicInfo")]
    pub clan_basic_info: Option<ClanInfo>,
    #[serde(rename = "creditScoreInfo")]
    pub credit_score_info: Option<CreditScoreInfo>,
    #[serde(rename = "petInfo")]
    pub pet_info: Option<PetInfo>,
    #[serde(rename = "profileInfo")]
    pub profile_info: Option<ProfileInfo>,
    #[serde(rename = "socialInfo")]
    pub social_info: Option<SocialInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicInfo {
    pub nickname: Option<String>,
    pub region: Option<String>,
    #[serde(deserialize_with = "flex_i64")]
    pub level: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub exp: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub liked: Option<i64>,
    #[serde(deserialize_with = "flex_string")]
    pub release_version: Option<String>,
    #[serde(deserialize_with = "flex_i64")]
    pub badge_cnt: Option<i64>,
    pub show_br_rank: Option<bool>,
    #[serde(deserialize_with = "flex_i64")]
    pub ranking_points: Option<i64>,
    pub show_cs_rank: Option<bool>,
    #[serde(deserialize_with = "flex_i64")]
    pub cs_ranking_points: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub create_at: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub last_login_at: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub banner_id: Option<i64>,
}

/// Clan captain, same shape as the player's own basic info plus a pin ID.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptainInfo {
    pub nickname: Option<String>,
    #[serde(deserialize_with = "flex_string")]
    pub account_id: Option<String>,
    #[serde(deserialize_with = "flex_i64")]
    pub level: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub exp: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub last_login_at: Option<i64>,
    #[serde(deserialize_with = "flex_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "flex_i64")]
    pub badge_cnt: Option<i64>,
    pub show_br_rank: Option<bool>,
    #[serde(deserialize_with = "flex_i64")]
    pub ranking_points: Option<i64>,
    pub show_cs_rank: Option<bool>,
    #[serde(deserialize_with = "flex_i64")]
    pub cs_ranking_points: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub pin_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClanInfo {
    pub clan_name: Option<String>,
    #[serde(deserialize_with = "flex_string")]
    pub clan_id: Option<String>,
    #[serde(deserialize_with = "flex_i64")]
    pub clan_level: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub member_num: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub capacity: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditScoreInfo {
    #[serde(deserialize_with = "flex_i64")]
    pub credit_score: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetInfo {
    pub is_selected: Option<bool>,
    pub name: Option<String>,
    #[serde(deserialize_with = "flex_i64")]
    pub exp: Option<i64>,
    #[serde(deserialize_with = "flex_i64")]
    pub level: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileInfo {
    #[serde(deserialize_with = "flex_i64")]
    pub avatar_id: Option<i64>,
    // The API spells this "equipedSkills"
    #[serde(rename = "equipedSkills")]
    pub equipped_skills: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialInfo {
    pub signature: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_number_and_string_fields() {
        let raw = r#"{
            "basicInfo": {
                "nickname": "Ace",
                "level": "62",
                "liked": 12345,
                "createAt": "1625000000",
                "showBrRank": true,
                "rankingPoints": 3200
            }
        }"#;
        let record: PlayerRecord = serde_json::from_str(raw).unwrap();
        let basic = record.basic_info.unwrap();
        assert_eq!(basic.level, Some(62));
        assert_eq!(basic.liked, Some(12345));
        assert_eq!(basic.create_at, Some(1625000000));
        assert_eq!(basic.show_br_rank, Some(true));
        assert_eq!(basic.ranking_points, Some(3200));
        assert_eq!(basic.exp, None);
    }

    #[test]
    fn test_empty_body_gives_empty_record() {
        let record: PlayerRecord = serde_json::from_str("{}").unwrap();
        assert!(record.basic_info.is_none());
        assert!(record.clan_basic_info.is_none());
        assert!(record.pet_info.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw = r#"{"basicInfo": {"nickname": "Ace", "somethingNew": [1, 2]}, "weaponSkinShows": []}"#;
        let record: PlayerRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.basic_info.unwrap().nickname.as_deref(), Some("Ace"));
    }

    #[test]
    fn test_non_numeric_string_becomes_none() {
        let raw = r#"{"basicInfo": {"level": "unknown"}}"#;
        let record: PlayerRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.basic_info.unwrap().level, None);
    }
}
