// Player report builder
// Pure transformation from a PlayerRecord to the fixed embed layout.
// Every field tolerates absence; the guild section only exists when clan
// data is present, and its leader block only when captain data is present.

use crate::models::player::{CaptainInfo, PlayerRecord};
use crate::utils::formatters::format_timestamp;

const PLACEHOLDER: &str = "Not found";

/// Sections of the player report, one embed field each
#[derive(Debug, Clone)]
pub struct Report {
    pub identity: String,
    pub activity: String,
    pub overview: String,
    pub pet: String,
    pub guild: Option<String>,
}

impl Report {
    pub fn sections(&self) -> Vec<&str> {
        let mut out = vec![
            self.identity.as_str(),
            self.activity.as_str(),
            self.overview.as_str(),
            self.pet.as_str(),
        ];
        if let Some(guild) = &self.guild {
            out.push(guild.as_str());
        }
        out
    }
}

fn num(v: Option<i64>) -> String {
    num_or(v, PLACEHOLDER)
}

fn num_or(v: Option<i64>, fallback: &str) -> String {
    v.map(|n| n.to_string()).unwrap_or_else(|| fallback.to_string())
}

fn text(v: Option<&str>) -> &str {
    v.unwrap_or(PLACEHOLDER)
}

fn when(epoch: Option<i64>) -> String {
    epoch
        .and_then(format_timestamp)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

// Ranked points are hidden unless the show flag is set
fn rank(show: Option<bool>, points: Option<i64>, fallback: &str) -> String {
    let visibility = if show.unwrap_or(false) { "" } else { PLACEHOLDER };
    format!("{} {}", visibility, num_or(points, fallback))
}

pub fn build_report(uid: &str, record: &PlayerRecord) -> Report {
    let basic = record.basic_info.clone().unwrap_or_default();
    let captain = &record.captain_basic_info;
    let credit = record.credit_score_info.clone().unwrap_or_default();
    let pet = record.pet_info.clone().unwrap_or_default();
    let profile = record.profile_info.clone().unwrap_or_default();
    let social = record.social_info.clone().unwrap_or_default();

    let signature = match social.signature.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => "None",
    };

    let identity = [
        "**┌  ACCOUNT BASIC INFO**".to_string(),
        format!("**├─ Name**: {}", text(basic.nickname.as_deref())),
        format!("**├─ UID**: {}", uid),
        format!("**├─ Level**: {} (Exp: {})", num(basic.level), num_or(basic.exp, "?")),
        format!("**├─ Region**: {}", text(basic.region.as_deref())),
        format!("**├─ Likes**: {}", num(basic.liked)),
        format!("**├─ Honor Score**: {}", num(credit.credit_score)),
        format!("**└─ Signature**: {}", signature),
    ]
    .join("\n");

    let activity = [
        "**┌  ACCOUNT ACTIVITY**".to_string(),
        format!("**├─ Most Recent OB**: {}", basic.release_version.as_deref().unwrap_or("?")),
        format!("**├─ Current BP Badges**: {}", num(basic.badge_cnt)),
        format!("**├─ BR Rank**: {}", rank(basic.show_br_rank, basic.ranking_points, "?")),
        format!("**├─ CS Rank**: {}", rank(basic.show_cs_rank, basic.cs_ranking_points, "?")),
        format!("**├─ Created At**: {}", when(basic.create_at)),
        format!("**└─ Last Login**: {}", when(basic.last_login_at)),
    ]
    .join("\n");

    let pin_id = match captain {
        Some(c) => num(c.pin_id),
        None => "Default".to_string(),
    };
    let skills = match &profile.equipped_skills {
        Some(ids) if !ids.is_empty() => ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        _ => PLACEHOLDER.to_string(),
    };

    let overview = [
        "**┌  ACCOUNT OVERVIEW**".to_string(),
        format!("**├─ Avatar ID**: {}", num(profile.avatar_id)),
        format!("**├─ Banner ID**: {}", num(basic.banner_id)),
        format!("**├─ Pin ID**: {}", pin_id),
        format!("**└─ Equipped Skills**: {}", skills),
    ]
    .join("\n");

    let pet_section = [
        "**┌  PET DETAILS**".to_string(),
        format!(
            "**├─ Equipped?**: {}",
            if pet.is_selected.unwrap_or(false) { "Yes" } else { "Not Found" }
        ),
        format!("**├─ Pet Name**: {}", pet.name.as_deref().unwrap_or("Not Found")),
        format!("**├─ Pet Exp**: {}", num_or(pet.exp, "Not Found")),
        format!("**└─ Pet Level**: {}", num_or(pet.level, "Not Found")),
    ]
    .join("\n");

    let guild = record.clan_basic_info.as_ref().map(|clan| {
        let mut lines = vec![
            "**┌  GUILD INFO**".to_string(),
            format!("**├─ Guild Name**: {}", text(clan.clan_name.as_deref())),
            format!("**├─ Guild ID**: {}", text(clan.clan_id.as_deref())),
            format!("**├─ Guild Level**: {}", num(clan.clan_level)),
            format!(
                "**├─ Live Members**: {}/{}",
                num(clan.member_num),
                num_or(clan.capacity, "?")
            ),
        ];
        if let Some(c) = captain {
            lines.extend(leader_lines(c));
        }
        lines.join("\n")
    });

    Report {
        identity,
        activity,
        overview,
        pet: pet_section,
        guild,
    }
}

fn leader_lines(captain: &CaptainInfo) -> Vec<String> {
    vec![
        "**└─ Leader Info**:".to_string(),
        format!("    **├─ Leader Name**: {}", text(captain.nickname.as_deref())),
        format!("    **├─ Leader UID**: {}", text(captain.account_id.as_deref())),
        format!(
            "    **├─ Leader Level**: {} (Exp: {})",
            num(captain.level),
            num_or(captain.exp, "?")
        ),
        format!("    **├─ Last Login**: {}", when(captain.last_login_at)),
        format!("    **├─ Title**: {}", text(captain.title.as_deref())),
        format!("    **├─ BP Badges**: {}", num_or(captain.badge_cnt, "?")),
        format!(
            "    **├─ BR Rank**: {}",
            rank(captain.show_br_rank, captain.ranking_points, PLACEHOLDER)
        ),
        format!(
            "    **└─ CS Rank**: {}",
            rank(captain.show_cs_rank, captain.cs_ranking_points, PLACEHOLDER)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{BasicInfo, CaptainInfo, ClanInfo, PlayerRecord};

    #[test]
    fn test_empty_record_renders_placeholders_without_guild() {
        let report = build_report("123456", &PlayerRecord::default());
        assert!(report.guild.is_none());
        assert_eq!(report.sections().len(), 4);
        assert!(report.identity.contains("**├─ Name**: Not found"));
        assert!(report.identity.contains("**├─ UID**: 123456"));
        assert!(report.identity.contains("**└─ Signature**: None"));
        assert!(report.activity.contains("**├─ Created At**: Not found"));
        assert!(report.overview.contains("**├─ Pin ID**: Default"));
        assert!(report.pet.contains("**├─ Equipped?**: Not Found"));
    }

    #[test]
    fn test_clan_without_captain_omits_leader_block() {
        let record = PlayerRecord {
            clan_basic_info: Some(ClanInfo {
                clan_name: Some("NIGHT OWLS".into()),
                member_num: Some(42),
                capacity: Some(50),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = build_report("123456", &record);
        let guild = report.guild.expect("guild section");
        assert!(guild.contains("**├─ Guild Name**: NIGHT OWLS"));
        assert!(guild.contains("**├─ Live Members**: 42/50"));
        assert!(!guild.contains("Leader Info"));
    }

    #[test]
    fn test_clan_with_captain_includes_leader_block() {
        let record = PlayerRecord {
            clan_basic_info: Some(ClanInfo::default()),
            captain_basic_info: Some(CaptainInfo {
                nickname: Some("Boss".into()),
                account_id: Some("111222333".into()),
                last_login_at: Some(1609459200),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = build_report("123456", &record);
        let guild = report.guild.expect("guild section");
        assert!(guild.contains("**├─ Leader Name**: Boss"));
        assert!(guild.contains("**├─ Leader UID**: 111222333"));
        assert!(guild.contains("**├─ Last Login**: 2021-01-01 00:00:00"));
    }

    #[test]
    fn test_hidden_rank_shows_placeholder() {
        let record = PlayerRecord {
            basic_info: Some(BasicInfo {
                show_br_rank: Some(false),
                ranking_points: Some(3200),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = build_report("123456", &record);
        assert!(report.activity.contains("**├─ BR Rank**: Not found 3200"));
    }

    #[test]
    fn test_captain_pin_id_used_in_overview() {
        let record = PlayerRecord {
            captain_basic_info: Some(CaptainInfo {
                pin_id: Some(910),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = build_report("123456", &record);
        assert!(report.overview.contains("**├─ Pin ID**: 910"));
    }
}
