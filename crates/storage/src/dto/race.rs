use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::common::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use super::participant::ParticipantResponse;
use crate::models::{EditionedRef, LeagueRef, RaceRow};
use crate::services::{race_date::format_race_date, race_name::compose_race_name};

/// Raw `/api/races` query string. Every value is kept as text so that a
/// malformed number only switches its filter off instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RaceQueryParams {
    /// Matched case-insensitively against trophy, flag and sponsor names
    pub keywords: Option<String>,
    pub year: Option<String>,
    /// Trophy id
    pub trophy: Option<String>,
    /// Flag id
    pub flag: Option<String>,
    /// `<trophy id>,<flag id>`: races with either one
    #[serde(rename = "trophyOrFlag")]
    pub trophy_or_flag: Option<String>,
    /// League id
    pub league: Option<String>,
    /// Club id of a participant
    pub participant: Option<String>,
    /// Zero-based page number
    pub page: Option<String>,
    /// Page size
    pub limit: Option<String>,
}

/// Search criteria for the race listing. Unset criteria do not constrain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceFilter {
    pub keywords: String,
    pub year: Option<i32>,
    pub trophy_id: Option<i64>,
    pub flag_id: Option<i64>,
    /// Only constrains when both ids are positive.
    pub trophy_or_flag: Option<(i64, i64)>,
    pub league_id: Option<i64>,
    /// Club id that must have entered the race.
    pub participant_id: Option<i64>,
    pub page: i64,
    pub limit: i64,
}

impl Default for RaceFilter {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            year: None,
            trophy_id: None,
            flag_id: None,
            trophy_or_flag: None,
            league_id: None,
            participant_id: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RaceFilter {
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.limit)
    }
}

impl From<RaceQueryParams> for RaceFilter {
    fn from(params: RaceQueryParams) -> Self {
        Self {
            keywords: params.keywords.unwrap_or_default(),
            year: parse_positive(params.year.as_deref()),
            trophy_id: parse_positive(params.trophy.as_deref()),
            flag_id: parse_positive(params.flag.as_deref()),
            trophy_or_flag: params.trophy_or_flag.as_deref().and_then(parse_pair),
            league_id: parse_positive(params.league.as_deref()),
            participant_id: parse_positive(params.participant.as_deref()),
            page: params
                .page
                .as_deref()
                .and_then(|page| page.parse::<i64>().ok())
                .map_or(DEFAULT_PAGE, |page| page.max(0)),
            limit: parse_positive(params.limit.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

fn parse_positive<T>(value: Option<&str>) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    value?
        .parse::<T>()
        .ok()
        .filter(|parsed| *parsed > T::default())
}

/// `"12,7"` → `(12, 7)`. Unreadable halves read as 0 and leave the pair
/// inactive.
fn parse_pair(value: &str) -> Option<(i64, i64)> {
    let (trophy, flag) = value.split_once(',')?;
    if flag.contains(',') {
        return None;
    }

    Some((trophy.parse().unwrap_or(0), flag.parse().unwrap_or(0)))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrophyInfo {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlagInfo {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeagueInfo {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub symbol: String,
}

impl From<EditionedRef<'_>> for TrophyInfo {
    fn from(trophy: EditionedRef<'_>) -> Self {
        Self {
            id: trophy.id,
            name: trophy.name.to_string(),
            edition: trophy.edition,
        }
    }
}

impl From<EditionedRef<'_>> for FlagInfo {
    fn from(flag: EditionedRef<'_>) -> Self {
        Self {
            id: flag.id,
            name: flag.name.to_string(),
            edition: flag.edition,
        }
    }
}

impl From<LeagueRef<'_>> for LeagueInfo {
    fn from(league: LeagueRef<'_>) -> Self {
        Self {
            id: league.id,
            name: league.name.to_string(),
            gender: league.gender.map(str::to_string),
            symbol: league.symbol.to_string(),
        }
    }
}

/// A race ready to be serialized, with its composed display name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceResponse {
    pub id: i64,
    pub name: String,
    pub trophy: Option<TrophyInfo>,
    pub flag: Option<FlagInfo>,
    pub league: Option<LeagueInfo>,
    pub day: i32,
    /// `DD-MM-YYYY`
    pub date: String,
    #[serde(rename = "type")]
    pub race_type: String,
    pub modality: String,
    pub laps: Option<i32>,
    pub lanes: Option<i32>,
    pub series: Option<i32>,
    pub cancelled: bool,
    pub sponsor: Option<String>,
    pub town: Option<String>,
    pub genders: Vec<String>,
    /// Only filled in when a single race is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<ParticipantResponse>>,
}

impl From<RaceRow> for RaceResponse {
    fn from(race: RaceRow) -> Self {
        let name = compose_race_name(&race);
        let date = format_race_date(&race.date);
        let trophy = race.trophy().map(TrophyInfo::from);
        let flag = race.flag().map(FlagInfo::from);
        let league = race.league().map(LeagueInfo::from);

        Self {
            id: race.id,
            name,
            trophy,
            flag,
            league,
            day: race.day,
            date,
            race_type: race.race_type,
            modality: race.modality,
            laps: race.laps,
            lanes: race.lanes,
            series: race.series,
            cancelled: race.cancelled,
            sponsor: race.sponsor,
            town: race.town,
            genders: race.genders.unwrap_or_default(),
            participants: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::common::PaginatedResponse;

    fn params(pairs: &[(&str, &str)]) -> RaceQueryParams {
        let mut params = RaceQueryParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "keywords" => params.keywords = value,
                "year" => params.year = value,
                "trophy" => params.trophy = value,
                "flag" => params.flag = value,
                "trophyOrFlag" => params.trophy_or_flag = value,
                "league" => params.league = value,
                "participant" => params.participant = value,
                "page" => params.page = value,
                "limit" => params.limit = value,
                other => panic!("unknown parameter {other}"),
            }
        }
        params
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        assert_eq!(RaceFilter::from(RaceQueryParams::default()), RaceFilter::default());
        assert_eq!(RaceFilter::default().limit, 100);
        assert_eq!(RaceFilter::default().page, 0);
    }

    #[test]
    fn test_numeric_filters_are_parsed() {
        let filter = RaceFilter::from(params(&[
            ("keywords", "concha"),
            ("year", "2019"),
            ("trophy", "3"),
            ("flag", "8"),
            ("league", "5"),
            ("participant", "41"),
            ("page", "2"),
            ("limit", "10"),
        ]));

        assert_eq!(filter.keywords, "concha");
        assert_eq!(filter.year, Some(2019));
        assert_eq!(filter.trophy_id, Some(3));
        assert_eq!(filter.flag_id, Some(8));
        assert_eq!(filter.league_id, Some(5));
        assert_eq!(filter.participant_id, Some(41));
        assert_eq!(filter.page, 2);
        assert_eq!(filter.limit, 10);
        assert_eq!(filter.offset(), 20);
    }

    #[test]
    fn test_malformed_numbers_are_ignored() {
        let filter = RaceFilter::from(params(&[
            ("year", "last"),
            ("trophy", "abc"),
            ("flag", "-4"),
            ("league", "0"),
            ("page", "first"),
            ("limit", "lots"),
        ]));

        assert_eq!(filter.year, None);
        assert_eq!(filter.trophy_id, None);
        assert_eq!(filter.flag_id, None);
        assert_eq!(filter.league_id, None);
        assert_eq!(filter.page, 0);
        assert_eq!(filter.limit, 100);
    }

    #[test]
    fn test_out_of_range_paging_falls_back() {
        let filter = RaceFilter::from(params(&[("page", "-3"), ("limit", "0")]));
        assert_eq!(filter.page, 0);
        assert_eq!(filter.limit, 100);
    }

    #[test]
    fn test_trophy_or_flag_pair() {
        let filter = RaceFilter::from(params(&[("trophyOrFlag", "12,7")]));
        assert_eq!(filter.trophy_or_flag, Some((12, 7)));

        let filter = RaceFilter::from(params(&[("trophyOrFlag", "x,7")]));
        assert_eq!(filter.trophy_or_flag, Some((0, 7)));

        let filter = RaceFilter::from(params(&[("trophyOrFlag", "12")]));
        assert_eq!(filter.trophy_or_flag, None);

        let filter = RaceFilter::from(params(&[("trophyOrFlag", "1,2,3")]));
        assert_eq!(filter.trophy_or_flag, None);
    }

    #[test]
    fn test_huge_paging_saturates_without_next_link() {
        let max = i64::MAX.to_string();
        let filter = RaceFilter::from(params(&[("page", &max), ("limit", &max)]));

        assert_eq!(filter.page, i64::MAX);
        assert_eq!(filter.limit, i64::MAX);
        assert_eq!(filter.offset(), i64::MAX);

        let response =
            PaginatedResponse::<RaceResponse>::new(Vec::new(), filter.page, filter.limit, 25, "/races");
        assert_eq!(response.pagination.total_pages, 1);
        assert_eq!(response.pagination.next, None);
    }

    fn full_race() -> RaceRow {
        RaceRow {
            id: 42,
            date: "2019-08-25".to_string(),
            day: 2,
            sponsor: None,
            race_type: "CONVENTIONAL".to_string(),
            modality: "TRAINERA".to_string(),
            laps: Some(4),
            lanes: Some(4),
            cancelled: false,
            town: Some("Bueu".to_string()),
            trophy_id: Some(1),
            trophy_name: Some("Trofeo".to_string()),
            trophy_edition: Some(7),
            flag_id: None,
            flag_name: None,
            flag_edition: None,
            league_id: Some(9),
            league_name: Some("LIGA ACT".to_string()),
            league_gender: Some("MALE".to_string()),
            league_symbol: Some("ACT".to_string()),
            genders: Some(vec!["MALE".to_string()]),
            series: Some(3),
        }
    }

    #[test]
    fn test_race_response_from_row() {
        let race = RaceResponse::from(full_race());

        assert_eq!(race.id, 42);
        assert_eq!(race.name, "VII - Trofeo XORNADA 2");
        assert_eq!(race.date, "25-08-2019");
        assert_eq!(race.trophy.as_ref().map(|t| t.edition), Some(Some(7)));
        assert!(race.flag.is_none());
        assert_eq!(race.league.as_ref().map(|l| l.symbol.as_str()), Some("ACT"));
        assert_eq!(race.series, Some(3));
        assert!(race.participants.is_none());
    }

    #[test]
    fn test_race_response_json_shape() {
        let json = serde_json::to_value(RaceResponse::from(full_race())).unwrap();

        assert_eq!(json["type"], "CONVENTIONAL");
        assert_eq!(json["flag"], serde_json::Value::Null);
        assert_eq!(json["trophy"]["edition"], 7);
        assert_eq!(json["league"]["gender"], "MALE");
        assert!(json.get("participants").is_none());
    }

    #[test]
    fn test_race_without_participants_has_empty_genders() {
        let mut row = full_race();
        row.genders = None;
        let race = RaceResponse::from(row);

        assert!(race.genders.is_empty());
    }
}
