use sqlx::FromRow;

/// One race joined with its trophy, flag and league, as returned by the store.
///
/// The trophy, flag and league columns come from `LEFT JOIN`s, so each group
/// is either fully present or fully null. Read them through [`RaceRow::trophy`],
/// [`RaceRow::flag`] and [`RaceRow::league`] instead of the raw columns.
#[derive(Debug, Clone, Default, FromRow)]
pub struct RaceRow {
    pub id: i64,
    pub date: String,
    pub day: i32,
    pub sponsor: Option<String>,
    pub race_type: String,
    pub modality: String,
    pub laps: Option<i32>,
    pub lanes: Option<i32>,
    pub cancelled: bool,
    pub town: Option<String>,

    pub trophy_id: Option<i64>,
    pub trophy_name: Option<String>,
    pub trophy_edition: Option<i32>,

    pub flag_id: Option<i64>,
    pub flag_name: Option<String>,
    pub flag_edition: Option<i32>,

    pub league_id: Option<i64>,
    pub league_name: Option<String>,
    pub league_gender: Option<String>,
    pub league_symbol: Option<String>,

    pub genders: Option<Vec<String>>,
    pub series: Option<i32>,
}

/// A trophy or flag attached to a race, with the race's edition number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditionedRef<'a> {
    pub id: i64,
    pub name: &'a str,
    pub edition: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueRef<'a> {
    pub id: i64,
    pub name: &'a str,
    pub gender: Option<&'a str>,
    pub symbol: &'a str,
}

impl RaceRow {
    pub fn trophy(&self) -> Option<EditionedRef<'_>> {
        Some(EditionedRef {
            id: self.trophy_id?,
            name: self.joined_column(&self.trophy_name, "trophy_name"),
            edition: self.trophy_edition,
        })
    }

    pub fn flag(&self) -> Option<EditionedRef<'_>> {
        Some(EditionedRef {
            id: self.flag_id?,
            name: self.joined_column(&self.flag_name, "flag_name"),
            edition: self.flag_edition,
        })
    }

    pub fn league(&self) -> Option<LeagueRef<'_>> {
        Some(LeagueRef {
            id: self.league_id?,
            name: self.joined_column(&self.league_name, "league_name"),
            gender: self.league_gender.as_deref(),
            symbol: self.joined_column(&self.league_symbol, "league_symbol"),
        })
    }

    /// A column of a joined entity whose id is present. NULL here means the
    /// join no longer guarantees the group is complete; it reads as empty.
    fn joined_column<'a>(&self, value: &'a Option<String>, column: &str) -> &'a str {
        match value.as_deref() {
            Some(value) => value,
            None => {
                tracing::debug!(race_id = self.id, column, "Joined column is NULL");
                ""
            }
        }
    }

    /// Distinct genders among the race's participants.
    pub fn genders(&self) -> &[String] {
        self.genders.as_deref().unwrap_or_default()
    }
}
