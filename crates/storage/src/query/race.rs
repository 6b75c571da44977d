use sqlx::{Postgres, QueryBuilder};

use crate::dto::race::RaceFilter;

/// Columns read into [`crate::models::RaceRow`]. Casts pin the store's
/// column types to the ones the row decodes.
const RACE_SELECT: &str = r#"
    SELECT r.id::bigint AS id, r.date::text AS date, r.day::int AS day, r.sponsor,
           r.type AS race_type, r.modality, r.laps::int AS laps, r.lanes::int AS lanes,
           r.cancelled, r.town,
           t.id::bigint AS trophy_id, t.name AS trophy_name, r.trophy_edition::int AS trophy_edition,
           f.id::bigint AS flag_id, f.name AS flag_name, r.flag_edition::int AS flag_edition,
           l.id::bigint AS league_id, l.name AS league_name, l.gender AS league_gender,
           l.symbol AS league_symbol,
           (SELECT ARRAY_AGG(DISTINCT gender)::text[] FROM participant WHERE race_id = r.id) AS genders,
           (SELECT MAX(series)::int FROM participant WHERE race_id = r.id) AS series
"#;

const RACE_FROM: &str = r#"
    FROM race r
    LEFT JOIN trophy t ON r.trophy_id = t.id
    LEFT JOIN flag f ON r.flag_id = f.id
    LEFT JOIN league l ON r.league_id = l.id
"#;

/// One condition of the race search. Every value is bound, never spliced
/// into the SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RacePredicate {
    /// `ILIKE` pattern matched against trophy, flag and sponsor names.
    Keywords(String),
    Year(i32),
    Trophy(i64),
    Flag(i64),
    TrophyOrFlag { trophy_id: i64, flag_id: i64 },
    League(i64),
    /// A club that has a participant in the race.
    Club(i64),
}

impl RacePredicate {
    fn push(&self, query: &mut QueryBuilder<'static, Postgres>) {
        query.push(" AND (");
        match self {
            Self::Keywords(pattern) => {
                query.push("t.name ILIKE ");
                query.push_bind(pattern.clone());
                query.push(" OR f.name ILIKE ");
                query.push_bind(pattern.clone());
                query.push(" OR r.sponsor ILIKE ");
                query.push_bind(pattern.clone());
            }
            Self::Year(year) => {
                query.push("EXTRACT(YEAR FROM r.date)::int = ");
                query.push_bind(*year);
            }
            Self::Trophy(id) => {
                query.push("r.trophy_id IS NOT NULL AND r.trophy_id = ");
                query.push_bind(*id);
            }
            Self::Flag(id) => {
                query.push("r.flag_id IS NOT NULL AND r.flag_id = ");
                query.push_bind(*id);
            }
            Self::TrophyOrFlag { trophy_id, flag_id } => {
                query.push("(r.trophy_id IS NOT NULL AND r.trophy_id = ");
                query.push_bind(*trophy_id);
                query.push(") OR (r.flag_id IS NOT NULL AND r.flag_id = ");
                query.push_bind(*flag_id);
                query.push(")");
            }
            Self::League(id) => {
                query.push("r.league_id IS NOT NULL AND r.league_id = ");
                query.push_bind(*id);
            }
            Self::Club(id) => {
                query.push(
                    "EXISTS (SELECT 1 FROM participant p WHERE p.race_id = r.id AND p.club_id = ",
                );
                query.push_bind(*id);
                query.push(")");
            }
        }
        query.push(")");
    }
}

/// A compiled race search: the page query and the count query are both
/// rendered from the same predicate list.
#[derive(Debug, Clone)]
pub struct RaceQuery {
    predicates: Vec<RacePredicate>,
    limit: i64,
    offset: i64,
}

impl RaceQuery {
    pub fn new(filter: &RaceFilter) -> Self {
        let mut predicates = Vec::new();

        if !filter.keywords.is_empty() {
            predicates.push(RacePredicate::Keywords(format!("%{}%", filter.keywords)));
        }
        if let Some(year) = filter.year.filter(|year| *year > 0) {
            predicates.push(RacePredicate::Year(year));
        }
        if let Some(id) = filter.trophy_id.filter(|id| *id > 0) {
            predicates.push(RacePredicate::Trophy(id));
        }
        if let Some(id) = filter.flag_id.filter(|id| *id > 0) {
            predicates.push(RacePredicate::Flag(id));
        }
        if let Some((trophy_id, flag_id)) = filter.trophy_or_flag {
            if trophy_id > 0 && flag_id > 0 {
                predicates.push(RacePredicate::TrophyOrFlag { trophy_id, flag_id });
            }
        }
        if let Some(id) = filter.league_id.filter(|id| *id > 0) {
            predicates.push(RacePredicate::League(id));
        }
        if let Some(id) = filter.participant_id.filter(|id| *id > 0) {
            predicates.push(RacePredicate::Club(id));
        }

        Self {
            predicates,
            limit: filter.limit,
            offset: filter.offset(),
        }
    }

    pub fn predicates(&self) -> &[RacePredicate] {
        &self.predicates
    }

    /// Races matching the search, newest first, limited to one page.
    pub fn page_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(RACE_SELECT);
        query.push(RACE_FROM);
        self.push_filters(&mut query);

        query.push(" ORDER BY r.date DESC LIMIT ");
        query.push_bind(self.limit);
        query.push(" OFFSET ");
        query.push_bind(self.offset);

        query
    }

    /// Number of races matching the search, ignoring pagination.
    pub fn count_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new("SELECT COUNT(*)");
        query.push(RACE_FROM);
        self.push_filters(&mut query);

        query
    }

    fn push_filters(&self, query: &mut QueryBuilder<'static, Postgres>) {
        query.push(" WHERE 1=1");
        for predicate in &self.predicates {
            predicate.push(query);
        }
    }
}

/// A single race by id, with the same columns as the listing.
pub fn race_by_id_query(id: i64) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(RACE_SELECT);
    query.push(RACE_FROM);
    query.push(" WHERE r.id = ");
    query.push_bind(id);

    query
}

#[cfg(test)]
mod tests {
    use super::*;

    fn where_clause(sql: &str) -> &str {
        let start = sql.find(" WHERE 1=1").expect("missing WHERE");
        let end = sql.find(" ORDER BY").unwrap_or(sql.len());
        &sql[start..end]
    }

    fn filter() -> RaceFilter {
        RaceFilter::default()
    }

    #[test]
    fn test_no_filters_leaves_where_clause_empty() {
        let query = RaceQuery::new(&filter());

        assert!(query.predicates().is_empty());
        assert_eq!(where_clause(query.page_query().sql()), " WHERE 1=1");
        assert_eq!(where_clause(query.count_query().sql()), " WHERE 1=1");
    }

    #[test]
    fn test_page_and_count_share_predicates() {
        let filters = [
            RaceFilter {
                keywords: "concha".to_string(),
                ..filter()
            },
            RaceFilter {
                year: Some(2019),
                league_id: Some(5),
                ..filter()
            },
            RaceFilter {
                trophy_id: Some(3),
                flag_id: Some(8),
                trophy_or_flag: Some((3, 8)),
                participant_id: Some(41),
                ..filter()
            },
            RaceFilter {
                keywords: "bandera".to_string(),
                year: Some(2021),
                trophy_id: Some(1),
                flag_id: Some(2),
                trophy_or_flag: Some((4, 5)),
                league_id: Some(6),
                participant_id: Some(7),
                page: 3,
                limit: 20,
            },
        ];

        for filter in &filters {
            let query = RaceQuery::new(filter);
            let page = query.page_query();
            let count = query.count_query();

            assert_eq!(where_clause(page.sql()), where_clause(count.sql()));
            assert!(count.sql().starts_with("SELECT COUNT(*)"));
            assert!(!count.sql().contains("LIMIT"));
        }
    }

    #[test]
    fn test_predicates_keep_fixed_order() {
        let query = RaceQuery::new(&RaceFilter {
            keywords: "bandera".to_string(),
            year: Some(2021),
            trophy_id: Some(1),
            flag_id: Some(2),
            trophy_or_flag: Some((4, 5)),
            league_id: Some(6),
            participant_id: Some(7),
            ..filter()
        });

        assert_eq!(
            query.predicates(),
            &[
                RacePredicate::Keywords("%bandera%".to_string()),
                RacePredicate::Year(2021),
                RacePredicate::Trophy(1),
                RacePredicate::Flag(2),
                RacePredicate::TrophyOrFlag {
                    trophy_id: 4,
                    flag_id: 5
                },
                RacePredicate::League(6),
                RacePredicate::Club(7),
            ]
        );
    }

    #[test]
    fn test_values_are_bound_not_inlined() {
        let query = RaceQuery::new(&RaceFilter {
            keywords: "'; DROP TABLE race; --".to_string(),
            participant_id: Some(41),
            ..filter()
        });
        let page = query.page_query();
        let sql = page.sql();

        assert!(!sql.contains("DROP TABLE"));
        assert!(!sql.contains("41"));
        assert!(sql.contains("t.name ILIKE $1 OR f.name ILIKE $2 OR r.sponsor ILIKE $3"));
        assert!(sql.contains("p.club_id = $4)"));
        assert!(sql.ends_with("LIMIT $5 OFFSET $6"));
    }

    #[test]
    fn test_trophy_or_flag_conjoins_with_trophy_and_flag() {
        let query = RaceQuery::new(&RaceFilter {
            trophy_id: Some(1),
            trophy_or_flag: Some((2, 3)),
            ..filter()
        });
        let count = query.count_query();

        assert_eq!(
            where_clause(count.sql()),
            " WHERE 1=1 AND (r.trophy_id IS NOT NULL AND r.trophy_id = $1) \
             AND ((r.trophy_id IS NOT NULL AND r.trophy_id = $2) \
             OR (r.flag_id IS NOT NULL AND r.flag_id = $3))"
        );
    }

    #[test]
    fn test_trophy_or_flag_needs_both_ids() {
        for pair in [(0, 3), (2, 0), (-1, 3)] {
            let query = RaceQuery::new(&RaceFilter {
                trophy_or_flag: Some(pair),
                ..filter()
            });
            assert!(query.predicates().is_empty());
        }
    }

    #[test]
    fn test_non_positive_ids_do_not_constrain() {
        let query = RaceQuery::new(&RaceFilter {
            year: Some(0),
            trophy_id: Some(-2),
            league_id: Some(0),
            ..filter()
        });

        assert!(query.predicates().is_empty());
    }

    #[test]
    fn test_race_by_id_query() {
        let query = race_by_id_query(42);

        assert!(query.sql().contains("FROM race r"));
        assert!(query.sql().ends_with(" WHERE r.id = $1"));
    }
}
