use crate::models::{EditionedRef, RaceRow};
use crate::services::roman::to_roman;

/// Marker some trophies carry in their name; never part of the display name.
const QUALIFIER_MARKER: &str = "(CLASIFICATORIA)";
const FEMALE: &str = "FEMALE";

/// Builds the display name of a race.
///
/// Trophy, flag and sponsor parts are joined with `" - "` (empty parts are
/// left out), then a `XORNADA <day>` suffix for multi-day races and a
/// `(FEMENINA)` suffix for women's races are appended, separated by single
/// spaces. Whitespace left inside a part (e.g. by stripping the qualifier
/// marker) is kept; only the ends of the result are trimmed.
pub fn compose_race_name(race: &RaceRow) -> String {
    let trophy = race
        .trophy()
        .and_then(edition_part)
        .map(|part| part.replace(QUALIFIER_MARKER, ""));
    let flag = race.flag().and_then(edition_part);
    let sponsor = race.sponsor.clone();

    let joined = [trophy, flag, sponsor]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" - ");

    let day = if race.day > 1 {
        format!("XORNADA {}", race.day)
    } else {
        String::new()
    };

    let gender = if is_female_race(race) {
        "(FEMENINA)"
    } else {
        ""
    };

    [joined.as_str(), day.as_str(), gender]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// `"<roman edition> - <name>"`, or nothing when the race carries no edition.
fn edition_part(entity: EditionedRef<'_>) -> Option<String> {
    let edition = entity.edition.filter(|edition| *edition > 0)?;
    Some(format!("{} - {}", to_roman(edition), entity.name))
}

fn is_female_race(race: &RaceRow) -> bool {
    race.genders().iter().any(|gender| gender == FEMALE)
        || race
            .league()
            .and_then(|league| league.gender)
            .is_some_and(|gender| gender == FEMALE)
}
