//! SQL rendering for the dynamic race search.

pub mod race;

pub use race::{RacePredicate, RaceQuery, race_by_id_query};
