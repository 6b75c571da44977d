pub mod club;
pub mod flag;
pub mod league;
pub mod participant;
pub mod penalty;
pub mod race;
pub mod trophy;

pub use club::Club;
pub use flag::Flag;
pub use league::League;
pub use participant::ParticipantRow;
pub use penalty::PenaltyRow;
pub use race::{EditionedRef, LeagueRef, RaceRow};
pub use trophy::Trophy;
