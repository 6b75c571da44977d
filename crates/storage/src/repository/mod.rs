pub mod club;
pub mod flag;
pub mod league;
pub mod participant;
pub mod race;
pub mod trophy;
