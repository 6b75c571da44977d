pub mod common;
pub mod participant;
pub mod race;
