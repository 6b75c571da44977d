pub mod race_date;
pub mod race_name;
pub mod roman;
