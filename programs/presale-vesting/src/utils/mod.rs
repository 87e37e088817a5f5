pub mod fraction;
pub mod schedule;
