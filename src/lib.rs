//! Monster Scroll - Maverick skill resolver for team building

pub mod catalog;
pub mod core;
pub mod team;
