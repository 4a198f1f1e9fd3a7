//! App - Native Preview

pub mod application;
