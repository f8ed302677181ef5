//! SeaORM entities mirroring the five stored record types.

pub mod blog;
pub mod course;
pub mod dictionary_term;
pub mod subscription;
pub mod user;
