//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions. Nullable columns fall back to the
//! same defaults the schema declares.

mod catalog;
mod event;
mod session;
mod stats;
mod user;
