//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod catalog;
pub mod events;
pub mod favorites;
pub mod health;
pub mod landing;
pub mod sessions;
pub mod stats;
pub mod users;
