//! Value objects - immutable types that represent domain concepts

mod dni;
mod record_id;

pub use dni::Dni;
pub use record_id::{RecordId, RecordIdParseError};
