//! User model -> entity mapper

use podwave_core::entities::User;
use podwave_core::value_objects::{Dni, RecordId};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: RecordId::new(model.id),
            name: model.name,
            dni: Dni::from_stored(model.dni),
            created_at: model.created_at,
        }
    }
}
