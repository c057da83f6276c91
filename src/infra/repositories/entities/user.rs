//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::domain::{User, UserDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub birthday: Date,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            firstname: model.firstname,
            lastname: model.lastname,
            email: model.email,
            birthday: model.birthday,
            password: model.password,
        }
    }
}

/// Active model for an insert: id left unset so the store assigns it
impl From<UserDraft> for ActiveModel {
    fn from(draft: UserDraft) -> Self {
        ActiveModel {
            id: NotSet,
            firstname: Set(draft.firstname),
            lastname: Set(draft.lastname),
            email: Set(draft.email),
            birthday: Set(draft.birthday),
            password: Set(draft.password),
        }
    }
}

/// Active model for a merge by primary key: every column set
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id),
            firstname: Set(user.firstname),
            lastname: Set(user.lastname),
            email: Set(user.email),
            birthday: Set(user.birthday),
            password: Set(user.password),
        }
    }
}
