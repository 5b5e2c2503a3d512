use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, QueryFilter, QueryOrder, Set};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new row; the store assigns the id.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        email: Set(email.to_string()),
    };
    Ok(am.insert(db).await?)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

/// Overwrite the row keyed by `model.id`, inserting it under that id when it is missing.
pub async fn save<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(model.id),
        first_name: Set(model.first_name),
        last_name: Set(model.last_name),
        email: Set(model.email),
    };
    match am.clone().update(db).await {
        Ok(updated) => Ok(updated),
        Err(DbErr::RecordNotUpdated) => Ok(am.insert(db).await?),
        Err(e) => Err(e.into()),
    }
}

/// Delete by primary key; returns the number of rows removed (0 when absent).
pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
