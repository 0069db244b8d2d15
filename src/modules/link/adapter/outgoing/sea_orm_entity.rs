use crate::auth::application::domain::entities::UserId;
use crate::link::application::ports::outgoing::{LinkQueryResult, LinkResult};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "links")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub url: String,

    pub title: String,

    pub description: Option<String>,

    pub tags: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> LinkResult {
        LinkResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            url: self.url.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            created_at: self.created_at.into(),
        }
    }

    pub fn to_query_result(&self) -> LinkQueryResult {
        LinkQueryResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            url: self.url.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
