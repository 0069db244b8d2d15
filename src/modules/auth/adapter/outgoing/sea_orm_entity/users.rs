use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::PendingCode;
use crate::auth::application::ports::outgoing::UserQueryResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub is_verified: bool,
    pub verification_code: Option<String>,
    pub verification_expires_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// updated_at is maintained by a database trigger.
impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_query_result(self) -> UserQueryResult {
        UserQueryResult {
            id: self.id.into(),
            username: self.username,
            email: self.email,
            password: self.password,
            is_verified: self.is_verified,
            pending_code: PendingCode::from_parts(
                self.verification_code,
                self.verification_expires_at
                    .map(|expires_at| expires_at.with_timezone(&Utc)),
            ),
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        }
    }
}
