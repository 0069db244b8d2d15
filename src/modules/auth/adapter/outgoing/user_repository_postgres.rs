use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::{PendingCode, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_insert_error(e: DbErr) -> UserRepositoryError {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
            return UserRepositoryError::UserAlreadyExists;
        }

        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let user_id = UserId::new();
        let active_user = UserActiveModel {
            id: Set(user_id.value()),
            username: Set(data.username),
            email: Set(data.email),
            password: Set(data.password),
            is_verified: Set(false),
            verification_code: Set(Some(data.pending_code.code.as_str().to_string())),
            verification_expires_at: Set(Some(data.pending_code.expires_at.fixed_offset())),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(UserResult {
            id: inserted.id.into(),
            username: inserted.username,
            email: inserted.email,
            is_verified: inserted.is_verified,
        })
    }

    async fn reissue_verification(
        &self,
        user_id: UserId,
        password: String,
        pending_code: PendingCode,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::Password, Expr::value(password))
            .col_expr(
                UserColumn::VerificationCode,
                Expr::value(Some(pending_code.code.as_str().to_string())),
            )
            .col_expr(
                UserColumn::VerificationExpiresAt,
                Expr::value(Some(pending_code.expires_at.fixed_offset())),
            )
            .filter(UserColumn::Id.eq(user_id.value()))
            .filter(UserColumn::IsVerified.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected > 0 {
            return Ok(());
        }

        // Nothing matched: either the row is gone or it was verified meanwhile.
        let existing = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        match existing {
            Some(_) => Err(UserRepositoryError::UserAlreadyVerified),
            None => Err(UserRepositoryError::UserNotFound),
        }
    }

    async fn activate_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsVerified, Expr::value(true))
            .col_expr(UserColumn::VerificationCode, Expr::value(Option::<String>::None))
            .col_expr(
                UserColumn::VerificationExpiresAt,
                Expr::value(Option::<chrono::DateTime<chrono::FixedOffset>>::None),
            )
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
