use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Links::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Links::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Links::UserId).uuid().not_null())
                    .col(ColumnDef::new(Links::Url).string_len(1024).not_null())
                    .col(ColumnDef::new(Links::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Links::Description).text())
                    .col(ColumnDef::new(Links::Tags).text())
                    .col(
                        ColumnDef::new(Links::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_links_user_id")
                            .from(Links::Table, Links::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is always newest first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_links_created_at
                ON links (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_links_user_id
                ON links (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Links::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Links {
    Table,
    Id,
    UserId,
    Url,
    Title,
    Description,
    Tags,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
