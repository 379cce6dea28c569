use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ── Create admin_users table ──
        manager
            .create_table(
                Table::create()
                    .table(AdminUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminUsers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AdminUsers::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AdminUsers::Nickname).string().not_null())
                    .col(ColumnDef::new(AdminUsers::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // ── Create admin_sites table ──
        manager
            .create_table(
                Table::create()
                    .table(AdminSites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminSites::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminSites::Name).string().not_null())
                    .col(
                        ColumnDef::new(AdminSites::Status)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(AdminSites::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // ── Create admin_login_logs table ──
        manager
            .create_table(
                Table::create()
                    .table(AdminLoginLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminLoginLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminLoginLogs::UserId).integer().null())
                    .col(ColumnDef::new(AdminLoginLogs::Username).string().not_null())
                    .col(ColumnDef::new(AdminLoginLogs::Ip).string().not_null())
                    .col(
                        ColumnDef::new(AdminLoginLogs::Status)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdminLoginLogs::SiteId).integer().null())
                    .col(
                        ColumnDef::new(AdminLoginLogs::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // List queries always scope by site and sort by time
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_admin_login_logs_site_id")
                    .table(AdminLoginLogs::Table)
                    .col(AdminLoginLogs::SiteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_admin_login_logs_created_at")
                    .table(AdminLoginLogs::Table)
                    .col(AdminLoginLogs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminLoginLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AdminSites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AdminUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AdminUsers {
    Table,
    Id,
    Username,
    Nickname,
    CreatedAt,
}

#[derive(Iden)]
enum AdminSites {
    Table,
    Id,
    Name,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum AdminLoginLogs {
    Table,
    Id,
    UserId,
    Username,
    Ip,
    Status,
    SiteId,
    CreatedAt,
}
