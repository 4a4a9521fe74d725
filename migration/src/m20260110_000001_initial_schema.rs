use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create profiles table
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profiles::Role).string().not_null())
                    .col(ColumnDef::new(Profiles::FullName).string().not_null())
                    .col(ColumnDef::new(Profiles::Email).string().not_null())
                    .col(ColumnDef::new(Profiles::Phone).string())
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_profiles_email")
                    .table(Profiles::Table)
                    .col(Profiles::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create session_tokens table
        manager
            .create_table(
                Table::create()
                    .table(SessionTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionTokens::Token)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SessionTokens::ProfileId).uuid().not_null())
                    .col(
                        ColumnDef::new(SessionTokens::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create materials table
        manager
            .create_table(
                Table::create()
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Materials::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Materials::ClientId).uuid().not_null())
                    .col(ColumnDef::new(Materials::FileName).string().not_null())
                    .col(ColumnDef::new(Materials::FilePath).string().not_null())
                    .col(ColumnDef::new(Materials::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Materials::FileType).string().not_null())
                    .col(ColumnDef::new(Materials::Description).string())
                    .col(
                        ColumnDef::new(Materials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_materials_client_id")
                    .table(Materials::Table)
                    .col(Materials::ClientId)
                    .to_owned(),
            )
            .await?;

        // Create messages table
        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Messages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Messages::ClientId).uuid().not_null())
                    .col(ColumnDef::new(Messages::SenderId).uuid().not_null())
                    .col(ColumnDef::new(Messages::Content).text().not_null())
                    .col(
                        ColumnDef::new(Messages::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Messages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_messages_client_id")
                    .table(Messages::Table)
                    .col(Messages::ClientId)
                    .to_owned(),
            )
            .await?;

        // Create saved_homes table
        manager
            .create_table(
                Table::create()
                    .table(SavedHomes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SavedHomes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SavedHomes::ClientId).uuid().not_null())
                    .col(ColumnDef::new(SavedHomes::Url).string().not_null())
                    .col(ColumnDef::new(SavedHomes::Title).string())
                    .col(ColumnDef::new(SavedHomes::ImageUrl).string())
                    .col(ColumnDef::new(SavedHomes::Address).string())
                    .col(ColumnDef::new(SavedHomes::Price).string())
                    .col(ColumnDef::new(SavedHomes::Notes).text())
                    .col(
                        ColumnDef::new(SavedHomes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One bookmark per listing per client
        manager
            .create_index(
                Index::create()
                    .name("idx_saved_homes_client_url")
                    .table(SavedHomes::Table)
                    .col(SavedHomes::ClientId)
                    .col(SavedHomes::Url)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create candidate_homes table
        manager
            .create_table(
                Table::create()
                    .table(CandidateHomes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CandidateHomes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CandidateHomes::Url).string().not_null())
                    .col(ColumnDef::new(CandidateHomes::Title).string())
                    .col(ColumnDef::new(CandidateHomes::ImageUrl).string())
                    .col(ColumnDef::new(CandidateHomes::Address).string())
                    .col(ColumnDef::new(CandidateHomes::Price).string())
                    .col(ColumnDef::new(CandidateHomes::PriceNumeric).big_integer())
                    .col(ColumnDef::new(CandidateHomes::Beds).double())
                    .col(ColumnDef::new(CandidateHomes::Baths).double())
                    .col(ColumnDef::new(CandidateHomes::Sqft).big_integer())
                    .col(
                        ColumnDef::new(CandidateHomes::Status)
                            .string()
                            .not_null()
                            .default("new"),
                    )
                    .col(
                        ColumnDef::new(CandidateHomes::Source)
                            .string()
                            .not_null()
                            .default("manual"),
                    )
                    .col(ColumnDef::new(CandidateHomes::Notes).text())
                    .col(
                        ColumnDef::new(CandidateHomes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CandidateHomes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Ingestion dedupes by listing URL
        manager
            .create_index(
                Index::create()
                    .name("idx_candidate_homes_url")
                    .table(CandidateHomes::Table)
                    .col(CandidateHomes::Url)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_candidate_homes_status")
                    .table(CandidateHomes::Table)
                    .col(CandidateHomes::Status)
                    .to_owned(),
            )
            .await?;

        // Create search_criteria table
        manager
            .create_table(
                Table::create()
                    .table(SearchCriteria::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SearchCriteria::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SearchCriteria::RegionId).string().not_null())
                    .col(
                        ColumnDef::new(SearchCriteria::RegionType)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SearchCriteria::MinPrice).big_integer())
                    .col(ColumnDef::new(SearchCriteria::MaxPrice).big_integer())
                    .col(ColumnDef::new(SearchCriteria::MinBeds).integer())
                    .col(ColumnDef::new(SearchCriteria::MinBaths).integer())
                    .col(ColumnDef::new(SearchCriteria::PropertyTypes).string())
                    .col(
                        ColumnDef::new(SearchCriteria::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SearchCriteria::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SearchCriteria::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CandidateHomes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SavedHomes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Materials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SessionTokens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Role,
    FullName,
    Email,
    Phone,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SessionTokens {
    Table,
    Token,
    ProfileId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Materials {
    Table,
    Id,
    ClientId,
    FileName,
    FilePath,
    FileSize,
    FileType,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    Id,
    ClientId,
    SenderId,
    Content,
    IsRead,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SavedHomes {
    Table,
    Id,
    ClientId,
    Url,
    Title,
    ImageUrl,
    Address,
    Price,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CandidateHomes {
    Table,
    Id,
    Url,
    Title,
    ImageUrl,
    Address,
    Price,
    PriceNumeric,
    Beds,
    Baths,
    Sqft,
    Status,
    Source,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SearchCriteria {
    Table,
    Id,
    RegionId,
    RegionType,
    MinPrice,
    MaxPrice,
    MinBeds,
    MinBaths,
    PropertyTypes,
    IsActive,
    CreatedAt,
}
