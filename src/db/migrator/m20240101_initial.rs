use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Franchises::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Franchises::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Franchises::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Franchises::Description).string_len(1000))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Characters::FullName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Characters::Alias).string_len(50))
                    .col(ColumnDef::new(Characters::Gender).string_len(20).not_null())
                    .col(ColumnDef::new(Characters::PictureUrl).string_len(200))
                    .to_owned(),
            )
            .await?;

        // Deleting a franchise orphans its movies instead of removing them.
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Movies::Genre).string_len(100).not_null())
                    .col(ColumnDef::new(Movies::ReleaseYear).integer().not_null())
                    .col(ColumnDef::new(Movies::Director).string_len(100).not_null())
                    .col(ColumnDef::new(Movies::PictureUrl).string_len(200))
                    .col(ColumnDef::new(Movies::TrailerUrl).string_len(200))
                    .col(ColumnDef::new(Movies::FranchiseId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movies_franchise_id")
                            .from(Movies::Table, Movies::FranchiseId)
                            .to(Franchises::Table, Franchises::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_franchise_id")
                    .table(Movies::Table)
                    .col(Movies::FranchiseId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieCharacters::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MovieCharacters::MovieId).integer().not_null())
                    .col(
                        ColumnDef::new(MovieCharacters::CharacterId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_movie_characters")
                            .col(MovieCharacters::MovieId)
                            .col(MovieCharacters::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_characters_movie_id")
                            .from(MovieCharacters::Table, MovieCharacters::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_characters_character_id")
                            .from(MovieCharacters::Table, MovieCharacters::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_characters_character_id")
                    .table(MovieCharacters::Table)
                    .col(MovieCharacters::CharacterId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieCharacters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Franchises::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Franchises {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Characters {
    Table,
    Id,
    FullName,
    Alias,
    Gender,
    PictureUrl,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Genre,
    ReleaseYear,
    Director,
    PictureUrl,
    TrailerUrl,
    FranchiseId,
}

#[derive(DeriveIden)]
enum MovieCharacters {
    Table,
    MovieId,
    CharacterId,
}
