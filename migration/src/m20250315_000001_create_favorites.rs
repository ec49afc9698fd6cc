use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(big_integer(Favorites::MovieId))
                    .col(string(Favorites::Title))
                    .col(string_null(Favorites::PosterPath))
                    .col(string_null(Favorites::ReleaseDate))
                    .col(string_null(Favorites::Overview))
                    .col(double_null(Favorites::VoteAverage))
                    .col(big_integer_null(Favorites::VoteCount))
                    .col(string_null(Favorites::GenreIds))
                    .col(string_null(Favorites::OriginalLanguage))
                    .col(double_null(Favorites::Popularity))
                    .col(string_null(Favorites::BackdropPath))
                    .col(boolean_null(Favorites::Adult))
                    .col(boolean_null(Favorites::Video))
                    .col(string_null(Favorites::OriginalTitle))
                    .col(big_integer(Favorites::AddedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_movie_id")
                    .table(Favorites::Table)
                    .col(Favorites::MovieId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_added_at")
                    .table(Favorites::Table)
                    .col(Favorites::AddedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Favorites::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    MovieId,
    Title,
    PosterPath,
    ReleaseDate,
    Overview,
    VoteAverage,
    VoteCount,
    GenreIds,
    OriginalLanguage,
    Popularity,
    BackdropPath,
    Adult,
    Video,
    OriginalTitle,
    AddedAt,
}
