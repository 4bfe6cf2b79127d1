use super::links;
use crate::domain::relations::{ReplacePlan, dedup_union, group_links, plan_replace};
use crate::entities::{characters, franchises, movies, prelude::*};
use crate::models::{Character, Franchise, FranchiseInput, Movie};
use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

pub struct FranchiseRepository {
    conn: DatabaseConnection,
}

impl FranchiseRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Franchise>> {
        let txn = self.conn.begin().await?;

        let models = Franchises::find()
            .order_by_asc(franchises::Column::Id)
            .all(&txn)
            .await?;

        let pairs: Vec<(Option<i32>, i32)> = Movies::find()
            .select_only()
            .column(movies::Column::FranchiseId)
            .column(movies::Column::Id)
            .filter(movies::Column::FranchiseId.is_not_null())
            .into_tuple()
            .all(&txn)
            .await?;
        let mut by_franchise = group_links(
            pairs
                .into_iter()
                .filter_map(|(franchise_id, movie_id)| franchise_id.map(|f| (f, movie_id))),
        );

        txn.commit().await?;

        Ok(models
            .into_iter()
            .map(|model| {
                let movie_ids = by_franchise.remove(&model.id).unwrap_or_default();
                map_franchise(model, movie_ids)
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Franchise>> {
        let txn = self.conn.begin().await?;
        let Some(model) = Franchises::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        let movie_ids = movie_ids_of(&txn, id).await?;
        txn.commit().await?;
        Ok(Some(map_franchise(model, movie_ids)))
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        links::franchise_exists(&self.conn, id).await
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Franchises::find().count(&self.conn).await?)
    }

    pub async fn insert(&self, input: FranchiseInput) -> Result<Franchise> {
        let model = franchises::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        Ok(map_franchise(model, Vec::new()))
    }

    /// Overwrites name and description. Member movies are untouched.
    pub async fn replace_fields(&self, id: i32, input: FranchiseInput) -> Result<Option<Franchise>> {
        let txn = self.conn.begin().await?;

        if !links::franchise_exists(&txn, id).await? {
            return Ok(None);
        }

        let model = Franchises::update(franchises::ActiveModel {
            id: Set(id),
            name: Set(input.name),
            description: Set(input.description),
        })
        .exec(&txn)
        .await?;

        let movie_ids = movie_ids_of(&txn, id).await?;
        txn.commit().await?;
        Ok(Some(map_franchise(model, movie_ids)))
    }

    /// Removes the franchise. Its movies stay, with no franchise.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let txn = self.conn.begin().await?;

        Movies::update_many()
            .col_expr(movies::Column::FranchiseId, Expr::value(Option::<i32>::None))
            .filter(movies::Column::FranchiseId.eq(id))
            .exec(&txn)
            .await?;

        let result = Franchises::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    /// Makes the existing subset of `movie_ids` the franchise's full member set.
    ///
    /// Movies taken from another franchise move here; former members are
    /// detached. Returns `None` when the franchise does not exist.
    pub async fn replace_movies(
        &self,
        franchise_id: i32,
        movie_ids: &[i32],
    ) -> Result<Option<ReplacePlan>> {
        let txn = self.conn.begin().await?;

        if !links::franchise_exists(&txn, franchise_id).await? {
            return Ok(None);
        }

        let current = movie_ids_of(&txn, franchise_id).await?;
        let existing = links::existing_movie_ids(&txn, movie_ids).await?;
        let plan = plan_replace(&current, movie_ids, &existing);

        if !plan.detach.is_empty() {
            Movies::update_many()
                .col_expr(movies::Column::FranchiseId, Expr::value(Option::<i32>::None))
                .filter(movies::Column::Id.is_in(plan.detach.iter().copied()))
                .exec(&txn)
                .await?;
        }

        if !plan.attach.is_empty() {
            Movies::update_many()
                .col_expr(movies::Column::FranchiseId, Expr::value(franchise_id))
                .filter(movies::Column::Id.is_in(plan.attach.iter().copied()))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(Some(plan))
    }

    /// Member movies ordered by id, or `None` for an unknown franchise.
    pub async fn movies_of(&self, franchise_id: i32) -> Result<Option<Vec<Movie>>> {
        let txn = self.conn.begin().await?;

        if !links::franchise_exists(&txn, franchise_id).await? {
            return Ok(None);
        }

        let models = Movies::find()
            .filter(movies::Column::FranchiseId.eq(franchise_id))
            .order_by_asc(movies::Column::Id)
            .all(&txn)
            .await?;

        let movies = links::movies_with_characters(&txn, models).await?;
        txn.commit().await?;
        Ok(Some(movies))
    }

    /// Every character appearing in at least one member movie, each listed once.
    pub async fn characters_of(&self, franchise_id: i32) -> Result<Option<Vec<Character>>> {
        let txn = self.conn.begin().await?;

        if !links::franchise_exists(&txn, franchise_id).await? {
            return Ok(None);
        }

        let movie_ids = movie_ids_of(&txn, franchise_id).await?;
        let casts = group_links(links::links_for_movies(&txn, &movie_ids).await?);
        let character_ids = dedup_union(casts.into_values());

        let models = if character_ids.is_empty() {
            Vec::new()
        } else {
            Characters::find()
                .filter(characters::Column::Id.is_in(character_ids))
                .order_by_asc(characters::Column::Id)
                .all(&txn)
                .await?
        };

        let characters = links::characters_with_movies(&txn, models).await?;
        txn.commit().await?;
        Ok(Some(characters))
    }
}

async fn movie_ids_of<C: ConnectionTrait>(conn: &C, franchise_id: i32) -> Result<Vec<i32>> {
    let ids: Vec<i32> = Movies::find()
        .select_only()
        .column(movies::Column::Id)
        .filter(movies::Column::FranchiseId.eq(franchise_id))
        .order_by_asc(movies::Column::Id)
        .into_tuple()
        .all(conn)
        .await?;
    Ok(ids)
}

fn map_franchise(model: franchises::Model, movie_ids: Vec<i32>) -> Franchise {
    Franchise {
        id: model.id,
        name: model.name,
        description: model.description,
        movie_ids,
    }
}
