use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub director: String,
    pub picture_url: Option<String>,
    pub trailer_url: Option<String>,
    /// Null when the movie is not part of any franchise.
    pub franchise_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::franchises::Entity",
        from = "Column::FranchiseId",
        to = "super::franchises::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Franchise,
    #[sea_orm(has_many = "super::movie_characters::Entity")]
    MovieCharacters,
}

impl Related<super::franchises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Franchise.def()
    }
}

impl Related<super::movie_characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCharacters.def()
    }
}

impl Related<super::characters::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_characters::Relation::Character.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::movie_characters::Relation::Movie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
