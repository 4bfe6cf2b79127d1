use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub alias: Option<String>,
    pub gender: String,
    pub picture_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_characters::Entity")]
    MovieCharacters,
}

impl Related<super::movie_characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCharacters.def()
    }
}

impl Related<super::movies::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_characters::Relation::Movie.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::movie_characters::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
