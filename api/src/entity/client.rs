use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_client: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    #[sea_orm(unique)]
    pub pesel: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::client_trip::Entity")]
    ClientTrip,
}

impl Related<super::client_trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientTrip.def()
    }
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        super::client_trip::Relation::Trip.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::client_trip::Relation::Client.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
