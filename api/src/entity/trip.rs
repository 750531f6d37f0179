use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trip")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_trip: i32,
    pub name: String,
    pub description: String,
    pub date_from: DateTimeWithTimeZone,
    pub date_to: DateTimeWithTimeZone,
    pub max_people: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::client_trip::Entity")]
    ClientTrip,
    #[sea_orm(has_many = "super::country_trip::Entity")]
    CountryTrip,
}

impl Related<super::client_trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientTrip.def()
    }
}

impl Related<super::country_trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CountryTrip.def()
    }
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        super::client_trip::Relation::Client.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::client_trip::Relation::Trip.def().rev())
    }
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        super::country_trip::Relation::Country.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::country_trip::Relation::Trip.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
