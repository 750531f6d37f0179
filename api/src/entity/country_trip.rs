use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "country_trip")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_country: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_trip: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::IdCountry",
        to = "super::country::Column::IdCountry",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Country,
    #[sea_orm(
        belongs_to = "super::trip::Entity",
        from = "Column::IdTrip",
        to = "super::trip::Column::IdTrip",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Trip,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
