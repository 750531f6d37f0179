use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "client_trip")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_client: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_trip: i32,
    pub registered_at: DateTimeWithTimeZone,
    pub payment_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::IdClient",
        to = "super::client::Column::IdClient",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::trip::Entity",
        from = "Column::IdTrip",
        to = "super::trip::Column::IdTrip",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Trip,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
