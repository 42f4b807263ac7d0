use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "meals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub chef_name: String,
    pub chef_id: Option<String>,
    pub chef_email: Option<String>,
    pub image: Option<String>,
    pub price: f64,
    pub rating: f64,
    pub ingredients: Json,
    pub estimated_delivery_time: Option<String>,
    pub delivery_area: Option<String>,
    pub chef_experience: Option<String>,
    pub details: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
}

// Reviews, favorites and orders reference meals by id without a foreign key;
// a dangling reference is tolerated everywhere.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
