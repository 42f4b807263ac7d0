use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub user_email: String,
    pub user_address: Option<String>,
    pub chef_id: Option<String>,
    /// Line items, stored as a JSON array of `OrderLine`.
    pub items: Json,
    pub total_price: f64,
    pub order_status: String,
    pub payment_status: String,
    pub order_time: DateTimeWithTimeZone,
    pub paid_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
