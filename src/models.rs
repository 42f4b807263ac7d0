use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{favorites, meals, orders, payment_history, requests, reviews, users};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Chef,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Chef => "chef",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(RequestStatus::Pending),
            "approved" => Some(RequestStatus::Approved),
            "rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }
}

pub const USER_STATUS_ACTIVE: &str = "active";

pub const ORDER_STATUSES: [&str; 4] = ["pending", "accepted", "delivered", "cancelled"];
pub const PAYMENT_STATUSES: [&str; 2] = ["pending", "paid"];

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub chef_name: String,
    pub chef_id: Option<String>,
    pub chef_email: Option<String>,
    pub image: Option<String>,
    pub price: f64,
    pub rating: f64,
    pub ingredients: Vec<String>,
    pub estimated_delivery_time: Option<String>,
    pub delivery_area: Option<String>,
    pub chef_experience: Option<String>,
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<meals::Model> for Meal {
    fn from(model: meals::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            chef_name: model.chef_name,
            chef_id: model.chef_id,
            chef_email: model.chef_email,
            image: model.image,
            price: model.price,
            rating: model.rating,
            ingredients: serde_json::from_value(model.ingredients).unwrap_or_default(),
            estimated_delivery_time: model.estimated_delivery_time,
            delivery_area: model.delivery_area,
            chef_experience: model.chef_experience,
            details: model.details,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub address: Option<String>,
    pub role: String,
    pub status: String,
    pub chef_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            photo_url: model.photo_url,
            address: model.address,
            role: model.role,
            status: model.status,
            chef_id: model.chef_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub food_id: Uuid,
    pub meal_name: Option<String>,
    pub reviewer_email: String,
    pub reviewer_name: Option<String>,
    pub reviewer_image: Option<String>,
    pub rating: f64,
    pub comment: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Self {
            id: model.id,
            food_id: model.food_id,
            meal_name: model.meal_name,
            reviewer_email: model.reviewer_email,
            reviewer_name: model.reviewer_name,
            reviewer_image: model.reviewer_image,
            rating: model.rating,
            comment: model.comment,
            date: model.date.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: Uuid,
    pub user_email: String,
    pub meal_id: Uuid,
    pub meal_name: Option<String>,
    pub chef_id: Option<String>,
    pub chef_name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl From<favorites::Model> for Favorite {
    fn from(model: favorites::Model) -> Self {
        Self {
            id: model.id,
            user_email: model.user_email,
            meal_id: model.meal_id,
            meal_name: model.meal_name,
            chef_id: model.chef_id,
            chef_name: model.chef_name,
            price: model.price,
            image: model.image,
            added_at: model.added_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub meal_id: Uuid,
    pub meal_name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_email: String,
    pub user_address: Option<String>,
    pub chef_id: Option<String>,
    pub items: Vec<OrderLine>,
    pub total_price: f64,
    pub order_status: String,
    pub payment_status: String,
    pub order_time: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Self {
            id: model.id,
            user_email: model.user_email,
            user_address: model.user_address,
            chef_id: model.chef_id,
            items: serde_json::from_value(model.items).unwrap_or_default(),
            total_price: model.total_price,
            order_status: model.order_status,
            payment_status: model.payment_status,
            order_time: model.order_time.with_timezone(&Utc),
            paid_at: model.paid_at.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    pub id: Uuid,
    pub user_email: String,
    pub user_name: Option<String>,
    pub request_type: String,
    pub request_status: String,
    pub request_time: DateTime<Utc>,
}

impl From<requests::Model> for RoleRequest {
    fn from(model: requests::Model) -> Self {
        Self {
            id: model.id,
            user_email: model.user_email,
            user_name: model.user_name,
            request_type: model.request_type,
            request_status: model.request_status,
            request_time: model.request_time.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: Uuid,
    pub order_id: Option<Uuid>,
    pub user_email: String,
    pub amount: f64,
    pub currency: String,
    pub transaction_id: String,
    pub paid_at: DateTime<Utc>,
}

impl From<payment_history::Model> for PaymentRecord {
    fn from(model: payment_history::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            user_email: model.user_email,
            amount: model.amount,
            currency: model.currency,
            transaction_id: model.transaction_id,
            paid_at: model.paid_at.with_timezone(&Utc),
        }
    }
}
