pub mod favorites;
pub mod meals;
pub mod orders;
pub mod payment_history;
pub mod requests;
pub mod reviews;
pub mod users;

pub use favorites::Entity as Favorites;
pub use meals::Entity as Meals;
pub use orders::Entity as Orders;
pub use payment_history::Entity as PaymentHistory;
pub use requests::Entity as Requests;
pub use reviews::Entity as Reviews;
pub use users::Entity as Users;
