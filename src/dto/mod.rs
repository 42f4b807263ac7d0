pub mod favorites;
pub mod meals;
pub mod orders;
pub mod payments;
pub mod requests;
pub mod reviews;
pub mod users;
