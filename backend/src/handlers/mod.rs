pub mod health;
pub mod name;
