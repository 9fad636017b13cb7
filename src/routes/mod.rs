pub mod health;
pub mod outing;
