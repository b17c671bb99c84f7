pub mod health;
pub mod localities;
pub mod predict;
