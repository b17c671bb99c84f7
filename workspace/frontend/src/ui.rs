pub mod error;
pub mod loading;
