pub mod query;
pub mod serve;

pub use query::{list_localities, predict_once};
pub use serve::{serve, ServeOverrides};
