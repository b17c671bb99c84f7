mod chart;
mod form;
mod model_info;
mod stats;
mod view;

pub use chart::ForecastChart;
pub use form::PredictionForm;
pub use model_info::ModelInfo;
pub use stats::ForecastStats;
pub use view::Forecast;
