use common::{format_inr, ForecastSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub summary: ForecastSummary,
}

/// Growth over the forecast window, signed like "+12.50%"
fn format_growth(growth_pct: Option<f64>) -> String {
    match growth_pct {
        Some(growth) if growth > 0.0 => format!("+{:.2}%", growth),
        Some(growth) => format!("{:.2}%", growth),
        None => "n/a".to_string(),
    }
}

#[function_component(ForecastStats)]
pub fn forecast_stats(props: &Props) -> Html {
    let summary = props.summary;
    let growth_class = match summary.growth_pct {
        Some(growth) if growth < 0.0 => "text-error",
        _ => "text-success",
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">
                        <i class="fas fa-arrow-trend-up text-success"></i>
                        {" Highest Prediction"}
                    </div>
                    <div class="stat-value text-lg">{format_inr(summary.highest)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">
                        <i class="fas fa-arrow-trend-down text-error"></i>
                        {" Lowest Prediction"}
                    </div>
                    <div class="stat-value text-lg">{format_inr(summary.lowest)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">
                        <i class="fas fa-chart-line text-primary"></i>
                        {" 5-Year Growth"}
                    </div>
                    <div class={classes!("stat-value", "text-lg", growth_class)}>
                        {format_growth(summary.growth_pct)}
                    </div>
                </div>
            </div>
        </div>
    }
}
