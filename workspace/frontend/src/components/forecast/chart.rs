use common::{chart_rows, format_inr, format_lakhs, ChartRow, CombinedForecast, ModelType};
use plotly::common::{DashType, Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

const CHART_DIV_ID: &str = "forecast-chart";
const TICK_COUNT: usize = 5;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

/// Evenly spaced y-axis ticks labelled in lakhs
fn lakh_ticks(rows: &[ChartRow]) -> (Vec<f64>, Vec<String>) {
    let prices = rows
        .iter()
        .flat_map(|row| std::iter::once(row.polynomial).chain(row.linear));
    let (min, max) = prices.fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p), hi.max(p)));
    if min > max {
        return (Vec::new(), Vec::new());
    }
    if min == max {
        return (vec![min], vec![format_lakhs(min)]);
    }

    let step = (max - min) / (TICK_COUNT - 1) as f64;
    let values: Vec<f64> = (0..TICK_COUNT).map(|i| min + step * i as f64).collect();
    let labels = values.iter().map(|v| format_lakhs(*v)).collect();
    (values, labels)
}

fn to_js<T: serde::Serialize>(value: &T) -> Option<JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| log::error!("Failed to serialize chart data: {}", e))
        .ok()?;
    js_sys::JSON::parse(&json)
        .map_err(|e| log::error!("Failed to hand chart data to Plotly: {:?}", e))
        .ok()
}

fn render_chart(div_id: &str, rows: &[ChartRow]) {
    let years: Vec<i32> = rows.iter().map(|row| row.year).collect();
    let polynomial: Vec<f64> = rows.iter().map(|row| row.polynomial).collect();

    let polynomial_trace = Scatter::new(years, polynomial.clone())
        .mode(Mode::LinesMarkers)
        .name(ModelType::Polynomial.label())
        .text_array(polynomial.iter().map(|p| format_inr(*p)).collect())
        .hover_template("%{x}: %{text}")
        .line(Line::new().color("#8b5cf6").width(3.0));

    let (linear_years, linear): (Vec<i32>, Vec<f64>) = rows
        .iter()
        .filter_map(|row| row.linear.map(|price| (row.year, price)))
        .unzip();
    let linear_text = linear.iter().map(|p| format_inr(*p)).collect();
    let linear_trace = Scatter::new(linear_years, linear)
        .mode(Mode::Lines)
        .name(ModelType::Linear.label())
        .text_array(linear_text)
        .hover_template("%{x}: %{text}")
        .line(Line::new().color("#94a3b8").width(2.0).dash(DashType::Dash));

    let (tick_values, tick_labels) = lakh_ticks(rows);
    let layout = Layout::new()
        .title(Title::with_text("Price Forecast Trend"))
        .x_axis(Axis::new().title(Title::with_text("Year")).dtick(1.0))
        .y_axis(
            Axis::new()
                .title(Title::with_text("Predicted Price"))
                .tick_values(tick_values)
                .tick_text(tick_labels),
        )
        .height(400);

    let data_js = js_sys::Array::new();
    for trace in [polynomial_trace, linear_trace] {
        match to_js(&trace) {
            Some(trace_js) => {
                data_js.push(&trace_js);
            }
            None => return,
        }
    }
    let Some(layout_js) = to_js(&layout) else {
        return;
    };

    newPlot(div_id, data_js.into(), layout_js);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub forecast: CombinedForecast,
}

/// Polynomial forecast with the linear trend dashed underneath
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let rows = chart_rows(&props.forecast);

    use_effect_with((container_ref.clone(), rows), move |(container_ref, rows)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_DIV_ID);
            log::debug!("Rendering forecast chart with {} points", rows.len());
            render_chart(CHART_DIV_ID, rows);
        }
        || ()
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div ref={container_ref} style="width:100%; height:400px;"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, polynomial: f64, linear: Option<f64>) -> ChartRow {
        ChartRow { year, polynomial, linear }
    }

    #[test]
    fn test_lakh_ticks_span_both_series() {
        let rows = vec![
            row(2024, 5_000_000.0, Some(4_800_000.0)),
            row(2028, 6_200_000.0, Some(5_600_000.0)),
        ];

        let (values, labels) = lakh_ticks(&rows);

        assert_eq!(values.len(), TICK_COUNT);
        assert_eq!(values[0], 4_800_000.0);
        assert_eq!(values[TICK_COUNT - 1], 6_200_000.0);
        assert_eq!(labels[0], "₹48.0L");
        assert_eq!(labels[TICK_COUNT - 1], "₹62.0L");
    }

    #[test]
    fn test_lakh_ticks_flat_and_empty() {
        let (values, labels) = lakh_ticks(&[row(2024, 5_000_000.0, None)]);
        assert_eq!(values, vec![5_000_000.0]);
        assert_eq!(labels, vec!["₹50.0L".to_string()]);

        let (values, labels) = lakh_ticks(&[]);
        assert!(values.is_empty());
        assert!(labels.is_empty());
    }
}
