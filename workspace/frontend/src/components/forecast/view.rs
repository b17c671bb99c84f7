use super::{ForecastChart, ForecastStats, ModelInfo, PredictionForm};
use crate::api_client::forecast::{get_localities, predict};
use crate::ui::error::{ErrorBanner, ErrorDisplay};
use crate::ui::loading::LoadingPanel;
use common::{CombinedForecast, FetchState, ForecastQuery, ForecastSummary};
use yew::prelude::*;

const LOCALITIES_ERROR: &str =
    "Could not connect to the forecasting engine. Please ensure backend is running.";
const FORECAST_ERROR: &str =
    "Forecasting failed. Please verify the input parameters and try again.";

#[function_component(Forecast)]
pub fn forecast() -> Html {
    let localities = use_state(|| FetchState::<Vec<String>>::Loading);
    let forecast = use_state(FetchState::<CombinedForecast>::default);

    // Load localities once on mount
    {
        let localities = localities.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = get_localities().await;
                if let Err(err) = &result {
                    log::error!("Failed to load localities: {}", err);
                }
                localities.set(FetchState::settle(result, LOCALITIES_ERROR));
            });
            || ()
        });
    }

    let on_submit = {
        let forecast = forecast.clone();
        Callback::from(move |query: ForecastQuery| {
            if !forecast.accepts_submission() {
                log::warn!("Forecast already in flight, ignoring submission");
                return;
            }
            forecast.set(FetchState::Loading);

            let forecast = forecast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = predict(&query).await;
                if let Err(err) = &result {
                    log::error!("Forecast for {} failed: {}", query.locality, err);
                }
                forecast.set(FetchState::settle(result, FORECAST_ERROR));
            });
        })
    };

    let locality_options = localities.data().cloned().unwrap_or_default();

    html! {
        <div class="min-h-screen py-10 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-bold mb-4">{"5-Year Real Estate Price Forecasting"}</h1>
                    <p class="text-lg text-gray-500 max-w-2xl mx-auto">
                        {"Regression models predicting future property value trends from historical data."}
                    </p>
                </div>

                {if let Some(message) = localities.error() {
                    html! { <ErrorBanner message={message.clone()} /> }
                } else {
                    html! {}
                }}

                <div class="grid grid-cols-1 lg:grid-cols-12 gap-8 items-start">
                    <div class="lg:col-span-4 w-full">
                        <PredictionForm
                            localities={locality_options}
                            is_loading={forecast.is_loading()}
                            on_submit={on_submit}
                        />
                    </div>
                    <div class="lg:col-span-8 w-full">
                        {match &*forecast {
                            FetchState::NotStarted => html! {
                                <div class="min-h-[400px] flex flex-col items-center justify-center text-gray-400 border-2 border-dashed rounded-2xl">
                                    <i class="fas fa-chart-line text-4xl mb-4 opacity-50"></i>
                                    <h3 class="text-lg font-medium mb-1">{"No Forecast Generated"}</h3>
                                    <p class="text-sm">{"Select a locality and base year to visualize future trends."}</p>
                                </div>
                            },
                            FetchState::Loading => html! {
                                <LoadingPanel message="Generating forecast..." />
                            },
                            FetchState::Success(result) => html! {
                                <>
                                    {match ForecastSummary::from_forecast(result) {
                                        Some(summary) => html! { <ForecastStats {summary} /> },
                                        None => html! {},
                                    }}
                                    <ForecastChart forecast={result.clone()} />
                                </>
                            },
                            FetchState::Error(message) => html! {
                                <ErrorDisplay message={message.clone()} />
                            },
                        }}
                    </div>
                </div>

                <ModelInfo />
            </div>
        </div>
    }
}
