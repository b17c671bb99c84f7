use chrono::{Datelike, Local};
use common::ForecastQuery;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub const MIN_BASE_YEAR: i32 = 2000;
pub const MAX_BASE_YEAR: i32 = 2100;

/// Validated query from the raw form fields, if the form is complete
fn build_query(locality: &str, base_year: &str) -> Option<ForecastQuery> {
    if locality.is_empty() {
        return None;
    }
    let year = base_year.trim().parse::<i32>().ok()?;
    if !(MIN_BASE_YEAR..=MAX_BASE_YEAR).contains(&year) {
        return None;
    }
    Some(ForecastQuery::new(locality, Some(year)))
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub localities: Vec<String>,
    pub is_loading: bool,
    pub on_submit: Callback<ForecastQuery>,
}

#[function_component(PredictionForm)]
pub fn prediction_form(props: &Props) -> Html {
    let locality = use_state(String::new);
    let base_year = use_state(|| Local::now().year().to_string());

    let on_locality_change = {
        let locality = locality.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            locality.set(select.value());
        })
    };

    let on_year_input = {
        let base_year = base_year.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            base_year.set(input.value());
        })
    };

    let onsubmit = {
        let locality = locality.clone();
        let base_year = base_year.clone();
        let on_submit = props.on_submit.clone();
        let is_loading = props.is_loading;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if is_loading {
                log::debug!("Ignoring submit while a forecast is in flight");
                return;
            }
            match build_query(&locality, &base_year) {
                Some(query) => {
                    log::info!("Submitting forecast for {}", query.locality);
                    on_submit.emit(query);
                }
                None => log::debug!("Incomplete forecast form: {:?} / {:?}", *locality, *base_year),
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow h-full">
            <div class="card-body">
                <h3 class="card-title text-lg">
                    <i class="fas fa-magnifying-glass text-primary"></i>
                    {"Forecast Parameters"}
                </h3>

                <form {onsubmit} class="space-y-6">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Target Locality"}</span>
                        </label>
                        <select class="select select-bordered w-full" required=true onchange={on_locality_change}>
                            <option value="" selected={locality.is_empty()}>{"Select Location"}</option>
                            {for props.localities.iter().map(|name| html! {
                                <option value={name.clone()} selected={*locality == *name}>{name}</option>
                            })}
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Base Year (Start of Forecast)"}</span>
                        </label>
                        <input
                            type="number"
                            class="input input-bordered w-full"
                            placeholder="e.g. 2024"
                            required=true
                            min={MIN_BASE_YEAR.to_string()}
                            max={MAX_BASE_YEAR.to_string()}
                            value={(*base_year).clone()}
                            oninput={on_year_input}
                        />
                        <label class="label">
                            <span class="label-text-alt">{"Prediction will cover 5 years starting from this year."}</span>
                        </label>
                    </div>

                    <button type="submit" class="btn btn-primary w-full" disabled={props.is_loading}>
                        {if props.is_loading {
                            html! {
                                <>
                                    <span class="loading loading-spinner loading-sm"></span>
                                    {" Generating Forecast..."}
                                </>
                            }
                        } else {
                            html! { {"Generate 5-Year Forecast"} }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
