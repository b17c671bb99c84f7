use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingPanelProps {
    pub message: AttrValue,
}

/// Spinner filling the result area while a forecast is computed
#[function_component(LoadingPanel)]
pub fn loading_panel(props: &LoadingPanelProps) -> Html {
    html! {
        <div class="min-h-[400px] flex flex-col items-center justify-center gap-4" aria-busy="true">
            <span class="loading loading-dots loading-lg text-primary"></span>
            <p class="text-sm text-gray-500">{&props.message}</p>
        </div>
    }
}
