use yew::prelude::*;

struct InfoItem {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const INFO_ITEMS: [InfoItem; 3] = [
    InfoItem {
        icon: "fas fa-code-branch text-secondary",
        title: "Regression Models",
        description: "Uses both Linear (conservative) and Polynomial (complex) regression to map price curves.",
    },
    InfoItem {
        icon: "fas fa-clock-rotate-left text-primary",
        title: "Historical Data",
        description: "Trained on verified past transaction data specific to each locality in Lucknow.",
    },
    InfoItem {
        icon: "fas fa-database text-success",
        title: "5-Year Horizon",
        description: "Generates forward-looking price estimates for the next 5 years based on selected base year.",
    },
];

#[function_component(ModelInfo)]
pub fn model_info() -> Html {
    html! {
        <div class="mt-12 border-t border-base-300 pt-8">
            <h4 class="text-sm font-semibold uppercase tracking-wider text-gray-400 mb-6">{"Model Intelligence"}</h4>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {for INFO_ITEMS.iter().map(|item| html! {
                    <div class="flex gap-4 p-4 rounded-xl bg-base-100 shadow-sm">
                        <div class="flex-shrink-0 mt-1">
                            <i class={item.icon}></i>
                        </div>
                        <div>
                            <h5 class="font-semibold mb-1">{item.title}</h5>
                            <p class="text-sm text-gray-500">{item.description}</p>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
