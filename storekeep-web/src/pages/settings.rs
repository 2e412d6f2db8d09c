use crate::config::FrontendConfig;
use crate::models::app_state::SessionState;
use crate::util::format_date;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Shows the signed-in profile and the effective client configuration.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let user = use_selector(|state: &SessionState| state.user.clone());
    let config = FrontendConfig::new();

    html! {
        <div class="space-y-6 max-w-xl">
            <h1 class="text-2xl font-bold">{"Settings"}</h1>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title text-base">{"Profile"}</h2>
                    if let Some(user) = &*user {
                        <p>{"Username: "}{ &user.username }</p>
                        <p>{"Email: "}{ &user.email }</p>
                        if let Some(full_name) = &user.full_name {
                            <p>{"Name: "}{full_name}</p>
                        }
                        if !user.created_at.is_empty() {
                            <p>{"Joined: "}{format_date(&user.created_at)}</p>
                        }
                    }
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title text-base">{"Client"}</h2>
                    <p>{"API base URL: "}<code>{config.api_base_url().to_string()}</code></p>
                </div>
            </div>
        </div>
    }
}
