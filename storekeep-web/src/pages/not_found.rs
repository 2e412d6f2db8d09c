use crate::routes::AdminRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-24 gap-4">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-base-content/60">{"This page does not exist."}</p>
            <Link<AdminRoute> to={AdminRoute::Dashboard} classes="btn btn-primary btn-sm">
                {"Back to dashboard"}
            </Link<AdminRoute>>
        </div>
    }
}
