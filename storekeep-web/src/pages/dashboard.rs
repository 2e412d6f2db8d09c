use crate::api::StorekeepClient;
use crate::components::loading::Loading;
use crate::routes::AdminRoute;
use crate::util::{format_date, format_price};
use shared::models::DashboardStats;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let stats = use_state(|| None::<DashboardStats>);
    let error = use_state(|| None::<String>);

    {
        let stats_handle = stats.clone();
        let error_handle = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.dashboard_stats().await {
                    Ok(loaded) => stats_handle.set(Some(loaded)),
                    Err(err) => error_handle.set(Some(format!("Failed to load stats: {err}"))),
                }
            });
            || ()
        });
    }

    if let Some(message) = &*error {
        return html! {
            <div class="alert alert-error">
                <span>{message.clone()}</span>
            </div>
        };
    }

    let Some(stats) = &*stats else {
        return html! { <Loading /> };
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Dashboard"}</h1>
            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineCube} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Products"}</div>
                    <div class="stat-value">{stats.total_products}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineShoppingCart} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Orders"}</div>
                    <div class="stat-value">{stats.total_orders}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Users"}</div>
                    <div class="stat-value">{stats.total_users}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineBanknotes} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Revenue"}</div>
                    <div class="stat-value">{format_price(stats.total_revenue)}</div>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Recent orders"}</h2>
                    if stats.recent_orders.is_empty() {
                        <p class="text-base-content/60">{"No orders yet."}</p>
                    } else {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Order"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Total"}</th>
                                    <th>{"Placed"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for stats.recent_orders.iter().map(|order| html! {
                                    <tr>
                                        <td>
                                            <Link<AdminRoute>
                                                to={AdminRoute::OrderDetail { id: order.id }}
                                                classes="link link-primary"
                                            >
                                                { &order.order_number }
                                            </Link<AdminRoute>>
                                        </td>
                                        <td><span class="badge">{ &order.status }</span></td>
                                        <td>{format_price(order.total_amount)}</td>
                                        <td>{format_date(&order.created_at)}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    }
                </div>
            </div>
        </div>
    }
}
