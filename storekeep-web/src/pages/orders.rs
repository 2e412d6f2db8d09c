use crate::api::{ListQuery, StorekeepClient};
use crate::components::loading::Loading;
use crate::models::toasts::{self, ToastState};
use crate::routes::AdminRoute;
use crate::util::{format_date, format_price};
use shared::models::{ORDER_STATUSES, Order};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(OrdersPage)]
pub fn orders_page() -> Html {
    let orders = use_state(|| None::<Vec<Order>>);
    // Empty string means "all statuses".
    let status_filter = use_state(String::new);
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    {
        let orders_handle = orders.clone();
        let toast_dispatch = toast_dispatch;
        let status = (*status_filter).clone();
        use_effect_with(status.clone(), move |_| {
            spawn_local(async move {
                let client = StorekeepClient::shared();
                let query = if status.is_empty() {
                    ListQuery::default()
                } else {
                    ListQuery::with_status(&status)
                };
                match client.list_orders(&query).await {
                    Ok(loaded) => orders_handle.set(Some(loaded)),
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to load orders: {err}"));
                        orders_handle.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let on_filter_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                status_filter.set(select.value());
            }
        })
    };

    let Some(orders) = &*orders else {
        return html! { <Loading /> };
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Orders"}</h1>
                <select class="select select-bordered select-sm" onchange={on_filter_change}>
                    <option value="" selected={status_filter.is_empty()}>{"All statuses"}</option>
                    { for ORDER_STATUSES.iter().map(|status| html! {
                        <option value={*status} selected={*status_filter == *status}>
                            {*status}
                        </option>
                    }) }
                </select>
            </div>
            if orders.is_empty() {
                <p class="text-base-content/60">{"No orders found."}</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Order"}</th>
                            <th>{"Status"}</th>
                            <th>{"Payment"}</th>
                            <th>{"Total"}</th>
                            <th>{"Placed"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for orders.iter().map(|order| html! {
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
                                <td>{ &order.payment_status }</td>
                                <td>{format_price(order.total_amount)}</td>
                                <td>{format_date(&order.created_at)}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
