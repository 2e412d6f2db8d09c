use crate::api::StorekeepClient;
use crate::components::loading::Loading;
use crate::models::toasts::{self, ToastState};
use crate::util::{format_date, format_price};
use shared::models::{ORDER_STATUSES, Order};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct OrderDetailProps {
    pub order_id: i64,
}

#[function_component(OrderDetailPage)]
pub fn order_detail_page(props: &OrderDetailProps) -> Html {
    let order = use_state(|| None::<Order>);
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    {
        let order_handle = order.clone();
        let toast_dispatch = toast_dispatch.clone();
        use_effect_with(props.order_id, move |&id| {
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.get_order(id).await {
                    Ok(loaded) => order_handle.set(Some(loaded)),
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to load order: {err}"));
                    }
                }
            });
            || ()
        });
    }

    let on_status_change = {
        let order_handle = order.clone();
        let toast_dispatch = toast_dispatch;
        let id = props.order_id;
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let status = select.value();
            let order_handle = order_handle.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.update_order_status(id, &status).await {
                    Ok(updated) => {
                        order_handle.set(Some(updated));
                        toasts::success(&toast_dispatch, format!("Order marked {status}"));
                    }
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to update status: {err}"));
                    }
                }
            });
        })
    };

    let Some(order) = &*order else {
        return html! { <Loading /> };
    };

    let shipping = order.shipping_address.as_ref().map(|address| {
        serde_json::to_string_pretty(address).unwrap_or_else(|_| address.to_string())
    });

    html! {
        <div class="space-y-6 max-w-3xl">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{format!("Order {}", order.order_number)}</h1>
                <select class="select select-bordered" onchange={on_status_change}>
                    { for ORDER_STATUSES.iter().map(|status| html! {
                        <option value={*status} selected={order.status == *status}>
                            {*status}
                        </option>
                    }) }
                </select>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title text-base">{"Summary"}</h2>
                        <p>{"Total: "}{format_price(order.total_amount)}</p>
                        <p>{"Payment: "}{ &order.payment_status }{" ("}{ &order.payment_method }{")"}</p>
                        <p>{"Placed: "}{format_date(&order.created_at)}</p>
                        if let Some(tracking) = &order.tracking_number {
                            <p>{"Tracking: "}{tracking}</p>
                        }
                        if let Some(notes) = &order.notes {
                            <p class="text-base-content/70">{notes}</p>
                        }
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title text-base">{"Shipping address"}</h2>
                        if let Some(shipping) = shipping {
                            <pre class="text-sm whitespace-pre-wrap">{shipping}</pre>
                        } else {
                            <p class="text-base-content/60">{"Not provided."}</p>
                        }
                    </div>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title text-base">{"Items"}</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Product"}</th>
                                <th>{"Quantity"}</th>
                                <th>{"Price"}</th>
                                <th>{"Subtotal"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for order.items.iter().map(|item| html! {
                                <tr>
                                    <td>{ &item.product_name }</td>
                                    <td>{item.quantity}</td>
                                    <td>{format_price(item.price)}</td>
                                    <td>{format_price(item.price * item.quantity as f64)}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
