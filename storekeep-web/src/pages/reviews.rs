use crate::api::{ListQuery, StorekeepClient};
use crate::components::loading::Loading;
use crate::models::toasts::{self, ToastState};
use crate::util::format_date;
use shared::models::Review;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(ReviewsPage)]
pub fn reviews_page() -> Html {
    let reviews = use_state(|| None::<Vec<Review>>);
    let reload = use_state(|| 0u32);
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    {
        let reviews_handle = reviews.clone();
        let toast_dispatch = toast_dispatch.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.list_reviews(&ListQuery::default()).await {
                    Ok(loaded) => reviews_handle.set(Some(loaded)),
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to load reviews: {err}"));
                        reviews_handle.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let on_delete = {
        let reload = reload.clone();
        let toast_dispatch = toast_dispatch;
        Callback::from(move |id: i64| {
            let confirmed = web_sys::window()
                .and_then(|window| window.confirm_with_message("Delete this review?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let reload = reload.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.delete_review(id).await {
                    Ok(()) => {
                        toasts::success(&toast_dispatch, "Review deleted");
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to delete review: {err}"));
                    }
                }
            });
        })
    };

    let Some(reviews) = &*reviews else {
        return html! { <Loading /> };
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{"Reviews"}</h1>
            if reviews.is_empty() {
                <p class="text-base-content/60">{"No reviews yet."}</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Product"}</th>
                            <th>{"Reviewer"}</th>
                            <th>{"Rating"}</th>
                            <th>{"Review"}</th>
                            <th>{"Posted"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for reviews.iter().map(|review| {
                            let id = review.id;
                            let on_delete = on_delete.clone();
                            let product = review
                                .product
                                .as_ref()
                                .map(|product| product.name.clone())
                                .unwrap_or_else(|| format!("#{}", review.product_id));
                            let reviewer = review
                                .user
                                .as_ref()
                                .map(|user| user.username.clone())
                                .unwrap_or_else(|| format!("#{}", review.user_id));
                            html! {
                                <tr>
                                    <td>{product}</td>
                                    <td>{reviewer}</td>
                                    <td>{format!("{}/5", review.rating)}</td>
                                    <td class="max-w-xs">
                                        if let Some(title) = &review.title {
                                            <span class="font-medium">{title}</span>
                                        }
                                        if let Some(comment) = &review.comment {
                                            <p class="text-sm text-base-content/70 truncate">{comment}</p>
                                        }
                                    </td>
                                    <td>{format_date(&review.created_at)}</td>
                                    <td>
                                        <button
                                            class="btn btn-ghost btn-xs text-error"
                                            onclick={Callback::from(move |_| on_delete.emit(id))}
                                        >
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
