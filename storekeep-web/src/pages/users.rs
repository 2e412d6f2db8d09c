use crate::api::{ListQuery, StorekeepClient};
use crate::components::loading::Loading;
use crate::models::app_state::SessionState;
use crate::models::toasts::{self, ToastState};
use crate::util::format_date;
use shared::models::{User, UserUpdate};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{use_selector, use_store};

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let users = use_state(|| None::<Vec<User>>);
    let reload = use_state(|| 0u32);
    let (_toasts, toast_dispatch) = use_store::<ToastState>();
    // Guard against revoking your own access from the users table.
    let own_id = use_selector(|state: &SessionState| state.user.as_ref().map(|user| user.id));

    {
        let users_handle = users.clone();
        let toast_dispatch = toast_dispatch.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.list_users(&ListQuery::default()).await {
                    Ok(loaded) => users_handle.set(Some(loaded)),
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to load users: {err}"));
                        users_handle.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let apply_update = {
        let reload = reload.clone();
        let toast_dispatch = toast_dispatch;
        Callback::from(move |(id, update): (i64, UserUpdate)| {
            let reload = reload.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.update_user(id, &update).await {
                    Ok(_) => {
                        toasts::success(&toast_dispatch, "User updated");
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to update user: {err}"));
                    }
                }
            });
        })
    };

    let Some(users) = &*users else {
        return html! { <Loading /> };
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{"Users"}</h1>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Username"}</th>
                        <th>{"Email"}</th>
                        <th>{"Joined"}</th>
                        <th>{"Active"}</th>
                        <th>{"Admin"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for users.iter().map(|user| {
                        let id = user.id;
                        let is_self = *own_id == Some(id);
                        let toggle_active = {
                            let apply_update = apply_update.clone();
                            let next = !user.is_active;
                            Callback::from(move |_: InputEvent| {
                                apply_update.emit((id, UserUpdate {
                                    is_active: Some(next),
                                    is_admin: None,
                                }));
                            })
                        };
                        let toggle_admin = {
                            let apply_update = apply_update.clone();
                            let next = !user.is_admin;
                            Callback::from(move |_: InputEvent| {
                                apply_update.emit((id, UserUpdate {
                                    is_active: None,
                                    is_admin: Some(next),
                                }));
                            })
                        };
                        html! {
                            <tr>
                                <td>
                                    { &user.username }
                                    if let Some(full_name) = &user.full_name {
                                        <span class="text-base-content/60 text-sm">{format!(" ({full_name})")}</span>
                                    }
                                </td>
                                <td>{ &user.email }</td>
                                <td>{format_date(&user.created_at)}</td>
                                <td>
                                    <input
                                        class="toggle toggle-sm"
                                        type="checkbox"
                                        checked={user.is_active}
                                        disabled={is_self}
                                        oninput={toggle_active}
                                    />
                                </td>
                                <td>
                                    <input
                                        class="toggle toggle-sm"
                                        type="checkbox"
                                        checked={user.is_admin}
                                        disabled={is_self}
                                        oninput={toggle_admin}
                                    />
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
