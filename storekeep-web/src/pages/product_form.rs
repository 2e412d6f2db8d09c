use crate::api::StorekeepClient;
use crate::components::loading::Loading;
use crate::forms::image_url::{looks_like_image_url, validate_image_url};
use crate::forms::images::ImageList;
use crate::forms::slug::slugify;
use crate::models::toasts::{self, ToastState};
use crate::routes::AdminRoute;
use crate::upload::{UploadFile, upload_all};
use shared::models::{Category, ProductPayload};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct ProductFormProps {
    /// `None` creates a product, `Some` edits an existing one.
    #[prop_or_default]
    pub product_id: Option<i64>,
}

/// Pull a browser [`File`] into memory for upload.
async fn read_file(file: &File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Could not read {}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(UploadFile {
        name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}

#[function_component(ProductFormPage)]
pub fn product_form_page(props: &ProductFormProps) -> Html {
    let name = use_state(String::new);
    let slug = use_state(String::new);
    let description = use_state(String::new);
    // Numeric fields stay as text until submission so partial input is
    // never clobbered while typing.
    let price = use_state(String::new);
    let compare_price = use_state(String::new);
    let stock = use_state(|| "0".to_string());
    let sku = use_state(String::new);
    let featured = use_state(|| false);
    let is_active = use_state(|| true);
    let selected_categories = use_state(Vec::<i64>::new);
    let images = use_state(ImageList::default);
    let image_url = use_state(String::new);
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| props.product_id.is_some());
    let saving = use_state(|| false);
    let uploading = use_state(|| false);
    let navigator = use_navigator();
    let (_toasts, toast_dispatch) = use_store::<ToastState>();

    {
        let categories_handle = categories.clone();
        let toast_dispatch = toast_dispatch.clone();
        let product_id = props.product_id;
        let name_handle = name.clone();
        let slug_handle = slug.clone();
        let description_handle = description.clone();
        let price_handle = price.clone();
        let compare_price_handle = compare_price.clone();
        let stock_handle = stock.clone();
        let sku_handle = sku.clone();
        let featured_handle = featured.clone();
        let is_active_handle = is_active.clone();
        let selected_handle = selected_categories.clone();
        let images_handle = images.clone();
        let loading_handle = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = StorekeepClient::shared();
                match client.list_categories().await {
                    Ok(loaded) => categories_handle.set(loaded),
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to load categories: {err}"));
                    }
                }
                if let Some(id) = product_id {
                    match client.get_product(id).await {
                        Ok(product) => {
                            name_handle.set(product.name);
                            slug_handle.set(product.slug);
                            description_handle.set(product.description);
                            price_handle.set(product.price.to_string());
                            compare_price_handle.set(
                                product
                                    .compare_price
                                    .map(|value| value.to_string())
                                    .unwrap_or_default(),
                            );
                            stock_handle.set(product.stock.to_string());
                            sku_handle.set(product.sku.unwrap_or_default());
                            featured_handle.set(product.featured);
                            is_active_handle.set(product.is_active);
                            selected_handle.set(
                                product
                                    .categories
                                    .iter()
                                    .map(|category| category.id)
                                    .collect(),
                            );
                            images_handle.set(ImageList::from_existing(product.images));
                        }
                        Err(err) => {
                            toasts::error(
                                &toast_dispatch,
                                format!("Failed to load product: {err}"),
                            );
                        }
                    }
                    loading_handle.set(false);
                }
            });
            || ()
        });
    }

    let bind_text = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    // Typing a name keeps the slug derived from it.
    let on_name_input = {
        let name = name.clone();
        let slug = slug.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                slug.set(slugify(&value));
                name.set(value);
            }
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(input.value());
            }
        })
    };

    let bind_toggle = |handle: &UseStateHandle<bool>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.checked());
            }
        })
    };

    let on_category_toggle = {
        let selected = selected_categories.clone();
        Callback::from(move |(id, checked): (i64, bool)| {
            let mut ids = (*selected).clone();
            if checked {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            } else {
                ids.retain(|existing| *existing != id);
            }
            selected.set(ids);
        })
    };

    let on_files_selected = {
        let images = images.clone();
        let uploading = uploading.clone();
        let toast_dispatch = toast_dispatch.clone();
        let product_name = name.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file_list) = input.files() else {
                return;
            };
            let files: Vec<File> = (0..file_list.length())
                .filter_map(|i| file_list.item(i))
                .collect();
            input.set_value("");
            if files.is_empty() {
                return;
            }
            let images = images.clone();
            let uploading = uploading.clone();
            let toast_dispatch = toast_dispatch.clone();
            let alt_fallback = (*product_name).clone();
            uploading.set(true);
            spawn_local(async move {
                let mut uploads = Vec::with_capacity(files.len());
                for file in &files {
                    match read_file(file).await {
                        Ok(upload) => uploads.push(upload),
                        Err(message) => toasts::error(&toast_dispatch, message),
                    }
                }
                let client = StorekeepClient::shared();
                let outcome = upload_all(&client, &uploads).await;
                let mut list = (*images).clone();
                for uploaded in &outcome.uploaded {
                    let alt_text = if alt_fallback.is_empty() {
                        uploaded.file_name.clone()
                    } else {
                        alt_fallback.clone()
                    };
                    list.push(uploaded.url.clone(), alt_text);
                }
                images.set(list);
                for failure in &outcome.failures {
                    toasts::error(
                        &toast_dispatch,
                        format!("{}: {}", failure.file_name, failure.error),
                    );
                }
                if !outcome.uploaded.is_empty() {
                    toasts::success(
                        &toast_dispatch,
                        format!("Uploaded {} image(s)", outcome.uploaded.len()),
                    );
                }
                uploading.set(false);
            });
        })
    };

    let on_add_url = {
        let image_url = image_url.clone();
        let images = images.clone();
        let toast_dispatch = toast_dispatch.clone();
        let product_name = name.clone();
        Callback::from(move |_: MouseEvent| {
            let url = (*image_url).trim().to_string();
            if url.is_empty() {
                return;
            }
            if let Err(err) = validate_image_url(&url) {
                toasts::error(&toast_dispatch, err.to_string());
                return;
            }
            if !looks_like_image_url(&url) {
                let confirmed = web_sys::window()
                    .and_then(|window| {
                        window
                            .confirm_with_message(
                                "This URL does not look like an image. Add it anyway?",
                            )
                            .ok()
                    })
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
            }
            let mut list = (*images).clone();
            list.push(url, (*product_name).clone());
            images.set(list);
            image_url.set(String::new());
        })
    };

    let on_remove_image = {
        let images = images.clone();
        Callback::from(move |index: usize| {
            let mut list = (*images).clone();
            list.remove(index);
            images.set(list);
        })
    };

    let on_set_primary = {
        let images = images.clone();
        Callback::from(move |index: usize| {
            let mut list = (*images).clone();
            list.set_primary(index);
            images.set(list);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let slug = slug.clone();
        let description = description.clone();
        let price = price.clone();
        let compare_price = compare_price.clone();
        let stock = stock.clone();
        let sku = sku.clone();
        let featured = featured.clone();
        let is_active = is_active.clone();
        let selected_categories = selected_categories.clone();
        let images = images.clone();
        let saving = saving.clone();
        let toast_dispatch = toast_dispatch.clone();
        let navigator = navigator;
        let product_id = props.product_id;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(price_value) = price.trim().parse::<f64>() else {
                toasts::error(&toast_dispatch, "Price must be a number");
                return;
            };
            let compare_value = {
                let raw = compare_price.trim();
                if raw.is_empty() {
                    None
                } else {
                    match raw.parse::<f64>() {
                        Ok(value) => Some(value),
                        Err(_) => {
                            toasts::error(&toast_dispatch, "Compare price must be a number");
                            return;
                        }
                    }
                }
            };
            let Ok(stock_value) = stock.trim().parse::<i64>() else {
                toasts::error(&toast_dispatch, "Stock must be a whole number");
                return;
            };
            let payload = ProductPayload {
                name: (*name).clone(),
                slug: (*slug).clone(),
                description: (*description).clone(),
                price: price_value,
                compare_price: compare_value,
                stock: stock_value,
                sku: Some((*sku).clone()).filter(|value| !value.is_empty()),
                featured: *featured,
                is_active: *is_active,
                category_ids: (*selected_categories).clone(),
                images: (*images).clone().into_vec(),
            };
            saving.set(true);
            let saving_ref = saving.clone();
            let toast_dispatch = toast_dispatch.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = StorekeepClient::shared();
                let result = match product_id {
                    Some(id) => client.update_product(id, &payload).await,
                    None => client.create_product(&payload).await,
                };
                match result {
                    Ok(_) => {
                        let message = if product_id.is_some() {
                            "Product updated"
                        } else {
                            "Product created"
                        };
                        toasts::success(&toast_dispatch, message);
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&AdminRoute::Products);
                        }
                    }
                    Err(err) => {
                        toasts::error(&toast_dispatch, format!("Failed to save product: {err}"));
                    }
                }
                saving_ref.set(false);
            });
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    let title = if props.product_id.is_some() {
        "Edit product"
    } else {
        "New product"
    };
    let is_busy = *saving || *uploading;

    html! {
        <div class="space-y-4 max-w-3xl">
            <h1 class="text-2xl font-bold">{title}</h1>
            <form class="space-y-4" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="name">
                        <span class="label-text">{"Name"}</span>
                    </label>
                    <input
                        id="name"
                        class="input input-bordered"
                        type="text"
                        required=true
                        value={(*name).clone()}
                        oninput={on_name_input}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="slug">
                        <span class="label-text">{"Slug"}</span>
                    </label>
                    <input
                        id="slug"
                        class="input input-bordered"
                        type="text"
                        required=true
                        value={(*slug).clone()}
                        oninput={bind_text(&slug)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="description">
                        <span class="label-text">{"Description"}</span>
                    </label>
                    <textarea
                        id="description"
                        class="textarea textarea-bordered"
                        rows="4"
                        value={(*description).clone()}
                        oninput={on_description_input}
                    />
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="price">
                            <span class="label-text">{"Price"}</span>
                        </label>
                        <input
                            id="price"
                            class="input input-bordered"
                            type="text"
                            inputmode="decimal"
                            required=true
                            value={(*price).clone()}
                            oninput={bind_text(&price)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="compare_price">
                            <span class="label-text">{"Compare price (optional)"}</span>
                        </label>
                        <input
                            id="compare_price"
                            class="input input-bordered"
                            type="text"
                            inputmode="decimal"
                            value={(*compare_price).clone()}
                            oninput={bind_text(&compare_price)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="stock">
                            <span class="label-text">{"Stock"}</span>
                        </label>
                        <input
                            id="stock"
                            class="input input-bordered"
                            type="text"
                            inputmode="numeric"
                            required=true
                            value={(*stock).clone()}
                            oninput={bind_text(&stock)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="sku">
                            <span class="label-text">{"SKU (optional)"}</span>
                        </label>
                        <input
                            id="sku"
                            class="input input-bordered"
                            type="text"
                            value={(*sku).clone()}
                            oninput={bind_text(&sku)}
                        />
                    </div>
                </div>
                <div class="flex gap-6">
                    <label class="label cursor-pointer gap-2">
                        <input
                            class="checkbox"
                            type="checkbox"
                            checked={*featured}
                            oninput={bind_toggle(&featured)}
                        />
                        <span class="label-text">{"Featured"}</span>
                    </label>
                    <label class="label cursor-pointer gap-2">
                        <input
                            class="checkbox"
                            type="checkbox"
                            checked={*is_active}
                            oninput={bind_toggle(&is_active)}
                        />
                        <span class="label-text">{"Active"}</span>
                    </label>
                </div>
                <div class="form-control">
                    <span class="label-text mb-2">{"Categories"}</span>
                    <div class="flex flex-wrap gap-4">
                        { for categories.iter().map(|category| {
                            let id = category.id;
                            let checked = selected_categories.contains(&id);
                            let on_toggle = on_category_toggle.clone();
                            html! {
                                <label class="label cursor-pointer gap-2">
                                    <input
                                        class="checkbox checkbox-sm"
                                        type="checkbox"
                                        checked={checked}
                                        oninput={Callback::from(move |event: InputEvent| {
                                            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                                                on_toggle.emit((id, input.checked()));
                                            }
                                        })}
                                    />
                                    <span class="label-text">{ &category.name }</span>
                                </label>
                            }
                        }) }
                    </div>
                </div>
                <div class="form-control space-y-2">
                    <span class="label-text">{"Images"}</span>
                    <input
                        class="file-input file-input-bordered"
                        type="file"
                        accept="image/*"
                        multiple=true
                        disabled={*uploading}
                        onchange={on_files_selected}
                    />
                    <div class="flex gap-2">
                        <input
                            class="input input-bordered flex-grow"
                            type="text"
                            placeholder="https://..."
                            value={(*image_url).clone()}
                            oninput={bind_text(&image_url)}
                        />
                        <button class="btn" type="button" onclick={on_add_url}>
                            {"Add URL"}
                        </button>
                    </div>
                    if !images.is_empty() {
                        <ul class="space-y-1">
                            { for images.as_slice().iter().enumerate().map(|(index, image)| {
                                let on_remove = on_remove_image.clone();
                                let on_primary = on_set_primary.clone();
                                html! {
                                    <li class="flex items-center gap-2">
                                        <img src={image.url.clone()} alt={image.alt_text.clone()} class="w-12 h-12 object-cover rounded" />
                                        <span class="flex-grow truncate text-sm">{ &image.url }</span>
                                        if image.is_primary {
                                            <span class="badge badge-primary">{"primary"}</span>
                                        } else {
                                            <button
                                                class="btn btn-ghost btn-xs"
                                                type="button"
                                                onclick={Callback::from(move |_| on_primary.emit(index))}
                                            >
                                                {"Make primary"}
                                            </button>
                                        }
                                        <button
                                            class="btn btn-ghost btn-xs text-error"
                                            type="button"
                                            onclick={Callback::from(move |_| on_remove.emit(index))}
                                        >
                                            {"Remove"}
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={is_busy}>
                        {if *saving { "Saving..." } else { "Save product" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
