//! Product Form Pages
//!
//! Add and edit flows share one editor. Category selection drives the
//! attribute inputs from the static taxonomy table; validation errors are
//! shown inline next to the offending field.

use leptos::*;
use leptos_router::*;
use std::collections::HashMap;

use crate::api::{self, ApiError};
use crate::components::Loading;
use crate::data::attributes::{self, AttributeInput};
use crate::models::{Product, ProductForm};
use crate::state::global::GlobalState;

/// Add-product page
#[component]
pub fn AddProduct() -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Add Product"</h1>
            <ProductEditor existing=None />
        </div>
    }
}

/// Edit-product page; loads the product named in the route first
#[component]
pub fn EditProduct() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || {
        params
            .with(|p| p.get("product_id").cloned())
            .and_then(|id| id.parse::<u64>().ok())
    };

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (product, set_product) = create_signal(None::<Product>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let Some(id) = product_id() else {
            set_error.set(Some("Invalid product id.".to_string()));
            set_loading.set(false);
            return;
        };
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::supplier::fetch_product(id).await {
                Ok(p) => set_product.set(Some(p)),
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Edit Product"</h1>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(msg) = error.get() {
                    view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-6 text-center">
                            {msg}
                        </div>
                    }.into_view()
                } else {
                    view! { <ProductEditor existing=product.get() /> }.into_view()
                }
            }}
        </div>
    }
}

/// Shared add/edit form
#[component]
fn ProductEditor(existing: Option<Product>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let editing_id = existing.as_ref().map(|p| p.id);
    let initial = existing
        .as_ref()
        .map(ProductForm::from)
        .unwrap_or_default();

    let (name, set_name) = create_signal(initial.name.clone());
    let (description, set_description) = create_signal(initial.description.clone());
    let (category, set_category) = create_signal(initial.category.clone());
    let (price, set_price) = create_signal(if initial.price > 0.0 {
        initial.price.to_string()
    } else {
        String::new()
    });
    let (discounted, set_discounted) = create_signal(
        initial
            .discounted_price
            .map(|d| d.to_string())
            .unwrap_or_default(),
    );
    let (stock, set_stock) = create_signal(initial.stock.to_string());
    let attr_values = create_rw_signal(initial.attributes.clone());
    let (field_errors, set_field_errors) = create_signal(Vec::<(String, String)>::new());
    let (submitting, set_submitting) = create_signal(false);

    let error_for = move |field: &str| {
        let field = field.to_string();
        field_errors
            .get()
            .into_iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg)
    };

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = ProductForm {
            name: name.get(),
            description: description.get(),
            category: category.get(),
            price: price.get().parse().unwrap_or(0.0),
            discounted_price: discounted.get().parse().ok(),
            stock: stock.get().parse().unwrap_or(0),
            attributes: attr_values.get(),
        };

        // Field validation, then required-attribute checks for the category
        let mut errors: Vec<(String, String)> = form
            .validate()
            .into_iter()
            .map(|(f, m)| (f.to_string(), m))
            .collect();
        if let Some(defs) = attributes::attributes_for_category(&form.category) {
            for def in defs {
                let missing = form
                    .attributes
                    .get(def.name)
                    .map(|v| v.trim().is_empty())
                    .unwrap_or(true);
                if def.required && missing {
                    errors.push((def.name.to_string(), format!("{} is required.", def.label)));
                }
            }
        }
        if !errors.is_empty() {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(Vec::new());
        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::supplier::update_product(id, &form).await,
                None => api::supplier::create_product(&form).await,
            };
            match result {
                Ok(_) => {
                    state.show_success(if editing_id.is_some() {
                        "Product updated"
                    } else {
                        "Product added"
                    });
                    navigate("/products", Default::default());
                }
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4 bg-gray-800 rounded-xl p-6">
            <FormField label="Product Name" error=Signal::derive(move || error_for("name"))>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </FormField>

            <FormField label="Description" error=Signal::derive(move || error_for("description"))>
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    rows=4
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </FormField>

            <FormField label="Category" error=Signal::derive(move || error_for("category"))>
                <select
                    on:change=move |ev| {
                        set_category.set(event_target_value(&ev));
                        // Selections from the old category no longer apply
                        attr_values.set(HashMap::new());
                    }
                    prop:value=move || category.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"Select a category"</option>
                    {attributes::category_labels().map(|(slug, label)| view! {
                        <option value=slug>{label}</option>
                    }).collect_view()}
                </select>
            </FormField>

            <div class="grid grid-cols-2 gap-4">
                <FormField label="Price (PKR)" error=Signal::derive(move || error_for("price"))>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </FormField>

                <FormField
                    label="Discounted Price (optional)"
                    error=Signal::derive(move || error_for("discounted_price"))
                >
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || discounted.get()
                        on:input=move |ev| set_discounted.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </FormField>
            </div>

            <FormField label="Stock" error=Signal::derive(move || error_for("stock"))>
                <input
                    type="number"
                    min="0"
                    prop:value=move || stock.get()
                    on:input=move |ev| set_stock.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </FormField>

            // Category-specific attributes from the taxonomy table
            {move || {
                let slug = category.get();
                attributes::attributes_for_category(&slug).map(|defs| view! {
                    <div class="border-t border-gray-700 pt-4 space-y-4">
                        <h3 class="text-sm font-semibold text-gray-300">"Category Details"</h3>
                        {defs.iter().map(|def| view! {
                            <AttributeField def=*def values=attr_values error=error_for(def.name) />
                        }).collect_view()}
                    </div>
                })
            }}

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg py-3 font-semibold transition-colors"
            >
                {move || {
                    if submitting.get() {
                        "Saving..."
                    } else if editing_id.is_some() {
                        "Save Changes"
                    } else {
                        "Add Product"
                    }
                }}
            </button>
        </form>
    }
}

/// Label + inline error wrapper for a form control
#[component]
fn FormField(
    label: &'static str,
    #[prop(into)]
    error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            {children()}
            {move || error.get().map(|msg| view! {
                <p class="text-red-400 text-sm mt-1">{msg}</p>
            })}
        </div>
    }
}

/// One attribute input driven by its taxonomy definition
#[component]
fn AttributeField(
    def: attributes::AttributeDef,
    values: RwSignal<HashMap<String, String>>,
    error: Option<String>,
) -> impl IntoView {
    let name = def.name;
    let current = move || values.get().get(name).cloned().unwrap_or_default();
    let update = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        values.update(|map| {
            map.insert(name.to_string(), value);
        });
    };

    let label = if def.required {
        format!("{} *", def.label)
    } else {
        def.label.to_string()
    };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            {match def.input {
                AttributeInput::Select(options) => view! {
                    <select
                        on:change=update
                        prop:value=current
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"Select"</option>
                        {options.iter().map(|opt| view! {
                            <option value=*opt>{*opt}</option>
                        }).collect_view()}
                    </select>
                }.into_view(),
                AttributeInput::Text => view! {
                    <input
                        type="text"
                        prop:value=current
                        on:input=update
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                }.into_view(),
                AttributeInput::Number(unit) => view! {
                    <div class="flex items-center space-x-2">
                        <input
                            type="number"
                            prop:value=current
                            on:input=update
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <span class="text-gray-500 text-sm">{unit}</span>
                    </div>
                }.into_view(),
            }}
            {error.map(|msg| view! {
                <p class="text-red-400 text-sm mt-1">{msg}</p>
            })}
        </div>
    }
}
