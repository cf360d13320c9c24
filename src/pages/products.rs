//! Products Page
//!
//! Product list with stock/status overview and delete action.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiError};
use crate::components::Loading;
use crate::format;
use crate::models::Product;
use crate::state::global::GlobalState;

/// Product list page
#[component]
pub fn Products() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (products, set_products) = create_signal(Vec::<Product>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::supplier::fetch_products().await {
                Ok(list) => set_products.set(list),
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let state_for_delete = state.clone();
    let on_delete = move |product_id: u64| {
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::supplier::delete_product(product_id).await {
                Ok(()) => {
                    set_products.update(|list| list.retain(|p| p.id != product_id));
                    state.show_success("Product removed");
                }
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Products"</h1>
                    <p class="text-gray-400 mt-1">"Manage your shop listings"</p>
                </div>

                <A
                    href="/products/add"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add Product"
                </A>
            </div>

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
                    let list = products.get();
                    if list.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <p class="text-gray-400">"No products yet. Add your first listing!"</p>
                            </div>
                        }.into_view()
                    } else {
                        let on_delete = on_delete.clone();
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {list.into_iter().map(|product| {
                                    let on_delete = on_delete.clone();
                                    view! { <ProductCard product=product on_delete=on_delete /> }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Single product card with edit/delete actions
#[component]
fn ProductCard(product: Product, on_delete: impl Fn(u64) + 'static) -> impl IntoView {
    let status_class = match product.status.as_str() {
        "active" => "bg-green-600",
        "draft" => "bg-gray-500",
        "suspended" => "bg-red-600",
        _ => "bg-gray-500",
    };

    let product_id = product.id;
    let edit_href = format!("/products/edit/{}", product_id);

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="font-semibold">{product.name.clone()}</h3>
                    <p class="text-gray-400 text-sm mt-1 capitalize">{product.category.replace('-', " ")}</p>
                </div>
                <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white capitalize", status_class)>
                    {product.status.clone()}
                </span>
            </div>

            <div class="mt-4 flex items-baseline space-x-2">
                <span class="text-xl font-bold">
                    {format::pkr(product.discounted_price.unwrap_or(product.price))}
                </span>
                {product.discounted_price.map(|_| view! {
                    <span class="text-gray-500 text-sm line-through">{format::pkr(product.price)}</span>
                })}
            </div>

            <div class="mt-2 text-sm text-gray-400">
                {if product.stock == 0 {
                    view! { <span class="text-red-400">"Out of stock"</span> }.into_view()
                } else {
                    view! { <span>{format!("{} in stock", product.stock)}</span> }.into_view()
                }}
            </div>

            <div class="flex items-center space-x-2 mt-4">
                <A
                    href=edit_href
                    class="flex-1 text-center px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                >
                    "Edit"
                </A>
                <button
                    on:click=move |_| on_delete(product_id)
                    class="px-3 py-2 bg-red-900/60 hover:bg-red-800 rounded-lg text-sm text-red-300 transition-colors"
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
