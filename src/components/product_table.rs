//! Merchandise product table for the dashboard landing page.

#[cfg(test)]
#[path = "product_table_test.rs"]
mod product_table_test;

use leptos::prelude::*;

use crate::components::fetch_alert::{FetchError, FetchWarning};
use crate::net::gateway::Gateway;
use crate::net::operations::{MerchandiseProducts, MerchandiseProductsData};
use crate::net::types::{ListVariables, MerchandiseProduct};
use crate::state::resource::{ViewState, classify, non_empty};

const PRODUCT_PAGE_SIZE: u32 = 20;

fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

fn select_products(data: &MerchandiseProductsData) -> Option<Vec<MerchandiseProduct>> {
    non_empty(&data.merchandise_products)
}

/// Fetches the first page of products on mount and renders it.
#[component]
pub fn ProductTable() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let products = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move {
            gateway
                .execute::<MerchandiseProducts>(&ListVariables::first(PRODUCT_PAGE_SIZE))
                .await
        }
    });

    move || match classify(products.get().as_ref(), select_products) {
        ViewState::Loading => view! { <p class="muted">"Loading products..."</p> }.into_any(),
        ViewState::NotFound => view! { <p class="muted">"No products yet."</p> }.into_any(),
        ViewState::Failed(message) => view! { <FetchError message=message/> }.into_any(),
        ViewState::Ready(items, warning) => view! {
            <FetchWarning message=warning/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                        <th>"Published"</th>
                    </tr>
                </thead>
                <tbody>
                    {items
                        .into_iter()
                        .map(|product| {
                            let category = product
                                .category
                                .map(|category| category.name)
                                .unwrap_or_default();
                            view! {
                                <tr>
                                    <td>{product.name}</td>
                                    <td>{category}</td>
                                    <td>{format_price(product.price)}</td>
                                    <td>{product.stock}</td>
                                    <td>{if product.is_published { "Yes" } else { "No" }}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}
