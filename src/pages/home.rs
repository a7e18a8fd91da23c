//! Dashboard landing page for signed-in users.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::components::product_table::ProductTable;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <DashboardShell title="Merchandise">
            <ProductTable/>
        </DashboardShell>
    }
}
