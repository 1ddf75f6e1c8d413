use yew::prelude::*;

use crate::theme::use_theme;

/// Landing page for redirected users. The dashboard itself lives elsewhere.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let theme = use_theme();

    html! {
        <div class="dashboard-container" style={theme.container_style()}>
            <h1 style={theme.title_style()}>{ "Dashboard" }</h1>
        </div>
    }
}
