use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::use_theme;
use crate::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let theme = use_theme();

    html! {
        <div class="not-found-container" style={theme.container_style()}>
            <h1 style={theme.title_style()}>{ "404" }</h1>
            <p style={theme.body_style()}>{ "Page not found" }</p>
            <Link<Route> to={Route::Dashboard}>{ "Back to Dashboard" }</Link<Route>>
        </div>
    }
}
