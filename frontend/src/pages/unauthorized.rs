//! Unauthorized Page
//!
//! Tells the user they lack permission for the page they tried to open, then
//! sends them to the dashboard after a short delay.

use yew::prelude::*;

use crate::hooks::use_deferred_redirect;
use crate::redirect::REDIRECT_DELAY_MS;
use crate::theme::use_theme;
use crate::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct UnauthorizedPageProps {
    /// How long the notice stays up before redirecting
    #[prop_or(REDIRECT_DELAY_MS)]
    pub delay_ms: u32,
    /// Where the user is sent afterwards
    #[prop_or(Route::Dashboard)]
    pub redirect_to: Route,
}

#[function_component(UnauthorizedPage)]
pub fn unauthorized_page(props: &UnauthorizedPageProps) -> Html {
    use_deferred_redirect(props.redirect_to.clone(), props.delay_ms);

    html! { <UnauthorizedNotice /> }
}

/// The static denial notice, without the redirect.
#[function_component(UnauthorizedNotice)]
pub fn unauthorized_notice() -> Html {
    let theme = use_theme();

    html! {
        <div class="unauthorized-container" style={theme.container_style()}>
            <div class="unauthorized-icon" style={theme.icon_badge_style()}>
                <span style={theme.icon_style()}>{ "🚫" }</span>
            </div>
            <h1 style={theme.title_style()}>{ "Access Denied" }</h1>
            <p class="unauthorized-message" style={theme.body_style()}>
                { "You don't have the necessary permissions to access this page. Please contact your administrator." }
            </p>
            <p class="unauthorized-redirect" style={theme.notice_style()}>
                { "Redirecting to dashboard in a few seconds..." }
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use yew::ServerRenderer;

    async fn render_notice() -> String {
        ServerRenderer::<UnauthorizedNotice>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_notice_text() {
        let html = render_notice().await;

        assert!(html.contains("🚫"));
        assert!(html.contains("<h1"));
        assert!(html.contains("Access Denied"));
        assert!(html.contains("necessary permissions to access this page"));
        assert!(html.contains("Please contact your administrator."));
        assert!(html.contains("Redirecting to dashboard in a few seconds..."));
    }

    #[tokio::test]
    async fn test_notice_is_identical_across_renders() {
        let first = render_notice().await;
        let second = render_notice().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_notice_defaults_to_built_in_theme() {
        let html = render_notice().await;
        assert!(html.contains("background-color: #ffffff"));
        assert!(html.contains("color: #999999"));
    }

    #[function_component(ThemedNotice)]
    fn themed_notice() -> Html {
        let theme = Theme {
            muted: "#123456".into(),
            ..Theme::default()
        };
        html! {
            <ContextProvider<Theme> context={theme}>
                <UnauthorizedNotice />
            </ContextProvider<Theme>>
        }
    }

    #[tokio::test]
    async fn test_notice_uses_provided_theme() {
        let html = ServerRenderer::<ThemedNotice>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains("color: #123456"));
        assert!(html.contains("Access Denied"));
    }
}
