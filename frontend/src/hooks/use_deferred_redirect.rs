//! Hook that redirects once after a delay, tied to the component's lifetime.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::redirect::{BrowserScheduler, DeferredRedirect};
use crate::Route;

/// Navigate to `target` after `delay_ms`, unless the component unmounts first.
///
/// The timer is armed once per mount; later changes to the arguments do not
/// re-arm it. Unmounting drops the pending timer.
#[hook]
pub fn use_deferred_redirect(target: Route, delay_ms: u32) {
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        let redirect = match navigator {
            Some(navigator) => {
                let navigate = Callback::from(move |route: Route| navigator.push(&route));
                Some(DeferredRedirect::schedule(
                    &BrowserScheduler,
                    delay_ms,
                    navigate,
                    target,
                ))
            }
            None => {
                log::warn!(
                    "No router available, not redirecting to {}",
                    target.to_path()
                );
                None
            }
        };
        move || drop(redirect)
    });
}
