//! Custom Yew hooks for the frontend application.

mod use_deferred_redirect;

pub use use_deferred_redirect::use_deferred_redirect;
