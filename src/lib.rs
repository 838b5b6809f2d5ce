//! Biblio Application Library
//!
//! The modules composing the library-management service, plus helpers to
//! assemble the full router for the binary and for tests.

pub mod modules;
pub mod utils;

use axum::Router;
use biblio_kernel::settings::Settings;
use biblio_kernel::ModuleRegistry;
use biblio_store::SharedLibrary;

/// Build the full application router with a fresh, empty library.
pub fn app(settings: &Settings) -> Router {
    router_with(settings, &biblio_store::shared())
}

/// Build the application router over an existing library handle.
pub fn router_with(settings: &Settings, library: &SharedLibrary) -> Router {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, library);
    biblio_http::build_router(&registry, settings)
}
