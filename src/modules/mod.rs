pub mod books;
pub mod loans;
pub mod users;

use biblio_kernel::ModuleRegistry;
use biblio_store::SharedLibrary;

/// Register all application modules with the registry, in mount order.
pub fn register_all(registry: &mut ModuleRegistry, library: &SharedLibrary) {
    registry.register(books::create_module(library.clone()));
    registry.register(users::create_module(library.clone()));
    registry.register(loans::create_module(library.clone()));
}
