// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_store;
pub mod route_guard;

pub use reactivity::*;
pub use session_store::*;
pub use route_guard::*;
