// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod mount_guard;
pub mod session_state;
pub mod app_state;

pub use reactivity::*;
pub use mount_guard::*;
pub use session_state::*;
pub use app_state::*;
