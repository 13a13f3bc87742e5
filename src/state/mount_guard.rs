use std::cell::{Cell, RefCell};
use std::rc::Rc;

type UnmountHook = Box<dyn FnOnce()>;

/// Marca de vida de una vista montada.
/// Las respuestas asíncronas comprueban `is_mounted()` antes de tocar el estado;
/// los recursos de la vista se liberan con `on_unmount`.
#[derive(Clone)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
    hooks: Rc<RefCell<Vec<UnmountHook>>>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
            hooks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Registrar limpieza para cuando la vista se desmonte.
    /// Si ya está desmontada se ejecuta en el acto.
    pub fn on_unmount<F>(&self, hook: F)
    where
        F: FnOnce() + 'static,
    {
        if self.is_mounted() {
            self.hooks.borrow_mut().push(Box::new(hook));
        } else {
            hook();
        }
    }

    /// Desmontar: cada hook corre una sola vez
    pub fn unmount(&self) {
        self.mounted.set(false);
        let hooks = std::mem::take(&mut *self.hooks.borrow_mut());
        for hook in hooks {
            hook();
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_observe_unmount() {
        let guard = MountGuard::new();
        let pending = guard.clone();
        assert!(pending.is_mounted());
        guard.unmount();
        assert!(!pending.is_mounted());
    }

    #[test]
    fn test_unmount_hooks_run_once() {
        let guard = MountGuard::new();
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        guard.clone().on_unmount(move || counter.set(counter.get() + 1));

        guard.unmount();
        guard.unmount();
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_hook_on_unmounted_guard_runs_immediately() {
        let guard = MountGuard::new();
        guard.unmount();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        guard.on_unmount(move || flag.set(true));
        assert!(ran.get());
    }
}
