// ============================================================================
// ROUTE GUARD - resolving → {authenticated, unauthenticated}
// ============================================================================

use crate::state::session_store::SessionStatus;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuardState {
    Resolving,
    Authenticated,
    Unauthenticated,
}

impl From<&SessionStatus> for GuardState {
    fn from(status: &SessionStatus) -> Self {
        match status {
            SessionStatus::Resolving => Self::Resolving,
            SessionStatus::Present(_) => Self::Authenticated,
            SessionStatus::Absent => Self::Unauthenticated,
        }
    }
}

/// Qué pinta el guard
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuardView {
    Loading,
    Protected,
    Nothing,
}

impl GuardState {
    pub fn view(self) -> GuardView {
        match self {
            Self::Resolving => GuardView::Loading,
            Self::Authenticated => GuardView::Protected,
            Self::Unauthenticated => GuardView::Nothing,
        }
    }
}

/// Recuerda el último estado visto para redirigir una sola vez por transición
#[derive(Debug, Default)]
pub struct RouteGuard {
    last: Option<GuardState>,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra el estado actual. `true` cuando hay que redirigir al login.
    pub fn observe(&mut self, status: &SessionStatus) -> bool {
        let state = GuardState::from(status);
        let entered_unauthenticated =
            state == GuardState::Unauthenticated && self.last != Some(GuardState::Unauthenticated);
        self.last = Some(state);
        entered_unauthenticated
    }

    pub fn state(&self) -> Option<GuardState> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, Usuario};

    fn present() -> SessionStatus {
        SessionStatus::Present(Session {
            usuario: Usuario::default(),
            token: "t1".into(),
        })
    }

    #[test]
    fn never_renders_protected_content_while_resolving() {
        assert_eq!(GuardState::from(&SessionStatus::Resolving).view(), GuardView::Loading);
        assert_eq!(GuardState::from(&SessionStatus::Absent).view(), GuardView::Nothing);
        assert_eq!(GuardState::from(&present()).view(), GuardView::Protected);
    }

    #[test]
    fn resolving_does_not_redirect() {
        let mut guard = RouteGuard::new();
        assert!(!guard.observe(&SessionStatus::Resolving));
        assert_eq!(guard.state(), Some(GuardState::Resolving));
    }

    #[test]
    fn redirects_once_per_transition_into_unauthenticated() {
        let mut guard = RouteGuard::new();
        guard.observe(&SessionStatus::Resolving);

        assert!(guard.observe(&SessionStatus::Absent));
        // Re-evaluaciones sin cambio de estado: sin bucle de redirección
        assert!(!guard.observe(&SessionStatus::Absent));
        assert!(!guard.observe(&SessionStatus::Absent));
    }

    #[test]
    fn external_logout_flips_back_and_redirects_again() {
        let mut guard = RouteGuard::new();
        guard.observe(&SessionStatus::Resolving);
        assert!(!guard.observe(&present()));
        assert!(guard.observe(&SessionStatus::Absent));
        assert!(!guard.observe(&present()));
        assert!(guard.observe(&SessionStatus::Absent));
    }
}
