// ============================================================================
// PROTECTED ROUTE - Solo pinta los hijos con sesión presente
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Loading, Route};
use crate::hooks::use_session_status;
use crate::state::{GuardState, GuardView, RouteGuard, SessionHandle};

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub session: SessionHandle,
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let status = use_session_status(&props.session);
    let guard = use_mut_ref(RouteGuard::new);
    let navigator = use_navigator();

    {
        let guard = guard.clone();
        use_effect_with(status.clone(), move |status| {
            if guard.borrow_mut().observe(status) {
                log::info!("🛡️ [GUARD] Sin sesión, redirigiendo al login");
                if let Some(navigator) = navigator {
                    navigator.replace(&Route::Login);
                }
            }
            || ()
        });
    }

    match GuardState::from(&status).view() {
        GuardView::Loading => html! { <Loading fullscreen=true /> },
        GuardView::Nothing => Html::default(),
        GuardView::Protected => html! { <>{ props.children.clone() }</> },
    }
}
