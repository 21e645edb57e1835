use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Loading, Route};
use crate::hooks::use_session_status;
use crate::state::SessionStatus;
use crate::views::PageProps;

/// `/`: espera a la sesión y manda a la pantalla de inicio o al login
#[function_component(HomeView)]
pub fn home_view(props: &PageProps) -> Html {
    let status = use_session_status(&props.session);
    let navigator = use_navigator();

    use_effect_with(status, move |status| {
        let target = match status {
            SessionStatus::Resolving => None,
            SessionStatus::Absent => Some(Route::Login),
            SessionStatus::Present(session) => Some(Route::home_for(&session.usuario)),
        };
        if let (Some(target), Some(navigator)) = (target, navigator) {
            navigator.replace(&target);
        }
        || ()
    });

    html! { <Loading fullscreen=true /> }
}
