// ============================================================================
// VIEWS - Páginas de la aplicación
// ============================================================================
// Cada página protegida se divide en el envoltorio (layout + guard) y el
// contenido, que solo se monta con sesión presente y es quien pide datos.
// ============================================================================

pub mod aluno_dashboard;
pub mod alunos;
pub mod auth;
pub mod chamada;
pub mod dashboard;
pub mod evento_publico;
pub mod eventos;
pub mod exames;
pub mod home;
pub mod not_found;
pub mod pagamentos;

pub use aluno_dashboard::AlunoDashboardView;
pub use alunos::AlunosView;
pub use auth::{ActivationView, LoginView, RegisterView};
pub use chamada::ChamadaView;
pub use dashboard::DashboardView;
pub use evento_publico::EventoPublicoView;
pub use eventos::EventosView;
pub use exames::ExamesView;
pub use home::HomeView;
pub use not_found::NotFoundView;
pub use pagamentos::PagamentosView;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::SessionHandle;

/// Props comunes: todas las páginas reciben el handle de sesión
#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub session: SessionHandle,
}

/// `oninput` de un `<input>` que actualiza un campo del formulario
pub(crate) fn bind_input<T: Clone + 'static>(
    form: &UseStateHandle<T>,
    update: fn(&mut T, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        update(&mut next, input.value());
        form.set(next);
    })
}

/// `oninput` de un `<textarea>`
pub(crate) fn bind_textarea<T: Clone + 'static>(
    form: &UseStateHandle<T>,
    update: fn(&mut T, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        update(&mut next, input.value());
        form.set(next);
    })
}

/// `onchange` de un `<select>`
pub(crate) fn bind_select<T: Clone + 'static>(
    form: &UseStateHandle<T>,
    update: fn(&mut T, String),
) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        update(&mut next, select.value());
        form.set(next);
    })
}

/// `window.confirm`; sin ventana se considera cancelado
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub(crate) fn open_in_new_tab(url: &str) {
    let opened = web_sys::window().and_then(|w| w.open_with_url_and_target(url, "_blank").ok().flatten());
    if opened.is_none() {
        log::warn!("⚠️ No se pudo abrir {}", url);
    }
}

/// Mensaje de error en línea bajo un formulario
pub(crate) fn form_error(erro: &Option<String>) -> Html {
    match erro {
        Some(texto) => html! { <div class="form-error">{ texto }</div> },
        None => Html::default(),
    }
}
