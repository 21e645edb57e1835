// ============================================================================
// APP - Raíz: crea la sesión una vez y enruta
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::Usuario;
use crate::state::SessionHandle;
use crate::views::{
    ActivationView, AlunoDashboardView, AlunosView, ChamadaView, DashboardView, EventoPublicoView,
    EventosView, ExamesView, HomeView, LoginView, NotFoundView, PagamentosView, RegisterView,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/ativar")]
    Ativar,
    #[at("/dashboard")]
    Dashboard,
    #[at("/alunos")]
    Alunos,
    #[at("/pagamentos")]
    Pagamentos,
    #[at("/dashboard/eventos")]
    Eventos,
    #[at("/evento/:id")]
    EventoPublico { id: String },
    #[at("/exames")]
    Exames,
    #[at("/chamada")]
    Chamada,
    #[at("/aluno/dashboard")]
    AlunoDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Pantalla inicial del usuario según su rol
    pub fn home_for(usuario: &Usuario) -> Self {
        Self::recognize(usuario.home_path()).unwrap_or(Self::Dashboard)
    }
}

fn switch(route: Route, session: &SessionHandle) -> Html {
    let session = session.clone();
    match route {
        Route::Home => html! { <HomeView {session} /> },
        Route::Login => html! { <LoginView {session} /> },
        Route::Register => html! { <RegisterView {session} /> },
        Route::Ativar => html! { <ActivationView {session} /> },
        Route::Dashboard => html! { <DashboardView {session} /> },
        Route::Alunos => html! { <AlunosView {session} /> },
        Route::Pagamentos => html! { <PagamentosView {session} /> },
        Route::Eventos => html! { <EventosView {session} /> },
        Route::EventoPublico { id } => html! { <EventoPublicoView {session} evento_id={id} /> },
        Route::Exames => html! { <ExamesView {session} /> },
        Route::Chamada => html! { <ChamadaView {session} /> },
        Route::AlunoDashboard => html! { <AlunoDashboardView {session} /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_memo((), |_| SessionHandle::browser());
    let session = (*session).clone();

    {
        let session = session.clone();
        use_effect_with((), move |_| {
            session.restore();
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <AppRoutes {session} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
struct AppRoutesProps {
    session: SessionHandle,
}

/// Dentro del router: registra la navegación que usa `logout`
#[function_component(AppRoutes)]
fn app_routes(props: &AppRoutesProps) -> Html {
    let navigator = use_navigator();

    use_effect_with(props.session.clone(), move |session| {
        if let Some(navigator) = navigator {
            session.set_login_redirect(move || navigator.replace(&Route::Login));
        }
        || ()
    });

    let render = {
        let session = props.session.clone();
        Callback::from(move |route: Route| switch(route, &session))
    };

    html! {
        <Switch<Route> {render} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_the_public_paths() {
        assert_eq!(Route::recognize("/dashboard/eventos"), Some(Route::Eventos));
        assert_eq!(
            Route::recognize("/evento/e1"),
            Some(Route::EventoPublico { id: "e1".into() })
        );
        assert_eq!(Route::AlunoDashboard.to_path(), "/aluno/dashboard");
    }

    #[test]
    fn students_land_on_their_own_dashboard() {
        let mut usuario = Usuario {
            role: "professor".into(),
            ..Default::default()
        };
        assert_eq!(Route::home_for(&usuario), Route::Dashboard);
        usuario.role = "aluno".into();
        assert_eq!(Route::home_for(&usuario), Route::AlunoDashboard);
    }
}
