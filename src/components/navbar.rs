use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Route;
use crate::hooks::use_session_status;
use crate::state::SessionHandle;

static NAV_ITEMS: [(Route, &str, &str); 6] = [
    (Route::Dashboard, "Dashboard", "📊"),
    (Route::Alunos, "Alunos", "👥"),
    (Route::Pagamentos, "Pagamentos", "💳"),
    (Route::Chamada, "Chamada", "✅"),
    (Route::Exames, "Exames", "🥋"),
    (Route::Eventos, "Eventos", "🏆"),
];

/// Enlace activo si la ruta actual empieza por la suya
pub fn is_active(current_path: &str, target: &Route) -> bool {
    current_path.starts_with(&target.to_path())
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub session: SessionHandle,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let status = use_session_status(&props.session);
    let location = use_location();
    let current_path = location.map(|l| l.path().to_string()).unwrap_or_default();

    let on_logout = {
        let session = props.session.clone();
        Callback::from(move |_: MouseEvent| session.logout())
    };

    html! {
        <aside class="navbar">
            <div class="navbar-header">
                <h1 class="navbar-brand">
                    <span class="accent">{"🥋 Budo"}</span>{"Manager"}
                </h1>
                if let Some(session) = status.session() {
                    <p class="navbar-user">
                        { format!("{} · {}", session.usuario.nome, session.usuario.role) }
                    </p>
                }
            </div>

            <nav class="navbar-links">
                { for NAV_ITEMS.iter().map(|(route, label, icon)| {
                    let class = if is_active(&current_path, route) {
                        "nav-link nav-link-active"
                    } else {
                        "nav-link"
                    };
                    html! {
                        <Link<Route> to={route.clone()} classes={classes!(class)}>
                            <span class="nav-icon">{ *icon }</span>
                            { *label }
                        </Link<Route>>
                    }
                }) }
            </nav>

            <div class="navbar-footer">
                <button class="btn-logout" onclick={on_logout}>{"Sair"}</button>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_matches_by_prefix() {
        assert!(is_active("/dashboard", &Route::Dashboard));
        assert!(is_active("/dashboard/eventos", &Route::Dashboard));
        assert!(is_active("/dashboard/eventos", &Route::Eventos));
        assert!(!is_active("/alunos", &Route::Pagamentos));
    }
}
