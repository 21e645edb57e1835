use yew::prelude::*;

use crate::components::{Navbar, ProtectedRoute};
use crate::state::SessionHandle;

/// Página protegida con la barra lateral del profesor
#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub session: SessionHandle,
    pub children: Children,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    html! {
        <ProtectedRoute session={props.session.clone()}>
            <div class="dashboard-layout">
                <Navbar session={props.session.clone()} />
                <main class="dashboard-main">{ props.children.clone() }</main>
            </div>
        </ProtectedRoute>
    }
}
