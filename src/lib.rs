// ============================================================================
// BUDO MANAGER - FRONTEND YEW (RUST + WASM)
// ============================================================================
// Capas:
// - Views: páginas (envoltorio con guard + contenido que pide datos)
// - Components: piezas reutilizables y el router
// - ViewModels: validación y cálculos puros, testeables sin navegador
// - Services: SOLO comunicación API
// - State: sesión reactiva con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use crate::components::App;
use crate::config::CONFIG;

/// Arranque: panic hook, logging y montaje de la app en `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🥋 BudoManager ({}) - API en {}",
        CONFIG.environment,
        CONFIG.backend_url
    );

    yew::Renderer::<App>::new().render();
}
