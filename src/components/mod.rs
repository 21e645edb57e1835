pub mod app;
pub mod bracket_view;
pub mod dashboard_layout;
pub mod loading;
pub mod navbar;
pub mod protected_route;
pub mod stat_card;
pub mod toast;
pub mod xp_bar;

pub use app::{App, Route};
pub use bracket_view::BracketView;
pub use dashboard_layout::DashboardLayout;
pub use loading::Loading;
pub use navbar::Navbar;
pub use protected_route::ProtectedRoute;
pub use stat_card::StatCard;
pub use toast::Toast;
pub use xp_bar::XpBar;
