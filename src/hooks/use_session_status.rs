// ============================================================================
// USE SESSION STATUS - Re-render cuando cambia la sesión
// ============================================================================

use yew::prelude::*;

use crate::services::ApiClient;
use crate::state::{SessionHandle, SessionStatus};

/// Estado de sesión actual; se suscribe al store mientras el componente vive
#[hook]
pub fn use_session_status(session: &SessionHandle) -> SessionStatus {
    let status = use_state(|| session.status());

    {
        let status = status.clone();
        use_effect_with(session.clone(), move |session| {
            // Puede haber cambiado entre el render y el efecto
            status.set(session.status());

            let id = {
                let store = session.clone();
                session.subscribe(move || status.set(store.status()))
            };

            let session = session.clone();
            move || session.unsubscribe(id)
        });
    }

    (*status).clone()
}

/// Cliente HTTP ligado a la sesión, construido una vez por handle
#[hook]
pub fn use_api(session: &SessionHandle) -> ApiClient {
    let client = use_memo(session.clone(), |session| ApiClient::new(session.clone()));
    (*client).clone()
}
