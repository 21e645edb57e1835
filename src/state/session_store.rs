// ============================================================================
// SESSION STORE - Única fuente de verdad de "quién está logueado"
// ============================================================================
// Memoria y localStorage se mantienen sincronizados: toda transición escribe
// (o limpia) ambos. Los componentes reciben un `SessionHandle` por props.
// ============================================================================

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use crate::models::{LoginRequest, Session, Usuario};
use crate::services::auth_service::AuthApi;
use crate::services::error::ApiError;
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::utils::{
    BrowserStorage, StoragePort, AUTHORIZATION_HEADER, LEGACY_STORAGE_KEY_TOKEN,
    LEGACY_STORAGE_KEY_USER, STORAGE_KEY_TOKEN, STORAGE_KEY_USER,
};

const ALL_SESSION_KEYS: [&str; 4] = [
    STORAGE_KEY_TOKEN,
    STORAGE_KEY_USER,
    LEGACY_STORAGE_KEY_TOKEN,
    LEGACY_STORAGE_KEY_USER,
];

#[derive(Clone, PartialEq, Debug)]
pub enum SessionStatus {
    /// Todavía no se ha leído el storage
    Resolving,
    Absent,
    Present(Session),
}

impl SessionStatus {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Present(session) => Some(session),
            Self::Resolving | Self::Absent => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }
}

pub struct SessionStore {
    storage: Box<dyn StoragePort>,
    status: ReactiveState<SessionStatus>,
    login_redirect: RefCell<Option<Rc<dyn Fn()>>>,
}

impl SessionStore {
    pub fn new(storage: impl StoragePort + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            status: ReactiveState::new(SessionStatus::Resolving),
            login_redirect: RefCell::new(None),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    pub fn current(&self) -> Option<Session> {
        self.status.with(|s| s.session().cloned())
    }

    /// Lee el storage una sola vez. Un valor corrupto se descarta y la sesión queda ausente.
    pub fn restore(&self) -> SessionStatus {
        if !self.status.with(SessionStatus::is_resolving) {
            return self.status();
        }

        let token = self.storage.get(STORAGE_KEY_TOKEN).filter(|t| !t.is_empty());
        let raw_user = self.storage.get(STORAGE_KEY_USER);

        let resolved = match (token, raw_user) {
            (Some(token), Some(raw_user)) => match serde_json::from_str::<Usuario>(&raw_user) {
                Ok(usuario) => {
                    log::info!("💾 [SESSION] Sesión restaurada para {}", usuario.email);
                    SessionStatus::Present(Session { usuario, token })
                }
                Err(e) => {
                    log::warn!("⚠️ [SESSION] Usuario guardado ilegible, se descarta: {}", e);
                    self.clear_persisted();
                    SessionStatus::Absent
                }
            },
            (None, None) => SessionStatus::Absent,
            _ => {
                log::warn!("⚠️ [SESSION] Sesión guardada incompleta, se descarta");
                self.clear_persisted();
                SessionStatus::Absent
            }
        };

        self.status.set(resolved.clone());
        resolved
    }

    /// Autentica contra la API y persiste identidad + token
    pub async fn login<A: AuthApi>(
        &self,
        api: &A,
        email: &str,
        senha: &str,
    ) -> Result<Usuario, ApiError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            senha: senha.to_string(),
        };

        log::info!("🔐 [SESSION] Login de {}", request.email);
        let response = api.login(&request).await.map_err(|e| {
            log::error!("❌ [SESSION] Login rechazado: {}", e);
            e.into_authentication()
        })?;

        let session = Session {
            usuario: response.usuario,
            token: response.access_token,
        };
        self.persist(&session)?;

        let usuario = session.usuario.clone();
        self.status.set(SessionStatus::Present(session));
        log::info!("✅ [SESSION] Sesión iniciada ({})", usuario.role);
        Ok(usuario)
    }

    /// Limpia memoria y storage, y manda al login
    pub fn logout(&self) {
        self.clear_persisted();
        self.status.set(SessionStatus::Absent);
        log::info!("👋 [SESSION] Sesión cerrada");

        let redirect = self.login_redirect.borrow().clone();
        if let Some(redirect) = redirect {
            redirect();
        }
    }

    /// Token en memoria o, si aún no se restauró, el persistido
    pub fn bearer_token(&self) -> Option<String> {
        self.status
            .with(|s| s.session().map(|session| session.token.clone()))
            .or_else(|| self.storage.get(STORAGE_KEY_TOKEN))
            .filter(|token| !token.is_empty())
    }

    pub fn authorization_header(&self) -> Option<(&'static str, String)> {
        self.bearer_token()
            .map(|token| (AUTHORIZATION_HEADER, format!("Bearer {}", token)))
    }

    /// Navegación que ejecuta `logout`
    pub fn set_login_redirect(&self, redirect: impl Fn() + 'static) {
        *self.login_redirect.borrow_mut() = Some(Rc::new(redirect));
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        self.status.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.status.unsubscribe(id);
    }

    fn persist(&self, session: &Session) -> Result<(), ApiError> {
        let user_json =
            serde_json::to_string(&session.usuario).map_err(|e| ApiError::Storage(e.to_string()))?;

        let written = self
            .storage
            .set(STORAGE_KEY_TOKEN, &session.token)
            .and_then(|_| self.storage.set(STORAGE_KEY_USER, &user_json));

        written.map_err(|e| {
            log::error!("❌ [SESSION] No se pudo persistir la sesión: {}", e);
            self.clear_persisted();
            ApiError::Storage(e)
        })
    }

    fn clear_persisted(&self) {
        for key in ALL_SESSION_KEYS {
            self.storage.clear(key);
        }
    }
}

/// Referencia compartida al store, creada una vez en `App` y pasada por props
#[derive(Clone)]
pub struct SessionHandle(Rc<SessionStore>);

impl SessionHandle {
    pub fn new(store: SessionStore) -> Self {
        Self(Rc::new(store))
    }

    pub fn browser() -> Self {
        Self::new(SessionStore::new(BrowserStorage::new()))
    }
}

impl Deref for SessionHandle {
    type Target = SessionStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginResponse;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct MockAuth {
        response: Result<LoginResponse, ApiError>,
        calls: Cell<usize>,
    }

    impl MockAuth {
        fn ok(token: &str, nome: &str) -> Self {
            Self {
                response: Ok(LoginResponse {
                    access_token: token.to_string(),
                    token_type: Some("bearer".into()),
                    usuario: Usuario {
                        nome: nome.to_string(),
                        ..Default::default()
                    },
                }),
                calls: Cell::new(0),
            }
        }

        fn rejecting(status: u16, body: &str) -> Self {
            Self {
                response: Err(ApiError::from_status(status, body)),
                calls: Cell::new(0),
            }
        }
    }

    impl AuthApi for MockAuth {
        async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    fn store() -> (SessionStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        (SessionStore::new(storage.clone()), storage)
    }

    #[test]
    fn starts_resolving_until_restored() {
        let (store, _) = store();
        assert!(store.status().is_resolving());
        assert_eq!(store.restore(), SessionStatus::Absent);
        assert!(!store.status().is_resolving());
    }

    #[test]
    fn login_persists_token_and_authorizes_requests() {
        let (store, storage) = store();
        store.restore();
        let api = MockAuth::ok("t1", "A");

        let usuario = block_on(store.login(&api, "a@a.com", "x")).unwrap();

        assert_eq!(usuario.nome, "A");
        assert_eq!(storage.get(STORAGE_KEY_TOKEN).as_deref(), Some("t1"));
        assert!(storage.get(STORAGE_KEY_USER).unwrap().contains("\"nome\":\"A\""));
        assert_eq!(
            store.authorization_header(),
            Some(("Authorization", "Bearer t1".to_string()))
        );
        assert_eq!(store.current().map(|s| s.token), Some("t1".to_string()));
    }

    #[test]
    fn logout_removes_every_persisted_key() {
        let (store, storage) = store();
        store.restore();
        storage.set(LEGACY_STORAGE_KEY_TOKEN, "old").unwrap();
        storage.set(LEGACY_STORAGE_KEY_USER, "{}").unwrap();

        for round in 0..3 {
            let api = MockAuth::ok(&format!("t{}", round), "A");
            block_on(store.login(&api, "a@a.com", "x")).unwrap();
            store.logout();

            assert!(storage.is_empty());
            assert_eq!(store.status(), SessionStatus::Absent);
            assert_eq!(store.authorization_header(), None);
        }
    }

    #[test]
    fn logout_runs_login_redirect() {
        let (store, _) = store();
        let redirects = Rc::new(Cell::new(0));
        let r = redirects.clone();
        store.set_login_redirect(move || r.set(r.get() + 1));

        store.logout();
        assert_eq!(redirects.get(), 1);
    }

    #[test]
    fn rejected_credentials_leave_session_absent() {
        let (store, storage) = store();
        store.restore();
        let api = MockAuth::rejecting(401, r#"{"detail":"Email ou senha incorretos"}"#);

        let err = block_on(store.login(&api, "a@a.com", "errada")).unwrap_err();

        assert_eq!(err, ApiError::Authentication("Email ou senha incorretos".into()));
        assert_eq!(api.calls.get(), 1);
        assert!(storage.is_empty());
        assert_eq!(store.current(), None);
    }

    #[test]
    fn storage_failure_keeps_memory_and_storage_in_agreement() {
        let (store, storage) = store();
        store.restore();
        storage.set_read_only(true);

        let err = block_on(store.login(&MockAuth::ok("t1", "A"), "a@a.com", "x")).unwrap_err();

        assert!(matches!(err, ApiError::Storage(_)));
        assert_eq!(store.current(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn restore_reads_persisted_session() {
        let (store, storage) = store();
        storage.set(STORAGE_KEY_TOKEN, "t9").unwrap();
        storage
            .set(STORAGE_KEY_USER, r#"{"id":"u1","email":"p@dojo.com","nome":"Sensei","role":"professor","dojo_id":"d1"}"#)
            .unwrap();

        let status = store.restore();
        let session = status.session().unwrap();
        assert_eq!(session.token, "t9");
        assert_eq!(session.usuario.dojo_id, "d1");
    }

    #[test]
    fn corrupted_user_is_discarded_without_panicking() {
        let (store, storage) = store();
        storage.set(STORAGE_KEY_TOKEN, "t9").unwrap();
        storage.set(STORAGE_KEY_USER, "{nome: sem aspas").unwrap();

        assert_eq!(store.restore(), SessionStatus::Absent);
        assert!(storage.is_empty());
        assert_eq!(store.authorization_header(), None);
    }

    #[test]
    fn token_without_user_is_discarded() {
        let (store, storage) = store();
        storage.set(STORAGE_KEY_TOKEN, "t9").unwrap();

        assert_eq!(store.restore(), SessionStatus::Absent);
        assert!(!storage.contains(STORAGE_KEY_TOKEN));
    }

    #[test]
    fn restore_runs_only_once() {
        let (store, storage) = store();
        store.restore();
        storage.set(STORAGE_KEY_TOKEN, "t9").unwrap();
        storage.set(STORAGE_KEY_USER, r#"{"nome":"B"}"#).unwrap();

        assert_eq!(store.restore(), SessionStatus::Absent);
    }

    #[test]
    fn transitions_notify_subscribers() {
        let (store, _) = store();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let id = store.subscribe(move || h.set(h.get() + 1));

        store.restore();
        block_on(store.login(&MockAuth::ok("t1", "A"), "a@a.com", "x")).unwrap();
        store.logout();
        assert_eq!(hits.get(), 3);

        store.unsubscribe(id);
        store.logout();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = SessionHandle::new(SessionStore::new(MemoryStorage::new()));
        let b = SessionHandle::new(SessionStore::new(MemoryStorage::new()));
        assert!(a == a.clone());
        assert!(a != b);
    }
}
