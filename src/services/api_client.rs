// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// Un intento por llamada, sin reintentos. Toda petición pasa por
// `authorized()`, que añade el bearer de la sesión si existe.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::models::{
    Aluno, AlunoCreate, AlunoUpdate, AtivarContaRequest, CandidatoGraduacao, Evento, EventoCreate,
    GerarChavesRequest, Graduacao, GraduarRequest, InscricaoExternaRequest, InscricaoRequest,
    InscricaoResponse, LoginRequest, LoginResponse, MessageResponse, MeuProgresso, OnboardRequest,
    Pagamento, PagamentoCreate, PixQrCode, PresencaBulkRequest,
};
use crate::services::auth_service::AuthApi;
use crate::services::error::ApiError;
use crate::state::SessionHandle;
use crate::utils::BRACKET_METHOD_SIMPLE;

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: SessionHandle,
}

impl ApiClient {
    pub fn new(session: SessionHandle) -> Self {
        Self::with_base_url(CONFIG.backend_url.clone(), session)
    }

    pub fn with_base_url(base_url: impl Into<String>, session: SessionHandle) -> Self {
        Self {
            base_url: crate::config::normalize_base_url(&base_url.into()),
            session,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Cabecera que lleva cada petición; `None` sin sesión
    pub fn auth_header(&self) -> Option<(&'static str, String)> {
        self.session.authorization_header()
    }

    /// Añade `Authorization: Bearer <token>` cuando hay credencial
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.auth_header() {
            Some((name, value)) => builder.header(name, &value),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        log::debug!("🌐 [API] GET {}", path);
        let request = self
            .authorized(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(request.send().await?).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        log::debug!("🌐 [API] POST {}", path);
        let request = self
            .authorized(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?;
        Self::read_json(request.send().await?).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        log::debug!("🌐 [API] PUT {}", path);
        let request = self
            .authorized(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?;
        Self::read_json(request.send().await?).await
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body);
            log::error!("❌ [API] {} {}", response.url(), err);
            return Err(err);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    // ---------------------------------------------------------------- auth

    pub async fn onboard(&self, request: &OnboardRequest) -> Result<serde_json::Value, ApiError> {
        self.post_json("/auth/onboard", request).await
    }

    pub async fn ativar_conta(
        &self,
        request: &AtivarContaRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json("/auth/ativar-conta", request).await
    }

    // -------------------------------------------------------------- alunos

    pub async fn listar_alunos(&self) -> Result<Vec<Aluno>, ApiError> {
        self.get_json("/alunos").await
    }

    pub async fn criar_aluno(&self, aluno: &AlunoCreate) -> Result<Aluno, ApiError> {
        self.post_json("/alunos", aluno).await
    }

    pub async fn atualizar_aluno(&self, id: &str, update: &AlunoUpdate) -> Result<Aluno, ApiError> {
        self.put_json(&format!("/alunos/{}", id), update).await
    }

    pub async fn graduar_aluno(&self, id: &str, nova_gradu_id: &str) -> Result<Aluno, ApiError> {
        let body = GraduarRequest {
            nova_gradu_id: nova_gradu_id.to_string(),
        };
        self.post_json(&format!("/alunos/{}/graduar", id), &body).await
    }

    pub async fn meu_progresso(&self) -> Result<MeuProgresso, ApiError> {
        self.get_json("/alunos/meu-progresso").await
    }

    pub async fn candidatos_graduacao(&self) -> Result<Vec<CandidatoGraduacao>, ApiError> {
        self.get_json("/alunos/candidatos-graduacao").await
    }

    // ---------------------------------------------------------- pagamentos

    pub async fn listar_pagamentos(&self) -> Result<Vec<Pagamento>, ApiError> {
        self.get_json("/pagamentos").await
    }

    pub async fn meus_pagamentos(&self) -> Result<Vec<Pagamento>, ApiError> {
        self.get_json("/pagamentos/meus").await
    }

    pub async fn criar_pagamento(&self, pagamento: &PagamentoCreate) -> Result<Pagamento, ApiError> {
        self.post_json("/pagamentos", pagamento).await
    }

    pub async fn pix_pagamento(&self, id: &str) -> Result<PixQrCode, ApiError> {
        self.get_json(&format!("/pagamentos/{}/pix", id)).await
    }

    // ----------------------------------------------------------- presenças

    pub async fn registrar_chamada(
        &self,
        chamada: &PresencaBulkRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json("/presencas/bulk", chamada).await
    }

    // ------------------------------------------------------------- eventos

    pub async fn meus_eventos(&self) -> Result<Vec<Evento>, ApiError> {
        self.get_json("/eventos/meus").await
    }

    pub async fn feed_eventos(&self) -> Result<Vec<Evento>, ApiError> {
        self.get_json("/eventos/feed").await
    }

    pub async fn criar_evento(&self, evento: &EventoCreate) -> Result<Evento, ApiError> {
        self.post_json("/eventos", evento).await
    }

    pub async fn gerar_chaves(
        &self,
        evento_id: &str,
        categoria_id: &str,
    ) -> Result<MessageResponse, ApiError> {
        let body = GerarChavesRequest {
            categoria_id: categoria_id.to_string(),
            metodo: BRACKET_METHOD_SIMPLE.to_string(),
        };
        self.post_json(&format!("/eventos/{}/gerar-chaves", evento_id), &body)
            .await
    }

    pub async fn inscrever(
        &self,
        evento_id: &str,
        categoria_id: Option<String>,
    ) -> Result<InscricaoResponse, ApiError> {
        let body = InscricaoRequest { categoria_id };
        self.post_json(&format!("/eventos/{}/inscrever", evento_id), &body)
            .await
    }

    pub async fn inscrever_externo(
        &self,
        evento_id: &str,
        inscricao: &InscricaoExternaRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json(&format!("/eventos/{}/inscrever-externo", evento_id), inscricao)
            .await
    }

    // --------------------------------------------------------------- dojos

    pub async fn graduacoes(&self) -> Result<Vec<Graduacao>, ApiError> {
        self.get_json("/dojos/graduacoes").await
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Usuario;
    use crate::state::SessionStore;
    use crate::utils::{MemoryStorage, StoragePort, STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

    fn client(base: &str) -> ApiClient {
        ApiClient::with_base_url(base, SessionHandle::new(SessionStore::new(MemoryStorage::new())))
    }

    fn logged_client(token: &str) -> ApiClient {
        let storage = MemoryStorage::new();
        let usuario = Usuario {
            nome: "A".into(),
            ..Default::default()
        };
        storage.set(STORAGE_KEY_TOKEN, token).unwrap();
        storage
            .set(STORAGE_KEY_USER, &serde_json::to_string(&usuario).unwrap())
            .unwrap();
        let session = SessionHandle::new(SessionStore::new(storage));
        session.restore();
        ApiClient::with_base_url("http://localhost:8000", session)
    }

    #[test]
    fn requests_carry_bearer_of_restored_session() {
        let api = logged_client("t1");
        assert_eq!(
            api.auth_header(),
            Some(("Authorization", "Bearer t1".to_string()))
        );
    }

    #[test]
    fn requests_without_session_have_no_auth_header() {
        let api = client("http://localhost:8000");
        api.session.restore();
        assert_eq!(api.auth_header(), None);
    }

    #[test]
    fn urls_join_without_double_slash() {
        let api = client("http://localhost:8000/");
        assert_eq!(api.url("/alunos"), "http://localhost:8000/alunos");
        assert_eq!(
            api.url(&format!("/eventos/{}/gerar-chaves", "e1")),
            "http://localhost:8000/eventos/e1/gerar-chaves"
        );
    }
}
