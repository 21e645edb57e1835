use serde_json::Value;
use thiserror::Error;

/// Fallos de las llamadas a la API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// El servidor rechazó las credenciales
    #[error("autenticación rechazada: {0}")]
    Authentication(String),

    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("error de red: {0}")]
    Network(String),

    #[error("respuesta inválida: {0}")]
    Parse(String),

    #[error("no se pudo guardar la sesión: {0}")]
    Storage(String),
}

impl ApiError {
    /// Error a partir de una respuesta no-2xx y su cuerpo
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            detail: extract_detail(body).unwrap_or_default(),
        }
    }

    /// Los 4xx de `/auth/login` son credenciales rechazadas
    pub fn into_authentication(self) -> Self {
        match self {
            Self::Http { status, detail } if (400..500).contains(&status) => {
                Self::Authentication(detail)
            }
            other => other,
        }
    }

    /// Texto para mostrar al usuario: el `detail` del servidor o el texto de la pantalla
    pub fn user_message(&self, fallback: &str) -> String {
        let detail = match self {
            Self::Authentication(detail) | Self::Http { detail, .. } => detail.as_str(),
            Self::Network(_) | Self::Parse(_) | Self::Storage(_) => "",
        };
        if detail.is_empty() {
            fallback.to_string()
        } else {
            detail.to_string()
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        Self::Network(e.to_string())
    }
}

/// `{"detail": "..."}` o `{"detail": [{"msg": "..."}]}` → una línea
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_and_list() {
        assert_eq!(
            extract_detail(r#"{"detail":"Email ou senha inválidos"}"#).as_deref(),
            Some("Email ou senha inválidos")
        );
        assert_eq!(
            extract_detail(r#"{"detail":[{"msg":"field required"},{"msg":"invalid email"}]}"#)
                .as_deref(),
            Some("field required; invalid email")
        );
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert_eq!(extract_detail(r#"{"detail":""}"#), None);
    }

    #[test]
    fn login_rejections_become_authentication_errors() {
        let err = ApiError::from_status(401, r#"{"detail":"Credenciais inválidas"}"#)
            .into_authentication();
        assert_eq!(err, ApiError::Authentication("Credenciais inválidas".into()));

        let server = ApiError::from_status(500, "").into_authentication();
        assert!(matches!(server, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn user_message_prefers_server_detail() {
        let err = ApiError::Authentication("Credenciais inválidas".into());
        assert_eq!(err.user_message("Erro ao fazer login."), "Credenciais inválidas");

        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message("Erro ao fazer login."), "Erro ao fazer login.");

        let err = ApiError::from_status(400, "");
        assert_eq!(err.user_message("Erro ao criar aluno."), "Erro ao criar aluno.");
    }
}
