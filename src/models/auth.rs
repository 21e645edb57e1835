use serde::{Deserialize, Serialize};

/// Usuario autenticado tal como lo devuelve `/auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Usuario {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub dojo_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aluno_id: Option<String>,
}

impl Usuario {
    pub fn is_aluno(&self) -> bool {
        self.role == "aluno"
    }

    /// Pantalla inicial según el rol
    pub fn home_path(&self) -> &'static str {
        if self.is_aluno() {
            "/aluno/dashboard"
        } else {
            "/dashboard"
        }
    }
}

/// Identidad + credencial. Solo la crea `SessionStore`.
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub usuario: Usuario,
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub usuario: Usuario,
}

/// Alta de dojo + profesor administrador
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct OnboardRequest {
    pub admin_nome: String,
    pub admin_email: String,
    pub admin_senha: String,
    pub dojo_nome: String,
    pub dojo_telefone: String,
    pub dojo_endereco: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AtivarContaRequest {
    pub aluno_id: String,
    pub senha: String,
    pub confirmacao_senha: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_tolerates_partial_usuario() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"access_token":"t1","usuario":{"nome":"A"}}"#).unwrap();
        assert_eq!(response.access_token, "t1");
        assert_eq!(response.usuario.nome, "A");
        assert!(response.usuario.email.is_empty());
        assert_eq!(response.token_type, None);
    }

    #[test]
    fn home_path_depends_on_role() {
        let mut usuario = Usuario {
            role: "professor".into(),
            ..Default::default()
        };
        assert_eq!(usuario.home_path(), "/dashboard");
        usuario.role = "aluno".into();
        assert_eq!(usuario.home_path(), "/aluno/dashboard");
    }
}
