use crate::models::{AtivarContaRequest, OnboardRequest};
use crate::viewmodels::{non_blank, ValidationError};

/// Alta de dojo ("Criar Conta")
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegisterForm {
    pub admin_nome: String,
    pub admin_email: String,
    pub admin_senha: String,
    pub dojo_nome: String,
    pub dojo_telefone: String,
    pub dojo_endereco: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<OnboardRequest, ValidationError> {
        let required = |value: &str, message: &str| {
            non_blank(value).ok_or_else(|| ValidationError::new(message))
        };
        let admin_nome = required(&self.admin_nome, "Seu nome é obrigatório.")?;
        let admin_email = required(&self.admin_email, "Seu email é obrigatório.")?;
        let dojo_nome = required(&self.dojo_nome, "Nome do dojo é obrigatório.")?;
        if self.admin_senha.is_empty() {
            return Err(ValidationError::new("Defina uma senha."));
        }
        Ok(OnboardRequest {
            admin_nome,
            admin_email,
            admin_senha: self.admin_senha.clone(),
            dojo_nome,
            dojo_telefone: self.dojo_telefone.trim().to_string(),
            dojo_endereco: self.dojo_endereco.trim().to_string(),
        })
    }
}

/// Activación de la cuenta del alumno desde el enlace `?id=`
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AtivacaoForm {
    pub senha: String,
    pub confirmacao: String,
}

impl AtivacaoForm {
    pub fn validate(&self, aluno_id: &str) -> Result<AtivarContaRequest, ValidationError> {
        if self.senha != self.confirmacao {
            return Err(ValidationError::new("As senhas não coincidem."));
        }
        if self.senha.is_empty() {
            return Err(ValidationError::new("Defina uma senha."));
        }
        Ok(AtivarContaRequest {
            aluno_id: aluno_id.to_string(),
            senha: self.senha.clone(),
            confirmacao_senha: self.confirmacao.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passwords_must_match() {
        let form = AtivacaoForm {
            senha: "abc123".into(),
            confirmacao: "abc124".into(),
        };
        assert_eq!(
            form.validate("a1"),
            Err(ValidationError::new("As senhas não coincidem."))
        );

        let form = AtivacaoForm {
            senha: "abc123".into(),
            confirmacao: "abc123".into(),
        };
        let request = form.validate("a1").unwrap();
        assert_eq!(request.aluno_id, "a1");
        assert_eq!(request.confirmacao_senha, "abc123");
    }

    #[test]
    fn register_requires_professor_and_dojo() {
        let mut form = RegisterForm {
            admin_nome: "Sensei".into(),
            admin_email: "sensei@dojo.com".into(),
            admin_senha: "segredo".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::new("Nome do dojo é obrigatório."))
        );
        form.dojo_nome = " Dojo Central ".into();
        assert_eq!(form.validate().unwrap().dojo_nome, "Dojo Central");
    }
}
