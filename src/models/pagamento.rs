use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Pagamento {
    pub id: String,
    pub aluno_id: String,
    pub valor: f64,
    pub status: String,
    #[serde(default)]
    pub metodo: Option<String>,
    #[serde(default)]
    pub referencia_mes: Option<String>,
    #[serde(default)]
    pub criado_em: String,
}

impl Pagamento {
    pub fn status(&self) -> PagamentoStatus {
        PagamentoStatus::parse(&self.status)
    }
}

/// Estados conocidos de un cobro
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PagamentoStatus {
    Pendente,
    Pago,
    Atraso,
    Cancelado,
    Outro,
}

impl PagamentoStatus {
    /// Los tres estados que se resumen en la cabecera de pagos
    pub const SUMMARY: [PagamentoStatus; 3] = [Self::Pendente, Self::Pago, Self::Atraso];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pendente" => Self::Pendente,
            "pago" => Self::Pago,
            "atraso" => Self::Atraso,
            "cancelado" => Self::Cancelado,
            _ => Self::Outro,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::Pago => "pago",
            Self::Atraso => "atraso",
            Self::Cancelado => "cancelado",
            Self::Outro => "outro",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pendente => "badge badge-pendente",
            Self::Pago => "badge badge-pago",
            Self::Atraso => "badge badge-atraso",
            Self::Cancelado | Self::Outro => "badge badge-neutro",
        }
    }
}

/// Cuerpo de `POST /pagamentos`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PagamentoCreate {
    pub aluno_id: String,
    pub valor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metodo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referencia_mes: Option<String>,
}

/// `GET /pagamentos/{id}/pix`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PixQrCode {
    #[serde(rename = "encodedImage")]
    pub encoded_image: String,
    pub payload: String,
}

impl PixQrCode {
    /// `src` listo para un `<img>`
    pub fn image_src(&self) -> String {
        if self.encoded_image.starts_with("data:") {
            self.encoded_image.clone()
        } else {
            format!("data:image/png;base64,{}", self.encoded_image)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!(PagamentoStatus::parse("PAGO"), PagamentoStatus::Pago);
        assert_eq!(PagamentoStatus::parse(" atraso "), PagamentoStatus::Atraso);
        assert_eq!(PagamentoStatus::parse("estornado"), PagamentoStatus::Outro);
    }

    #[test]
    fn pix_image_gets_data_uri() {
        let pix: PixQrCode =
            serde_json::from_str(r#"{"encodedImage":"iVBORw0","payload":"000201"}"#).unwrap();
        assert_eq!(pix.image_src(), "data:image/png;base64,iVBORw0");
    }
}
