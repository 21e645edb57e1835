use crate::models::{Aluno, Pagamento, PagamentoCreate, PagamentoStatus};
use crate::viewmodels::{non_blank, ValidationError};

/// Estado del modal "Nova Cobrança"
#[derive(Clone, PartialEq, Debug, Default)]
pub struct NovaCobrancaForm {
    pub aluno_id: String,
    pub valor: String,
    pub referencia_mes: String,
}

impl NovaCobrancaForm {
    pub fn validate(&self) -> Result<PagamentoCreate, ValidationError> {
        let (Some(aluno_id), Some(valor)) = (non_blank(&self.aluno_id), non_blank(&self.valor)) else {
            return Err(ValidationError::new("Aluno e valor são obrigatórios."));
        };

        // Se admite coma decimal ("149,90")
        let valor: f64 = valor
            .replace(',', ".")
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite() && *v > 0.0)
            .ok_or_else(|| ValidationError::new("Valor inválido."))?;

        Ok(PagamentoCreate {
            aluno_id,
            valor,
            metodo: None,
            referencia_mes: non_blank(&self.referencia_mes),
        })
    }
}

/// Tarjeta de resumen por estado
#[derive(Clone, PartialEq, Debug)]
pub struct StatusSummary {
    pub status: PagamentoStatus,
    pub count: usize,
    pub total: f64,
}

impl StatusSummary {
    pub fn for_status(pagamentos: &[Pagamento], status: PagamentoStatus) -> Self {
        let matching = pagamentos.iter().filter(|p| p.status() == status);
        let (count, total) = matching.fold((0, 0.0), |(c, t), p| (c + 1, t + p.valor));
        Self { status, count, total }
    }

    /// pendente / pago / atraso
    pub fn summary_cards(pagamentos: &[Pagamento]) -> Vec<Self> {
        PagamentoStatus::SUMMARY
            .iter()
            .map(|s| Self::for_status(pagamentos, *s))
            .collect()
    }
}

/// Nombre del alumno para la tabla de pagos
pub fn nome_aluno(alunos: &[Aluno], id: &str) -> String {
    alunos
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.nome.clone())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagamento(id: &str, valor: f64, status: &str) -> Pagamento {
        Pagamento {
            id: id.into(),
            aluno_id: "a1".into(),
            valor,
            status: status.into(),
            metodo: None,
            referencia_mes: None,
            criado_em: String::new(),
        }
    }

    #[test]
    fn student_and_value_are_required() {
        let form = NovaCobrancaForm {
            aluno_id: "a1".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::new("Aluno e valor são obrigatórios."))
        );
    }

    #[test]
    fn value_must_be_a_positive_number() {
        let mut form = NovaCobrancaForm {
            aluno_id: "a1".into(),
            valor: "cento".into(),
            referencia_mes: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::new("Valor inválido.")));

        form.valor = "149,90".into();
        let create = form.validate().unwrap();
        assert!((create.valor - 149.9).abs() < f64::EPSILON);
        assert_eq!(create.referencia_mes, None);
    }

    #[test]
    fn summary_counts_and_totals_per_status() {
        let pagamentos = vec![
            pagamento("1", 100.0, "pago"),
            pagamento("2", 50.0, "pago"),
            pagamento("3", 80.0, "atraso"),
            pagamento("4", 10.0, "cancelado"),
        ];
        let cards = StatusSummary::summary_cards(&pagamentos);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].count, 0);
        assert_eq!((cards[1].count, cards[1].total), (2, 150.0));
        assert_eq!((cards[2].count, cards[2].total), (1, 80.0));
    }

    #[test]
    fn unknown_student_shows_dash() {
        assert_eq!(nome_aluno(&[], "a1"), "—");
    }
}
