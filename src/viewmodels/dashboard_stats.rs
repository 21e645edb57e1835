use crate::models::{Aluno, Pagamento, PagamentoStatus};

/// Tarjetas del dashboard del profesor
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DashboardStats {
    pub alunos: usize,
    pub pagamentos: usize,
    pub inadimplentes: usize,
    pub receita: f64,
}

impl DashboardStats {
    pub fn compute(alunos: &[Aluno], pagamentos: &[Pagamento]) -> Self {
        Self {
            alunos: alunos.iter().filter(|a| a.ativo).count(),
            pagamentos: pagamentos.len(),
            inadimplentes: pagamentos
                .iter()
                .filter(|p| p.status() == PagamentoStatus::Atraso)
                .count(),
            receita: pagamentos
                .iter()
                .filter(|p| p.status() == PagamentoStatus::Pago)
                .map(|p| p.valor)
                .sum(),
        }
    }
}

/// Cobros del alumno que aún no están pagados
pub fn pending_count(pagamentos: &[Pagamento]) -> usize {
    pagamentos
        .iter()
        .filter(|p| p.status() != PagamentoStatus::Pago)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagamento(valor: f64, status: &str) -> Pagamento {
        Pagamento {
            id: status.into(),
            aluno_id: "a".into(),
            valor,
            status: status.into(),
            metodo: None,
            referencia_mes: None,
            criado_em: String::new(),
        }
    }

    fn aluno(ativo: bool) -> Aluno {
        serde_json::from_value(serde_json::json!({"id": "x", "nome": "X", "ativo": ativo})).unwrap()
    }

    #[test]
    fn revenue_counts_only_paid_and_defaulters_only_late() {
        let pagamentos = vec![
            pagamento(149.0, "pago"),
            pagamento(149.0, "pago"),
            pagamento(149.0, "atraso"),
            pagamento(149.0, "pendente"),
        ];
        let stats = DashboardStats::compute(&[aluno(true), aluno(true), aluno(false)], &pagamentos);
        assert_eq!(stats.alunos, 2);
        assert_eq!(stats.pagamentos, 4);
        assert_eq!(stats.inadimplentes, 1);
        assert_eq!(stats.receita, 298.0);
    }

    #[test]
    fn pending_is_everything_not_paid() {
        let pagamentos = vec![pagamento(1.0, "pago"), pagamento(1.0, "atraso"), pagamento(1.0, "pendente")];
        assert_eq!(pending_count(&pagamentos), 2);
    }
}
