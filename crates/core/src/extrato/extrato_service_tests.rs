//! Tests for the extrato grouping and report aggregation.

#[cfg(test)]
mod tests {
    use crate::extrato::extrato_service::{
        agrupar_por_mes, resumo_mensal, resumo_por_categoria, status_projetado,
    };
    use crate::lancamentos::{Lancamento, StatusLancamento, TipoLancamento};
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn lancamento(
        id: &str,
        tipo: TipoLancamento,
        valor: Decimal,
        vencimento: NaiveDate,
        status: StatusLancamento,
    ) -> Lancamento {
        let now = Utc::now().naive_utc();
        Lancamento {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            tipo,
            categoria_id: None,
            despesa_id: None,
            fonte_renda_id: None,
            conta_id: None,
            descricao: format!("lancamento {}", id),
            valor,
            valor_pago: if status == StatusLancamento::Pago {
                Some(valor)
            } else {
                None
            },
            data_vencimento: vencimento,
            data_pagamento: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    fn dia(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn groups_by_month_and_totals_match_the_set() {
        let hoje = dia(2026, 8, 15);
        let entradas = vec![
            lancamento(
                "a",
                TipoLancamento::Despesa,
                dec!(100),
                dia(2026, 7, 10),
                StatusLancamento::Pago,
            ),
            lancamento(
                "b",
                TipoLancamento::Despesa,
                dec!(50),
                dia(2026, 7, 20),
                StatusLancamento::Pendente,
            ),
            lancamento(
                "c",
                TipoLancamento::Despesa,
                dec!(30),
                dia(2026, 8, 5),
                StatusLancamento::Pendente,
            ),
        ];

        let grupos = agrupar_por_mes(&entradas, hoje);
        assert_eq!(grupos.len(), 2);

        let julho = &grupos[0];
        assert_eq!((julho.ano, julho.mes), (2026, 7));
        assert_eq!(julho.total, dec!(150));
        assert_eq!(julho.total_pago, dec!(100));
        assert_eq!(julho.total_pendente, dec!(50));
        assert_eq!(
            julho.total,
            julho.lancamentos.iter().map(|e| e.lancamento.valor).sum()
        );

        let agosto = &grupos[1];
        assert_eq!((agosto.ano, agosto.mes), (2026, 8));
        assert_eq!(agosto.total, dec!(30));
    }

    #[test]
    fn overdue_pending_projects_as_atrasado() {
        let hoje = dia(2026, 8, 15);
        let vencido = lancamento(
            "a",
            TipoLancamento::Despesa,
            dec!(10),
            dia(2026, 8, 10),
            StatusLancamento::Pendente,
        );
        assert_eq!(status_projetado(&vencido, hoje), StatusLancamento::Atrasado);
        // Stored status is untouched.
        assert_eq!(vencido.status, StatusLancamento::Pendente);

        let pago = lancamento(
            "b",
            TipoLancamento::Despesa,
            dec!(10),
            dia(2026, 8, 10),
            StatusLancamento::Pago,
        );
        assert_eq!(status_projetado(&pago, hoje), StatusLancamento::Pago);

        let futuro = lancamento(
            "c",
            TipoLancamento::Despesa,
            dec!(10),
            dia(2026, 8, 20),
            StatusLancamento::Pendente,
        );
        assert_eq!(status_projetado(&futuro, hoje), StatusLancamento::Pendente);
    }

    #[test]
    fn dias_ate_vencimento_is_signed() {
        let hoje = dia(2026, 8, 15);
        let entradas = vec![
            lancamento(
                "passado",
                TipoLancamento::Despesa,
                dec!(10),
                dia(2026, 8, 10),
                StatusLancamento::Pendente,
            ),
            lancamento(
                "futuro",
                TipoLancamento::Despesa,
                dec!(10),
                dia(2026, 8, 20),
                StatusLancamento::Pendente,
            ),
        ];
        let grupos = agrupar_por_mes(&entradas, hoje);
        let agosto = &grupos[0];
        assert_eq!(agosto.lancamentos[0].dias_ate_vencimento, -5);
        assert_eq!(agosto.lancamentos[1].dias_ate_vencimento, 5);
    }

    #[test]
    fn resumo_por_categoria_sums_per_group() {
        let mut a = lancamento(
            "a",
            TipoLancamento::Despesa,
            dec!(100),
            dia(2026, 8, 1),
            StatusLancamento::Pago,
        );
        a.categoria_id = Some("cat-1".to_string());
        let mut b = lancamento(
            "b",
            TipoLancamento::Despesa,
            dec!(40),
            dia(2026, 8, 2),
            StatusLancamento::Pendente,
        );
        b.categoria_id = Some("cat-1".to_string());
        let sem_categoria = lancamento(
            "c",
            TipoLancamento::Despesa,
            dec!(7),
            dia(2026, 8, 3),
            StatusLancamento::Pendente,
        );

        let resumo = resumo_por_categoria(&[a, b, sem_categoria]);
        assert_eq!(resumo.len(), 2);

        let cat1 = resumo
            .iter()
            .find(|r| r.categoria_id.as_deref() == Some("cat-1"))
            .unwrap();
        assert_eq!(cat1.total, dec!(140));
        assert_eq!(cat1.total_pago, dec!(100));
        assert_eq!(cat1.quantidade, 2);

        let sem = resumo.iter().find(|r| r.categoria_id.is_none()).unwrap();
        assert_eq!(sem.total, dec!(7));
    }

    #[test]
    fn resumo_mensal_covers_the_window_oldest_first() {
        let hoje = dia(2026, 2, 10);
        let entradas = vec![
            lancamento(
                "salario",
                TipoLancamento::Receita,
                dec!(5000),
                dia(2026, 1, 5),
                StatusLancamento::Pago,
            ),
            lancamento(
                "aluguel",
                TipoLancamento::Despesa,
                dec!(1500),
                dia(2026, 1, 10),
                StatusLancamento::Pago,
            ),
            lancamento(
                "mercado",
                TipoLancamento::Despesa,
                dec!(600),
                dia(2026, 2, 8),
                StatusLancamento::Pendente,
            ),
        ];

        // Window crosses the year boundary.
        let resumo = resumo_mensal(&entradas, 3, hoje);
        assert_eq!(resumo.len(), 3);
        assert_eq!((resumo[0].ano, resumo[0].mes), (2025, 12));
        assert_eq!(resumo[0].total_receitas, dec!(0));
        assert_eq!((resumo[1].ano, resumo[1].mes), (2026, 1));
        assert_eq!(resumo[1].saldo, dec!(3500));
        assert_eq!((resumo[2].ano, resumo[2].mes), (2026, 2));
        assert_eq!(resumo[2].total_despesas, dec!(600));
    }
}
