//! Tests for lancamento domain models.

#[cfg(test)]
mod tests {
    use crate::lancamentos::{
        NewLancamento, PagamentoLancamento, StatusLancamento, TipoLancamento,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn novo_lancamento() -> NewLancamento {
        NewLancamento {
            id: None,
            tipo: TipoLancamento::Despesa,
            categoria_id: None,
            despesa_id: None,
            fonte_renda_id: None,
            conta_id: None,
            descricao: "Conta de luz".to_string(),
            valor: dec!(210.35),
            data_vencimento: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            status: StatusLancamento::Pendente,
        }
    }

    #[test]
    fn status_serialization() {
        assert_eq!(
            serde_json::to_string(&StatusLancamento::Pendente).unwrap(),
            "\"PENDENTE\""
        );
        assert_eq!(
            serde_json::to_string(&StatusLancamento::Pago).unwrap(),
            "\"PAGO\""
        );
        assert_eq!(
            serde_json::to_string(&StatusLancamento::Atrasado).unwrap(),
            "\"ATRASADO\""
        );
    }

    #[test]
    fn status_parse() {
        assert_eq!(
            StatusLancamento::parse("PAGO"),
            Some(StatusLancamento::Pago)
        );
        assert_eq!(StatusLancamento::parse("pago"), None);
    }

    #[test]
    fn valid_lancamento_passes() {
        assert!(novo_lancamento().validate().is_ok());
    }

    #[test]
    fn rejects_blank_descricao() {
        let mut l = novo_lancamento();
        l.descricao = "  ".to_string();
        assert!(l.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_valor() {
        let mut l = novo_lancamento();
        l.valor = dec!(0);
        assert!(l.validate().is_err());
    }

    #[test]
    fn pagamento_rejects_non_positive_valor_pago() {
        let pagamento = PagamentoLancamento {
            valor_pago: Some(dec!(-1)),
            data_pagamento: None,
        };
        assert!(pagamento.validate().is_err());
    }

    #[test]
    fn new_lancamento_status_defaults_to_pendente() {
        let json = r#"{
            "tipo": "DESPESA",
            "descricao": "Internet",
            "valor": 99.90,
            "dataVencimento": "2026-08-15"
        }"#;
        let l: NewLancamento = serde_json::from_str(json).unwrap();
        assert_eq!(l.status, StatusLancamento::Pendente);
    }
}
