//! Tests for despesa domain models.

#[cfg(test)]
mod tests {
    use crate::despesas::NewDespesa;
    use rust_decimal_macros::dec;

    fn nova_despesa() -> NewDespesa {
        NewDespesa {
            id: None,
            categoria_id: "cat-1".to_string(),
            nome: "Aluguel".to_string(),
            valor_estimado: dec!(1500.00),
            dia_vencimento: 5,
            mensal: true,
            ativo: true,
        }
    }

    #[test]
    fn valid_despesa_passes() {
        assert!(nova_despesa().validate().is_ok());
    }

    #[test]
    fn rejects_blank_nome() {
        let mut d = nova_despesa();
        d.nome = "".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn rejects_missing_categoria() {
        let mut d = nova_despesa();
        d.categoria_id = " ".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_valor() {
        let mut d = nova_despesa();
        d.valor_estimado = dec!(0);
        assert!(d.validate().is_err());
        d.valor_estimado = dec!(-10.50);
        assert!(d.validate().is_err());
    }

    #[test]
    fn rejects_dia_out_of_range() {
        let mut d = nova_despesa();
        d.dia_vencimento = 0;
        assert!(d.validate().is_err());
        d.dia_vencimento = 32;
        assert!(d.validate().is_err());
        d.dia_vencimento = 31;
        assert!(d.validate().is_ok());
    }
}
