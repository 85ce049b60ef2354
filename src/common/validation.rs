use rust_decimal::Decimal;
use validator::ValidationError;

// ---
// Validações customizadas compartilhadas pelos modelos
// ---
pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// Flags "S"/"N" gravadas como texto (ativo, disponível).
pub fn validate_flag(val: &str) -> Result<(), ValidationError> {
    if val != "S" && val != "N" {
        let mut err = ValidationError::new("flag");
        err.message = Some("O valor deve ser 'S' ou 'N'.".into());
        return Err(err);
    }
    Ok(())
}
