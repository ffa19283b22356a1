use crate::error::{SteriflowError, SteriflowResult};
use regex::Regex;
use validator::{Validate, ValidationErrors};

pub fn validate_model<T: Validate>(model: &T) -> SteriflowResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(SteriflowError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match &error.code {
                std::borrow::Cow::Borrowed("length") => {
                    format!("Length validation failed for field '{}'", field)
                }
                std::borrow::Cow::Borrowed("range") => {
                    format!("Value out of range for field '{}'", field)
                }
                std::borrow::Cow::Borrowed("required") => {
                    format!("Field '{}' is required", field)
                }
                _ => format!("Validation failed for field '{}': {}", field, error.code),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

/// Validate an assembly code against the catalog numbering scheme
/// (dot-separated numeric segments, e.g. `706.58` or `720.215.001`).
pub fn validate_assembly_code(code: &str) -> SteriflowResult<()> {
    let code_regex = Regex::new(r"^\d+(\.\d+)+$").unwrap();

    if !code_regex.is_match(code) {
        return Err(SteriflowError::validation(
            "assembly_code",
            format!("Invalid assembly code format: {}", code),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_assembly_code_valid() {
        assert!(validate_assembly_code("706.58").is_ok());
        assert!(validate_assembly_code("720.215.001").is_ok());
        assert!(validate_assembly_code("702.4").is_ok());
    }

    #[test]
    fn test_validate_assembly_code_invalid() {
        assert!(validate_assembly_code("706").is_err());
        assert!(validate_assembly_code("706.").is_err());
        assert!(validate_assembly_code("abc.de").is_err());
        assert!(validate_assembly_code("").is_err());
    }

    #[test]
    fn test_validate_model_reports_field() {
        use steriflow_models::AccessoryLine;

        let line = AccessoryLine::new("bogus", 0);
        let err = validate_model(&line).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
