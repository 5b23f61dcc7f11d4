//! Request and response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use arthub_core::error::AppError;
use arthub_core::result::AppResult;

/// Run validator rules and collapse violations into one 400-class error,
/// messages joined the way the original UI shows them.
pub fn validate<T: Validate>(dto: &T) -> AppResult<()> {
    dto.validate().map_err(|errors| {
        let mut messages: Vec<String> = Vec::new();
        for (_, field_errors) in errors.field_errors() {
            for error in field_errors {
                messages.push(
                    error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Geçersiz değer".to_string()),
                );
            }
        }
        messages.sort();
        AppError::validation(messages.join(". "))
    })
}
