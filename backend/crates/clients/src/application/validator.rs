//! Create Client Request Validator
//!
//! Pure and deterministic: the same input always yields the same ordered
//! list (document, then name, then email).

use kernel::error::app_error::AppError;
use kernel::validation::{Violations, check_document, check_email, check_name};

use crate::application::create_client::CreateClientInput;

/// Every rule violation of the request, in declaration order
pub fn validate(input: &CreateClientInput) -> Vec<AppError> {
    let mut violations = Violations::new();
    check_document(&mut violations, &input.document);
    check_name(&mut violations, &input.name);
    check_email(&mut violations, &input.email);
    violations.into_errors()
}
