//! Create User Request Validator
//!
//! Pure and deterministic. Order: document, name, email, then the address
//! sub-fields when an address is present.

use kernel::error::app_error::AppError;
use kernel::validation::{Violations, check_document, check_email, check_name, is_blank};

use crate::application::create_user::{AddressInput, CreateUserInput};

pub const STREET_MAX_LENGTH: usize = 200;
pub const NUMBER_MAX_LENGTH: usize = 10;
pub const NEIGHBORHOOD_MAX_LENGTH: usize = 100;
pub const CITY_MAX_LENGTH: usize = 100;
pub const STATE_LENGTH: usize = 2;
pub const ZIPCODE_LENGTH: usize = 8;
pub const COMPLEMENT_MAX_LENGTH: usize = 200;

/// Address validation codes
pub mod codes {
    pub const EMPTY_STREET: &str = "EMPTY_STREET";
    pub const STREET_MAX_LENGTH: &str = "STREET_MAX_LENGTH";
    pub const EMPTY_NUMBER: &str = "EMPTY_NUMBER";
    pub const NUMBER_MAX_LENGTH: &str = "NUMBER_MAX_LENGTH";
    pub const EMPTY_NEIGHBORHOOD: &str = "EMPTY_NEIGHBORHOOD";
    pub const NEIGHBORHOOD_MAX_LENGTH: &str = "NEIGHBORHOOD_MAX_LENGTH";
    pub const EMPTY_CITY: &str = "EMPTY_CITY";
    pub const CITY_MAX_LENGTH: &str = "CITY_MAX_LENGTH";
    pub const EMPTY_STATE: &str = "EMPTY_STATE";
    pub const STATE_LENGTH: &str = "STATE_LENGTH";
    pub const EMPTY_ZIPCODE: &str = "EMPTY_ZIPCODE";
    pub const ZIPCODE_LENGTH: &str = "ZIPCODE_LENGTH";
    pub const COMPLEMENT_MAX_LENGTH: &str = "COMPLEMENT_MAX_LENGTH";
}

/// Every rule violation of the request, in declaration order
pub fn validate(input: &CreateUserInput) -> Vec<AppError> {
    let mut violations = Violations::new();
    check_document(&mut violations, &input.document);
    check_name(&mut violations, &input.name);
    check_email(&mut violations, &input.email);

    if let Some(address) = &input.address {
        check_address(&mut violations, address);
    }

    violations.into_errors()
}

fn check_address(violations: &mut Violations, address: &AddressInput) {
    violations
        .require(&address.street, codes::EMPTY_STREET, "The street cannot be empty.")
        .max_length(
            &address.street,
            STREET_MAX_LENGTH,
            codes::STREET_MAX_LENGTH,
            "The street must have at most 200 characters.",
        )
        .require(&address.number, codes::EMPTY_NUMBER, "The number cannot be empty.")
        .max_length(
            &address.number,
            NUMBER_MAX_LENGTH,
            codes::NUMBER_MAX_LENGTH,
            "The number must have at most 10 characters.",
        )
        .require(
            &address.neighborhood,
            codes::EMPTY_NEIGHBORHOOD,
            "The neighborhood cannot be empty.",
        )
        .max_length(
            &address.neighborhood,
            NEIGHBORHOOD_MAX_LENGTH,
            codes::NEIGHBORHOOD_MAX_LENGTH,
            "The neighborhood must have at most 100 characters.",
        )
        .require(&address.city, codes::EMPTY_CITY, "The city cannot be empty.")
        .max_length(
            &address.city,
            CITY_MAX_LENGTH,
            codes::CITY_MAX_LENGTH,
            "The city must have at most 100 characters.",
        )
        .require(&address.state, codes::EMPTY_STATE, "The state cannot be empty.")
        .exact_length(
            &address.state,
            STATE_LENGTH,
            codes::STATE_LENGTH,
            "The state must have exactly 2 characters.",
        )
        .require(&address.zip_code, codes::EMPTY_ZIPCODE, "The zip code cannot be empty.")
        .exact_length(
            &address.zip_code,
            ZIPCODE_LENGTH,
            codes::ZIPCODE_LENGTH,
            "The zip code must have exactly 8 characters.",
        );

    if let Some(complement) = address.complement.as_deref().filter(|c| !is_blank(c)) {
        violations.max_length(
            complement,
            COMPLEMENT_MAX_LENGTH,
            codes::COMPLEMENT_MAX_LENGTH,
            "The complement must have at most 200 characters.",
        );
    }
}
