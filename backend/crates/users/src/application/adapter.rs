//! User Entity Adapter
//!
//! Maps a validated request into the domain entity.

use kernel::document::Document;

use crate::application::config::UsersConfig;
use crate::application::create_user::{AddressInput, CreateUserInput};
use crate::domain::entity::User;
use crate::domain::value_object::{address::Address, profile_image::ProfileImage};
use crate::error::{UsersError, UsersResult};

/// Trim the request fields and build the entity
///
/// A missing address is rejected here; the address builder reports its
/// first broken invariant. A blank or missing file name means no picture.
pub fn from_input_to_entity(input: CreateUserInput, config: &UsersConfig) -> UsersResult<User> {
    let document = Document::parse(&input.document)?;
    let address = to_address(input.address.ok_or(UsersError::MissingAddress)?)?;

    let profile_image = match input
        .profile_image_file_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
    {
        Some(file_name) => Some(ProfileImage::create(
            file_name,
            &config.profile_image_bucket,
        )?),
        None => None,
    };

    Ok(User::new(
        document,
        input.name.trim(),
        input.email.trim(),
        address,
        profile_image,
    ))
}

fn to_address(input: AddressInput) -> UsersResult<Address> {
    let mut builder = Address::builder()
        .street(input.street)
        .number(input.number)
        .neighborhood(input.neighborhood)
        .city(input.city)
        .state(input.state)
        .zip_code(input.zip_code);

    if let Some(complement) = input.complement {
        builder = builder.complement(complement);
    }

    Ok(builder.build()?)
}
