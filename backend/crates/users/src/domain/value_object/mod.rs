//! Value Object Module

pub mod address;
pub mod profile_image;

pub use address::{Address, AddressBuilder, AddressError};
pub use profile_image::{ProfileImage, ProfileImageError};
