//! Application Configuration
//!
//! Configuration for the users application layer.

use std::env;

/// Default bucket for uploaded profile images
pub const DEFAULT_PROFILE_IMAGE_BUCKET: &str = "rentifyx-profile-images";

/// Environment variable overriding the bucket
pub const PROFILE_IMAGE_BUCKET_ENV: &str = "PROFILE_IMAGE_BUCKET";

/// Users application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersConfig {
    /// Bucket that receives profile images
    pub profile_image_bucket: String,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            profile_image_bucket: DEFAULT_PROFILE_IMAGE_BUCKET.to_string(),
        }
    }
}

impl UsersConfig {
    /// Read overrides from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            profile_image_bucket: lookup(PROFILE_IMAGE_BUCKET_ENV)
                .map(|bucket| bucket.trim().to_string())
                .filter(|bucket| !bucket.is_empty())
                .unwrap_or(defaults.profile_image_bucket),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bucket() {
        assert_eq!(
            UsersConfig::default().profile_image_bucket,
            "rentifyx-profile-images"
        );
    }

    #[test]
    fn test_lookup_override() {
        let config = UsersConfig::from_lookup(|key| {
            (key == PROFILE_IMAGE_BUCKET_ENV).then(|| " staging-images ".to_string())
        });
        assert_eq!(config.profile_image_bucket, "staging-images");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = UsersConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, UsersConfig::default());
    }
}
