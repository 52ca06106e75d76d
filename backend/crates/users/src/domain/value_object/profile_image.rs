//! Profile Image Value Object
//!
//! Reference to an uploaded profile picture. Objects are partitioned by
//! upload date: `year=YYYY/month=MM/day=DD/key=<uuid><ext>`.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Profile image construction failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileImageError {
    #[error("The profile image file name cannot be empty.")]
    EmptyFileName,

    #[error("The profile image bucket name cannot be empty.")]
    EmptyBucketName,
}

impl ProfileImageError {
    pub fn code(&self) -> &'static str {
        match self {
            ProfileImageError::EmptyFileName => "EMPTY_PROFILE_IMAGE_FILE_NAME",
            ProfileImageError::EmptyBucketName => "EMPTY_PROFILE_IMAGE_BUCKET",
        }
    }
}

/// Profile image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImage {
    year: String,
    month: String,
    day: String,
    key: String,
    bucket_path: String,
    uploaded_at: DateTime<Utc>,
}

impl ProfileImage {
    /// Create a reference for a file uploaded now
    ///
    /// Key uniqueness relies on UUID v4; keys are not checked against the bucket.
    pub fn create(file_name: &str, bucket_name: &str) -> Result<Self, ProfileImageError> {
        Self::create_at(file_name, bucket_name, Utc::now())
    }

    /// Create a reference with an explicit upload instant
    pub fn create_at(
        file_name: &str,
        bucket_name: &str,
        uploaded_at: DateTime<Utc>,
    ) -> Result<Self, ProfileImageError> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(ProfileImageError::EmptyFileName);
        }
        let bucket_name = bucket_name.trim();
        if bucket_name.is_empty() {
            return Err(ProfileImageError::EmptyBucketName);
        }

        let key = format!("{}{}", Uuid::new_v4(), extension_of(file_name));
        let year = uploaded_at.year().to_string();
        let month = format!("{:02}", uploaded_at.month());
        let day = format!("{:02}", uploaded_at.day());

        let full_path = partition_path(&year, &month, &day, &key);
        let bucket_path = format!("s3://{bucket_name}/{full_path}");

        Ok(Self {
            year,
            month,
            day,
            key,
            bucket_path,
            uploaded_at,
        })
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    /// Object key: UUID plus the original extension
    pub fn key(&self) -> &str {
        &self.key
    }

    /// `s3://{bucket}/{full_path}`
    pub fn bucket_path(&self) -> &str {
        &self.bucket_path
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    /// Object path inside the bucket
    pub fn full_path(&self) -> String {
        partition_path(&self.year, &self.month, &self.day, &self.key)
    }
}

fn partition_path(year: &str, month: &str, day: &str, key: &str) -> String {
    format!("year={year}/month={month}/day={day}/key={key}")
}

/// Extension including the dot, or empty
fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
