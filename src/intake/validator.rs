use crate::intake::types::{RejectReason, UploadCandidate};

/// Size ceiling for a candidate selfie: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Declared types we pretend to know how to anime-ify.
pub const ALLOWED_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Checks the two intake policies. Size is checked first, so an oversized
/// file is rejected for its size no matter what type it declares.
pub fn validate(candidate: &UploadCandidate) -> Result<(), RejectReason> {
    if candidate.size > MAX_FILE_SIZE {
        return Err(RejectReason::TooLarge);
    }
    if !ALLOWED_TYPES.contains(&candidate.mime_type.as_str()) {
        return Err(RejectReason::UnsupportedType);
    }
    Ok(())
}
