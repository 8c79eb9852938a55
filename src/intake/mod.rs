mod types;
mod validator;

pub use types::{RejectReason, UploadCandidate};
pub use validator::{validate, MAX_FILE_SIZE};
