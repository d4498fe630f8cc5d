use serde::{Deserialize, Serialize};

/// Envelope wrapping every audit service response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    pub data: T,
}
