use crate::GeneratedDescriptionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SaveDescriptionResponse {
    pub success: bool,
    pub description: GeneratedDescriptionDto,
    pub message: String,
}
