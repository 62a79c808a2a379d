use crate::GeneratedDescriptionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GeneratedDescriptionResponse {
    pub description: GeneratedDescriptionDto,
}
