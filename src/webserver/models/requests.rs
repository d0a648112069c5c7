/// API request type definitions
///
/// Request bodies for the REST endpoints

use serde::{ Deserialize, Serialize };

use crate::tokens::TokenRequest;

/// Body of `POST /tokens/info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokensBatchRequest {
    pub tokens: Vec<TokenRequest>,
}
