use subway_shared::protocol::{LoginRequest, TokenResponse};

use super::{ApiClient, ApiError, HttpClient};

/// Exchanges credentials for an access token.
pub async fn request_token<C: HttpClient>(
    api: &ApiClient<C>,
    email: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    let req = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    api.send(&req).await
}
