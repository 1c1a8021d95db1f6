use axum::{extract::Request, middleware::Next, response::Response};

use crate::auth::CallerIdentity;
use crate::error::AppError;

/// Reads the caller identity set by the upstream authenticator and stores it
/// in the request extensions so the GraphQL handler can pass it to resolvers.
pub async fn identity_middleware(mut request: Request, next: Next) -> Result<Response, AppError> {
    if let Some(identity) =
        CallerIdentity::from_headers(request.headers()).map_err(AppError::BadRequest)?
    {
        request.extensions_mut().insert::<CallerIdentity>(identity);
    }

    Ok(next.run(request).await)
}
