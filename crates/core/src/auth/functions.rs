use super::{AuthError, Principal, TokenClaims};

/// Extracts the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively.
pub fn parse_bearer_token(header_value: &str) -> Result<&str, AuthError> {
    let (scheme, token) = header_value
        .trim_start()
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedHeader);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

/// Splits a space separated OAuth `scope` claim.
pub fn split_scopes(scope: &str) -> Vec<String> {
    scope.split_whitespace().map(str::to_string).collect()
}

/// Builds the principal for verified claims.
///
/// The user id is the email when present, otherwise the subject.
pub fn principal_from_claims(claims: &TokenClaims) -> Result<Principal, AuthError> {
    let user_id = match claims.email.as_deref() {
        Some(email) if !email.is_empty() => email.to_string(),
        _ if !claims.subject.is_empty() => claims.subject.clone(),
        _ => return Err(AuthError::MissingClaim("sub".to_string())),
    };

    Ok(Principal {
        user_id,
        email: claims.email.clone(),
        client_id: claims.client_id.clone(),
    })
}
