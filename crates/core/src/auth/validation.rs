use super::{AuthError, AuthRequirements, TokenClaims};

/// Checks verified claims against a method's requirements.
///
/// - at least one audience of the token must be allowed
/// - the token's client id (`azp`) must be allowed
/// - the token must grant at least one of the required scopes
///
/// An empty requirement list skips that check.
///
/// # Examples
///
/// ```
/// use ruffnote_core::auth::{check_requirements, AuthRequirements, TokenClaims};
///
/// let requirements = AuthRequirements::new(vec!["email".into()], vec![], vec![]);
/// let claims = TokenClaims {
///     subject: "1".into(),
///     scopes: vec!["email".into()],
///     ..Default::default()
/// };
/// assert!(check_requirements(&claims, &requirements).is_ok());
/// ```
pub fn check_requirements(
    claims: &TokenClaims,
    requirements: &AuthRequirements,
) -> Result<(), AuthError> {
    if !requirements.audiences.is_empty()
        && !claims
            .audiences
            .iter()
            .any(|aud| requirements.audiences.contains(aud))
    {
        return Err(AuthError::AudienceNotAllowed(claims.audiences.join(",")));
    }

    if !requirements.client_ids.is_empty() {
        match claims.client_id.as_deref() {
            Some(client_id) if requirements.client_ids.iter().any(|c| c == client_id) => {}
            Some(client_id) => return Err(AuthError::ClientNotAllowed(client_id.to_string())),
            None => return Err(AuthError::MissingClaim("azp".to_string())),
        }
    }

    if !requirements.scopes.is_empty()
        && !claims
            .scopes
            .iter()
            .any(|scope| requirements.scopes.contains(scope))
    {
        return Err(AuthError::ScopeNotGranted);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirements() -> AuthRequirements {
        AuthRequirements::new(
            vec!["email".to_string()],
            vec!["ruffnote".to_string()],
            vec!["web".to_string(), "explorer".to_string()],
        )
    }

    fn claims() -> TokenClaims {
        TokenClaims {
            subject: "42".to_string(),
            email: Some("u1@example.com".to_string()),
            audiences: vec!["ruffnote".to_string()],
            client_id: Some("web".to_string()),
            scopes: vec!["openid".to_string(), "email".to_string()],
        }
    }

    #[test]
    fn accepts_matching_claims() {
        assert_eq!(check_requirements(&claims(), &requirements()), Ok(()));
    }

    #[test]
    fn empty_requirements_accept_anything() {
        let bare = TokenClaims {
            subject: "42".to_string(),
            ..Default::default()
        };
        assert_eq!(check_requirements(&bare, &AuthRequirements::default()), Ok(()));
    }

    #[test]
    fn rejects_foreign_audience() {
        let mut claims = claims();
        claims.audiences = vec!["other".to_string()];
        assert_eq!(
            check_requirements(&claims, &requirements()),
            Err(AuthError::AudienceNotAllowed("other".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_client() {
        let mut claims = claims();
        claims.client_id = Some("cli".to_string());
        assert_eq!(
            check_requirements(&claims, &requirements()),
            Err(AuthError::ClientNotAllowed("cli".to_string()))
        );
    }

    #[test]
    fn requires_client_claim_when_clients_are_restricted() {
        let mut claims = claims();
        claims.client_id = None;
        assert_eq!(
            check_requirements(&claims, &requirements()),
            Err(AuthError::MissingClaim("azp".to_string()))
        );
    }

    #[test]
    fn rejects_missing_scope() {
        let mut claims = claims();
        claims.scopes = vec!["profile".to_string()];
        assert_eq!(
            check_requirements(&claims, &requirements()),
            Err(AuthError::ScopeNotGranted)
        );
    }
}
