use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Identidad del vendedor autenticado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VendorUser {
    pub id: String,
}

/// Claims que nos interesan del payload JWT
#[derive(Deserialize, Debug)]
struct TokenClaims {
    #[serde(rename = "_id", default)]
    underscore_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    vendor_id: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    // Algunos emisores dejan el padding '='
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

impl VendorUser {
    /// Extraer la identidad del vendedor del payload del token
    pub fn from_token(token: &str) -> Option<Self> {
        let claims = decode_claims(token)?;
        claims
            .underscore_id
            .or(claims.id)
            .or(claims.vendor_id)
            .filter(|id| !id.is_empty())
            .map(|id| VendorUser { id })
    }
}

/// ¿El token ha caducado en el instante `now` (segundos Unix)?
/// Un token sin `exp` o que no es JWT no caduca en el cliente.
pub fn token_expired_at(token: &str, now: i64) -> bool {
    decode_claims(token)
        .and_then(|claims| claims.exp)
        .map(|exp| exp <= now)
        .unwrap_or(false)
}

/// Sesión del vendedor: token persistido + identidad derivada
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Session {
    pub user: Option<VendorUser>,
    pub token: Option<String>,
}

impl Session {
    pub fn from_token(token: String) -> Self {
        Self {
            user: VendorUser::from_token(&token),
            token: Some(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn vendor_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    /// Credenciales para peticiones autenticadas (vendor_id, token)
    pub fn credentials(&self) -> Result<(String, String), String> {
        let token = self.token.clone().ok_or("Not logged in")?;
        let vendor_id = self
            .vendor_id()
            .map(str::to_string)
            .ok_or("Session has no vendor identity")?;
        Ok((vendor_id, token))
    }
}

#[cfg(test)]
pub(crate) fn fake_token(claims: &str) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_id_from_claims() {
        let token = fake_token(r#"{"_id":"65f0c1","iat":1}"#);
        assert_eq!(VendorUser::from_token(&token), Some(VendorUser { id: "65f0c1".into() }));

        let token = fake_token(r#"{"id":"v-2"}"#);
        assert_eq!(VendorUser::from_token(&token).map(|u| u.id), Some("v-2".to_string()));
    }

    #[test]
    fn test_opaque_token_has_no_identity() {
        let session = Session::from_token("abc".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.vendor_id(), None);
        assert!(session.credentials().is_err());
    }

    #[test]
    fn test_expiry() {
        let token = fake_token(r#"{"_id":"v","exp":100}"#);
        assert!(token_expired_at(&token, 100));
        assert!(!token_expired_at(&token, 99));
        assert!(!token_expired_at("abc", 1_000_000));
    }
}
