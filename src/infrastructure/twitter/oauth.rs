//! OAuth 1.0a request signing (RFC 5849, HMAC-SHA1).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use uuid::Uuid;

use super::error::TwitterError;
use crate::domain::models::Credentials;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Percent-encode per RFC 3986: everything except `A-Za-z0-9-._~`.
pub fn percent_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Build the signature base string: `METHOD&url&sorted-params`.
pub fn signature_base_string(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&param_string)
    )
}

/// Signing key: `consumer_secret&token_secret`, both percent-encoded.
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!("{}&{}", percent_encode(consumer_secret), percent_encode(token_secret))
}

/// Base64 HMAC-SHA1 of `base_string` under `key`.
pub fn sign(base_string: &str, key: &str) -> Result<String, TwitterError> {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| TwitterError::SigningFailed(e.to_string()))?;
    mac.update(base_string.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Produces `Authorization: OAuth ...` headers for a fixed credential set.
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: Credentials,
}

impl OAuthSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Header value for a request, with a fresh nonce and the current time.
    ///
    /// `params` are the request's form or query parameters; they are signed
    /// but not included in the header.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, TwitterError> {
        let nonce = Uuid::new_v4().simple().to_string();
        self.authorization_header_at(method, url, params, &nonce, Utc::now().timestamp())
    }

    pub fn authorization_header_at(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
        nonce: &str,
        timestamp: i64,
    ) -> Result<String, TwitterError> {
        let timestamp = timestamp.to_string();
        let mut oauth_params: Vec<(&str, &str)> = vec![
            ("oauth_consumer_key", self.credentials.client_token.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", self.credentials.access_token.as_str()),
            ("oauth_version", OAUTH_VERSION),
        ];

        let mut signed = oauth_params.clone();
        signed.extend_from_slice(params);
        let base_string = signature_base_string(method, url, &signed);
        let key = signing_key(&self.credentials.client_secret, &self.credentials.access_secret);
        let signature = sign(&base_string, &key)?;

        oauth_params.push(("oauth_signature", signature.as_str()));
        oauth_params.sort_unstable();

        let fields = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("OAuth {fields}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from Twitter's "Creating a signature" guide.
    const URL: &str = "https://api.twitter.com/1.1/statuses/update.json";
    const STATUS: &str = "Hello Ladies + Gentlemen, a signed OAuth request!";
    const NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
    const TIMESTAMP: i64 = 1_318_622_958;

    fn example_credentials() -> Credentials {
        Credentials {
            client_token: "xvz1evFS4wEEPTGEFPHBog".to_string(),
            client_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string(),
            access_token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
            access_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string(),
        }
    }

    const EXPECTED_BASE: &str = "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521";

    #[test]
    fn test_percent_encode_unreserved_set() {
        assert_eq!(percent_encode("Az09-._~"), "Az09-._~");
        assert_eq!(percent_encode("a b+c!"), "a%20b%2Bc%21");
        assert_eq!(percent_encode("あ"), "%E3%81%82");
    }

    #[test]
    fn test_signature_base_string() {
        let params = [
            ("status", STATUS),
            ("include_entities", "true"),
            ("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog"),
            ("oauth_nonce", NONCE),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "1318622958"),
            ("oauth_token", "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb"),
            ("oauth_version", "1.0"),
        ];
        assert_eq!(signature_base_string("post", URL, &params), EXPECTED_BASE);
    }

    #[test]
    fn test_sign_matches_reference() {
        let creds = example_credentials();
        let key = signing_key(&creds.client_secret, &creds.access_secret);
        assert_eq!(
            key,
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw&LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE"
        );
        assert_eq!(sign(EXPECTED_BASE, &key).unwrap(), "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
    }

    #[test]
    fn test_authorization_header_fields() {
        let signer = OAuthSigner::new(example_credentials());
        let header = signer
            .authorization_header_at(
                "POST",
                URL,
                &[("status", STATUS), ("include_entities", "true")],
                NONCE,
                TIMESTAMP,
            )
            .unwrap();

        assert_eq!(
            header,
            "OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", \
             oauth_nonce=\"kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg\", \
             oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\", \
             oauth_signature_method=\"HMAC-SHA1\", \
             oauth_timestamp=\"1318622958\", \
             oauth_token=\"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\", \
             oauth_version=\"1.0\""
        );
        assert!(!header.contains("status"));
    }

    #[test]
    fn test_fresh_nonce_per_header() {
        let signer = OAuthSigner::new(example_credentials());
        let a = signer.authorization_header("POST", URL, &[("status", "x")]).unwrap();
        let b = signer.authorization_header("POST", URL, &[("status", "x")]).unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("OAuth oauth_consumer_key="));
    }
}
