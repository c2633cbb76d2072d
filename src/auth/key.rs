//! RSA private key loading

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use tracing::debug;

use crate::{Error, Result};

/// RSA private key usable for RS256 signing.
///
/// Construction parses the PEM document (PKCS#1 `RSA PRIVATE KEY` or PKCS#8
/// `PRIVATE KEY`) and signs a throwaway token, so a value of this type is known
/// to carry a complete key including its CRT parameters.
#[derive(Clone)]
pub struct RsaSigningKey {
    encoding_key: EncodingKey,
}

impl RsaSigningKey {
    /// Load a PEM-encoded RSA private key from a file.
    ///
    /// Fails with [`Error::FileNotFound`] when the path is not an existing
    /// file and with [`Error::InvalidKeyData`] when the content is not a
    /// usable RSA private key.
    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let pem = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;

        let key = Self::from_pem(&pem)?;
        debug!(path = %path.display(), "Loaded RSA private key");
        Ok(key)
    }

    /// Parse a PEM-encoded RSA private key
    pub fn from_pem(pem: &[u8]) -> Result<Self> {
        let encoding_key =
            EncodingKey::from_rsa_pem(pem).map_err(|e| Error::InvalidKeyData(e.to_string()))?;

        // The PEM layer only classifies the document; the key material itself
        // is parsed by the signer.
        jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &serde_json::json!({ "validate": true }),
            &encoding_key,
        )
        .map_err(|e| Error::InvalidKeyData(e.to_string()))?;

        Ok(Self { encoding_key })
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }
}

impl fmt::Debug for RsaSigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSigningKey").finish_non_exhaustive()
    }
}
