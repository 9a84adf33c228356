use base64::{prelude::BASE64_STANDARD, Engine as _};
use openssl::{
    error::ErrorStack,
    hash::{hash, MessageDigest},
    pkey::PKey,
    sign::Signer,
};

/// Content digest sent in the Content-MD5 header: MD5 of the body, standard
/// base64, uppercased.
///
/// Only meaningful for non-empty bodies; requests without a body carry no
/// digest at all.
pub(crate) fn content_digest(data: &[u8]) -> Result<String, ErrorStack> {
    let digest = hash(MessageDigest::md5(), data)?;
    Ok(BASE64_STANDARD.encode(digest).to_uppercase())
}

/// HMAC-SHA1 of `data` keyed by `secret`, standard base64 (case preserved).
pub(crate) fn keyed_signature(secret: &[u8], data: &[u8]) -> Result<String, ErrorStack> {
    let key = PKey::hmac(secret)?;
    let mut signer = Signer::new(MessageDigest::sha1(), &key)?;
    signer.update(data)?;
    Ok(BASE64_STANDARD.encode(signer.sign_to_vec()?))
}
