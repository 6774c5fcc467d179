//! Decoding of textual key and signature material
//!
//! A descriptor declares its material under exactly one recognized field
//! name; the field name selects the encoding. Everything here is a pure
//! function of the descriptor's fields.

use std::collections::BTreeMap;

use anyhow::anyhow;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// The supported textual-to-binary transcodings for key and signature
/// material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Base58, bitcoin alphabet.
    Base58,
    /// Base64, standard alphabet.
    Base64,
    /// Hexadecimal.
    Hex,
    /// Multibase: a leading character selects the base.
    Multibase,
    /// `PUBLIC KEY` PEM armor around base64.
    Pem,
    /// A JSON Web Key object.
    Jwk,
}

/// Recognized key-material fields, in the order they are reported when
/// more than one is present.
const KEY_FIELDS: &[(&str, Encoding)] = &[
    ("publicKeyBase58", Encoding::Base58),
    ("publicKeyBase64", Encoding::Base64),
    ("publicKeyHex", Encoding::Hex),
    ("publicKeyJwk", Encoding::Jwk),
    ("publicKeyMultibase", Encoding::Multibase),
    ("publicKeyPem", Encoding::Pem),
];

/// Recognized signature-material fields.
const SIGNATURE_FIELDS: &[(&str, Encoding)] = &[
    ("signatureBase58", Encoding::Base58),
    ("signatureBase64", Encoding::Base64),
    ("signatureHex", Encoding::Hex),
    ("signatureMultibase", Encoding::Multibase),
];

/// Errors resolving a descriptor's encoded material.
#[derive(Error, Debug)]
pub enum MaterialError {
    /// More than one recognized material field is present.
    #[error("more than one material field present: {}", .0.join(", "))]
    Ambiguous(Vec<String>),

    /// No recognized material field is present.
    #[error("no recognized material field present")]
    Missing,

    /// The single present field's value did not decode under its kind.
    #[error("{encoding:?} material did not decode")]
    Decode {
        /// The encoding selected by the field name.
        encoding: Encoding,
        /// The underlying decoder diagnostic.
        #[source]
        source: anyhow::Error,
    },
}

/// Find the single recognized key-material field in a key descriptor's
/// extra fields and decode it.
pub fn key_material(fields: &BTreeMap<String, Value>) -> Result<(Encoding, Vec<u8>), MaterialError> {
    let (encoding, value) = single_material(KEY_FIELDS, fields)?;
    Ok((encoding, decode(encoding, value)?))
}

/// Find the single recognized signature-material field in a signature
/// descriptor's extra fields and decode it.
pub fn signature_material(
    fields: &BTreeMap<String, Value>,
) -> Result<(Encoding, Vec<u8>), MaterialError> {
    let (encoding, value) = single_material(SIGNATURE_FIELDS, fields)?;
    Ok((encoding, decode(encoding, value)?))
}

fn single_material<'a>(
    recognized: &[(&str, Encoding)],
    fields: &'a BTreeMap<String, Value>,
) -> Result<(Encoding, &'a Value), MaterialError> {
    let mut found = Vec::new();
    for (name, encoding) in recognized {
        if let Some(value) = fields.get(*name) {
            found.push((*name, *encoding, value));
        }
    }

    match found.as_slice() {
        [] => Err(MaterialError::Missing),
        [(_, encoding, value)] => Ok((*encoding, value)),
        many => Err(MaterialError::Ambiguous(
            many.iter().map(|(name, _, _)| name.to_string()).collect(),
        )),
    }
}

fn decode(encoding: Encoding, value: &Value) -> Result<Vec<u8>, MaterialError> {
    decode_value(encoding, value).map_err(|source| MaterialError::Decode { encoding, source })
}

fn decode_value(encoding: Encoding, value: &Value) -> Result<Vec<u8>, anyhow::Error> {
    match encoding {
        Encoding::Base58 => Ok(bs58::decode(text(value)?).into_vec()?),
        Encoding::Base64 => Ok(STANDARD.decode(text(value)?)?),
        Encoding::Hex => Ok(hex::decode(text(value)?)?),
        Encoding::Multibase => {
            let (_, bytes) = multibase::decode(text(value)?)?;
            Ok(bytes)
        }
        Encoding::Pem => decode_pem(text(value)?),
        Encoding::Jwk => decode_jwk(value),
    }
}

fn text(value: &Value) -> Result<&str, anyhow::Error> {
    value
        .as_str()
        .ok_or_else(|| anyhow!("expected a JSON string"))
}

const PEM_HEADER: &str = "-----BEGIN PUBLIC KEY-----";
const PEM_FOOTER: &str = "-----END PUBLIC KEY-----";

fn decode_pem(armored: &str) -> Result<Vec<u8>, anyhow::Error> {
    let interior = armored
        .trim()
        .strip_prefix(PEM_HEADER)
        .and_then(|rest| rest.strip_suffix(PEM_FOOTER))
        .ok_or_else(|| anyhow!("missing PUBLIC KEY armor"))?;

    let joined: String = interior.split_whitespace().collect();
    Ok(STANDARD.decode(joined)?)
}

/// The JWK parameters we extract key bytes from; other members (`alg`,
/// `kid`, `use`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct Jwk {
    kty: String,
    #[serde(default)]
    crv: Option<String>,
    #[serde(default)]
    x: Option<String>,
    #[serde(default)]
    y: Option<String>,
    #[serde(default)]
    n: Option<String>,
    #[serde(default)]
    e: Option<String>,
    #[serde(default)]
    k: Option<String>,
}

fn decode_jwk(value: &Value) -> Result<Vec<u8>, anyhow::Error> {
    let jwk: Jwk = match value {
        Value::String(inline) => serde_json::from_str(inline)?,
        object => serde_json::from_value(object.clone())?,
    };

    match jwk.kty.as_str() {
        // Ed25519 keys travel as a bare octet sequence.
        "oct" => jwk_param(jwk.k.as_deref(), "k"),
        "OKP" => jwk_param(jwk.x.as_deref(), "x"),
        "RSA" => {
            let n = rsa::BigUint::from_bytes_be(&jwk_param(jwk.n.as_deref(), "n")?);
            let e = rsa::BigUint::from_bytes_be(&jwk_param(jwk.e.as_deref(), "e")?);
            let key = rsa::RsaPublicKey::new(n, e)?;
            let der = rsa::pkcs1::EncodeRsaPublicKey::to_pkcs1_der(&key)?;
            Ok(der.as_bytes().to_vec())
        }
        "EC" => {
            match jwk.crv.as_deref() {
                Some("secp256k1" | "P-256K") => {}
                crv => return Err(anyhow!("unsupported EC curve {:?}", crv)),
            }
            let x = jwk_param(jwk.x.as_deref(), "x")?;
            let y = jwk_param(jwk.y.as_deref(), "y")?;
            // Uncompressed SEC1 point.
            let mut point = Vec::with_capacity(1 + x.len() + y.len());
            point.push(0x04);
            point.extend_from_slice(&x);
            point.extend_from_slice(&y);
            Ok(point)
        }
        other => Err(anyhow!("unsupported JWK key type {:?}", other)),
    }
}

fn jwk_param(param: Option<&str>, name: &str) -> Result<Vec<u8>, anyhow::Error> {
    let param = param.ok_or_else(|| anyhow!("JWK is missing the {:?} parameter", name))?;
    Ok(URL_SAFE_NO_PAD.decode(param)?)
}
