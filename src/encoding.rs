use std::borrow::Cow;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Text encodings accepted by `update_str`.
///
/// Raw byte input does not go through an encoding at all; it is fed directly
/// via `update`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Encoding {
    #[default]
    Utf8,
    Ascii,
    Hex,
}

impl Encoding {
    /// Resolve a conventional encoding name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "ascii" => Ok(Encoding::Ascii),
            "hex" => Ok(Encoding::Hex),
            _ => Err(Error::UnsupportedEncoding(name.to_string())),
        }
    }

    /// Decode `data` into the byte sequence it denotes.
    pub(crate) fn decode<'a>(self, data: &'a str) -> Result<Cow<'a, [u8]>> {
        match self {
            Encoding::Utf8 => Ok(Cow::Borrowed(data.as_bytes())),
            Encoding::Ascii => {
                if !data.is_ascii() {
                    return Err(Error::NotAscii);
                }
                Ok(Cow::Borrowed(data.as_bytes()))
            }
            Encoding::Hex => Ok(Cow::Owned(hex::decode(data)?)),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Encoding::from_name(s)
    }
}

/// Output encodings accepted when finalizing a digest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DigestEncoding {
    Raw,
    Hex,
}

impl DigestEncoding {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "raw" | "binary" => Ok(DigestEncoding::Raw),
            "hex" => Ok(DigestEncoding::Hex),
            _ => Err(Error::UnsupportedEncoding(name.to_string())),
        }
    }

    pub(crate) fn encode(self, raw: &[u8]) -> DigestOutput {
        match self {
            DigestEncoding::Raw => DigestOutput::Raw(raw.to_vec()),
            DigestEncoding::Hex => DigestOutput::Hex(hex::encode(raw)),
        }
    }
}

impl FromStr for DigestEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DigestEncoding::from_name(s)
    }
}

/// A finalized digest, either raw bytes or an encoded string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DigestOutput {
    Raw(Vec<u8>),
    Hex(String),
}

impl DigestOutput {
    /// The digest as bytes, decoding the hex form if necessary.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            DigestOutput::Raw(bytes) => bytes,
            // encode() only ever produces valid hex
            DigestOutput::Hex(s) => hex::decode(s).unwrap(),
        }
    }
}
