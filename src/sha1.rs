//! Streaming SHA-1, sharing the SHA-256 buffering and padding skeleton.
//!
//! SHA-1 is kept for interoperability with legacy formats only; prefer
//! [`Sha256`](crate::Sha256) everywhere else.

use byteorder::{BigEndian, ByteOrder};

use crate::consts::{BLOCK_LEN, FINAL_LEN, H1};
use crate::encoding::{DigestEncoding, DigestOutput, Encoding};

use crate::sha1_utils;

/// Streaming SHA-1 digest. Portable implementation only.
#[derive(Clone)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: [u8; BLOCK_LEN],
    len: u64,
}

impl Default for Sha1 {
    fn default() -> Self {
        Sha1 {
            state: H1,
            buffer: [0u8; BLOCK_LEN],
            len: 0,
        }
    }
}

impl Sha1 {
    pub fn new() -> Self {
        Sha1::default()
    }

    /// Absorb raw bytes. Returns `&mut Self` to allow chaining.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        let data = data.as_ref();

        let mut offset = 0;
        while offset < data.len() {
            let assigned = (self.len % BLOCK_LEN as u64) as usize;
            let take = (data.len() - offset).min(BLOCK_LEN - assigned);

            self.buffer[assigned..assigned + take]
                .copy_from_slice(&data[offset..offset + take]);
            self.len += take as u64;
            offset += take;

            if self.len % BLOCK_LEN as u64 == 0 {
                sha1_utils::compress1(&mut self.state, &self.buffer);
            }
        }

        self
    }

    /// Absorb text decoded according to `encoding`.
    pub fn update_str(&mut self, data: &str, encoding: Encoding) -> crate::error::Result<&mut Self> {
        let bytes = encoding.decode(data)?;
        Ok(self.update(bytes))
    }

    /// Finalize and return the raw 20-byte digest.
    pub fn digest(mut self) -> [u8; 20] {
        let rem = (self.len % BLOCK_LEN as u64) as usize;
        let bits = self.len * 8;

        self.buffer[rem] = 0x80;
        self.buffer[rem + 1..].fill(0);

        if rem >= FINAL_LEN {
            sha1_utils::compress1(&mut self.state, &self.buffer);
            self.buffer = [0u8; BLOCK_LEN];
        }

        BigEndian::write_u64(&mut self.buffer[BLOCK_LEN - 8..], bits);
        sha1_utils::compress1(&mut self.state, &self.buffer);

        let mut out = [0u8; 20];
        BigEndian::write_u32_into(&self.state, &mut out);
        out
    }

    /// Finalize and return the digest as a lowercase hex string.
    pub fn digest_hex(self) -> String {
        hex::encode(self.digest())
    }

    /// Finalize into the requested output encoding.
    pub fn digest_as(self, encoding: DigestEncoding) -> DigestOutput {
        encoding.encode(&self.digest())
    }
}

opaque_debug::implement!(Sha1);

/// Hash `data` in one call.
pub fn sha1(data: impl AsRef<[u8]>) -> [u8; 20] {
    let mut sha = Sha1::new();
    sha.update(data);
    sha.digest()
}
