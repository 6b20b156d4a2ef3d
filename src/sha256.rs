use byteorder::{BigEndian, ByteOrder};

use crate::consts::{BLOCK_LEN, FINAL_LEN, H256};
use crate::encoding::{DigestEncoding, DigestOutput, Encoding};

use crate::platform::Implementation;

lazy_static::lazy_static! {
    static ref IMPL: Implementation = Implementation::detect();
}

/// Streaming SHA-256 digest.
///
/// Feed data incrementally with [`update`](Sha256::update) (or
/// [`update_str`](Sha256::update_str) for encoded text) and finalize with
/// [`digest`](Sha256::digest). Finalization consumes the hasher, so a
/// finalized instance can never be updated again.
///
/// At most one partial block is buffered at any time; memory usage is
/// constant regardless of input length, and inputs longer than 2^32 bits are
/// supported.
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    len: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Sha256 {
            state: H256,
            buffer: [0u8; BLOCK_LEN],
            len: 0,
        }
    }
}

impl Sha256 {
    pub fn new() -> Self {
        Sha256::default()
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
                IMPL.compress256(&mut self.state, &self.buffer);
            }
        }

        self
    }

    /// Absorb text decoded according to `encoding`.
    ///
    /// A decoding failure leaves the hasher untouched; nothing is committed
    /// unless the whole input decodes.
    pub fn update_str(&mut self, data: &str, encoding: Encoding) -> crate::error::Result<&mut Self> {
        let bytes = encoding.decode(data)?;
        Ok(self.update(bytes))
    }

    /// Finalize and return the raw 32-byte digest.
    ///
    /// Pads the pending block with a `0x80` terminator and the 64-bit
    /// big-endian bit length, spilling into a second block when fewer than 8
    /// bytes remain, then serializes the state big-endian. Zero-length input
    /// produces the well-known empty digest.
    pub fn digest(mut self) -> [u8; 32] {
        let rem = (self.len % BLOCK_LEN as u64) as usize;
        let bits = self.len * 8;

        self.buffer[rem] = 0x80;
        self.buffer[rem + 1..].fill(0);

        if rem >= FINAL_LEN {
            IMPL.compress256(&mut self.state, &self.buffer);
            self.buffer = [0u8; BLOCK_LEN];
        }

        BigEndian::write_u64(&mut self.buffer[BLOCK_LEN - 8..], bits);
        IMPL.compress256(&mut self.state, &self.buffer);

        let mut out = [0u8; 32];
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

opaque_debug::implement!(Sha256);

/// Hash `data` in one call.
pub fn sha256(data: impl AsRef<[u8]>) -> [u8; 32] {
    let mut sha = Sha256::new();
    sha.update(data);
    sha.digest()
}
