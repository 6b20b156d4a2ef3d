//! Portable scalar SHA-1 compression function.

use byteorder::{BigEndian, ByteOrder};

use crate::consts::K1;

/// Process a single 64-byte block, updating `state` in place.
pub fn compress1(state: &mut [u32; 5], block: &[u8; 64]) {
    let mut w = [0u32; 80];
    BigEndian::read_u32_into(block, &mut w[..16]);
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for (t, wt) in w.iter().enumerate() {
        let (f, k) = match t / 20 {
            0 => ((b & c) | (!b & d), K1[0]),
            1 => (b ^ c ^ d, K1[1]),
            2 => ((b & c) | (b & d) | (c & d), K1[2]),
            _ => (b ^ c ^ d, K1[3]),
        };
        let tmp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(*wt);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = tmp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
