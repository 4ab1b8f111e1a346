//! Septet packing as described in GSM 03.38 section 6.1.2.1.
//!
//! Eight 7-bit septets fill exactly seven octets. Septets are laid out
//! least-significant bit first: the first septet occupies the low seven bits of
//! octet 0, the lowest bit of the second septet lands in bit 7 of octet 0, and so on.
//!
//! A trailing chunk of `r` septets (1..=7) packs into `r` octets. Going back, a
//! trailing chunk of `r` octets (1..=6) carries `r` septets, and a full chunk of
//! seven octets carries eight. When a message of `8k + 7` septets is packed, the top
//! seven bits of its last octet are zero and would read back as a spurious `@`, so
//! [`unpack`] drops a zero eighth septet from the final chunk.
//!
//! # Example
//!
//! ```rust
//! use gsm7::septet::{pack, unpack};
//!
//! let packed = pack(b"hello");
//! assert_eq!(packed, [0xE8, 0x32, 0x9B, 0xFD, 0x06]);
//! assert_eq!(unpack(&packed), b"hello");
//! ```

use crate::error::{Gsm7Error, Result};

/// Octets produced by a chunk of `n` septets, indexed by `n`.
const OCTETS_PER_CHUNK: [usize; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 7];

const SEPTET_MASK: u8 = 0x7F;

/// Number of octets needed to pack `septets` septets: `ceil(septets * 7 / 8)`.
pub fn packed_len(septets: usize) -> usize {
    let full = septets / 8;
    full * 7 + OCTETS_PER_CHUNK[septets % 8]
}

/// Upper bound on the septets carried by `octets` packed octets.
pub fn unpacked_len(octets: usize) -> usize {
    octets * 8 / 7
}

/// Pack `septets` into `dst`, returning the number of octets written.
///
/// The high bit of every input value is ignored. Fails with
/// [`Gsm7Error::InsufficientCapacity`] before writing anything if `dst` is shorter
/// than [`packed_len`].
pub fn pack_into(septets: &[u8], dst: &mut [u8]) -> Result<usize> {
    let required = packed_len(septets.len());
    if dst.len() < required {
        return Err(Gsm7Error::InsufficientCapacity {
            required,
            available: dst.len(),
        });
    }

    let mut written = 0;
    for chunk in septets.chunks(8) {
        let octets = OCTETS_PER_CHUNK[chunk.len()];
        for j in 0..octets {
            let low = (chunk[j] & SEPTET_MASK) >> j;
            let high = chunk
                .get(j + 1)
                .map_or(0, |&next| (next & SEPTET_MASK) << (7 - j));
            dst[written + j] = low | high;
        }
        written += octets;
    }

    Ok(written)
}

/// Pack `septets` into a freshly allocated buffer.
pub fn pack(septets: &[u8]) -> Vec<u8> {
    let mut out = vec![0; packed_len(septets.len())];
    // The buffer is sized by packed_len, so this cannot fail.
    let written = pack_into(septets, &mut out).unwrap_or(0);
    out.truncate(written);
    out
}

/// Recover septets from packed octets.
pub fn unpack(octets: &[u8]) -> Vec<u8> {
    let mut septets = Vec::with_capacity(unpacked_len(octets.len()));

    for (index, chunk) in octets.chunks(7).enumerate() {
        for i in 0..chunk.len() {
            let carry = if i == 0 { 0 } else { chunk[i - 1] >> (8 - i) };
            septets.push(((chunk[i] << i) & SEPTET_MASK) | carry);
        }

        if chunk.len() == 7 {
            let eighth = chunk[6] >> 1;
            let is_last = (index + 1) * 7 == octets.len();
            // Zero in the final chunk is fill from a 7-septet tail, not '@'.
            if eighth != 0 || !is_last {
                septets.push(eighth);
            }
        }
    }

    septets
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straightforward bit-cursor packer used as a reference.
    fn reference_pack(septets: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut acc: u32 = 0;
        let mut bits = 0;
        for &s in septets {
            acc |= u32::from(s & 0x7F) << bits;
            bits += 7;
            while bits >= 8 {
                out.push(acc as u8);
                acc >>= 8;
                bits -= 8;
            }
        }
        if bits > 0 {
            out.push(acc as u8);
        }
        out
    }

    fn sample(n: usize) -> Vec<u8> {
        // Nonzero septets exercising every bit position.
        (0..n).map(|i| ((i * 37 + 11) % 127 + 1) as u8).collect()
    }

    #[test]
    fn test_packed_len() {
        let expected = [0, 1, 2, 3, 4, 5, 6, 7, 7, 8, 9, 10, 11, 12, 13, 14, 14];
        for (n, &len) in expected.iter().enumerate() {
            assert_eq!(packed_len(n), len, "n = {n}");
            assert_eq!(packed_len(n), (n * 7).div_ceil(8), "n = {n}");
        }
        assert_eq!(packed_len(160), 140);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(pack(b"hello"), [0xE8, 0x32, 0x9B, 0xFD, 0x06]);
        assert_eq!(
            pack(b"hellohello"),
            [0xE8, 0x32, 0x9B, 0xFD, 0x46, 0x97, 0xD9, 0xEC, 0x37]
        );
        assert_eq!(
            unpack(&[0xE8, 0x32, 0x9B, 0xFD, 0x46, 0x97, 0xD9, 0xEC, 0x37]),
            b"hellohello"
        );
    }

    #[test]
    fn test_pack_matches_reference_for_every_tail() {
        for n in 0..=24 {
            let septets = sample(n);
            assert_eq!(pack(&septets), reference_pack(&septets), "n = {n}");

            let zeros = vec![0u8; n];
            assert_eq!(pack(&zeros), reference_pack(&zeros), "zeros, n = {n}");

            let ones = vec![0x7Fu8; n];
            assert_eq!(pack(&ones), reference_pack(&ones), "ones, n = {n}");
        }
    }

    #[test]
    fn test_round_trip_every_tail() {
        for n in 0..=16 {
            let septets = sample(n);
            let packed = pack(&septets);
            assert_eq!(packed.len(), packed_len(n));
            assert_eq!(unpack(&packed), septets, "n = {n}");
        }
    }

    #[test]
    fn test_seven_septet_tail_drops_fill() {
        let septets = b"1234567";
        let packed = pack(septets);
        assert_eq!(packed.len(), 7);
        assert_eq!(packed[6] >> 1, 0);
        assert_eq!(unpack(&packed), septets);
    }

    #[test]
    fn test_trailing_at_sign_is_ambiguous() {
        // "1234567@" packs to the same seven octets as "1234567".
        let mut septets = b"1234567".to_vec();
        septets.push(0x00);
        assert_eq!(pack(&septets), pack(b"1234567"));
        assert_eq!(unpack(&pack(&septets)), b"1234567");
    }

    #[test]
    fn test_zero_septet_kept_in_middle_chunk() {
        let mut septets = b"1234567".to_vec();
        septets.push(0x00);
        septets.extend_from_slice(b"ab");
        assert_eq!(unpack(&pack(&septets)), septets);
    }

    #[test]
    fn test_high_bit_ignored() {
        assert_eq!(pack(&[0xC1, 0x80]), pack(&[0x41, 0x00]));
    }

    #[test]
    fn test_pack_into_capacity() {
        let mut dst = [0xAAu8; 4];
        let err = pack_into(b"hello", &mut dst).unwrap_err();
        assert_eq!(
            err,
            Gsm7Error::InsufficientCapacity {
                required: 5,
                available: 4
            }
        );
        assert_eq!(dst, [0xAA; 4]);

        let mut dst = [0u8; 8];
        assert_eq!(pack_into(b"hello", &mut dst).unwrap(), 5);
        assert_eq!(&dst[..5], [0xE8, 0x32, 0x9B, 0xFD, 0x06]);
    }

    #[test]
    fn test_unpack_partial_chunks() {
        for r in 1..=6 {
            let octets = vec![0xFFu8; r];
            assert_eq!(unpack(&octets).len(), r, "r = {r}");
        }
        assert_eq!(unpack(&[0xFF; 7]).len(), 8);
        assert_eq!(unpack(&[]), Vec::<u8>::new());
    }
}
