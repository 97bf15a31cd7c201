//! Vector fingerprints.

/// Computes the BLAKE3 fingerprint of a vector.
///
/// The hash covers the little-endian IEEE 754 bits of each value, with
/// `-0.0` folded into `0.0`, so element-wise equal vectors always share a
/// fingerprint.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn vector_fingerprint(values: &[f64]) -> String {
    let mut hasher = blake3::Hasher::new();
    for &value in values {
        let value = if value == 0.0 { 0.0 } else { value };
        hasher.update(&value.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable() {
        let a = vector_fingerprint(&[-1.0, 2.5, 3.0]);
        let b = vector_fingerprint(&[-1.0, 2.5, 3.0]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn order_matters() {
        assert_ne!(
            vector_fingerprint(&[1.0, 2.0]),
            vector_fingerprint(&[2.0, 1.0])
        );
    }

    #[test]
    fn signed_zero_is_folded() {
        assert_eq!(vector_fingerprint(&[-0.0, 1.0]), vector_fingerprint(&[0.0, 1.0]));
    }

    #[test]
    fn empty_vector_has_fingerprint() {
        assert_eq!(
            vector_fingerprint(&[]),
            blake3::hash(&[]).to_hex().to_string()
        );
    }
}
