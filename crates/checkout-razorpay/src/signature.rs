//! # Payment Signature Verification
//!
//! After checkout completes, the widget hands the browser an order id, a
//! payment id, and a signature. The signature is
//! `HMAC_SHA256(key_secret, "<order_id>|<payment_id>")` hex-encoded; a
//! matching recomputation proves the completion notice came from the
//! gateway and was not forged client-side.

/// Compute the expected signature for an order/payment pair.
///
/// Returns lowercase hex.
pub fn compute_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    type HmacSha256 = Hmac<Sha256>;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    let result = mac.finalize();
    hex::encode(result.into_bytes())
}

/// Constant-time string comparison for signature checks
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Known-answer vector: HMAC_SHA256("s3cr3t", "order_ABC|pay_XYZ")
    const KNOWN_SIGNATURE: &str =
        "351e840e98af7d1b6898df3a18cbf24e69b2fb0156408d1d5236ce8399596eb4";

    #[test]
    fn test_known_vector() {
        let sig = compute_signature("s3cr3t", "order_ABC", "pay_XYZ");
        assert_eq!(sig, KNOWN_SIGNATURE);
    }

    #[test]
    fn test_signature_shape() {
        let sig = compute_signature("s3cr3t", "order_ABC", "pay_XYZ");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_deterministic() {
        let a = compute_signature("s3cr3t", "order_ABC", "pay_XYZ");
        let b = compute_signature("s3cr3t", "order_ABC", "pay_XYZ");
        assert_eq!(a, b);
    }

    #[test]
    fn test_inputs_change_signature() {
        let base = compute_signature("s3cr3t", "order_ABC", "pay_XYZ");
        assert_ne!(base, compute_signature("other", "order_ABC", "pay_XYZ"));
        assert_ne!(base, compute_signature("s3cr3t", "order_ABD", "pay_XYZ"));
        assert_ne!(base, compute_signature("s3cr3t", "order_ABC", "pay_XYA"));
    }

    // The signed message is the literal pipe-joined pair.
    #[test]
    fn test_message_is_pipe_joined() {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let mut mac = Hmac::<Sha256>::new_from_slice(b"s3cr3t").unwrap();
        mac.update(b"order_ABC|pay_XYZ");
        let expected = hex::encode(mac.finalize().into_bytes());

        assert_eq!(compute_signature("s3cr3t", "order_ABC", "pay_XYZ"), expected);
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare(KNOWN_SIGNATURE, KNOWN_SIGNATURE));
        assert!(!constant_time_compare(KNOWN_SIGNATURE, ""));
        assert!(!constant_time_compare("abc123", "abc124"));
        assert!(!constant_time_compare("abc", "abcd"));
    }
}
