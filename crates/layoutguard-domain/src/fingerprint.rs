use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a path finding.
///
/// Identity fields: rule_id, code, tree path.
pub fn fingerprint_for_path(rule_id: &str, code: &str, path: &str) -> String {
    let canonical = [rule_id, code, path].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
