use super::utils::{RuleContext, strings_at};
use crate::model::Node;
use crate::params::{HashMode, HashedValueCheckParams};
use confguard_types::Finding;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha512,
    Md5,
}

impl HashAlgorithm {
    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sha1" => Some(HashAlgorithm::Sha1),
            "sha256" => Some(HashAlgorithm::Sha256),
            "sha512" => Some(HashAlgorithm::Sha512),
            "md5" => Some(HashAlgorithm::Md5),
            _ => None,
        }
    }

    /// Lowercase hex digest of `input`.
    pub fn hex_digest(self, input: &[u8]) -> String {
        match self {
            HashAlgorithm::Sha1 => sha1_hex(input),
            HashAlgorithm::Sha256 => sha256_hex(input),
            HashAlgorithm::Sha512 => sha512_hex(input),
            HashAlgorithm::Md5 => md5_hex(input),
        }
    }
}

fn sha1_hex(input: &[u8]) -> String {
    use sha1::Digest;
    hex::encode(sha1::Sha1::digest(input))
}

fn sha256_hex(input: &[u8]) -> String {
    use sha2::Digest;
    hex::encode(sha2::Sha256::digest(input))
}

fn sha512_hex(input: &[u8]) -> String {
    use sha2::Digest;
    hex::encode(sha2::Sha512::digest(input))
}

fn md5_hex(input: &[u8]) -> String {
    use md5::Digest;
    hex::encode(md5::Md5::digest(input))
}

pub fn run(
    ctx: &RuleContext<'_>,
    root: &Node,
    p: &HashedValueCheckParams,
    out: &mut Vec<Finding>,
) {
    let Some(algorithm) = HashAlgorithm::from_name(&p.hash_algorithm) else {
        out.push(ctx.fault(
            &p.path,
            format!("unsupported hash algorithm: {}", p.hash_algorithm),
        ));
        return;
    };

    let listed: Vec<String> = p.hash_list.iter().map(|h| h.to_ascii_lowercase()).collect();
    for (at, value) in strings_at(root, &p.path) {
        let digest = algorithm.hex_digest(value.as_bytes());
        let in_list = listed.contains(&digest);
        let violation = match p.mode {
            HashMode::Forbidden => in_list,
            HashMode::Allowed => !in_list,
        };
        if violation {
            out.push(ctx.finding(at, ctx.message()));
        }
    }
}
