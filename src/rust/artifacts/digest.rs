use std::fmt;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Raw bytes of an artifact file together with its identity.
pub(crate) struct ArtifactBlob {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub sha256: String,
}

impl ArtifactBlob {
    pub fn new(path: &Path, bytes: Vec<u8>) -> Self {
        let sha256 = sha256_hex(&bytes);
        Self {
            path: path.to_path_buf(),
            bytes,
            sha256,
        }
    }
}

impl fmt::Display for ArtifactBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes, sha256 {})", self.path.display(), self.bytes.len(), self.sha256)
    }
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
