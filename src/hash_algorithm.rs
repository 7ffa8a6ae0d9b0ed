use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use thiserror::Error;

/**
The hash functions available for cookie authentication tags.

The tag appended to a sealed cookie is the raw hmac digest, so the
algorithm fixes the tag length: 32 bytes for sha-256, 48 for sha-384, 64
for sha-512. Writer and reader must agree on the algorithm; nothing in
the cookie itself identifies which one produced it.
*/
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HashAlgorithm {
    /// hmac-sha256, 32 byte tags
    Sha256,
    /// hmac-sha384, 48 byte tags
    Sha384,
    /// hmac-sha512, 64 byte tags
    #[default]
    Sha512,
}

/// Error returned when parsing an unrecognized hash algorithm identifier.
#[derive(Error, Debug)]
#[error("unrecognized hash algorithm {0:?}, expected one of sha256, sha384, sha512")]
pub struct UnknownHashAlgorithm(String);

impl HashAlgorithm {
    /// The length in bytes of the authentication tag this algorithm
    /// produces.
    pub fn tag_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    pub(crate) fn tag(&self, key: &[u8], data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => {
                let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("any key length");
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }

            Self::Sha384 => {
                let mut mac = Hmac::<Sha384>::new_from_slice(key).expect("any key length");
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }

            Self::Sha512 => {
                let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("any key length");
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
        }
    }

    // constant-time comparison via Mac::verify_slice, never ==
    pub(crate) fn verify(&self, key: &[u8], data: &[u8], tag: &[u8]) -> bool {
        match self {
            Self::Sha256 => {
                let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("any key length");
                mac.update(data);
                mac.verify_slice(tag).is_ok()
            }

            Self::Sha384 => {
                let mut mac = Hmac::<Sha384>::new_from_slice(key).expect("any key length");
                mac.update(data);
                mac.verify_slice(tag).is_ok()
            }

            Self::Sha512 => {
                let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("any key length");
                mac.update(data);
                mac.verify_slice(tag).is_ok()
            }
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = UnknownHashAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(UnknownHashAlgorithm(String::from(s))),
        }
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALGORITHMS: [HashAlgorithm; 3] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    #[test]
    fn parses_known_identifiers() {
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("sha384".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha384);
        assert_eq!("sha512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha512);
        assert_eq!("SHA512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha512);
    }

    #[test]
    fn rejects_unknown_identifiers() {
        let err = "md5".parse::<HashAlgorithm>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized hash algorithm \"md5\", expected one of sha256, sha384, sha512"
        );
    }

    #[test]
    fn display_round_trips() {
        for algorithm in ALGORITHMS {
            assert_eq!(algorithm.to_string().parse::<HashAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn tags_are_digest_sized() {
        for algorithm in ALGORITHMS {
            assert_eq!(algorithm.tag(b"key", b"data").len(), algorithm.tag_len());
        }
    }

    #[test]
    fn verifies_own_tags_only() {
        let tag = HashAlgorithm::Sha512.tag(b"key", b"data");
        assert!(HashAlgorithm::Sha512.verify(b"key", b"data", &tag));
        assert!(!HashAlgorithm::Sha512.verify(b"other key", b"data", &tag));
        assert!(!HashAlgorithm::Sha512.verify(b"key", b"other data", &tag));
        assert!(!HashAlgorithm::Sha384.verify(b"key", b"data", &tag));
    }

    #[test]
    fn default_is_sha512() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha512);
    }
}
