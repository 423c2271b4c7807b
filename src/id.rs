//! # Opaque fixed-size identities.
//!
//! An [`Id`] is 33 bytes: a 32-byte value followed by a one-byte [`IdType`] tag.
//! The dispatch engine only needs equality, hashing and the two reserved
//! wildcard values:
//!
//! - [`Id::ZERO`] — all 33 bytes zero;
//! - [`Id::ANY`] — zero value bytes tagged as [`IdType::User`].
//!
//! Both are aliases of the same "any sender" wildcard.

use std::fmt;

use crate::error::SwitchboardError;

/// Length of the value part of an [`Id`].
pub const ID_DATA_LEN: usize = 32;

/// Total encoded length of an [`Id`] (value + type tag).
pub const ID_LEN: usize = ID_DATA_LEN + 1;

/// Kind of entity an [`Id`] refers to; stored in the last byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IdType {
    Generic = 0,
    Gateway = 1,
    Node = 2,
    User = 3,
    Group = 4,
}

impl IdType {
    /// Maps a tag byte back to a known type, `None` for unknown tags.
    #[must_use]
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(IdType::Generic),
            1 => Some(IdType::Gateway),
            2 => Some(IdType::Node),
            3 => Some(IdType::User),
            4 => Some(IdType::Group),
            _ => None,
        }
    }
}

/// Opaque, comparable sender identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id([u8; ID_LEN]);

impl Id {
    /// The all-zero identity. Wildcard alias.
    pub const ZERO: Id = Id([0; ID_LEN]);

    /// The reserved "any user" identity. Wildcard alias of [`Id::ZERO`].
    pub const ANY: Id = {
        let mut b = [0u8; ID_LEN];
        b[ID_DATA_LEN] = IdType::User as u8;
        Id(b)
    };

    /// Builds an identity from a value and a type tag.
    #[must_use]
    pub fn new(data: [u8; ID_DATA_LEN], ty: IdType) -> Self {
        let mut b = [0u8; ID_LEN];
        b[..ID_DATA_LEN].copy_from_slice(&data);
        b[ID_DATA_LEN] = ty as u8;
        Id(b)
    }

    /// Builds an identity from its full 33-byte encoding.
    ///
    /// # Errors
    /// [`SwitchboardError::InvalidArgument`] if `bytes` is not exactly [`ID_LEN`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SwitchboardError> {
        let arr: [u8; ID_LEN] = bytes.try_into().map_err(|_| {
            SwitchboardError::invalid(
                "bytes",
                format!("expected {ID_LEN} bytes, got {}", bytes.len()),
            )
        })?;
        Ok(Id(arr))
    }

    /// Convenience for tests and demos: a user identity whose value ends in `n`.
    #[must_use]
    pub fn user(n: u64) -> Self {
        let mut data = [0u8; ID_DATA_LEN];
        data[ID_DATA_LEN - 8..].copy_from_slice(&n.to_be_bytes());
        Id::new(data, IdType::User)
    }

    /// Full encoding (value + tag).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Value part without the type tag.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.0[..ID_DATA_LEN]
    }

    /// Type tag, `None` if the tag byte is unknown.
    #[must_use]
    pub fn id_type(&self) -> Option<IdType> {
        IdType::from_byte(self.0[ID_DATA_LEN])
    }

    /// True for either wildcard alias.
    #[inline]
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        *self == Id::ZERO || *self == Id::ANY
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            return f.write_str("<any>");
        }
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_aliases() {
        assert!(Id::ZERO.is_wildcard());
        assert!(Id::ANY.is_wildcard());
        assert_ne!(Id::ZERO, Id::ANY);
        assert_eq!(Id::ANY.id_type(), Some(IdType::User));
        assert!(!Id::user(42).is_wildcard());
    }

    #[test]
    fn test_from_bytes_checks_length() {
        let id = Id::user(7);
        assert_eq!(Id::from_bytes(id.as_bytes()).unwrap(), id);

        let err = Id::from_bytes(&[1, 2, 3]).unwrap_err();
        assert_eq!(err.as_label(), "invalid_argument");
    }

    #[test]
    fn test_display() {
        assert_eq!(Id::ZERO.to_string(), "<any>");
        let s = Id::user(1).to_string();
        assert_eq!(s.len(), ID_LEN * 2);
        assert!(s.ends_with("0103"));
    }

    #[test]
    fn test_unknown_tag_preserved() {
        let mut raw = [9u8; ID_LEN];
        raw[ID_DATA_LEN] = 200;
        let id = Id::from_bytes(&raw).unwrap();
        assert_eq!(id.id_type(), None);
        assert_eq!(id.as_bytes()[ID_DATA_LEN], 200);
    }
}
