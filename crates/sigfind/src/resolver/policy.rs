//! Resolution policies
//!
//! A catalog entry names its policy through a one-letter group tag. Each
//! policy encodes where, relative to the signature start, the patchable value
//! sits:
//!
//! ```text
//! Group  Policy            Scan         Reported offset
//! ─────  ────────────────  ───────────  ───────────────
//!   A    Default(A)        overlapping  first + 0x14
//!   B    Default(B)        overlapping  first + 0x8
//!   C    FirstPlusSmall    single       first + 0x4
//!   D    FirstAll          overlapping  first
//!   E    FirstPlusLarge    single       first + 0x14
//!   F    FirstPlusSmall    single       first + 0x4
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Operand directly after the signature bytes
pub const SMALL_ADDEND: u64 = 0x4;
/// Operand further downstream of the signature
pub const LARGE_ADDEND: u64 = 0x14;
/// Sibling encoding distance used by group B
pub const SHORT_ADDEND: u64 = 0x8;

/// Group tag as written in a signature catalog
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Group {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Group {
    pub fn policy(self) -> Policy {
        Policy::from(self)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

/// Variant selector for the default policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubTag {
    A,
    B,
}

/// Rule converting raw match positions into a reported offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Single search, report first match + 0x4
    FirstPlusSmall,
    /// Overlapping scan, report first match as-is
    FirstAll,
    /// Single search, report first match + 0x14
    FirstPlusLarge,
    /// Overlapping scan, report first match + a sub-tag dependent constant
    Default(SubTag),
}

impl Policy {
    /// Constant added to the selected match position.
    pub const fn addend(self) -> u64 {
        match self {
            Self::FirstPlusSmall => SMALL_ADDEND,
            Self::FirstAll => 0,
            Self::FirstPlusLarge => LARGE_ADDEND,
            Self::Default(SubTag::A) => LARGE_ADDEND,
            Self::Default(SubTag::B) => SHORT_ADDEND,
        }
    }

    /// Whether the policy walks every match instead of stopping at the first.
    pub const fn is_exhaustive(self) -> bool {
        matches!(self, Self::FirstAll | Self::Default(_))
    }
}

impl From<Group> for Policy {
    fn from(group: Group) -> Self {
        match group {
            Group::A => Self::Default(SubTag::A),
            Group::B => Self::Default(SubTag::B),
            Group::C | Group::F => Self::FirstPlusSmall,
            Group::D => Self::FirstAll,
            Group::E => Self::FirstPlusLarge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_group_to_policy() {
        assert_eq!(Group::A.policy(), Policy::Default(SubTag::A));
        assert_eq!(Group::B.policy(), Policy::Default(SubTag::B));
        assert_eq!(Group::C.policy(), Policy::FirstPlusSmall);
        assert_eq!(Group::D.policy(), Policy::FirstAll);
        assert_eq!(Group::E.policy(), Policy::FirstPlusLarge);
        assert_eq!(Group::F.policy(), Policy::FirstPlusSmall);
    }

    #[test]
    fn test_addend_table() {
        assert_eq!(Group::A.policy().addend(), 0x14);
        assert_eq!(Group::B.policy().addend(), 0x8);
        assert_eq!(Group::C.policy().addend(), 0x4);
        assert_eq!(Group::D.policy().addend(), 0);
        assert_eq!(Group::E.policy().addend(), 0x14);
        assert_eq!(Group::F.policy().addend(), 0x4);
    }

    #[test]
    fn test_exhaustive_policies() {
        let exhaustive: Vec<Group> = Group::iter()
            .filter(|g| g.policy().is_exhaustive())
            .collect();
        assert_eq!(exhaustive, vec![Group::A, Group::B, Group::D]);
    }

    #[test]
    fn test_group_parse_case_insensitive() {
        assert_eq!(Group::from_str("a").unwrap(), Group::A);
        assert_eq!(Group::from_str("E").unwrap(), Group::E);
        assert!(Group::from_str("G").is_err());
        assert!(Group::from_str("").is_err());
    }

    #[test]
    fn test_group_serde() {
        assert_eq!(serde_json::to_string(&Group::D).unwrap(), "\"D\"");
        let group: Group = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(group, Group::F);
        assert!(serde_json::from_str::<Group>("\"Z\"").is_err());
    }
}
