//! Access and modifier encoding for generated members.

use std::ops::{BitOr, BitOrAssign};

/// Access level of a generated member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// `public`
    #[default]
    Public,
    /// `protected`
    Protected,
    /// No keyword (package-private).
    Package,
    /// `private`
    Private,
}

impl Access {
    /// The Java keyword, or `None` for package access.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Public => Some("public"),
            Self::Protected => Some("protected"),
            Self::Package => None,
            Self::Private => Some("private"),
        }
    }

    /// Check if this is public access.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

/// What a generated method means for the bean it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodSemantic {
    #[default]
    None,
    Getter,
    Setter,
    IndexedGetter,
    IndexedSetter,
    Sizer,
    Adder,
    Remover,
}

impl MethodSemantic {
    fn bits(self) -> u32 {
        let n = match self {
            Self::None => 0,
            Self::Getter => 1,
            Self::Setter => 2,
            Self::IndexedGetter => 3,
            Self::IndexedSetter => 4,
            Self::Sizer => 5,
            Self::Adder => 6,
            Self::Remover => 7,
        };
        n << 12
    }

    fn from_bits(bits: u32) -> Self {
        match (bits & Options::SEMANTIC_MASK) >> 12 {
            1 => Self::Getter,
            2 => Self::Setter,
            3 => Self::IndexedGetter,
            4 => Self::IndexedSetter,
            5 => Self::Sizer,
            6 => Self::Adder,
            7 => Self::Remover,
            _ => Self::None,
        }
    }
}

/// Access level, modifiers and method semantics packed into one bitmask.
///
/// The two low bits hold the access level; higher bits hold the `static`
/// and `final` modifiers, bean-info/IO/unsupported markers, and a
/// [`MethodSemantic`] nibble.
///
/// ```
/// use beangen_java::{Access, Options};
///
/// let opts = Options::PRIVATE | Options::STATIC | Options::FINAL;
/// assert_eq!(opts.access(), Access::Private);
/// assert!(opts.contains(Options::STATIC));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Options(u32);

impl Options {
    pub const PUBLIC: Self = Self(0x0);
    pub const PROTECTED: Self = Self(0x1);
    pub const PACKAGE: Self = Self(0x2);
    pub const PRIVATE: Self = Self(0x3);
    pub const STATIC: Self = Self(0x10);
    pub const FINAL: Self = Self(0x20);
    pub const BEANINFO: Self = Self(0x100);
    pub const IO: Self = Self(0x200);
    pub const UNSUPPORTED: Self = Self(0x400);

    const ACCESS_MASK: u32 = 0x3;
    const SEMANTIC_MASK: u32 = 0xf000;

    /// Raw bit representation.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Build from a raw bit representation.
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Access level encoded in the low bits.
    pub fn access(self) -> Access {
        match self.0 & Self::ACCESS_MASK {
            0 => Access::Public,
            1 => Access::Protected,
            2 => Access::Package,
            _ => Access::Private,
        }
    }

    /// Replace the access level.
    pub fn with_access(self, access: Access) -> Self {
        let bits = match access {
            Access::Public => 0,
            Access::Protected => 1,
            Access::Package => 2,
            Access::Private => 3,
        };
        Self((self.0 & !Self::ACCESS_MASK) | bits)
    }

    /// Check if all flag bits of `other` are set. Access bits are ignored.
    pub fn contains(self, other: Options) -> bool {
        let flags = other.0 & !Self::ACCESS_MASK;
        self.0 & flags == flags
    }

    /// Method semantic encoded in the high nibble.
    pub fn semantic(self) -> MethodSemantic {
        MethodSemantic::from_bits(self.0)
    }

    /// Replace the method semantic.
    pub fn with_semantic(self, semantic: MethodSemantic) -> Self {
        Self((self.0 & !Self::SEMANTIC_MASK) | semantic.bits())
    }
}

impl BitOr for Options {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Options {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
