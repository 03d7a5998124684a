/// The IfExists/negation variant of a comparison operator.
///
/// The discriminant doubles as an index into the per-category operator name
/// tables in [super::op].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Variant {
    None = 0,
    IfExists = 1,
    Negated = 2,
    IfExistsNegated = 3,
}

impl Variant {
    #[inline]
    pub(super) fn as_usize(self) -> usize {
        self as usize
    }

    /// Combines the `IfExists` qualifier into this variant.
    #[inline]
    pub(super) fn with_if_exists(self) -> Self {
        match self {
            Self::None => Self::IfExists,
            Self::Negated => Self::IfExistsNegated,
            other => other,
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::None
    }
}
