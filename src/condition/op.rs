use {
    super::variant::Variant,
    log::debug,
    serde::{ser::Serializer, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// String operator names, indexed by comparison | variant.
const STRING_DISPLAY_NAMES: [&str; 12] = [
    "StringEquals",
    "StringEqualsIfExists",
    "StringNotEquals",
    "StringNotEqualsIfExists",
    "StringEqualsIgnoreCase",
    "StringEqualsIgnoreCaseIfExists",
    "StringNotEqualsIgnoreCase",
    "StringNotEqualsIgnoreCaseIfExists",
    "StringLike",
    "StringLikeIfExists",
    "StringNotLike",
    "StringNotLikeIfExists",
];

/// Numeric operator names. The greater-than forms are the negations of the
/// less-than forms, so they land on the negated indices.
const NUMERIC_DISPLAY_NAMES: [&str; 12] = [
    "NumericEquals",
    "NumericEqualsIfExists",
    "NumericNotEquals",
    "NumericNotEqualsIfExists",
    "NumericLessThan",
    "NumericLessThanIfExists",
    "NumericGreaterThanEquals",
    "NumericGreaterThanEqualsIfExists",
    "NumericLessThanEquals",
    "NumericLessThanEqualsIfExists",
    "NumericGreaterThan",
    "NumericGreaterThanIfExists",
];

/// Date operator names, same negation scheme as the numeric table.
const DATE_DISPLAY_NAMES: [&str; 12] = [
    "DateEquals",
    "DateEqualsIfExists",
    "DateNotEquals",
    "DateNotEqualsIfExists",
    "DateLessThan",
    "DateLessThanIfExists",
    "DateGreaterThanEquals",
    "DateGreaterThanEqualsIfExists",
    "DateLessThanEquals",
    "DateLessThanEqualsIfExists",
    "DateGreaterThan",
    "DateGreaterThanIfExists",
];

/// ARN operator names.
const ARN_DISPLAY_NAMES: [&str; 8] = [
    "ArnEquals",
    "ArnEqualsIfExists",
    "ArnNotEquals",
    "ArnNotEqualsIfExists",
    "ArnLike",
    "ArnLikeIfExists",
    "ArnNotLike",
    "ArnNotLikeIfExists",
];

/// Boolean and binary operators have no negated forms.
const BOOL_DISPLAY_NAMES: [&str; 2] = ["Bool", "BoolIfExists"];
const BINARY_DISPLAY_NAMES: [&str; 2] = ["BinaryEquals", "BinaryEqualsIfExists"];

/// IP address operator names.
const IP_ADDRESS_DISPLAY_NAMES: [&str; 4] =
    ["IpAddress", "IpAddressIfExists", "NotIpAddress", "NotIpAddressIfExists"];

const NULL_DISPLAY_NAME: &str = "Null";

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub(crate) enum StringCmp {
    Equals = 0,
    EqualsIgnoreCase = 4,
    Like = 8,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub(crate) enum NumericCmp {
    Equals = 0,
    LessThan = 4,
    LessThanEquals = 8,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub(crate) enum DateCmp {
    Equals = 0,
    LessThan = 4,
    LessThanEquals = 8,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub(crate) enum ArnCmp {
    Equals = 0,
    Like = 4,
}

/// The `ForAllValues:`/`ForAnyValue:` prefix applied to an operator when the
/// condition key carries multiple context values.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SetQualifier {
    None,
    ForAllValues,
    ForAnyValue,
}

impl SetQualifier {
    fn prefix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::ForAllValues => "ForAllValues:",
            Self::ForAnyValue => "ForAnyValue:",
        }
    }
}

impl Default for SetQualifier {
    fn default() -> Self {
        Self::None
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum BaseOp {
    Arn(ArnCmp, Variant),
    Binary(Variant),
    Bool(Variant),
    Date(DateCmp, Variant),
    IpAddress(Variant),
    Null,
    Numeric(NumericCmp, Variant),
    String(StringCmp, Variant),

    /// Operator text this model does not know. The IAM policy language, not
    /// this crate, is the source of truth for valid operators, so unknown
    /// text is carried through to the document verbatim.
    Other(String),
}

/// A condition-clause comparison operator.
///
/// Values are normally obtained from the named constants in this module
/// (`condop::StringLike`, `condop::NumericLessThan`, ...), optionally refined
/// with [ConditionOp::if_exists], [ConditionOp::for_all_values], or
/// [ConditionOp::for_any_value]. Arbitrary operator text converts via
/// `ConditionOp::from(&str)` and is emitted unchanged if unrecognized.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ConditionOp {
    qualifier: SetQualifier,
    base: BaseOp,
}

const fn op(base: BaseOp) -> ConditionOp {
    ConditionOp {
        qualifier: SetQualifier::None,
        base,
    }
}

/// The `ArnEquals` operator.
pub const ArnEquals: ConditionOp = op(BaseOp::Arn(ArnCmp::Equals, Variant::None));

/// The `ArnEqualsIfExists` operator.
pub const ArnEqualsIfExists: ConditionOp = op(BaseOp::Arn(ArnCmp::Equals, Variant::IfExists));

/// The `ArnNotEquals` operator.
pub const ArnNotEquals: ConditionOp = op(BaseOp::Arn(ArnCmp::Equals, Variant::Negated));

/// The `ArnNotEqualsIfExists` operator.
pub const ArnNotEqualsIfExists: ConditionOp = op(BaseOp::Arn(ArnCmp::Equals, Variant::IfExistsNegated));

/// The `ArnLike` operator.
pub const ArnLike: ConditionOp = op(BaseOp::Arn(ArnCmp::Like, Variant::None));

/// The `ArnLikeIfExists` operator.
pub const ArnLikeIfExists: ConditionOp = op(BaseOp::Arn(ArnCmp::Like, Variant::IfExists));

/// The `ArnNotLike` operator.
pub const ArnNotLike: ConditionOp = op(BaseOp::Arn(ArnCmp::Like, Variant::Negated));

/// The `ArnNotLikeIfExists` operator.
pub const ArnNotLikeIfExists: ConditionOp = op(BaseOp::Arn(ArnCmp::Like, Variant::IfExistsNegated));

/// The `BinaryEquals` operator.
pub const BinaryEquals: ConditionOp = op(BaseOp::Binary(Variant::None));

/// The `BinaryEqualsIfExists` operator.
pub const BinaryEqualsIfExists: ConditionOp = op(BaseOp::Binary(Variant::IfExists));

/// The `Bool` operator.
pub const Bool: ConditionOp = op(BaseOp::Bool(Variant::None));

/// The `BoolIfExists` operator.
pub const BoolIfExists: ConditionOp = op(BaseOp::Bool(Variant::IfExists));

/// The `DateEquals` operator.
pub const DateEquals: ConditionOp = op(BaseOp::Date(DateCmp::Equals, Variant::None));

/// The `DateEqualsIfExists` operator.
pub const DateEqualsIfExists: ConditionOp = op(BaseOp::Date(DateCmp::Equals, Variant::IfExists));

/// The `DateNotEquals` operator.
pub const DateNotEquals: ConditionOp = op(BaseOp::Date(DateCmp::Equals, Variant::Negated));

/// The `DateNotEqualsIfExists` operator.
pub const DateNotEqualsIfExists: ConditionOp = op(BaseOp::Date(DateCmp::Equals, Variant::IfExistsNegated));

/// The `DateLessThan` operator.
pub const DateLessThan: ConditionOp = op(BaseOp::Date(DateCmp::LessThan, Variant::None));

/// The `DateLessThanIfExists` operator.
pub const DateLessThanIfExists: ConditionOp = op(BaseOp::Date(DateCmp::LessThan, Variant::IfExists));

/// The `DateGreaterThanEquals` operator.
pub const DateGreaterThanEquals: ConditionOp = op(BaseOp::Date(DateCmp::LessThan, Variant::Negated));

/// The `DateGreaterThanEqualsIfExists` operator.
pub const DateGreaterThanEqualsIfExists: ConditionOp = op(BaseOp::Date(DateCmp::LessThan, Variant::IfExistsNegated));

/// The `DateLessThanEquals` operator.
pub const DateLessThanEquals: ConditionOp = op(BaseOp::Date(DateCmp::LessThanEquals, Variant::None));

/// The `DateLessThanEqualsIfExists` operator.
pub const DateLessThanEqualsIfExists: ConditionOp = op(BaseOp::Date(DateCmp::LessThanEquals, Variant::IfExists));

/// The `DateGreaterThan` operator.
pub const DateGreaterThan: ConditionOp = op(BaseOp::Date(DateCmp::LessThanEquals, Variant::Negated));

/// The `DateGreaterThanIfExists` operator.
pub const DateGreaterThanIfExists: ConditionOp = op(BaseOp::Date(DateCmp::LessThanEquals, Variant::IfExistsNegated));

/// The `IpAddress` operator.
pub const IpAddress: ConditionOp = op(BaseOp::IpAddress(Variant::None));

/// The `IpAddressIfExists` operator.
pub const IpAddressIfExists: ConditionOp = op(BaseOp::IpAddress(Variant::IfExists));

/// The `NotIpAddress` operator.
pub const NotIpAddress: ConditionOp = op(BaseOp::IpAddress(Variant::Negated));

/// The `NotIpAddressIfExists` operator.
pub const NotIpAddressIfExists: ConditionOp = op(BaseOp::IpAddress(Variant::IfExistsNegated));

/// The `Null` operator.
pub const Null: ConditionOp = op(BaseOp::Null);

/// The `NumericEquals` operator.
pub const NumericEquals: ConditionOp = op(BaseOp::Numeric(NumericCmp::Equals, Variant::None));

/// The `NumericEqualsIfExists` operator.
pub const NumericEqualsIfExists: ConditionOp = op(BaseOp::Numeric(NumericCmp::Equals, Variant::IfExists));

/// The `NumericNotEquals` operator.
pub const NumericNotEquals: ConditionOp = op(BaseOp::Numeric(NumericCmp::Equals, Variant::Negated));

/// The `NumericNotEqualsIfExists` operator.
pub const NumericNotEqualsIfExists: ConditionOp = op(BaseOp::Numeric(NumericCmp::Equals, Variant::IfExistsNegated));

/// The `NumericLessThan` operator.
pub const NumericLessThan: ConditionOp = op(BaseOp::Numeric(NumericCmp::LessThan, Variant::None));

/// The `NumericLessThanIfExists` operator.
pub const NumericLessThanIfExists: ConditionOp = op(BaseOp::Numeric(NumericCmp::LessThan, Variant::IfExists));

/// The `NumericGreaterThanEquals` operator.
pub const NumericGreaterThanEquals: ConditionOp = op(BaseOp::Numeric(NumericCmp::LessThan, Variant::Negated));

/// The `NumericGreaterThanEqualsIfExists` operator.
pub const NumericGreaterThanEqualsIfExists: ConditionOp =
    op(BaseOp::Numeric(NumericCmp::LessThan, Variant::IfExistsNegated));

/// The `NumericLessThanEquals` operator.
pub const NumericLessThanEquals: ConditionOp = op(BaseOp::Numeric(NumericCmp::LessThanEquals, Variant::None));

/// The `NumericLessThanEqualsIfExists` operator.
pub const NumericLessThanEqualsIfExists: ConditionOp =
    op(BaseOp::Numeric(NumericCmp::LessThanEquals, Variant::IfExists));

/// The `NumericGreaterThan` operator.
pub const NumericGreaterThan: ConditionOp = op(BaseOp::Numeric(NumericCmp::LessThanEquals, Variant::Negated));

/// The `NumericGreaterThanIfExists` operator.
pub const NumericGreaterThanIfExists: ConditionOp =
    op(BaseOp::Numeric(NumericCmp::LessThanEquals, Variant::IfExistsNegated));

/// The `StringEquals` operator.
pub const StringEquals: ConditionOp = op(BaseOp::String(StringCmp::Equals, Variant::None));

/// The `StringEqualsIfExists` operator.
pub const StringEqualsIfExists: ConditionOp = op(BaseOp::String(StringCmp::Equals, Variant::IfExists));

/// The `StringNotEquals` operator.
pub const StringNotEquals: ConditionOp = op(BaseOp::String(StringCmp::Equals, Variant::Negated));

/// The `StringNotEqualsIfExists` operator.
pub const StringNotEqualsIfExists: ConditionOp = op(BaseOp::String(StringCmp::Equals, Variant::IfExistsNegated));

/// The `StringEqualsIgnoreCase` operator.
pub const StringEqualsIgnoreCase: ConditionOp = op(BaseOp::String(StringCmp::EqualsIgnoreCase, Variant::None));

/// The `StringEqualsIgnoreCaseIfExists` operator.
pub const StringEqualsIgnoreCaseIfExists: ConditionOp =
    op(BaseOp::String(StringCmp::EqualsIgnoreCase, Variant::IfExists));

/// The `StringNotEqualsIgnoreCase` operator.
pub const StringNotEqualsIgnoreCase: ConditionOp = op(BaseOp::String(StringCmp::EqualsIgnoreCase, Variant::Negated));

/// The `StringNotEqualsIgnoreCaseIfExists` operator.
pub const StringNotEqualsIgnoreCaseIfExists: ConditionOp =
    op(BaseOp::String(StringCmp::EqualsIgnoreCase, Variant::IfExistsNegated));

/// The `StringLike` operator. This is the default operator for condition
/// keys with no documented default of their own.
pub const StringLike: ConditionOp = op(BaseOp::String(StringCmp::Like, Variant::None));

/// The `StringLikeIfExists` operator.
pub const StringLikeIfExists: ConditionOp = op(BaseOp::String(StringCmp::Like, Variant::IfExists));

/// The `StringNotLike` operator.
pub const StringNotLike: ConditionOp = op(BaseOp::String(StringCmp::Like, Variant::Negated));

/// The `StringNotLikeIfExists` operator.
pub const StringNotLikeIfExists: ConditionOp = op(BaseOp::String(StringCmp::Like, Variant::IfExistsNegated));

/// Every named operator, keyed by its display name. `ConditionOp::from`
/// scans this instead of a hand-maintained match.
static NAMED_OPS: [(&str, ConditionOp); 53] = [
    ("ArnEquals", ArnEquals),
    ("ArnEqualsIfExists", ArnEqualsIfExists),
    ("ArnNotEquals", ArnNotEquals),
    ("ArnNotEqualsIfExists", ArnNotEqualsIfExists),
    ("ArnLike", ArnLike),
    ("ArnLikeIfExists", ArnLikeIfExists),
    ("ArnNotLike", ArnNotLike),
    ("ArnNotLikeIfExists", ArnNotLikeIfExists),
    ("BinaryEquals", BinaryEquals),
    ("BinaryEqualsIfExists", BinaryEqualsIfExists),
    ("Bool", Bool),
    ("BoolIfExists", BoolIfExists),
    ("DateEquals", DateEquals),
    ("DateEqualsIfExists", DateEqualsIfExists),
    ("DateNotEquals", DateNotEquals),
    ("DateNotEqualsIfExists", DateNotEqualsIfExists),
    ("DateLessThan", DateLessThan),
    ("DateLessThanIfExists", DateLessThanIfExists),
    ("DateGreaterThanEquals", DateGreaterThanEquals),
    ("DateGreaterThanEqualsIfExists", DateGreaterThanEqualsIfExists),
    ("DateLessThanEquals", DateLessThanEquals),
    ("DateLessThanEqualsIfExists", DateLessThanEqualsIfExists),
    ("DateGreaterThan", DateGreaterThan),
    ("DateGreaterThanIfExists", DateGreaterThanIfExists),
    ("IpAddress", IpAddress),
    ("IpAddressIfExists", IpAddressIfExists),
    ("NotIpAddress", NotIpAddress),
    ("NotIpAddressIfExists", NotIpAddressIfExists),
    ("Null", Null),
    ("NumericEquals", NumericEquals),
    ("NumericEqualsIfExists", NumericEqualsIfExists),
    ("NumericNotEquals", NumericNotEquals),
    ("NumericNotEqualsIfExists", NumericNotEqualsIfExists),
    ("NumericLessThan", NumericLessThan),
    ("NumericLessThanIfExists", NumericLessThanIfExists),
    ("NumericGreaterThanEquals", NumericGreaterThanEquals),
    ("NumericGreaterThanEqualsIfExists", NumericGreaterThanEqualsIfExists),
    ("NumericLessThanEquals", NumericLessThanEquals),
    ("NumericLessThanEqualsIfExists", NumericLessThanEqualsIfExists),
    ("NumericGreaterThan", NumericGreaterThan),
    ("NumericGreaterThanIfExists", NumericGreaterThanIfExists),
    ("StringEquals", StringEquals),
    ("StringEqualsIfExists", StringEqualsIfExists),
    ("StringNotEquals", StringNotEquals),
    ("StringNotEqualsIfExists", StringNotEqualsIfExists),
    ("StringEqualsIgnoreCase", StringEqualsIgnoreCase),
    ("StringEqualsIgnoreCaseIfExists", StringEqualsIgnoreCaseIfExists),
    ("StringNotEqualsIgnoreCase", StringNotEqualsIgnoreCase),
    ("StringNotEqualsIgnoreCaseIfExists", StringNotEqualsIgnoreCaseIfExists),
    ("StringLike", StringLike),
    ("StringLikeIfExists", StringLikeIfExists),
    ("StringNotLike", StringNotLike),
    ("StringNotLikeIfExists", StringNotLikeIfExists),
];

impl ConditionOp {
    /// Applies the `IfExists` suffix. No-op for operators without an
    /// `IfExists` form (`Null` and pass-through text).
    pub fn if_exists(self) -> Self {
        let base = match self.base {
            BaseOp::Arn(cmp, v) => BaseOp::Arn(cmp, v.with_if_exists()),
            BaseOp::Binary(v) => BaseOp::Binary(v.with_if_exists()),
            BaseOp::Bool(v) => BaseOp::Bool(v.with_if_exists()),
            BaseOp::Date(cmp, v) => BaseOp::Date(cmp, v.with_if_exists()),
            BaseOp::IpAddress(v) => BaseOp::IpAddress(v.with_if_exists()),
            BaseOp::Numeric(cmp, v) => BaseOp::Numeric(cmp, v.with_if_exists()),
            BaseOp::String(cmp, v) => BaseOp::String(cmp, v.with_if_exists()),
            other => other,
        };

        Self {
            qualifier: self.qualifier,
            base,
        }
    }

    /// Applies the `ForAllValues:` prefix for multivalued condition keys.
    pub fn for_all_values(self) -> Self {
        Self {
            qualifier: SetQualifier::ForAllValues,
            ..self
        }
    }

    /// Applies the `ForAnyValue:` prefix for multivalued condition keys.
    pub fn for_any_value(self) -> Self {
        Self {
            qualifier: SetQualifier::ForAnyValue,
            ..self
        }
    }

    #[inline]
    pub fn qualifier(&self) -> SetQualifier {
        self.qualifier
    }

    /// True if this operator is pass-through text rather than a known
    /// operator.
    pub fn is_other(&self) -> bool {
        matches!(self.base, BaseOp::Other(_))
    }
}

impl Display for ConditionOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.qualifier.prefix())?;
        match &self.base {
            BaseOp::Arn(cmp, v) => f.write_str(ARN_DISPLAY_NAMES[*cmp as usize | v.as_usize()]),
            BaseOp::Binary(v) => f.write_str(BINARY_DISPLAY_NAMES[v.as_usize()]),
            BaseOp::Bool(v) => f.write_str(BOOL_DISPLAY_NAMES[v.as_usize()]),
            BaseOp::Date(cmp, v) => f.write_str(DATE_DISPLAY_NAMES[*cmp as usize | v.as_usize()]),
            BaseOp::IpAddress(v) => f.write_str(IP_ADDRESS_DISPLAY_NAMES[v.as_usize()]),
            BaseOp::Null => f.write_str(NULL_DISPLAY_NAME),
            BaseOp::Numeric(cmp, v) => f.write_str(NUMERIC_DISPLAY_NAMES[*cmp as usize | v.as_usize()]),
            BaseOp::String(cmp, v) => f.write_str(STRING_DISPLAY_NAMES[*cmp as usize | v.as_usize()]),
            BaseOp::Other(name) => f.write_str(name),
        }
    }
}

impl From<&str> for ConditionOp {
    /// Conversion is total: text that names a known operator (with an
    /// optional set qualifier) becomes the typed form; anything else is
    /// carried through verbatim.
    fn from(s: &str) -> Self {
        let (qualifier, name) = if let Some(rest) = s.strip_prefix("ForAllValues:") {
            (SetQualifier::ForAllValues, rest)
        } else if let Some(rest) = s.strip_prefix("ForAnyValue:") {
            (SetQualifier::ForAnyValue, rest)
        } else {
            (SetQualifier::None, s)
        };

        for (known, base_op) in &NAMED_OPS {
            if *known == name {
                return Self {
                    qualifier,
                    base: base_op.base.clone(),
                };
            }
        }

        debug!("Unknown condition operator {}; passing through verbatim", s);
        Self {
            qualifier: SetQualifier::None,
            base: BaseOp::Other(s.to_string()),
        }
    }
}

impl From<String> for ConditionOp {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for ConditionOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::condition::op::{self, ConditionOp, NAMED_OPS},
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_display_round_trip() {
        for (name, known) in &NAMED_OPS {
            assert_eq!(&known.to_string(), name);
            assert_eq!(&ConditionOp::from(*name), known);
        }
    }

    #[test_log::test]
    fn test_qualifiers() {
        let qualified = op::StringEquals.for_any_value();
        assert_eq!(qualified.to_string(), "ForAnyValue:StringEquals");
        assert_eq!(ConditionOp::from("ForAnyValue:StringEquals"), qualified);

        let qualified = op::StringLike.for_all_values();
        assert_eq!(qualified.to_string(), "ForAllValues:StringLike");
        assert_eq!(ConditionOp::from("ForAllValues:StringLike"), qualified);
    }

    #[test_log::test]
    fn test_if_exists() {
        assert_eq!(op::StringEquals.if_exists(), op::StringEqualsIfExists);
        assert_eq!(op::StringNotEquals.if_exists(), op::StringNotEqualsIfExists);
        assert_eq!(op::Bool.if_exists(), op::BoolIfExists);
        assert_eq!(op::DateGreaterThan.if_exists(), op::DateGreaterThanIfExists);
        assert_eq!(op::NumericLessThan.if_exists(), op::NumericLessThanIfExists);
        assert_eq!(op::IpAddress.if_exists(), op::IpAddressIfExists);
        assert_eq!(op::BinaryEquals.if_exists(), op::BinaryEqualsIfExists);
        assert_eq!(op::ArnLike.if_exists().to_string(), "ArnLikeIfExists");

        // Null has no IfExists form.
        assert_eq!(op::Null.if_exists(), op::Null);
    }

    #[test_log::test]
    fn test_unknown_passes_through() {
        let custom = ConditionOp::from("StringEqualsIgnoringWidth");
        assert!(custom.is_other());
        assert_eq!(custom.to_string(), "StringEqualsIgnoringWidth");
        assert!(!ConditionOp::from("StringEquals").is_other());
    }

    #[test_log::test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&op::StringLike).unwrap(), r#""StringLike""#);
        assert_eq!(
            serde_json::to_string(&op::StringEquals.for_any_value()).unwrap(),
            r#""ForAnyValue:StringEquals""#
        );
    }
}
