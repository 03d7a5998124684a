use {
    serde::{ser::SerializeSeq, Serialize, Serializer},
    std::ops::Index,
    std::slice::Iter,
};

/// Implement Display for a given class by formatting it as pretty-printed JSON.
#[macro_export]
macro_rules! display_json {
    ($cls:ident) => {
        impl std::fmt::Display for $cls {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let buf = Vec::new();
                let serde_formatter = ::serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = ::serde_json::Serializer::with_formatter(buf, serde_formatter);
                match self.serialize(&mut ser) {
                    Ok(()) => (),
                    Err(e) => {
                        ::log::error!("Failed to serialize: {}", e);
                        return Err(::std::fmt::Error {});
                    }
                };
                match std::str::from_utf8(&ser.into_inner()) {
                    Ok(s) => write!(f, "{}", s),
                    Err(e) => {
                        ::log::error!("JSON serialization contained non-UTF-8 characters: {}", e);
                        Err(::std::fmt::Error {})
                    }
                }
            }
        }
    };
}

/// An insertion-ordered set of strings that serializes as a bare string when
/// it holds exactly one member and as a JSON array otherwise, mirroring the
/// single-element shorthand IAM uses for `Action` and `Resource`.
///
/// Inserting a member that is already present is a no-op; the first insertion
/// fixes the member's position.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StringSet {
    members: Vec<String>,
}

impl StringSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `member`, returning false if it was already present.
    pub fn insert<S: Into<String>>(&mut self, member: S) -> bool {
        let member = member.into();
        if self.contains(&member) {
            false
        } else {
            self.members.push(member);
            true
        }
    }

    #[inline]
    pub fn contains(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String> {
        self.members.iter()
    }

    pub fn to_vec(&self) -> Vec<&str> {
        self.members.iter().map(String::as_str).collect()
    }
}

impl From<Vec<String>> for StringSet {
    fn from(members: Vec<String>) -> Self {
        let mut result = Self::new();
        for member in members {
            result.insert(member);
        }
        result
    }
}

impl Index<usize> for StringSet {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.members[index]
    }
}

impl Serialize for StringSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.members.len() == 1 {
            serializer.serialize_str(&self.members[0])
        } else {
            let mut seq = serializer.serialize_seq(Some(self.members.len()))?;
            for member in &self.members {
                seq.serialize_element(member)?;
            }
            seq.end()
        }
    }
}
