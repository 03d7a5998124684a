use {
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// The coarse classification assigned to each service action, used for
/// auditing and filtering queries. Serialization never consults it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AccessLevel {
    Read,
    Write,
    List,
    Tagging,
    #[serde(rename = "Permissions management")]
    PermissionsManagement,
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Read => f.write_str("Read"),
            Self::Write => f.write_str("Write"),
            Self::List => f.write_str("List"),
            Self::Tagging => f.write_str("Tagging"),
            Self::PermissionsManagement => f.write_str("Permissions management"),
        }
    }
}
