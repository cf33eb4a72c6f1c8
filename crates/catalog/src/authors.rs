use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, PartialEq, Eq, Hash, Clone, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub String);

impl From<&str> for AuthorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    #[serde(default)]
    pub verified: bool,
}
