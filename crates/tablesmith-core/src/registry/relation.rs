use serde::{Deserialize, Serialize};

/// A relation from the declaring model to another model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(rename = "type")]
    pub ty: RelationType,
}

/// Cardinality and direction of a relation.
///
/// `For*` relations are owned by the declaring model and are the only ones
/// that become columns or junction tables. `Has*` relations are their
/// inverse and are declared on the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    ForOne,
    ForMany,
    HasOne,
    HasMany,
}

impl Relation {
    pub fn new(ty: RelationType) -> Self {
        Self { ty }
    }
}

impl RelationType {
    pub fn is_for(self) -> bool {
        matches!(self, Self::ForOne | Self::ForMany)
    }

    pub fn is_has(self) -> bool {
        !self.is_for()
    }

    pub fn is_one(self) -> bool {
        matches!(self, Self::ForOne | Self::HasOne)
    }

    pub fn is_many(self) -> bool {
        !self.is_one()
    }
}
