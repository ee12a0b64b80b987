use crate::{registry::FieldType, schema::db::Type};

/// Maps primitive field types to storage types.
///
/// Two maps are active at once: the column map, used for a model's own
/// fields, and the foreign map, used for columns that reference another
/// model's primary key. They differ only for auto-increment keys, where the
/// referencing column holds the plain integer behind the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMap {
    big_serial: bool,
}

impl TypeMap {
    pub fn new(big_serial: bool) -> Self {
        Self { big_serial }
    }

    /// Storage type for a field declared on the model itself. Returns `None`
    /// for non-primitive (enum) types.
    pub fn column(&self, ty: &FieldType) -> Option<Type> {
        match ty {
            FieldType::AutoIncrement => Some(self.serial()),
            _ => self.shared(ty),
        }
    }

    /// Storage type for a column referencing a field of type `ty`.
    pub fn foreign(&self, ty: &FieldType) -> Option<Type> {
        match ty {
            FieldType::AutoIncrement if self.big_serial => Some(Type::BigInt),
            FieldType::AutoIncrement => Some(Type::Integer),
            _ => self.shared(ty),
        }
    }

    /// The auto-incrementing type for synthetic keys.
    pub fn serial(&self) -> Type {
        if self.big_serial {
            Type::BigSerial
        } else {
            Type::Serial
        }
    }

    fn shared(&self, ty: &FieldType) -> Option<Type> {
        Some(match ty {
            FieldType::UUID => Type::Uuid,
            FieldType::String => Type::Text,
            FieldType::Integer => Type::Integer,
            FieldType::Float => Type::DoublePrecision,
            FieldType::Time => Type::TimestampTz,
            FieldType::Date => Type::Date,
            FieldType::Boolean => Type::Boolean,
            FieldType::Protected => Type::Text,
            FieldType::Sealed => Type::Text,
            FieldType::AutoIncrement | FieldType::Named(_) => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_width() {
        let map = TypeMap::new(false);

        assert_eq!(map.column(&FieldType::AutoIncrement), Some(Type::Serial));
        assert_eq!(map.foreign(&FieldType::AutoIncrement), Some(Type::Integer));
        assert_eq!(map.serial(), Type::Serial);
    }

    #[test]
    fn wide_width() {
        let map = TypeMap::new(true);

        assert_eq!(map.column(&FieldType::AutoIncrement), Some(Type::BigSerial));
        assert_eq!(map.foreign(&FieldType::AutoIncrement), Some(Type::BigInt));
        assert_eq!(map.serial(), Type::BigSerial);
    }

    #[test]
    fn primitives_match_in_both_maps() {
        let map = TypeMap::new(false);

        for (ty, expect) in [
            (FieldType::UUID, Type::Uuid),
            (FieldType::String, Type::Text),
            (FieldType::Integer, Type::Integer),
            (FieldType::Float, Type::DoublePrecision),
            (FieldType::Time, Type::TimestampTz),
            (FieldType::Date, Type::Date),
            (FieldType::Boolean, Type::Boolean),
            (FieldType::Protected, Type::Text),
            (FieldType::Sealed, Type::Text),
        ] {
            assert_eq!(map.column(&ty), Some(expect));
            assert_eq!(map.foreign(&ty), Some(expect));
        }
    }

    #[test]
    fn named_types_are_not_primitive() {
        let map = TypeMap::new(false);
        let ty = FieldType::Named("Nationality".to_string());

        assert_eq!(map.column(&ty), None);
        assert_eq!(map.foreign(&ty), None);
    }
}
