//! Derivation of every database identifier the compiler emits.
//!
//! All functions are pure: the same input names always produce the same
//! output, independent of how the names were cased in the source.

use crate::schema::Name;

const INDEX_PREFIX: &str = "idx";
const UNIQUE_INDEX_PREFIX: &str = "uidx";
const FOREIGN_KEY_PREFIX: &str = "fk";
const UNIQUE_CONSTRAINT_PREFIX: &str = "uq";

/// `Person` → `people`, `OrderItem` → `order_items`
pub fn table_name(model: &str) -> String {
    Name::new(model).plural_snake_case()
}

/// `LastName` → `last_name`
pub fn column_name(field: &str) -> String {
    Name::new(field).snake_case()
}

/// Column holding the id of an enum entry: `Nationality` → `nationality_id`
pub fn enum_column_name(field: &str) -> String {
    format!("{}_id", column_name(field))
}

/// Column referencing another model's primary key: `Company`, `ID` →
/// `company_id`
pub fn foreign_key_column_name(model: &str, field: &str) -> String {
    format!("{}_{}", Name::new(model).snake_case(), column_name(field))
}

/// Name of the join table between two models.
///
/// The argument order does not matter: both sides of a relation produce
/// the same name. `Tag`, `Person` → `person_tags`.
pub fn junction_table_name(a: &str, b: &str) -> String {
    let mut names = [Name::new(a), Name::new(b)];
    names.sort();

    let [first, second] = names;
    let mut parts = first.parts;
    parts.extend(second.parts);

    Name { parts }.plural_snake_case()
}

pub fn index_name<S: AsRef<str>>(table: &str, columns: &[S]) -> String {
    prefixed(INDEX_PREFIX, table, columns)
}

pub fn unique_index_name<S: AsRef<str>>(table: &str, columns: &[S]) -> String {
    prefixed(UNIQUE_INDEX_PREFIX, table, columns)
}

pub fn foreign_key_name<S: AsRef<str>>(table: &str, columns: &[S]) -> String {
    prefixed(FOREIGN_KEY_PREFIX, table, columns)
}

pub fn unique_constraint_name<S: AsRef<str>>(table: &str, columns: &[S]) -> String {
    prefixed(UNIQUE_CONSTRAINT_PREFIX, table, columns)
}

fn prefixed<S: AsRef<str>>(prefix: &str, table: &str, columns: &[S]) -> String {
    let mut name = format!("{prefix}_{table}");
    for column in columns {
        name.push('_');
        name.push_str(column.as_ref());
    }
    name
}
