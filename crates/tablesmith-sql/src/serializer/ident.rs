use super::{Formatter, ToSql};

/// A double-quoted identifier
pub(super) struct Ident<S>(pub(super) S);

/// An index column name as the compiler stored it. Reserved words already
/// carry their quotes.
pub(super) struct IndexColumn<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('"');
        for c in self.0.as_ref().chars() {
            if c == '"' {
                f.dst.push('"');
            }
            f.dst.push(c);
        }
        f.dst.push('"');
    }
}

impl<S: AsRef<str>> ToSql for IndexColumn<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self.0.as_ref());
    }
}
