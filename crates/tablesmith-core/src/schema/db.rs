mod column;
pub use column::Column;

mod fk;
pub use fk::{ForeignKey, ReferentialAction};

mod index;
pub use index::Index;

mod seed;
pub use seed::Seed;

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;

mod unique;
pub use unique::UniqueConstraint;
