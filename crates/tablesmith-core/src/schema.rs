pub mod db;

mod name;
pub use name::Name;

mod verify;
pub use verify::verify;
