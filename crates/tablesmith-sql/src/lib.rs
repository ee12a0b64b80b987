pub mod serializer;
pub use serializer::Serializer;

mod writer;
pub use writer::SqlFileWriter;
