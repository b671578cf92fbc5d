//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument and run a single statement.

pub mod director_repo;
pub mod movie_repo;

pub use director_repo::DirectorRepo;
pub use movie_repo::MovieRepo;
