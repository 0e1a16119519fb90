//! One repository per table.
//!
//! Each repository exposes `insert_batch`, which writes a whole collection
//! through multi-row `INSERT` statements on a caller-supplied connection so
//! that the caller owns the transaction boundary.

pub mod album_repo;
pub mod comment_repo;
pub mod photo_repo;
pub mod post_repo;
pub mod todo_repo;
pub mod user_repo;

pub use album_repo::AlbumRepo;
pub use comment_repo::CommentRepo;
pub use photo_repo::PhotoRepo;
pub use post_repo::PostRepo;
pub use todo_repo::TodoRepo;
pub use user_repo::UserRepo;

/// PostgreSQL caps a single statement at 65535 bind parameters.
const MAX_BIND_PARAMS: usize = 65_535;

/// Largest number of rows one `INSERT` can carry for a table with
/// `columns` bound columns.
pub(crate) fn rows_per_statement(columns: usize) -> usize {
    (MAX_BIND_PARAMS / columns).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_size_stays_under_bind_limit() {
        for columns in 1..=8 {
            assert!(rows_per_statement(columns) * columns <= MAX_BIND_PARAMS);
        }
        assert_eq!(rows_per_statement(5), 13_107);
    }
}
