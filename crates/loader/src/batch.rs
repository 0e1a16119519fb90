//! Typed batches: one resource's records after mapping.

use jph_core::error::RecordError;
use jph_core::resource::Resource;
use jph_core::types::Record;
use jph_db::models::album::Album;
use jph_db::models::comment::Comment;
use jph_db::models::map_records;
use jph_db::models::photo::Photo;
use jph_db::models::post::Post;
use jph_db::models::todo::Todo;
use jph_db::models::user::User;
use jph_db::repositories::{AlbumRepo, CommentRepo, PhotoRepo, PostRepo, TodoRepo, UserRepo};
use sqlx::PgConnection;

#[derive(Debug, Clone, PartialEq)]
pub enum Batch {
    Users(Vec<User>),
    Posts(Vec<Post>),
    Comments(Vec<Comment>),
    Albums(Vec<Album>),
    Photos(Vec<Photo>),
    Todos(Vec<Todo>),
}

impl Batch {
    /// Map the raw records of `resource` onto its entity type.
    pub fn map(resource: Resource, records: Vec<Record>) -> Result<Self, RecordError> {
        Ok(match resource {
            Resource::Users => Batch::Users(map_records(resource, records)?),
            Resource::Posts => Batch::Posts(map_records(resource, records)?),
            Resource::Comments => Batch::Comments(map_records(resource, records)?),
            Resource::Albums => Batch::Albums(map_records(resource, records)?),
            Resource::Photos => Batch::Photos(map_records(resource, records)?),
            Resource::Todos => Batch::Todos(map_records(resource, records)?),
        })
    }

    pub fn resource(&self) -> Resource {
        match self {
            Batch::Users(_) => Resource::Users,
            Batch::Posts(_) => Resource::Posts,
            Batch::Comments(_) => Resource::Comments,
            Batch::Albums(_) => Resource::Albums,
            Batch::Photos(_) => Resource::Photos,
            Batch::Todos(_) => Resource::Todos,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Batch::Users(rows) => rows.len(),
            Batch::Posts(rows) => rows.len(),
            Batch::Comments(rows) => rows.len(),
            Batch::Albums(rows) => rows.len(),
            Batch::Photos(rows) => rows.len(),
            Batch::Todos(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage the whole batch on `conn`. Does not commit.
    pub async fn insert(&self, conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        match self {
            Batch::Users(rows) => UserRepo::insert_batch(conn, rows).await,
            Batch::Posts(rows) => PostRepo::insert_batch(conn, rows).await,
            Batch::Comments(rows) => CommentRepo::insert_batch(conn, rows).await,
            Batch::Albums(rows) => AlbumRepo::insert_batch(conn, rows).await,
            Batch::Photos(rows) => PhotoRepo::insert_batch(conn, rows).await,
            Batch::Todos(rows) => TodoRepo::insert_batch(conn, rows).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn records(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_into_matching_variant() {
        let batch = Batch::map(
            Resource::Albums,
            records(json!([
                { "userId": 1, "id": 1, "title": "quidem molestiae enim" },
                { "userId": 1, "id": 2, "title": "sunt qui excepturi" }
            ])),
        )
        .unwrap();

        assert_eq!(batch.resource(), Resource::Albums);
        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());
    }

    #[test]
    fn every_resource_maps_an_empty_collection() {
        for resource in Resource::LOAD_ORDER {
            let batch = Batch::map(resource, Vec::new()).unwrap();
            assert_eq!(batch.resource(), resource);
            assert!(batch.is_empty());
        }
    }

    #[test]
    fn mapping_error_carries_resource() {
        let err = Batch::map(Resource::Todos, records(json!([{ "id": 1 }]))).unwrap_err();
        assert_eq!(err.resource, Resource::Todos);
        assert_eq!(err.index, 0);
    }
}
