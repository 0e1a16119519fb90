#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;
use tokio::net::TcpListener;

use jph_core::resource::Resource;
use jph_core::types::Record;
use jph_db::repositories::{AlbumRepo, CommentRepo, PhotoRepo, PostRepo, TodoRepo, UserRepo};
use jph_fetcher::{FetchError, RecordSource};
use jph_loader::session::{LoadSession, TransactionMode};

/// In-memory [`RecordSource`] serving fixed collections.
///
/// A resource listed in `failing` answers with HTTP 500 instead.
pub struct StubSource {
    data: HashMap<Resource, Value>,
    failing: Option<Resource>,
}

impl StubSource {
    pub fn new(data: HashMap<Resource, Value>) -> Self {
        Self {
            data,
            failing: None,
        }
    }

    pub fn failing_on(mut self, resource: Resource) -> Self {
        self.failing = Some(resource);
        self
    }

    pub fn with(mut self, resource: Resource, records: Value) -> Self {
        self.data.insert(resource, records);
        self
    }

    /// Number of records served for `resource`.
    pub fn len(&self, resource: Resource) -> usize {
        self.data
            .get(&resource)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl RecordSource for StubSource {
    async fn fetch(&self, resource: Resource) -> Result<Vec<Record>, FetchError> {
        if self.failing == Some(resource) {
            return Err(FetchError::Status {
                url: format!("http://stub.test/{resource}"),
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(self
            .data
            .get(&resource)
            .map(|v| serde_json::from_value(v.clone()).unwrap())
            .unwrap_or_default())
    }
}

/// A small, internally consistent copy of the six collections.
pub fn fixture() -> HashMap<Resource, Value> {
    HashMap::from([
        (
            Resource::Users,
            json!([
                {
                    "id": 1,
                    "name": "Leanne Graham",
                    "username": "Bret",
                    "email": "Sincere@april.biz",
                    "address": { "street": "Kulas Light", "city": "Gwenborough" },
                    "phone": "1-770-736-8031 x56442",
                    "website": "hildegard.org",
                    "company": { "name": "Romaguera-Crona" }
                },
                {
                    "id": 2,
                    "name": "Ervin Howell",
                    "username": "Antonette",
                    "email": "Shanna@melissa.tv",
                    "address": { "street": "Victor Plains", "city": "Wisokyburgh" },
                    "phone": "010-692-6593 x09125",
                    "website": "anastasia.net",
                    "company": { "name": "Deckow-Crist" }
                }
            ]),
        ),
        (
            Resource::Posts,
            json!([
                { "userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit" },
                { "userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore" },
                { "userId": 2, "id": 11, "title": "et ea vero quia", "body": "delectus reiciendis" }
            ]),
        ),
        (
            Resource::Comments,
            json!([
                { "postId": 1, "id": 1, "name": "id labore", "email": "Eliseo@gardner.biz", "body": "laudantium" },
                { "postId": 1, "id": 2, "name": "quo vero", "email": "Jayne_Kuhic@sydney.com", "body": "est natus" },
                { "postId": 2, "id": 6, "name": "et fugit", "email": "Presley.Mueller@myrl.com", "body": "doloribus" },
                { "postId": 11, "id": 51, "name": "molestias", "email": "Oswald.Vandervort@leanne.org", "body": "deleniti" }
            ]),
        ),
        (
            Resource::Albums,
            json!([
                { "userId": 1, "id": 1, "title": "quidem molestiae enim" },
                { "userId": 2, "id": 11, "title": "quam nostrum impedit" }
            ]),
        ),
        (
            Resource::Photos,
            json!([
                { "albumId": 1, "id": 1, "title": "accusamus", "url": "https://via.placeholder.com/600/92c952", "thumbnailUrl": "https://via.placeholder.com/150/92c952" },
                { "albumId": 1, "id": 2, "title": "reprehenderit", "url": "https://via.placeholder.com/600/771796", "thumbnailUrl": "https://via.placeholder.com/150/771796" },
                { "albumId": 11, "id": 501, "title": "asperiores", "url": "https://via.placeholder.com/600/6b3b2", "thumbnailUrl": "https://via.placeholder.com/150/6b3b2" }
            ]),
        ),
        (
            Resource::Todos,
            json!([
                { "userId": 1, "id": 1, "title": "delectus aut autem", "completed": false },
                { "userId": 1, "id": 4, "title": "et porro tempora", "completed": true },
                { "userId": 2, "id": 21, "title": "suscipit repellat", "completed": false }
            ]),
        ),
    ])
}

pub async fn session(pool: &PgPool, mode: TransactionMode) -> LoadSession {
    jph_db::ensure_schema(pool).await.unwrap();
    LoadSession::new(pool.clone(), mode)
}

/// Row count of every table, in load order.
pub async fn row_counts(pool: &PgPool) -> [i64; 6] {
    [
        UserRepo::count(pool).await.unwrap(),
        PostRepo::count(pool).await.unwrap(),
        CommentRepo::count(pool).await.unwrap(),
        AlbumRepo::count(pool).await.unwrap(),
        PhotoRepo::count(pool).await.unwrap(),
        TodoRepo::count(pool).await.unwrap(),
    ]
}

/// Serve the fixture collections at `/{resource}`, except `missing`, which
/// answers 404.
pub async fn spawn_api(missing: Option<Resource>) -> String {
    let data = fixture();
    let app = Router::new().route(
        "/{resource}",
        get(move |Path(name): Path<String>| {
            let data = data.clone();
            async move {
                match name.parse::<Resource>() {
                    Ok(resource) if Some(resource) != missing => {
                        Ok(Json(data.get(&resource).cloned().unwrap_or(Value::Null)))
                    }
                    _ => Err(StatusCode::NOT_FOUND),
                }
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
