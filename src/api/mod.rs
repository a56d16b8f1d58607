//! Remote Collection Resources
//!
//! The REST contract the screens consume, one collection per entity type:
//!
//! | Operation | Method | Path                  |
//! |-----------|--------|-----------------------|
//! | list      | GET    | `/{resource}`         |
//! | create    | POST   | `/{resource}`         |
//! | update    | PUT    | `/{resource}/{id}`    |
//! | delete    | DELETE | `/{resource}/{id}`    |

mod error;
#[cfg(target_arch = "wasm32")]
mod http;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

pub use error::{classify, ApiError, ApiResult};
#[cfg(target_arch = "wasm32")]
pub use http::HttpResource;

/// A remote collection of `R` records edited through `D` drafts.
///
/// Browser futures are not `Send`, so neither are these.
#[async_trait(?Send)]
pub trait CollectionResource<R, D> {
    /// Fetch the whole collection in server order
    async fn list(&self) -> ApiResult<Vec<R>>;

    /// Create a record; the response carries the assigned id
    async fn create(&self, draft: &D) -> ApiResult<R>;

    async fn update(&self, id: u32, draft: &D) -> ApiResult<()>;

    async fn delete(&self, id: u32) -> ApiResult<()>;
}
