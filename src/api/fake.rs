//! In-memory collection resource for tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{ApiError, ApiResult, CollectionResource};
use crate::models::{Draft, Record};

/// Remote collection held in memory, with call counting and injectable failure
pub struct FakeResource<R> {
    records: RefCell<Vec<R>>,
    next_id: Cell<u32>,
    calls: Cell<usize>,
    failure: RefCell<Option<ApiError>>,
    blank: fn(u32) -> R,
}

impl<R: Record> FakeResource<R> {
    /// `blank(id)` makes an empty record that a create draft is then applied to
    pub fn new(records: Vec<R>, blank: fn(u32) -> R) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            records: RefCell::new(records),
            next_id: Cell::new(next_id),
            calls: Cell::new(0),
            failure: RefCell::new(None),
            blank,
        }
    }

    pub fn with_next_id(self, id: u32) -> Self {
        self.next_id.set(id);
        self
    }

    /// Make every following call fail with `err` (or succeed again with `None`)
    pub fn fail_with(&self, err: Option<ApiError>) {
        *self.failure.borrow_mut() = err;
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn records(&self) -> Vec<R> {
        self.records.borrow().clone()
    }

    fn begin(&self) -> ApiResult<()> {
        self.calls.set(self.calls.get() + 1);
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl<R, D> CollectionResource<R, D> for FakeResource<R>
where
    R: Record,
    D: Draft<R>,
{
    async fn list(&self) -> ApiResult<Vec<R>> {
        self.begin()?;
        Ok(self.records())
    }

    async fn create(&self, draft: &D) -> ApiResult<R> {
        self.begin()?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let mut record = (self.blank)(id);
        draft.apply_to(&mut record);
        self.records.borrow_mut().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: u32, draft: &D) -> ApiResult<()> {
        self.begin()?;
        let mut records = self.records.borrow_mut();
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(ApiError::ServerRejected { status: 404 })?;
        draft.apply_to(record);
        Ok(())
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.begin()?;
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(ApiError::ServerRejected { status: 404 });
        }
        Ok(())
    }
}
