//! Collection Synchronizer
//!
//! Keeps an ordered local copy of a remote collection in step with the
//! server. The local copy changes only after the server confirms a call:
//!
//! - load: replace everything, keep server order
//! - create: append the server's record, clear the draft
//! - update: patch the matching record in place, leave edit mode
//! - delete: drop the matching record
//!
//! A failed call leaves the records untouched and is kept in `error`.
//!
//! State lives behind a [`StateCell`] so the same drivers run against a
//! reactive signal in the browser and a plain `RefCell` in tests. A cell
//! whose owner is gone refuses writes; late results are then dropped.

use crate::api::{ApiError, ApiResult, CollectionResource};
use crate::models::{Draft, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial fetch not settled yet
    Loading,
    Ready,
}

/// What submitting the form does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update(u32),
}

/// Everything one screen knows about one collection
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<R, D> {
    pub phase: Phase,
    pub items: Vec<R>,
    pub draft: D,
    /// Edit target; `None` means the form creates
    pub editing: Option<u32>,
    /// Last failed call, cleared by the next success
    pub error: Option<ApiError>,
}

impl<R: Record, D: Draft<R>> Default for CollectionState<R, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record, D: Draft<R>> CollectionState<R, D> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            items: Vec::new(),
            draft: D::default(),
            editing: None,
            error: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Record ids in display order
    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(Record::id).collect()
    }

    pub fn mode(&self) -> Mode {
        match self.editing {
            Some(id) => Mode::Update(id),
            None => Mode::Create,
        }
    }

    // ========================
    // Local transitions
    // ========================

    /// Load a record into the form and make it the edit target
    pub fn begin_edit(&mut self, record: &R) {
        log::debug!("editing {} #{}", R::RESOURCE, record.id());
        self.editing = Some(record.id());
        self.draft = D::from_record(record);
    }

    /// Back to create mode with an empty form
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft = D::default();
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Draft to send if the form is in create mode and complete
    pub fn pending_create(&self) -> Option<D> {
        match self.mode() {
            Mode::Create if self.draft.is_complete() => Some(self.draft.clone()),
            _ => None,
        }
    }

    /// Target and draft to send if the form is in update mode and complete
    pub fn pending_update(&self) -> Option<(u32, D)> {
        match self.mode() {
            Mode::Update(id) if self.draft.is_complete() => Some((id, self.draft.clone())),
            _ => None,
        }
    }

    // ========================
    // Settled remote calls
    // ========================

    pub fn apply_loaded(&mut self, outcome: ApiResult<Vec<R>>) {
        match outcome {
            Ok(items) => {
                log::info!("loaded {} {}", items.len(), R::RESOURCE);
                self.items = items;
                self.error = None;
            }
            Err(err) => self.fail("load", err),
        }
        // Ready once settled, even on failure
        self.phase = Phase::Ready;
    }

    pub fn apply_created(&mut self, outcome: ApiResult<R>) {
        match outcome {
            Ok(record) => {
                log::info!("created {} #{}", R::RESOURCE, record.id());
                self.items.push(record);
                self.draft = D::default();
                self.error = None;
            }
            Err(err) => self.fail("create", err),
        }
    }

    pub fn apply_updated(&mut self, id: u32, draft: &D, outcome: ApiResult<()>) {
        match outcome {
            Ok(()) => {
                log::info!("updated {} #{id}", R::RESOURCE);
                if let Some(record) = self.items.iter_mut().find(|record| record.id() == id) {
                    draft.apply_to(record);
                }
                self.cancel_edit();
                self.error = None;
            }
            // Edit mode stays on so the user can retry
            Err(err) => self.fail("update", err),
        }
    }

    pub fn apply_deleted(&mut self, id: u32, outcome: ApiResult<()>) {
        match outcome {
            Ok(()) => {
                log::info!("deleted {} #{id}", R::RESOURCE);
                self.items.retain(|record| record.id() != id);
                if self.editing == Some(id) {
                    self.cancel_edit();
                }
                self.error = None;
            }
            Err(err) => self.fail("delete", err),
        }
    }

    fn fail(&mut self, op: &str, err: ApiError) {
        log::warn!("{op} {} failed: {err}", R::RESOURCE);
        self.error = Some(err);
    }
}

/// 1-based table row number of `id` within `ids`, `0` once it is gone
pub fn row_number(ids: &[u32], id: u32) -> usize {
    ids.iter().position(|&other| other == id).map_or(0, |pos| pos + 1)
}

/// Shared handle to a [`CollectionState`].
///
/// Both methods return `None`/`false` once the owner is gone.
pub trait StateCell<R, D> {
    fn read<T>(&self, f: impl FnOnce(&CollectionState<R, D>) -> T) -> Option<T>;

    fn write(&self, f: impl FnOnce(&mut CollectionState<R, D>)) -> bool;
}

fn settle<R, D, C>(cell: &C, op: &str, f: impl FnOnce(&mut CollectionState<R, D>))
where
    R: Record,
    C: StateCell<R, D>,
{
    if !cell.write(f) {
        log::debug!("{op} {} settled after unmount, dropped", R::RESOURCE);
    }
}

// ========================
// Drivers
// ========================

/// Fetch the collection and replace the local copy
pub async fn load<R, D, C, S>(cell: &C, resource: &S)
where
    R: Record,
    D: Draft<R>,
    C: StateCell<R, D>,
    S: CollectionResource<R, D> + ?Sized,
{
    let outcome = resource.list().await;
    settle::<R, D, _>(cell, "load", |state| state.apply_loaded(outcome));
}

/// Load two collections concurrently; returns once both have settled
pub async fn load_pair<R1, D1, C1, S1, R2, D2, C2, S2>(
    first: (&C1, &S1),
    second: (&C2, &S2),
) where
    R1: Record,
    D1: Draft<R1>,
    C1: StateCell<R1, D1>,
    S1: CollectionResource<R1, D1> + ?Sized,
    R2: Record,
    D2: Draft<R2>,
    C2: StateCell<R2, D2>,
    S2: CollectionResource<R2, D2> + ?Sized,
{
    futures::join!(
        load::<R1, D1, C1, S1>(first.0, first.1),
        load::<R2, D2, C2, S2>(second.0, second.1),
    );
}

/// Create from the current draft. Incomplete drafts are ignored.
pub async fn create<R, D, C, S>(cell: &C, resource: &S)
where
    R: Record,
    D: Draft<R>,
    C: StateCell<R, D>,
    S: CollectionResource<R, D> + ?Sized,
{
    let Some(draft) = cell.read(CollectionState::pending_create).flatten() else {
        log::debug!("create {} skipped: draft incomplete", R::RESOURCE);
        return;
    };
    let outcome = resource.create(&draft).await;
    settle::<R, D, _>(cell, "create", |state| state.apply_created(outcome));
}

/// Save the draft onto the edit target. Needs an edit target and a complete draft.
pub async fn update<R, D, C, S>(cell: &C, resource: &S)
where
    R: Record,
    D: Draft<R>,
    C: StateCell<R, D>,
    S: CollectionResource<R, D> + ?Sized,
{
    let Some((id, draft)) = cell.read(CollectionState::pending_update).flatten() else {
        log::debug!("update {} skipped: no target or draft incomplete", R::RESOURCE);
        return;
    };
    let outcome = resource.update(id, &draft).await;
    settle::<R, D, _>(cell, "update", |state| state.apply_updated(id, &draft, outcome));
}

pub async fn delete<R, D, C, S>(cell: &C, resource: &S, id: u32)
where
    R: Record,
    D: Draft<R>,
    C: StateCell<R, D>,
    S: CollectionResource<R, D> + ?Sized,
{
    let outcome = resource.delete(id).await;
    settle::<R, D, _>(cell, "delete", |state| state.apply_deleted(id, outcome));
}

/// Form submit: create or update depending on the current mode
pub async fn submit<R, D, C, S>(cell: &C, resource: &S)
where
    R: Record,
    D: Draft<R>,
    C: StateCell<R, D>,
    S: CollectionResource<R, D> + ?Sized,
{
    match cell.read(CollectionState::mode) {
        Some(Mode::Create) => create::<R, D, C, S>(cell, resource).await,
        Some(Mode::Update(_)) => update::<R, D, C, S>(cell, resource).await,
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::fake::FakeResource;
    use crate::models::{Category, CategoryDraft, Label, LabelDraft, LabelNameDraft};

    type Categories = RefCell<CollectionState<Category, CategoryDraft>>;

    impl<R, D> StateCell<R, D> for RefCell<CollectionState<R, D>> {
        fn read<T>(&self, f: impl FnOnce(&CollectionState<R, D>) -> T) -> Option<T> {
            Some(f(&self.borrow()))
        }

        fn write(&self, f: impl FnOnce(&mut CollectionState<R, D>)) -> bool {
            f(&mut self.borrow_mut());
            true
        }
    }

    /// A cell whose screen has been torn down
    struct Disposed;

    impl<R, D> StateCell<R, D> for Disposed {
        fn read<T>(&self, _f: impl FnOnce(&CollectionState<R, D>) -> T) -> Option<T> {
            None
        }

        fn write(&self, _f: impl FnOnce(&mut CollectionState<R, D>)) -> bool {
            false
        }
    }

    fn cat(id: u32, name: &str) -> Category {
        Category { id, name: name.to_string() }
    }

    fn categories(records: Vec<Category>) -> FakeResource<Category> {
        FakeResource::new(records, |id| cat(id, ""))
    }

    fn labels(records: Vec<Label>) -> FakeResource<Label> {
        FakeResource::new(records, |id| Label { id, name: String::new(), category_id: None })
    }

    async fn loaded(remote: &FakeResource<Category>) -> Categories {
        let cell = Categories::default();
        load(&cell, remote).await;
        cell
    }

    fn set_name(cell: &Categories, name: &str) {
        cell.borrow_mut().draft.name = name.to_string();
    }

    #[tokio::test]
    async fn test_load_keeps_server_order() {
        let remote = categories(vec![cat(3, "C"), cat(1, "A"), cat(2, "B")]);
        let cell = loaded(&remote).await;

        let state = cell.borrow();
        assert!(state.is_ready());
        assert_eq!(state.items, vec![cat(3, "C"), cat(1, "A"), cat(2, "B")]);
        assert_eq!(state.mode(), Mode::Create);
    }

    #[tokio::test]
    async fn test_load_twice_is_stable() {
        let remote = categories(vec![cat(1, "A"), cat(2, "B")]);
        let cell = loaded(&remote).await;
        let first = cell.borrow().items.clone();

        load(&cell, &remote).await;
        assert_eq!(cell.borrow().items, first);
    }

    #[tokio::test]
    async fn test_failed_load_is_ready_and_empty() {
        let remote = categories(vec![cat(1, "A")]);
        remote.fail_with(Some(ApiError::Network("offline".into())));
        let cell = loaded(&remote).await;

        let state = cell.borrow();
        assert!(state.is_ready());
        assert!(state.items.is_empty());
        assert_eq!(state.error, Some(ApiError::Network("offline".into())));
    }

    #[tokio::test]
    async fn test_create_appends_server_record() {
        let remote = categories(vec![]).with_next_id(7);
        let cell = loaded(&remote).await;
        set_name(&cell, "Cardio");

        create(&cell, &remote).await;

        let state = cell.borrow();
        assert_eq!(state.items, vec![cat(7, "Cardio")]);
        assert_eq!(state.draft, CategoryDraft::default());
    }

    #[tokio::test]
    async fn test_create_with_empty_name_makes_no_call() {
        let remote = categories(vec![cat(1, "A")]);
        let cell = loaded(&remote).await;
        let calls = remote.calls();

        create(&cell, &remote).await;
        set_name(&cell, "  ");
        submit(&cell, &remote).await;

        assert_eq!(remote.calls(), calls);
        assert_eq!(cell.borrow().items, vec![cat(1, "A")]);
    }

    #[tokio::test]
    async fn test_update_in_place() {
        let remote = categories(vec![cat(1, "A"), cat(2, "B")]);
        let cell = loaded(&remote).await;

        cell.borrow_mut().begin_edit(&cat(1, "A"));
        assert_eq!(cell.borrow().mode(), Mode::Update(1));
        assert_eq!(cell.borrow().draft.name, "A");
        set_name(&cell, "A2");

        submit(&cell, &remote).await;

        let state = cell.borrow();
        assert_eq!(state.items, vec![cat(1, "A2"), cat(2, "B")]);
        assert_eq!(state.mode(), Mode::Create);
        assert_eq!(state.draft, CategoryDraft::default());
        assert_eq!(remote.records(), vec![cat(1, "A2"), cat(2, "B")]);
    }

    #[tokio::test]
    async fn test_update_needs_edit_target() {
        let remote = categories(vec![cat(1, "A")]);
        let cell = loaded(&remote).await;
        set_name(&cell, "A2");
        let calls = remote.calls();

        update(&cell, &remote).await;

        assert_eq!(remote.calls(), calls);
        assert_eq!(cell.borrow().items, vec![cat(1, "A")]);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let remote = categories(vec![cat(1, "A"), cat(2, "B"), cat(3, "C")]);
        let cell = loaded(&remote).await;

        delete(&cell, &remote, 2).await;

        assert_eq!(cell.borrow().items, vec![cat(1, "A"), cat(3, "C")]);
    }

    #[tokio::test]
    async fn test_deleting_edit_target_leaves_edit_mode() {
        let remote = categories(vec![cat(1, "A"), cat(2, "B")]);
        let cell = loaded(&remote).await;
        cell.borrow_mut().begin_edit(&cat(2, "B"));

        delete(&cell, &remote, 2).await;

        assert_eq!(cell.borrow().mode(), Mode::Create);
    }

    #[tokio::test]
    async fn test_failed_mutations_leave_items_untouched() {
        let remote = categories(vec![cat(1, "A"), cat(2, "B")]);
        let cell = loaded(&remote).await;
        let before = cell.borrow().items.clone();
        remote.fail_with(Some(ApiError::ServerRejected { status: 500 }));

        set_name(&cell, "New");
        create(&cell, &remote).await;
        assert_eq!(cell.borrow().items, before);
        assert_eq!(cell.borrow().draft.name, "New");

        cell.borrow_mut().begin_edit(&cat(1, "A"));
        set_name(&cell, "A2");
        update(&cell, &remote).await;
        assert_eq!(cell.borrow().items, before);
        assert_eq!(cell.borrow().mode(), Mode::Update(1));

        delete(&cell, &remote, 2).await;
        assert_eq!(cell.borrow().items, before);
        assert_eq!(cell.borrow().error, Some(ApiError::ServerRejected { status: 500 }));
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let remote = categories(vec![cat(1, "A")]);
        let cell = loaded(&remote).await;
        remote.fail_with(Some(ApiError::Network("offline".into())));
        delete(&cell, &remote, 1).await;
        assert!(cell.borrow().error.is_some());

        remote.fail_with(None);
        delete(&cell, &remote, 1).await;
        assert_eq!(cell.borrow().error, None);
        assert!(cell.borrow().items.is_empty());
    }

    #[tokio::test]
    async fn test_results_after_unmount_are_dropped() {
        let remote = categories(vec![cat(1, "A")]);
        load::<Category, CategoryDraft, _, _>(&Disposed, &remote).await;
        delete::<Category, CategoryDraft, _, _>(&Disposed, &remote, 1).await;

        // The call itself still happened
        assert_eq!(remote.calls(), 2);
        assert!(remote.records().is_empty());
    }

    #[test]
    fn test_cancel_edit() {
        let mut state = CollectionState::<Category, CategoryDraft>::new();
        state.begin_edit(&cat(4, "Core"));
        state.cancel_edit();
        assert_eq!(state.mode(), Mode::Create);
        assert_eq!(state.draft, CategoryDraft::default());
    }

    #[tokio::test]
    async fn test_label_screen_loads_both_lists() {
        let label_remote = labels(vec![Label { id: 1, name: "Squat".into(), category_id: Some(1) }]);
        let category_remote = categories(vec![cat(1, "Strength")]);
        let label_cell = RefCell::new(CollectionState::<Label, LabelDraft>::new());
        let category_cell = Categories::default();

        load_pair((&label_cell, &label_remote), (&category_cell, &category_remote)).await;

        assert!(label_cell.borrow().is_ready());
        assert!(category_cell.borrow().is_ready());
        assert_eq!(category_cell.borrow().items, vec![cat(1, "Strength")]);
    }

    #[tokio::test]
    async fn test_label_screen_ready_even_if_one_load_fails() {
        let label_remote = labels(vec![]);
        let category_remote = categories(vec![cat(1, "Strength")]);
        label_remote.fail_with(Some(ApiError::Parse("bad json".into())));
        let label_cell = RefCell::new(CollectionState::<Label, LabelDraft>::new());
        let category_cell = Categories::default();

        load_pair((&label_cell, &label_remote), (&category_cell, &category_remote)).await;

        assert!(label_cell.borrow().is_ready() && category_cell.borrow().is_ready());
        assert!(label_cell.borrow().items.is_empty());
        assert_eq!(category_cell.borrow().items.len(), 1);
    }

    #[tokio::test]
    async fn test_label_create_requires_category() {
        let remote = labels(vec![]);
        let cell = RefCell::new(CollectionState::<Label, LabelDraft>::new());
        load(&cell, &remote).await;

        cell.borrow_mut().draft.name = "Squat".into();
        create(&cell, &remote).await;
        assert!(cell.borrow().items.is_empty());

        cell.borrow_mut().draft.category_id = Some(1);
        create(&cell, &remote).await;
        assert_eq!(
            cell.borrow().items,
            vec![Label { id: 1, name: "Squat".into(), category_id: Some(1) }]
        );
        assert_eq!(cell.borrow().draft, LabelDraft::default());
    }

    #[tokio::test]
    async fn test_edit_then_delete_category() {
        let remote = categories(vec![cat(1, "Legs")]);
        let cell = loaded(&remote).await;

        let legs = cell.borrow().items[0].clone();
        cell.borrow_mut().begin_edit(&legs);
        set_name(&cell, "Legs & Glutes");
        submit(&cell, &remote).await;
        assert_eq!(cell.borrow().items, vec![cat(1, "Legs & Glutes")]);

        delete(&cell, &remote, 1).await;
        assert!(cell.borrow().items.is_empty());
    }

    #[tokio::test]
    async fn test_label_update_moves_category_in_place() {
        let remote = labels(vec![
            Label { id: 1, name: "Squat".into(), category_id: Some(1) },
            Label { id: 2, name: "Plank".into(), category_id: Some(2) },
        ]);
        let cell = RefCell::new(CollectionState::<Label, LabelDraft>::new());
        load(&cell, &remote).await;

        let squat = cell.borrow().items[0].clone();
        cell.borrow_mut().begin_edit(&squat);
        assert_eq!(cell.borrow().draft, LabelDraft { name: "Squat".into(), category_id: Some(1) });
        cell.borrow_mut().draft.category_id = Some(2);
        submit(&cell, &remote).await;

        let expected = vec![
            Label { id: 1, name: "Squat".into(), category_id: Some(2) },
            Label { id: 2, name: "Plank".into(), category_id: Some(2) },
        ];
        assert_eq!(cell.borrow().items, expected);
        assert_eq!(remote.records(), expected);
        assert_eq!(cell.borrow().mode(), Mode::Create);
    }

    #[tokio::test]
    async fn test_name_only_label_create_has_no_category() {
        let remote = labels(vec![Label { id: 1, name: "Squat".into(), category_id: Some(1) }]);
        let cell = RefCell::new(CollectionState::<Label, LabelNameDraft>::new());
        load(&cell, &remote).await;

        cell.borrow_mut().draft.name = "Plank".into();
        create(&cell, &remote).await;

        let state = cell.borrow();
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1], Label { id: 2, name: "Plank".into(), category_id: None });
        assert_eq!(state.items[0].category_id, Some(1));
        assert_eq!(state.draft, LabelNameDraft::default());
    }

    #[tokio::test]
    async fn test_row_numbers_follow_deletes() {
        let remote = categories(vec![cat(4, "A"), cat(9, "B"), cat(2, "C")]);
        let cell = loaded(&remote).await;
        assert_eq!(cell.borrow().ids(), vec![4, 9, 2]);
        assert_eq!(row_number(&cell.borrow().ids(), 2), 3);

        delete(&cell, &remote, 9).await;

        let ids = cell.borrow().ids();
        assert_eq!(row_number(&ids, 4), 1);
        assert_eq!(row_number(&ids, 2), 2);
        assert_eq!(row_number(&ids, 9), 0);
    }

    #[test]
    fn test_dismiss_error() {
        let mut state = CollectionState::<Category, CategoryDraft>::new();
        state.apply_loaded(Err(ApiError::Network("offline".into())));
        state.dismiss_error();
        assert_eq!(state.error, None);
        assert!(state.is_ready());
    }
}
