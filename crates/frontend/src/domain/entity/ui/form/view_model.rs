//! Reactive wrapper around `FormModel` for the create and update pages

use crate::domain::entity::{ApiError, EntityApi};
use crate::routes::Route;
use contracts::domain::common::EntityKind;
use contracts::shared::crud::{FormModel, SubmitBlocked};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Whether the record behind an update form is available
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    NotFound,
    Failed(String),
}

/// Header of the form page. Until the record has loaded the form still holds
/// an empty placeholder, so the title comes from the route.
pub fn form_title(route: &Route, load_state: &LoadState, form: &FormModel) -> String {
    match load_state {
        LoadState::Ready => form.title(),
        _ => route.title(),
    }
}

#[derive(Clone, Copy)]
pub struct EntityFormVm {
    pub kind: EntityKind,
    pub form: RwSignal<FormModel>,
    pub load_state: RwSignal<LoadState>,
    route: StoredValue<Route>,
    api: StoredValue<EntityApi>,
}

impl EntityFormVm {
    /// Empty form for a new record
    pub fn for_create(kind: EntityKind, api: EntityApi) -> Self {
        Self {
            kind,
            form: RwSignal::new(FormModel::create(kind.schema())),
            load_state: RwSignal::new(LoadState::Ready),
            route: StoredValue::new(Route::New(kind)),
            api: StoredValue::new(api),
        }
    }

    /// Form prefilled from the stored record, once it has loaded
    pub fn for_update(kind: EntityKind, id: String, api: EntityApi) -> Self {
        let vm = Self {
            kind,
            form: RwSignal::new(FormModel::create(kind.schema())),
            load_state: RwSignal::new(LoadState::Loading),
            route: StoredValue::new(Route::Update(kind, id.clone())),
            api: StoredValue::new(api),
        };
        vm.load(id);
        vm
    }

    fn load(&self, id: String) {
        let this = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            match api.get(this.kind, &id).await {
                Ok(record) => {
                    this.form.set(FormModel::edit(this.kind.schema(), &record));
                    this.load_state.set(LoadState::Ready);
                }
                Err(e) if e.is_not_found() => this.load_state.set(LoadState::NotFound),
                Err(e) => {
                    log::warn!("Failed to load {} {}: {}", this.kind, id, e);
                    this.load_state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    }

    pub fn title(&self) -> String {
        let load_state = self.load_state.get();
        self.route
            .with_value(|route| self.form.with(|f| form_title(route, &load_state, f)))
    }

    pub fn set_value(&self, field: &str, value: String) {
        let accepted = self
            .form
            .try_update(|f| f.set_value(field, value))
            .unwrap_or(false);
        if !accepted {
            log::debug!("Edit of '{}' refused", field);
        }
    }

    /// Validate and send. `on_saved` receives the stored record's id.
    pub fn submit(&self, on_saved: Callback<String>) {
        let submission = match self.form.try_update(|f| f.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(SubmitBlocked::Invalid(errors))) => {
                log::debug!("Submit blocked: {}", errors);
                return;
            }
            Some(Err(SubmitBlocked::NotEditing)) | None => return,
        };

        let this = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            let result = api.submit(this.kind, &submission).await;
            match result {
                Ok(record) => {
                    let id = record.id.clone();
                    let navigated = this
                        .form
                        .try_update(|f| f.finish_submit(Ok(record)))
                        .unwrap_or(false);
                    if navigated {
                        log::info!("Saved {} {}", this.kind, id);
                        on_saved.run(id);
                    }
                }
                Err(ApiError::Entity(err)) => {
                    log::warn!("{} rejected: {}", this.kind, err);
                    this.form.update(|f| {
                        f.finish_submit(Err(err));
                    });
                }
                Err(other) => {
                    log::warn!("Saving {} failed: {}", this.kind, other);
                    this.form.update(|f| f.abort_submit(other.to_string()));
                }
            }
        });
    }

    /// `true` when the caller should leave the page
    pub fn cancel(&self) -> bool {
        self.form.try_update(|f| f.cancel()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityRecord;

    #[test]
    fn test_update_title_while_loading_comes_from_route() {
        let kind = EntityKind::Course;
        let route = Route::Update(kind, "COURSE101".to_string());
        let placeholder = FormModel::create(kind.schema());

        assert_eq!(form_title(&route, &LoadState::Loading, &placeholder), "Edit Course COURSE101");
        assert_eq!(form_title(&route, &LoadState::NotFound, &placeholder), "Edit Course COURSE101");

        let loaded = FormModel::edit(kind.schema(), &EntityRecord::new("COURSE101"));
        assert_eq!(form_title(&route, &LoadState::Ready, &loaded), "Edit Course COURSE101");
    }

    #[test]
    fn test_create_title() {
        let kind = EntityKind::Course;
        let form = FormModel::create(kind.schema());
        assert_eq!(form_title(&Route::New(kind), &LoadState::Ready, &form), "New Course");
    }
}
