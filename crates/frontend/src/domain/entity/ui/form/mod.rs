pub mod view_model;

use self::view_model::{EntityFormVm, LoadState};
use crate::domain::entity::EntityApi;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::Route;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_FORM};
use contracts::domain::common::EntityKind;
use contracts::shared::crud::{humanize, FormMode};
use contracts::shared::metadata::{FieldMetadata, FieldType};
use leptos::prelude::*;
use thaw::*;

/// Input widget for one field, by its type
fn field_input(vm: EntityFormVm, field: &'static FieldMetadata) -> AnyView {
    let name = field.name;
    let value = move || vm.form.with(|f| f.value(name).to_string());
    let disabled = move || vm.form.with(|f| f.is_submitting());
    let invalid = move || vm.form.with(|f| f.field_error(name).is_some());
    let placeholder = field.ui.placeholder.unwrap_or_default();

    match field.field_type {
        FieldType::Enum => view! {
            <select
                id=name
                class="form__select"
                class:form__input--invalid=invalid
                prop:disabled=disabled
                on:change=move |ev| vm.set_value(name, event_target_value(&ev))
            >
                <option value="" selected=move || value().is_empty()>"Select..."</option>
                {field.choices().iter().map(|choice| {
                    let choice: &'static str = *choice;
                    view! {
                        <option value=choice selected=move || value() == choice>{humanize(choice)}</option>
                    }
                }).collect_view()}
            </select>
        }
        .into_any(),
        FieldType::Boolean => view! {
            <input
                id=name
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || value() == "true"
                prop:disabled=disabled
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    vm.set_value(name, checked.to_string());
                }
            />
        }
        .into_any(),
        FieldType::String if field.ui.widget == Some("textarea") => view! {
            <textarea
                id=name
                class="form__textarea"
                class:form__input--invalid=invalid
                rows=4
                placeholder=placeholder
                maxlength=field.validation.max_length.map(|n| n.to_string())
                prop:value=value
                prop:disabled=disabled
                on:input=move |ev| vm.set_value(name, event_target_value(&ev))
            />
        }
        .into_any(),
        FieldType::Number | FieldType::Date | FieldType::String => view! {
            <input
                id=name
                type=field.field_type.input_type()
                class="form__input"
                class:form__input--invalid=invalid
                step=(field.field_type == FieldType::Number).then_some("any")
                min=field.validation.min.map(|n| n.to_string())
                max=field.validation.max.map(|n| n.to_string())
                maxlength=field.validation.max_length.map(|n| n.to_string())
                placeholder=placeholder
                prop:value=value
                prop:disabled=disabled
                on:input=move |ev| vm.set_value(name, event_target_value(&ev))
            />
        }
        .into_any(),
    }
}

fn field_row(vm: EntityFormVm, field: &'static FieldMetadata) -> impl IntoView {
    let name = field.name;
    let error = move || vm.form.with(|f| f.field_error(name).map(str::to_string));

    view! {
        <div class="form__group">
            <label class="form__label" for=name>
                {field.ui.label}
                {field.validation.required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {field_input(vm, field)}
            {field.ui.hint.map(|hint| view! { <div class="form__hint">{hint}</div> })}
            {move || error().map(|msg| view! { <div class="form__error">{msg}</div> })}
        </div>
    }
}

/// Create form when `id` is `None`, update form otherwise
#[component]
pub fn EntityForm(kind: EntityKind, #[prop(optional)] id: Option<String>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_context::<EntityApi>().expect("EntityApi not found");

    let vm = match id {
        Some(id) => EntityFormVm::for_update(kind, id, api),
        None => EntityFormVm::for_create(kind, api),
    };

    let leave = move || {
        let route = match vm.form.with_untracked(|f| f.mode().clone()) {
            FormMode::Create => Route::List(kind),
            FormMode::Update { id } => Route::Detail(kind, id),
        };
        ctx.navigate(route);
    };

    let on_saved = Callback::new(move |saved_id: String| {
        ctx.navigate(Route::Detail(kind, saved_id));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(on_saved);
    };

    let on_cancel = move |_| {
        if vm.cancel() {
            leave();
        }
    };

    let is_submitting = Signal::derive(move || vm.form.with(|f| f.is_submitting()));
    let fields: Vec<&'static FieldMetadata> = kind.schema().form_fields().collect();

    view! {
        <PageFrame page_id=page_id(kind.slug(), PAGE_CAT_FORM) category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <span class="page__icon">{icon(kind.icon())}</span>
                    <h1 class="page__title">{move || vm.title()}</h1>
                </div>
            </div>

            <div class="page__content">
                {move || match vm.load_state.get() {
                    LoadState::Loading => view! {
                        <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    }.into_any(),
                    LoadState::NotFound => view! {
                        <div class="empty-state">
                            {icon("search")}
                            <div class="empty-state__title">{format!("{} not found", kind.element_name())}</div>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate(Route::List(kind))>
                                {format!("Back to {}", kind.list_name())}
                            </Button>
                        </div>
                    }.into_any(),
                    LoadState::Failed(err) => view! {
                        <div class="alert alert--error">
                            <strong>"Error: "</strong>{err}
                        </div>
                    }.into_any(),
                    LoadState::Ready => {
                        let rows = fields.iter().map(|field| field_row(vm, *field)).collect_view();
                        view! {
                            <Card>
                                <form class="form" on:submit=on_submit novalidate=true>
                                    {move || vm.form.with(|f| f.form_error().map(str::to_string)).map(|err| view! {
                                        <div class="alert alert--error">{err}</div>
                                    })}

                                    {rows}

                                    <div class="form__actions">
                                        <button
                                            type="submit"
                                            class="btn-primary"
                                            disabled=move || is_submitting.get()
                                        >
                                            {icon("save")}
                                            {move || format!(" {}", vm.form.with(|f| f.submit_label()))}
                                        </button>
                                        <button
                                            type="button"
                                            class="btn-secondary"
                                            on:click=on_cancel
                                            disabled=move || is_submitting.get()
                                        >
                                            {icon("cancel")}
                                            " Cancel"
                                        </button>
                                    </div>
                                </form>
                            </Card>
                        }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}
