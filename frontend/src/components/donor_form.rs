use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use shared::{Donor, DonorCreate, DonorUpdate};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonorFormProps {
    pub api_client: ApiClient,
    /// Present when editing an existing record, absent when creating
    pub donor: Option<Donor>,
    pub on_save: Callback<Donor>,
    pub on_cancel: Callback<()>,
}

fn default_form() -> DonorCreate {
    DonorCreate {
        country: Some("US".to_string()),
        preferred_contact_method: Some("email".to_string()),
        donor_type: Some("individual".to_string()),
        ..DonorCreate::default()
    }
}

fn form_from_donor(donor: &Donor) -> DonorCreate {
    DonorCreate {
        first_name: donor.first_name.clone(),
        last_name: donor.last_name.clone(),
        email: donor.email.clone(),
        phone: donor.phone.clone(),
        city: donor.city.clone(),
        state: donor.state.clone(),
        company: donor.company.clone(),
        donor_type: Some(donor.donor_type.clone()),
        ..default_form()
    }
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Donor editor: collects the form payload and issues the create or update
/// call. Required fields are checked before anything goes on the wire; a
/// failed save keeps the form state intact for retry.
#[function_component(DonorForm)]
pub fn donor_form(props: &DonorFormProps) -> Html {
    let form = use_state(|| match &props.donor {
        Some(donor) => form_from_donor(donor),
        None => default_form(),
    });
    let tags = use_state(String::new);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    {
        let form = form.clone();
        use_effect_with(props.donor.clone(), move |donor| {
            match donor {
                Some(donor) => form.set(form_from_donor(donor)),
                None => form.set(default_form()),
            }
            || ()
        });
    }

    let text_field = |apply: fn(&mut DonorCreate, Option<String>)| -> Callback<Event> {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, optional(input.value()));
            form.set(next);
            form_error.set(None);
        })
    };

    let required_field = |apply: fn(&mut DonorCreate, String)| -> Callback<Event> {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
            form_error.set(None);
        })
    };

    let checkbox_field = |apply: fn(&mut DonorCreate, bool)| -> Callback<Event> {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.checked());
            form.set(next);
        })
    };

    let on_contact_method_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.preferred_contact_method = optional(select.value());
            form.set(next);
        })
    };

    let on_notes_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.notes = optional(textarea.value());
            form.set(next);
        })
    };

    let on_tags_change = {
        let tags = tags.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            tags.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let existing = props.donor.clone();
        let form = form.clone();
        let tags = tags.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let on_save = props.on_save.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = (*form).clone();
            let validation = payload.validate();
            if !validation.is_valid {
                // No network call for an invalid form
                let message = validation
                    .errors
                    .iter()
                    .map(|err| err.message())
                    .collect::<Vec<_>>()
                    .join(", ");
                form_error.set(Some(message));
                return;
            }

            let api_client = api_client.clone();
            let existing = existing.clone();
            let tag_list: Vec<String> = (*tags)
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let on_save = on_save.clone();

            spawn_local(async move {
                form_error.set(None);
                submitting.set(true);

                let result = match &existing {
                    Some(donor) => {
                        api_client
                            .update_donor(donor.id, &DonorUpdate::from(payload))
                            .await
                    }
                    None => api_client.create_donor(&payload).await,
                };

                match result {
                    Ok(saved) => {
                        Logger::info_with_component(
                            "donor-form",
                            &format!("Saved donor {}", saved.id),
                        );
                        // Tags are fire-and-forget side calls; a failure is
                        // logged and never blocks the workflow
                        for tag in tag_list {
                            let api_client = api_client.clone();
                            let donor_id = saved.id;
                            spawn_local(async move {
                                if let Err(e) = api_client.add_tag(donor_id, &tag).await {
                                    Logger::warn_with_component(
                                        "donor-form",
                                        &format!("Failed to tag donor {}: {}", donor_id, e),
                                    );
                                }
                            });
                        }
                        on_save.emit(saved);
                    }
                    Err(e) => {
                        // Form state stays as entered so the user can retry
                        Logger::error_with_component(
                            "donor-form",
                            &format!("Failed to save donor: {}", e),
                        );
                        form_error.set(Some(format!("Failed to save donor: {}", e)));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="donor-form">
            <h2>{if props.donor.is_some() { "Edit Donor" } else { "Add New Donor" }}</h2>

            {if let Some(error) = (*form_error).as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form onsubmit={on_submit}>
                <fieldset>
                    <legend>{"Personal Information"}</legend>
                    <div class="form-grid two-col">
                        <div class="form-group">
                            <label for="first_name">{"First Name *"}</label>
                            <input
                                type="text"
                                id="first_name"
                                required={true}
                                value={form.first_name.clone()}
                                onchange={required_field(|f, v| f.first_name = v)}
                                disabled={*submitting}
                            />
                        </div>
                        <div class="form-group">
                            <label for="last_name">{"Last Name *"}</label>
                            <input
                                type="text"
                                id="last_name"
                                required={true}
                                value={form.last_name.clone()}
                                onchange={required_field(|f, v| f.last_name = v)}
                                disabled={*submitting}
                            />
                        </div>
                    </div>
                    <div class="form-grid two-col">
                        <div class="form-group">
                            <label for="email">{"Email"}</label>
                            <input
                                type="email"
                                id="email"
                                value={form.email.clone().unwrap_or_default()}
                                onchange={text_field(|f, v| f.email = v)}
                                disabled={*submitting}
                            />
                        </div>
                        <div class="form-group">
                            <label for="phone">{"Phone"}</label>
                            <input
                                type="tel"
                                id="phone"
                                value={form.phone.clone().unwrap_or_default()}
                                onchange={text_field(|f, v| f.phone = v)}
                                disabled={*submitting}
                            />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>{"Address"}</legend>
                    <div class="form-group">
                        <label for="address_line_1">{"Address Line 1"}</label>
                        <input
                            type="text"
                            id="address_line_1"
                            value={form.address_line_1.clone().unwrap_or_default()}
                            onchange={text_field(|f, v| f.address_line_1 = v)}
                            disabled={*submitting}
                        />
                    </div>
                    <div class="form-grid three-col">
                        <div class="form-group">
                            <label for="city">{"City"}</label>
                            <input
                                type="text"
                                id="city"
                                value={form.city.clone().unwrap_or_default()}
                                onchange={text_field(|f, v| f.city = v)}
                                disabled={*submitting}
                            />
                        </div>
                        <div class="form-group">
                            <label for="state">{"State"}</label>
                            <input
                                type="text"
                                id="state"
                                value={form.state.clone().unwrap_or_default()}
                                onchange={text_field(|f, v| f.state = v)}
                                disabled={*submitting}
                            />
                        </div>
                        <div class="form-group">
                            <label for="postal_code">{"ZIP Code"}</label>
                            <input
                                type="text"
                                id="postal_code"
                                value={form.postal_code.clone().unwrap_or_default()}
                                onchange={text_field(|f, v| f.postal_code = v)}
                                disabled={*submitting}
                            />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>{"Professional Information"}</legend>
                    <div class="form-grid two-col">
                        <div class="form-group">
                            <label for="company">{"Company"}</label>
                            <input
                                type="text"
                                id="company"
                                value={form.company.clone().unwrap_or_default()}
                                onchange={text_field(|f, v| f.company = v)}
                                disabled={*submitting}
                            />
                        </div>
                        <div class="form-group">
                            <label for="job_title">{"Job Title"}</label>
                            <input
                                type="text"
                                id="job_title"
                                value={form.job_title.clone().unwrap_or_default()}
                                onchange={text_field(|f, v| f.job_title = v)}
                                disabled={*submitting}
                            />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>{"Communication Preferences"}</legend>
                    <div class="form-group">
                        <label for="preferred_contact_method">{"Preferred Contact Method"}</label>
                        <select
                            id="preferred_contact_method"
                            value={form.preferred_contact_method.clone().unwrap_or_default()}
                            onchange={on_contact_method_change}
                            disabled={*submitting}
                        >
                            <option value="email">{"Email"}</option>
                            <option value="phone">{"Phone"}</option>
                            <option value="mail">{"Mail"}</option>
                        </select>
                    </div>
                    <div class="form-grid three-col">
                        // The opt-outs are independent; any combination is valid
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                checked={form.do_not_email}
                                onchange={checkbox_field(|f, v| f.do_not_email = v)}
                                disabled={*submitting}
                            />
                            {"Do not email"}
                        </label>
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                checked={form.do_not_call}
                                onchange={checkbox_field(|f, v| f.do_not_call = v)}
                                disabled={*submitting}
                            />
                            {"Do not call"}
                        </label>
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                checked={form.do_not_mail}
                                onchange={checkbox_field(|f, v| f.do_not_mail = v)}
                                disabled={*submitting}
                            />
                            {"Do not mail"}
                        </label>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>{"Additional Information"}</legend>
                    <div class="form-group">
                        <label for="notes">{"Notes"}</label>
                        <textarea
                            id="notes"
                            rows="3"
                            value={form.notes.clone().unwrap_or_default()}
                            onchange={on_notes_change}
                            disabled={*submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="source">{"Source"}</label>
                        <input
                            type="text"
                            id="source"
                            placeholder="How did they hear about us?"
                            value={form.source.clone().unwrap_or_default()}
                            onchange={text_field(|f, v| f.source = v)}
                            disabled={*submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="tags">{"Tags"}</label>
                        <input
                            type="text"
                            id="tags"
                            placeholder="Comma-separated, applied after saving"
                            value={(*tags).clone()}
                            onchange={on_tags_change}
                            disabled={*submitting}
                        />
                    </div>
                </fieldset>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        {if *submitting {
                            "Saving..."
                        } else if props.donor.is_some() {
                            "Update Donor"
                        } else {
                            "Create Donor"
                        }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </div>
    }
}
