use crate::services::api::ApiClient;
use crate::services::format::{format_currency, format_date};
use crate::services::logging::Logger;
use gloo::dialogs::confirm;
use shared::matching::{self, MatchConfidence};
use shared::Donor;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DuplicateReviewProps {
    pub api_client: ApiClient,
    /// The freshly saved donor the candidates are compared against
    pub donor: Donor,
    pub on_merge_complete: Callback<Donor>,
    pub on_cancel: Callback<()>,
}

/// Duplicate review: fetches the backend's candidate list for the saved
/// donor, scores each candidate locally, and offers a confirm-gated merge.
/// Zero candidates completes the workflow immediately.
#[function_component(DuplicateReview)]
pub fn duplicate_review(props: &DuplicateReviewProps) -> Html {
    let duplicates = use_state(|| Vec::<Donor>::new());
    let loading = use_state(|| true);
    let merging = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let api_client = props.api_client.clone();
        let duplicates = duplicates.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.donor.id, move |donor_id| {
            let donor_id = *donor_id;
            spawn_local(async move {
                loading.set(true);
                match api_client.find_duplicates(donor_id).await {
                    Ok(data) => {
                        Logger::info_with_component(
                            "duplicate-review",
                            &format!("{} candidate(s) for donor {}", data.len(), donor_id),
                        );
                        duplicates.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "duplicate-review",
                            &format!("Failed to find duplicates: {}", e),
                        );
                        error.set(Some(format!("Failed to find duplicates: {}", e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_merge = {
        let api_client = props.api_client.clone();
        let primary_id = props.donor.id;
        let merging = merging.clone();
        let error = error.clone();
        let on_merge_complete = props.on_merge_complete.clone();

        Callback::from(move |duplicate_id: i64| {
            // Explicit confirmation gates the call; declining changes nothing
            if !confirm(
                "Are you sure you want to merge these donor records? This action cannot be undone.",
            ) {
                return;
            }

            let api_client = api_client.clone();
            let merging = merging.clone();
            let error = error.clone();
            let on_merge_complete = on_merge_complete.clone();

            spawn_local(async move {
                merging.set(true);
                match api_client.merge_donors(primary_id, duplicate_id).await {
                    Ok(merged) => {
                        Logger::info_with_component(
                            "duplicate-review",
                            &format!("Merged donor {} into {}", duplicate_id, primary_id),
                        );
                        on_merge_complete.emit(merged);
                    }
                    Err(e) => {
                        // Candidate list stays up so the user can retry or skip
                        Logger::error_with_component(
                            "duplicate-review",
                            &format!("Failed to merge donors: {}", e),
                        );
                        error.set(Some(format!("Failed to merge donors: {}", e)));
                    }
                }
                merging.set(false);
            });
        })
    };

    let on_skip = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    if *loading {
        return html! {
            <div class="loading">{"Checking for duplicate donors..."}</div>
        };
    }

    html! {
        <div class="duplicate-review">
            <h2>{"Duplicate Detection Review"}</h2>

            <div class="primary-record">
                <h3>{"Primary Donor Record"}</h3>
                <div class="record-card primary">
                    <div class="record-grid">
                        <div>
                            <strong>{props.donor.display_name()}</strong>
                            {if let Some(company) = props.donor.company.as_ref().filter(|c| !c.is_empty()) {
                                html! { <div class="company">{company}</div> }
                            } else { html! {} }}
                        </div>
                        <div>
                            <div>{props.donor.email.clone().unwrap_or_else(|| "No email".to_string())}</div>
                            <div>{props.donor.phone.clone().unwrap_or_else(|| "No phone".to_string())}</div>
                        </div>
                        <div>
                            <div>{format_currency(props.donor.total_gifts)}</div>
                            <div>{format!("{} gifts", props.donor.total_gift_count)}</div>
                        </div>
                    </div>
                </div>
            </div>

            {if let Some(error) = (*error).as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if duplicates.is_empty() {
                html! {
                    <div class="no-duplicates">
                        <h3>{"No Duplicates Found"}</h3>
                        <p>{"This donor appears to be unique in your database."}</p>
                        <button class="btn btn-primary" onclick={on_skip.clone()}>
                            {"Continue"}
                        </button>
                    </div>
                }
            } else {
                html! {
                    <div class="candidates">
                        <h3>{format!("Potential Duplicates Found ({})", duplicates.len())}</h3>
                        <p>{"Review these potential duplicate records and decide whether to merge them:"}</p>

                        <div class="candidate-list">
                            {for duplicates.iter().map(|duplicate| {
                                candidate_card(&props.donor, duplicate, *merging, &on_merge)
                            })}
                        </div>

                        <div class="review-actions">
                            <button class="btn btn-secondary" onclick={on_skip}>
                                {"Skip Duplicate Check"}
                            </button>
                        </div>
                    </div>
                }
            }}
        </div>
    }
}

fn candidate_card(
    reference: &Donor,
    candidate: &Donor,
    merging: bool,
    on_merge: &Callback<i64>,
) -> Html {
    let similarity = matching::similarity(reference, candidate);
    // Confidence only picks styling; every candidate stays visible
    let (card_class, badge_class) = match similarity.confidence() {
        MatchConfidence::High => ("candidate-card high", "match-badge high"),
        MatchConfidence::Medium => ("candidate-card", "match-badge medium"),
        MatchConfidence::Low => ("candidate-card", "match-badge low"),
    };

    let on_merge_click = {
        let on_merge = on_merge.clone();
        let duplicate_id = candidate.id;
        Callback::from(move |_: MouseEvent| on_merge.emit(duplicate_id))
    };

    html! {
        <div key={candidate.id.to_string()} class={card_class}>
            <div class="candidate-body">
                <h4>
                    {candidate.display_name()}
                    <span class={badge_class}>{format!("{}% match", similarity.score)}</span>
                </h4>

                <div class="record-grid">
                    <div>
                        {if let Some(company) = candidate.company.as_ref().filter(|c| !c.is_empty()) {
                            html! { <div class="company">{company}</div> }
                        } else { html! {} }}
                        <div>{candidate.email.clone().unwrap_or_else(|| "No email".to_string())}</div>
                        <div>{candidate.phone.clone().unwrap_or_else(|| "No phone".to_string())}</div>
                    </div>
                    <div>
                        <div>{candidate.location().unwrap_or_else(|| "No location".to_string())}</div>
                        <div>
                            {"Status: "}
                            <span class={if candidate.is_active() { "status active" } else { "status inactive" }}>
                                {&candidate.donor_status}
                            </span>
                        </div>
                    </div>
                    <div>
                        <div>{format_currency(candidate.total_gifts)}</div>
                        <div>{format!("{} gifts", candidate.total_gift_count)}</div>
                        <div class="created">{format!("Created: {}", format_date(&candidate.created_at))}</div>
                    </div>
                </div>

                {if !similarity.factors.is_empty() {
                    html! {
                        <div class="match-factors">
                            <strong>{"Matching factors:"}</strong>
                            <ul>
                                {for similarity.factors.iter().map(|factor| {
                                    html! { <li>{factor}</li> }
                                })}
                            </ul>
                        </div>
                    }
                } else { html! {} }}
            </div>

            <div class="candidate-actions">
                <button class="btn btn-danger" disabled={merging} onclick={on_merge_click}>
                    {if merging { "Merging..." } else { "Merge Records" }}
                </button>
            </div>
        </div>
    }
}
