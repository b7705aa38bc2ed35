use shared::Donor;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::donor_form::DonorForm;
use components::donor_list::DonorList;
use components::duplicate_review::DuplicateReview;
use components::header::Header;
use services::api::ApiClient;
use services::auth::{AuthProvider, MockAuthProvider};
use services::logging::Logger;

/// The stages of the donor workflow. Control flows one way:
/// list -> create/edit -> duplicate check -> back to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkflowStep {
    List,
    Create,
    Edit,
    DuplicateCheck,
}

fn workflow_steps(current: WorkflowStep) -> Html {
    let steps = [
        ("Donor List", current == WorkflowStep::List),
        (
            "Create / Edit",
            matches!(current, WorkflowStep::Create | WorkflowStep::Edit),
        ),
        ("Duplicate Check", current == WorkflowStep::DuplicateCheck),
    ];

    html! {
        <div class="workflow-steps">
            {for steps.iter().enumerate().map(|(index, (label, active))| {
                let class = if *active { "workflow-step active" } else { "workflow-step" };
                html! {
                    <div class={class}>
                        <span class="step-number">{index + 1}</span>
                        {*label}
                    </div>
                }
            })}
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    // The auth seam: swap the stub for a real provider without touching
    // any component below
    let auth = use_memo((), |_| MockAuthProvider::new());
    let current_user = auth.current_user();

    let step = use_state(|| WorkflowStep::List);
    let selected_donor = use_state(|| None::<Donor>);
    let saved_donor = use_state(|| None::<Donor>);

    let on_create_new = {
        let step = step.clone();
        let selected_donor = selected_donor.clone();
        Callback::from(move |_| {
            selected_donor.set(None);
            step.set(WorkflowStep::Create);
        })
    };

    let on_select_donor = {
        let step = step.clone();
        let selected_donor = selected_donor.clone();
        Callback::from(move |donor: Donor| {
            selected_donor.set(Some(donor));
            step.set(WorkflowStep::Edit);
        })
    };

    // Every save, create or edit, goes through duplicate review
    let on_donor_saved = {
        let step = step.clone();
        let saved_donor = saved_donor.clone();
        Callback::from(move |donor: Donor| {
            Logger::info_with_component(
                "workflow",
                &format!("Donor {} saved, entering duplicate review", donor.id),
            );
            saved_donor.set(Some(donor));
            step.set(WorkflowStep::DuplicateCheck);
        })
    };

    let on_review_complete = {
        let step = step.clone();
        let selected_donor = selected_donor.clone();
        let saved_donor = saved_donor.clone();
        Callback::from(move |_| {
            step.set(WorkflowStep::List);
            selected_donor.set(None);
            saved_donor.set(None);
        })
    };

    let on_merge_complete = {
        let on_review_complete = on_review_complete.clone();
        Callback::from(move |_merged: Donor| on_review_complete.emit(()))
    };

    html! {
        <>
            <Header user={current_user} />

            <main class="main">
                <div class="container">
                    {workflow_steps(*step)}

                    <div class="workflow-panel">
                        {match *step {
                            WorkflowStep::List => html! {
                                <DonorList
                                    api_client={(*api_client).clone()}
                                    on_select_donor={on_select_donor}
                                    on_create_new={on_create_new}
                                />
                            },
                            WorkflowStep::Create | WorkflowStep::Edit => html! {
                                <DonorForm
                                    api_client={(*api_client).clone()}
                                    donor={(*selected_donor).clone()}
                                    on_save={on_donor_saved}
                                    on_cancel={on_review_complete.clone()}
                                />
                            },
                            WorkflowStep::DuplicateCheck => {
                                if let Some(donor) = (*saved_donor).clone() {
                                    html! {
                                        <DuplicateReview
                                            api_client={(*api_client).clone()}
                                            donor={donor}
                                            on_merge_complete={on_merge_complete.clone()}
                                            on_cancel={on_review_complete.clone()}
                                        />
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        }}
                    </div>
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
