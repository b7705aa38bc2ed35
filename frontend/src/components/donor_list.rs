use crate::hooks::use_donors::use_donors;
use crate::services::api::ApiClient;
use crate::services::format::format_currency;
use gloo::dialogs::confirm;
use shared::Donor;
use yew::events::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonorListProps {
    pub api_client: ApiClient,
    pub on_select_donor: Callback<Donor>,
    pub on_create_new: Callback<()>,
}

/// Donor directory: the list/search stage of the workflow. Rows are shown in
/// server order; selecting one hands it to the editor.
#[function_component(DonorList)]
pub fn donor_list(props: &DonorListProps) -> Html {
    let directory = use_donors(&props.api_client);
    let state = directory.state;
    let actions = directory.actions;

    {
        let load_donors = actions.load_donors.clone();
        use_effect_with((), move |_| {
            load_donors.emit(());
            || ()
        });
    }

    let on_search_click = {
        let search_donors = actions.search_donors.clone();
        Callback::from(move |_: MouseEvent| search_donors.emit(()))
    };

    let on_search_keypress = {
        let search_donors = actions.search_donors.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                search_donors.emit(());
            }
        })
    };

    let on_clear = {
        let load_donors = actions.load_donors.clone();
        Callback::from(move |_: MouseEvent| load_donors.emit(()))
    };

    let on_delete = {
        let delete_donor = actions.delete_donor.clone();
        Callback::from(move |donor_id: i64| {
            // Blocking prompt; declining issues no request at all
            if confirm("Delete this donor record? This action cannot be undone.") {
                delete_donor.emit(donor_id);
            }
        })
    };

    if state.loading {
        return html! {
            <div class="loading">{"Loading donors..."}</div>
        };
    }

    html! {
        <div class="donor-list">
            <div class="list-header">
                <h2>{"Donor Directory"}</h2>
                <button class="btn btn-primary" onclick={
                    let on_create_new = props.on_create_new.clone();
                    Callback::from(move |_: MouseEvent| on_create_new.emit(()))
                }>
                    {"Add New Donor"}
                </button>
            </div>

            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search donors by name, email, or phone..."
                    value={state.search_query.clone()}
                    onchange={actions.on_query_change.clone()}
                    onkeypress={on_search_keypress}
                />
                <button class="btn btn-search" onclick={on_search_click}>{"Search"}</button>
                <button class="btn btn-secondary" onclick={on_clear}>{"Clear"}</button>
            </div>

            {if let Some(error) = state.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <div class="table-container">
                <table class="donor-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Phone"}</th>
                            <th>{"Location"}</th>
                            <th>{"Status"}</th>
                            <th>{"Total Gifts"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {if state.donors.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="7" class="empty-state">
                                        {if state.search_query.trim().is_empty() {
                                            "No donors found. Start by adding your first donor!"
                                        } else {
                                            "No donors found matching your search."
                                        }}
                                    </td>
                                </tr>
                            }
                        } else {
                            html! {
                                {for state.donors.iter().map(|donor| {
                                    donor_row(
                                        donor,
                                        &props.on_select_donor,
                                        &on_delete,
                                    )
                                })}
                            }
                        }}
                    </tbody>
                </table>
            </div>

            {if !state.donors.is_empty() {
                html! {
                    <div class="list-footer">
                        {format!("Showing {} donors", state.donors.len())}
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}

fn donor_row(donor: &Donor, on_select: &Callback<Donor>, on_delete: &Callback<i64>) -> Html {
    let status_class = if donor.is_active() {
        "status-chip active"
    } else {
        "status-chip inactive"
    };

    let on_view = {
        let on_select = on_select.clone();
        let donor = donor.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(donor.clone()))
    };

    let on_delete_click = {
        let on_delete = on_delete.clone();
        let donor_id = donor.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(donor_id))
    };

    html! {
        <tr key={donor.id.to_string()}>
            <td class="name">
                <strong>{donor.display_name()}</strong>
                {if let Some(company) = donor.company.as_ref().filter(|c| !c.is_empty()) {
                    html! { <div class="company">{company}</div> }
                } else { html! {} }}
            </td>
            <td>{donor.email.clone().unwrap_or_else(|| "-".to_string())}</td>
            <td>{donor.phone.clone().unwrap_or_else(|| "-".to_string())}</td>
            <td>{donor.location().unwrap_or_else(|| "-".to_string())}</td>
            <td>
                <span class={status_class}>{&donor.donor_status}</span>
            </td>
            <td>
                <div>{format_currency(donor.total_gifts)}</div>
                <div class="gift-count">{format!("({} gifts)", donor.total_gift_count)}</div>
            </td>
            <td class="actions">
                <button class="btn btn-small" onclick={on_view}>{"View"}</button>
                <button class="btn btn-small btn-danger" onclick={on_delete_click}>{"Delete"}</button>
            </td>
        </tr>
    }
}
