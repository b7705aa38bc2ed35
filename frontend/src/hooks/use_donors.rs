use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use shared::Donor;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const PAGE_SIZE: u32 = 100;
const SEARCH_LIMIT: u32 = 50;

#[derive(Clone)]
pub struct DonorDirectoryState {
    pub donors: Vec<Donor>,
    pub loading: bool,
    pub search_query: String,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct UseDonorsActions {
    pub load_donors: Callback<()>,
    pub search_donors: Callback<()>,
    pub delete_donor: Callback<i64>,
    pub on_query_change: Callback<Event>,
}

pub struct UseDonorsResult {
    pub state: DonorDirectoryState,
    pub actions: UseDonorsActions,
}

/// Directory state and actions for the donor list.
///
/// Overlapping requests are possible (search while a search is in flight);
/// each request takes a monotonically increasing token and a response is
/// applied only while its token is still the newest, so a slow early
/// response can never overwrite a later one.
#[hook]
pub fn use_donors(api_client: &ApiClient) -> UseDonorsResult {
    let donors = use_state(|| Vec::<Donor>::new());
    let loading = use_state(|| true);
    let search_query = use_state(String::new);
    let error = use_state(|| None::<String>);
    let request_seq = use_mut_ref(|| 0u64);

    let load_donors = {
        let api_client = api_client.clone();
        let donors = donors.clone();
        let loading = loading.clone();
        let error = error.clone();
        let request_seq = request_seq.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let donors = donors.clone();
            let loading = loading.clone();
            let error = error.clone();
            let request_seq = request_seq.clone();

            let token = {
                let mut seq = request_seq.borrow_mut();
                *seq += 1;
                *seq
            };

            spawn_local(async move {
                loading.set(true);

                let result = api_client.list_donors(0, PAGE_SIZE).await;
                if *request_seq.borrow() != token {
                    Logger::debug_with_component("donor-directory", "Discarding stale list response");
                    return;
                }

                match result {
                    Ok(data) => {
                        donors.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "donor-directory",
                            &format!("Failed to load donors: {}", e),
                        );
                        error.set(Some(format!("Failed to load donors: {}", e)));
                    }
                }

                loading.set(false);
            });
        })
    };

    let search_donors = {
        let api_client = api_client.clone();
        let donors = donors.clone();
        let loading = loading.clone();
        let search_query = search_query.clone();
        let error = error.clone();
        let request_seq = request_seq.clone();
        let load_donors = load_donors.clone();

        use_callback((), move |_, _| {
            let query = (*search_query).trim().to_string();
            if query.is_empty() {
                // Blank query falls back to the plain listing
                load_donors.emit(());
                return;
            }

            let api_client = api_client.clone();
            let donors = donors.clone();
            let loading = loading.clone();
            let error = error.clone();
            let request_seq = request_seq.clone();

            let token = {
                let mut seq = request_seq.borrow_mut();
                *seq += 1;
                *seq
            };

            spawn_local(async move {
                loading.set(true);

                let result = api_client.search_donors(&query, SEARCH_LIMIT).await;
                if *request_seq.borrow() != token {
                    Logger::debug_with_component(
                        "donor-directory",
                        "Discarding stale search response",
                    );
                    return;
                }

                match result {
                    Ok(data) => {
                        donors.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "donor-directory",
                            &format!("Search failed: {}", e),
                        );
                        error.set(Some(format!("Search failed: {}", e)));
                    }
                }

                loading.set(false);
            });
        })
    };

    let delete_donor = {
        let api_client = api_client.clone();
        let error = error.clone();
        let load_donors = load_donors.clone();

        use_callback((), move |donor_id: i64, _| {
            let api_client = api_client.clone();
            let error = error.clone();
            let load_donors = load_donors.clone();

            spawn_local(async move {
                match api_client.delete_donor(donor_id).await {
                    Ok(()) => {
                        Logger::info_with_component(
                            "donor-directory",
                            &format!("Deleted donor {}", donor_id),
                        );
                        load_donors.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "donor-directory",
                            &format!("Failed to delete donor {}: {}", donor_id, e),
                        );
                        error.set(Some(format!("Failed to delete donor: {}", e)));
                    }
                }
            });
        })
    };

    let on_query_change = {
        let search_query = search_query.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_query.set(input.value());
        })
    };

    let state = DonorDirectoryState {
        donors: (*donors).clone(),
        loading: *loading,
        search_query: (*search_query).clone(),
        error: (*error).clone(),
    };

    let actions = UseDonorsActions {
        load_donors,
        search_donors,
        delete_donor,
        on_query_change,
    };

    UseDonorsResult { state, actions }
}
