use calendar_domain::workflow;
use calendar_domain::{Banner, Mutation, Refresh};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// A mutation plus an optional hook told whether it succeeded
#[derive(Clone, PartialEq)]
pub struct MutationRequest {
    pub mutation: Mutation,
    pub on_settled: Option<Callback<bool>>,
}

impl MutationRequest {
    pub fn new(mutation: Mutation) -> Self {
        Self {
            mutation,
            on_settled: None,
        }
    }

    pub fn on_settled(mut self, callback: Callback<bool>) -> Self {
        self.on_settled = Some(callback);
        self
    }
}

impl From<Mutation> for MutationRequest {
    fn from(mutation: Mutation) -> Self {
        Self::new(mutation)
    }
}

/// Runs mutations against the server: a banner for every outcome and the
/// follow-up refreshes for successful ones. Nothing changes locally until
/// the server confirmed.
#[hook]
pub fn use_mutations(
    api_client: &ApiClient,
    show_banner: &Callback<Banner>,
    on_refresh: &Callback<Refresh>,
) -> Callback<MutationRequest> {
    let api_client = api_client.clone();

    use_callback(
        (show_banner.clone(), on_refresh.clone()),
        move |request: MutationRequest, (show_banner, on_refresh)| {
            let api_client = api_client.clone();
            let show_banner = show_banner.clone();
            let on_refresh = on_refresh.clone();

            spawn_local(async move {
                let outcome = workflow::perform(&api_client, request.mutation).await;
                if let Some(on_settled) = &request.on_settled {
                    on_settled.emit(outcome.succeeded());
                }
                show_banner.emit(outcome.banner);
                if let Some(refresh) = outcome.refresh {
                    on_refresh.emit(refresh);
                }
            });
        },
    )
}
