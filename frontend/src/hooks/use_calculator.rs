use calendar_domain::date_utils::current_time_label;
use calendar_domain::workflow;
use calendar_domain::{CalcKey, CalculatorSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub struct UseCalculatorResult {
    pub session: CalculatorSession,
    pub press: Callback<CalcKey>,
}

/// Calculator keypad state. Expressions are evaluated by the server.
#[hook]
pub fn use_calculator(api_client: &ApiClient, history_limit: usize) -> UseCalculatorResult {
    let session = use_mut_ref(move || CalculatorSession::new(history_limit));
    let rerender = use_force_update();

    let press = {
        let api_client = api_client.clone();
        let session = session.clone();
        let rerender = rerender.clone();

        use_callback((), move |key: CalcKey, _| {
            let submitted = session.borrow_mut().press(key);
            rerender.force_update();

            if let Some(evaluation) = submitted {
                let api_client = api_client.clone();
                let session = session.clone();
                let rerender = rerender.clone();
                spawn_local(async move {
                    let result = workflow::evaluate(&api_client, &evaluation.expression).await;
                    session
                        .borrow_mut()
                        .finish(&evaluation, result, current_time_label());
                    rerender.force_update();
                });
            }
        })
    };

    let snapshot = session.borrow().clone();
    UseCalculatorResult {
        session: snapshot,
        press,
    }
}
