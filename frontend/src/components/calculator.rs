use calendar_domain::calculator::KEYPAD;
use calendar_domain::{CalcKey, CalculatorSession};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalculatorProps {
    pub session: CalculatorSession,
    pub on_press: Callback<CalcKey>,
}

fn key_class(key: CalcKey) -> &'static str {
    match key {
        CalcKey::Digit(_) => "btn btn-light calc-btn",
        CalcKey::Operator(_) => "btn btn-warning calc-btn",
        CalcKey::Equals => "btn btn-primary calc-btn",
        CalcKey::Clear | CalcKey::ClearEntry => "btn btn-danger calc-btn",
    }
}

#[function_component(Calculator)]
pub fn calculator(props: &CalculatorProps) -> Html {
    let session = &props.session;

    html! {
        <section class="card calculator-section">
            <div class="card-header">
                <h5><i class="fas fa-calculator"></i>{" Calculator"}</h5>
            </div>
            <div class="card-body">
                <input type="text" id="calc-display" class="form-control calc-display" readonly=true value={session.display().to_string()} />
                <div class="calc-keypad">
                    {for KEYPAD.iter().flat_map(|row| row.iter()).map(|label| {
                        match CalcKey::parse(label) {
                            Some(key) => {
                                let on_press = props.on_press.clone();
                                let onclick = Callback::from(move |_: MouseEvent| on_press.emit(key));
                                html! {
                                    <button type="button" class={key_class(key)} {onclick}>{*label}</button>
                                }
                            }
                            None => html! { <span class="calc-spacer"></span> },
                        }
                    })}
                </div>
                <div id="calc-history" class="calc-history">
                    {for session.history().map(|entry| html! {
                        <div class="calc-history-item">
                            <div class="calc-history-expression">{&entry.expression}</div>
                            <div class="calc-history-result">{format!("= {}", entry.result)}</div>
                            <div class="calc-history-time">{&entry.timestamp}</div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
