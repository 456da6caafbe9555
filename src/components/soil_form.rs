use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::soil::{evaluate, AnalysisResult, SoilSample};

/// The seven-field measurement form.
///
/// The analyze button shows a brief busy state before the verdict
/// appears; validation and evaluation run when it elapses, matching
/// the flow of the original dashboard. Non-numeric or non-finite
/// input in any field aborts with an inline error and no evaluation.
#[component]
pub fn SoilForm(set_analysis: WriteSignal<Option<AnalysisResult>>) -> impl IntoView {
    let moisture = RwSignal::new(String::new());
    let ph = RwSignal::new(String::new());
    let temperature = RwSignal::new(String::new());
    let nitrogen = RwSignal::new(String::new());
    let phosphorus = RwSignal::new(String::new());
    let potassium = RwSignal::new(String::new());
    let organic_matter = RwSignal::new(String::new());

    let (is_analyzing, set_is_analyzing) = signal(false);
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    let analyze = move |_| {
        if is_analyzing.get() {
            return;
        }
        set_is_analyzing.set(true);
        set_error_message.set(None);

        let Some(window) = web_sys::window() else {
            set_is_analyzing.set(false);
            return;
        };

        let callback = wasm_bindgen::closure::Closure::once(move || {
            set_is_analyzing.set(false);
            match parse_sample([
                moisture, ph, temperature, nitrogen, phosphorus, potassium, organic_matter,
            ]) {
                Some(sample) => set_analysis.set(Some(evaluate(&sample))),
                None => {
                    set_error_message
                        .set(Some("Please enter valid numbers in all fields.".to_string()));
                }
            }
        });

        let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            1500,
        );
        if scheduled.is_err() {
            set_is_analyzing.set(false);
            return;
        }
        callback.forget();
    };

    view! {
        <section class="soil-form-section">
            <div class="soil-form">
                <NumberField label="Moisture" unit="%" value=moisture />
                <NumberField label="pH" unit="" value=ph />
                <NumberField label="Temperature" unit="°C" value=temperature />
                <NumberField label="Nitrogen" unit="mg/kg" value=nitrogen />
                <NumberField label="Phosphorus" unit="mg/kg" value=phosphorus />
                <NumberField label="Potassium" unit="mg/kg" value=potassium />
                <NumberField label="Organic Matter" unit="%" value=organic_matter />
            </div>

            <Show when=move || error_message.get().is_some()>
                <span class="status-text status-error">
                    {move || error_message.get().unwrap_or_default()}
                </span>
            </Show>

            <button
                class="btn btn-primary analyze-btn"
                on:click=analyze
                disabled=move || is_analyzing.get()
            >
                {move || if is_analyzing.get() { "Analyzing..." } else { "Analyze Soil" }}
            </button>
        </section>
    }
}

/// Parse the seven fields in form order. `None` if any field is not a
/// finite number.
fn parse_sample(fields: [RwSignal<String>; 7]) -> Option<SoilSample> {
    let mut values = [0.0f64; 7];
    for (slot, field) in values.iter_mut().zip(fields) {
        let parsed = field.get().trim().parse::<f64>().ok()?;
        if !parsed.is_finite() {
            return None;
        }
        *slot = parsed;
    }
    let [moisture, ph, temperature, nitrogen, phosphorus, potassium, organic_matter] = values;
    Some(SoilSample {
        moisture,
        ph,
        temperature,
        nitrogen,
        phosphorus,
        potassium,
        organic_matter,
    })
}

#[component]
fn NumberField(
    /// Field label, e.g. "Nitrogen"
    #[prop(into)]
    label: String,
    /// Unit hint shown next to the label, e.g. "mg/kg"
    #[prop(into)]
    unit: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label} " " <span class="unit">{unit}</span></label>
            <input
                type="number"
                step="any"
                class="input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
