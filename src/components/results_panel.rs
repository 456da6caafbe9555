use leptos::prelude::*;

use crate::components::fertilizer_card::FertilizerCard;
use crate::soil::AnalysisResult;

/// Renders one analysis: status line, recommendation paragraphs,
/// fertilizer cards, and the crop list. Nothing is shown until the
/// first analysis completes.
#[component]
pub fn ResultsPanel(analysis: ReadSignal<Option<AnalysisResult>>) -> impl IntoView {
    view! { {move || analysis.get().map(render_result)} }
}

fn render_result(result: AnalysisResult) -> impl IntoView {
    let status = result.overall_status;
    let fertilizer_cards = (!result.fertilizers.is_empty()).then(|| {
        view! {
            <div class="fertilizer-section">
                <h4>"Fertilizer Recommendations"</h4>
                <div class="fertilizer-grid">
                    {result
                        .fertilizers
                        .iter()
                        .map(|rec| view! { <FertilizerCard rec=*rec /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        }
    });

    view! {
        <section class="results-container">
            <h3 class=format!("result-text {}", status.css_class())>
                {format!("Soil Status: {}", status.label())}
            </h3>
            <div class="recommendations">
                {result
                    .recommendations
                    .iter()
                    .map(|r| view! { <p>{r.clone()}</p> })
                    .collect::<Vec<_>>()}
            </div>
            {fertilizer_cards}
            <p class="crops">
                <strong>"Suggested Crops: "</strong>
                {result.crops.join(", ")}
            </p>
        </section>
    }
}
