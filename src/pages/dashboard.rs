use leptos::prelude::*;

use crate::components::results_panel::ResultsPanel;
use crate::components::soil_form::SoilForm;
use crate::soil::AnalysisResult;

/// The single page of the app: measurement form on top, results
/// below. Owns the analysis signal.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (analysis, set_analysis) = signal::<Option<AnalysisResult>>(None);

    view! {
        <div class="page dashboard-page">
            <h2>"Soil Analysis"</h2>
            <p class="page-description">
                "Enter your soil measurements to get a health status, fertilizer recommendations, and crop suggestions."
            </p>

            <SoilForm set_analysis=set_analysis />
            <ResultsPanel analysis=analysis />
        </div>
    }
}
