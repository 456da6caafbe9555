use leptos::prelude::*;

use crate::soil::FertilizerRec;

/// One fertilizer suggestion rendered as a card.
#[component]
pub fn FertilizerCard(rec: FertilizerRec) -> impl IntoView {
    view! {
        <div class="fertilizer-card">
            <h4>{rec.kind}</h4>
            <p>{rec.description}</p>
            <p>
                <strong>"Rate: "</strong>
                {rec.rate}
            </p>
        </div>
    }
}
