pub mod auth_modal;
pub mod fertilizer_card;
pub mod header;
pub mod results_panel;
pub mod soil_form;
