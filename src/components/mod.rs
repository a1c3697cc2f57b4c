pub mod app;
pub mod card_state;
pub mod readout_panel;
pub mod settings_panel;
pub mod surface_view;
