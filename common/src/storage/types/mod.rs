pub mod panel_toggle;
