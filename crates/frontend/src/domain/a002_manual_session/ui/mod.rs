pub mod session_panel;
