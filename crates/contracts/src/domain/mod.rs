pub mod a001_bom_code;
pub mod a002_manual_session;
