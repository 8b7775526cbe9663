pub mod app_state;
pub mod commands {
    pub mod start_shift;
}
pub mod documents;
