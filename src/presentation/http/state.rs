// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::views::ViewRenderer;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub renderer: Arc<dyn ViewRenderer>,
}
