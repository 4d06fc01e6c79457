use chrono::Utc;
use contracts::domain::a002_manual_session::{
    ManualSession, ManualSessionData, OcrProgress, OcrResults,
};
use leptos::prelude::*;

/// Reactive holder of the manual workflow state, shared through context.
///
/// Every mutation that drops files revokes their object URLs.
#[derive(Clone, Copy)]
pub struct ManualStore {
    pub state: RwSignal<ManualSession>,
}

impl ManualStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ManualSession::default()),
        }
    }

    pub fn set_data(&self, data: ManualSessionData) {
        let mut released = Vec::new();
        self.state
            .update(|session| released = session.replace(data, Utc::now()));
        revoke_object_urls(&released);
    }

    pub fn clear(&self) {
        let mut released = Vec::new();
        self.state
            .update(|session| released = session.clear(Utc::now()));
        revoke_object_urls(&released);
    }

    pub fn set_ocr_results(&self, results: OcrResults) {
        let mut released = Vec::new();
        self.state
            .update(|session| released = session.set_ocr_results(results));
        revoke_object_urls(&released);
    }

    pub fn set_session_id(&self, session_id: String) {
        self.state.update(|session| session.set_session_id(session_id));
    }

    pub fn set_ocr_progress(&self, progress: Option<OcrProgress>) {
        self.state.update(|session| session.set_ocr_progress(progress));
    }
}

impl Default for ManualStore {
    fn default() -> Self {
        Self::new()
    }
}

fn revoke_object_urls(urls: &[String]) {
    for url in urls {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("revokeObjectURL failed for {}: {:?}", url, e);
        }
    }
}

pub fn use_manual_store() -> ManualStore {
    use_context::<ManualStore>().unwrap_or_else(|| {
        log::warn!("ManualStore context not found, using a detached one");
        ManualStore::new()
    })
}
