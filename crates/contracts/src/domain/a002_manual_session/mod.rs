//! Состояние ручной генерации документации (загрузка → OCR → генерация → проверка).

pub mod progress;
pub mod record;
pub mod session;

pub use progress::{OcrProgress, OcrStatus};
pub use record::{ManualFile, ManualSessionRecord, OcrArtifact, OcrGroup, OcrPage};
pub use session::{ManualSession, ManualSessionData, OcrResults};
