//! Генерация спецификации и инструкции по OCR-документам сессии.

pub mod request;
pub mod response;

pub use request::{
    ManualSpecsheetSaveRequest, OcrDocument, OcrDocumentsRequest, SaveManualBookTruthRequest,
    SaveManualSpecsheetTruthRequest, SavedArtifactQuery,
};
pub use response::{ChunkInfo, ManualBookResponse, SpecsheetEnvelope, SpecsheetResponse};
