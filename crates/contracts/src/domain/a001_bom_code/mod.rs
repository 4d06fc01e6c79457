//! Позиционный BOM-код: схемы семейств, выбор пользователя, кодек.

pub mod codec;
pub mod dto;
pub mod error;
pub mod registry;
pub mod schema;
pub mod section;
pub mod selection;

mod tables;

pub use codec::{create_default_selection, decode, decode_strict, encode, summarize, validate_length};
pub use dto::{
    BomGenerationRequest, BomGenerationResponse, BomSaveRequest, BomSaveResponse, BomSectionDto,
    BomSegment,
};
pub use error::BomCodeError;
pub use registry::{
    get_schema, get_schema_by_code, list_families, power_standard_label, BomRegistry,
    BOM_REGISTRY,
};
pub use schema::{CodeSchema, SchemaIssue};
pub use section::{CodeSection, OptionTable, SectionKind};
pub use selection::{SectionValue, Selection};
