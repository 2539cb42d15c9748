use crate::modules::projects::adapters::codecs::CodecError;
use crate::modules::projects::adapters::outbound::record_store::RecordStoreError;
use crate::modules::projects::use_cases::add_project::decide::DecideError;
use crate::modules::projects::use_cases::import_projects::decode::ImportError;
use crate::shared::infrastructure::confirmation::ConfirmationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    #[error(transparent)]
    Confirmation(#[from] ConfirmationError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    #[error("export failed: {0}")]
    Export(#[from] CodecError),
}
