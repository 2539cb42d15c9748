use crate::modules::projects::adapters::codecs::{CodecError, RawRecord};
use crate::modules::projects::core::record::ProjectRecord;

pub fn encode(records: &[ProjectRecord]) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn decode(content: &str) -> Result<Vec<RawRecord>, CodecError> {
    Ok(serde_json::from_str(content)?)
}
