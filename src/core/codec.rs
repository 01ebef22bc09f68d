use std::fmt::Display;

use log::debug;
use postcard::{from_bytes, to_allocvec};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug)]
pub enum CodecError {
    PostcardError(postcard::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::PostcardError(err) => write!(f, "postcard: {err}"),
        }
    }
}

impl std::error::Error for CodecError {}

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    to_allocvec(value).map_err(|err| {
        debug!("Failed to encode value: {err}");
        CodecError::PostcardError(err)
    })
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    from_bytes(bytes).map_err(|err| {
        debug!("Failed to decode {} bytes: {err}", bytes.len());
        CodecError::PostcardError(err)
    })
}
