use super::client::RawResponse;
use super::error::{ImmichError, ImmichResult};
use common_types::ErrorEnvelope;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Decodes `bytes` as `T`. When that fails, the body is tried as a server
/// error envelope, and only if that fails too is the original decode error
/// returned.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> ImmichResult<T> {
    match serde_json::from_slice::<T>(bytes) {
        Ok(value) => Ok(value),
        Err(decode_error) => match serde_json::from_slice::<ErrorEnvelope>(bytes) {
            Ok(envelope) => Err(envelope.into()),
            Err(_) => Err(ImmichError::Decode(decode_error)),
        },
    }
}

/// Like [`decode`], but a two byte body (`[]`, `{}`) is an empty list.
pub fn decode_list<T: DeserializeOwned>(bytes: &[u8]) -> ImmichResult<Vec<T>> {
    if bytes.len() == 2 {
        return Ok(Vec::new());
    }
    decode(bytes)
}

/// Maps a raw response to `T`, or to the error the server reported.
pub fn decode_response<T: DeserializeOwned>(response: &RawResponse) -> ImmichResult<T> {
    if response.status.is_success() {
        return decode(&response.body);
    }
    Err(failure_error(response))
}

/// [`decode_response`] for list endpoints.
pub fn decode_list_response<T: DeserializeOwned>(response: &RawResponse) -> ImmichResult<Vec<T>> {
    if response.status.is_success() {
        return decode_list(&response.body);
    }
    Err(failure_error(response))
}

fn failure_error(response: &RawResponse) -> ImmichError {
    debug!("Request failed with status {}", response.status);
    match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => envelope.into(),
        Err(_) => ImmichError::Status {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        },
    }
}
