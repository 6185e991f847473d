//! The `{data, error}` envelope returned by every facade operation.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{BackendError, BackendResult};

/// Outcome of a facade call. Exactly one of `data` / `error` is present.
///
/// Serializes as `{"data": T, "error": null}` or
/// `{"data": null, "error": {"code": ..., "message": ...}}`, the shape the
/// hosted client returns, so callers handle both backends identically.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Response<T>(BackendResult<T>);

impl<T> Response<T> {
    pub fn ok(data: T) -> Self {
        Self(Ok(data))
    }

    pub fn err(error: BackendError) -> Self {
        Self(Err(error))
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    #[must_use]
    pub fn is_err(&self) -> bool {
        self.0.is_err()
    }

    /// The data slot. `None` whenever `error()` is `Some`.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.0.as_ref().ok()
    }

    /// The error slot. `None` whenever `data()` is `Some`.
    #[must_use]
    pub fn error(&self) -> Option<&BackendError> {
        self.0.as_ref().err()
    }

    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.0.ok()
    }

    pub fn into_result(self) -> BackendResult<T> {
        self.0
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response(self.0.map(f))
    }
}

impl<T> From<BackendResult<T>> for Response<T> {
    fn from(result: BackendResult<T>) -> Self {
        Self(result)
    }
}

impl<T: Serialize> Serialize for Response<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Response", 2)?;
        match &self.0 {
            Ok(data) => {
                state.serialize_field("data", data)?;
                state.serialize_field("error", &None::<()>)?;
            }
            Err(error) => {
                state.serialize_field("data", &None::<()>)?;
                state.serialize_field("error", &error.body())?;
            }
        }
        state.end()
    }
}
