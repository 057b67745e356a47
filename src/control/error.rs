//! Errors raised when a container is asked for a value it does not hold.

use thiserror::Error;

/// A value-only accessor was used on the absent or failed side of a container.
///
/// `Maybe::Nothing` and `Either::Left` never expose a usable value; asking
/// for one through [`Maybe::value`](super::Maybe::value) or
/// [`Either::value`](super::Either::value) reports this error instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The container was `Maybe::Nothing`.
    #[error("can't extract the value of a Maybe.Nothing")]
    Nothing,

    /// The container was `Either::Left`; `payload` is its debug rendering.
    #[error("can't extract the value of an Either.Left({payload})")]
    Left {
        /// Debug rendering of the left payload.
        payload: String,
    },
}
