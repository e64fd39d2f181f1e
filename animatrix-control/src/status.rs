//! Host-facing status codes
//!
//! Thin host bindings (out of scope here) surface controller results as
//! flat integer codes. The discriminants are a stable ABI: 0 success,
//! 1 no-handle, 2 bad input shape, 3 draw transfer failure, and 99 for a
//! missing controller (the binding layer's "null controller" code, never
//! produced by this crate).

use crate::controller::ControlError;

/// Result of a host API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i32)]
pub enum StatusCode {
    /// Operation completed
    Success = 0,
    /// No usable device handle (uninitialized or closed controller)
    NoHandle = 1,
    /// Caller data does not fit the panel geometry
    InvalidInputShape = 2,
    /// A transfer failed or came up short during a draw cycle
    DrawTransferError = 3,
    /// Reserved for the binding layer: no controller instance exists
    NoController = 99,
}

impl StatusCode {
    /// Integer code for the binding layer
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Collapse a controller result into a status code
    pub fn from_result(result: Result<(), ControlError>) -> Self {
        match result {
            Ok(()) => StatusCode::Success,
            Err(err) => err.into(),
        }
    }
}

impl From<ControlError> for StatusCode {
    fn from(err: ControlError) -> Self {
        match err {
            ControlError::NotInitialized | ControlError::Closed => StatusCode::NoHandle,
            ControlError::Shape(_) => StatusCode::InvalidInputShape,
            ControlError::Transfer(_) | ControlError::ShortTransfer { .. } => {
                StatusCode::DrawTransferError
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TransferError;
    use animatrix_protocol::ShapeError;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(StatusCode::Success.code(), 0);
        assert_eq!(StatusCode::NoHandle.code(), 1);
        assert_eq!(StatusCode::InvalidInputShape.code(), 2);
        assert_eq!(StatusCode::DrawTransferError.code(), 3);
        assert_eq!(StatusCode::NoController.code(), 99);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            StatusCode::from(ControlError::NotInitialized),
            StatusCode::NoHandle
        );
        assert_eq!(StatusCode::from(ControlError::Closed), StatusCode::NoHandle);
        assert_eq!(
            StatusCode::from(ControlError::Shape(ShapeError::WrongLength { len: 3 })),
            StatusCode::InvalidInputShape
        );
        assert_eq!(
            StatusCode::from(ControlError::Transfer(TransferError::Timeout)),
            StatusCode::DrawTransferError
        );
        assert_eq!(
            StatusCode::from(ControlError::ShortTransfer { sent: 12 }),
            StatusCode::DrawTransferError
        );
    }

    #[test]
    fn test_from_result() {
        assert_eq!(StatusCode::from_result(Ok(())), StatusCode::Success);
        assert_eq!(
            StatusCode::from_result(Err(ControlError::NotInitialized)),
            StatusCode::NoHandle
        );
    }
}
