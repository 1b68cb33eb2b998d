//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Every tick completes with one of exactly two outcomes. There is no
/// `Running` variant: a node either finished successfully or it did not,
/// and the whole tree is re-evaluated from the root on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: the condition was met.
    /// For actions: the action was carried out.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: the condition was not met.
    /// For actions: the action could not be carried out.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }

    /// Returns the status as a plain boolean, `true` meaning success.
    #[inline]
    pub fn as_bool(self) -> bool {
        self.is_success()
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(success: bool) -> Self {
        if success {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl From<Status> for bool {
    #[inline]
    fn from(status: Status) -> Self {
        status.is_success()
    }
}

impl std::ops::Not for Status {
    type Output = Status;

    #[inline]
    fn not(self) -> Status {
        self.invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_round_trip() {
        assert_eq!(Status::from(true), Status::Success);
        assert_eq!(Status::from(false), Status::Failure);
        assert!(bool::from(Status::Success));
        assert!(!bool::from(Status::Failure));
    }

    #[test]
    fn not_matches_invert() {
        assert_eq!(!Status::Success, Status::Failure);
        assert_eq!(!Status::Failure, Status::Success);
        assert_eq!(!Status::Success, Status::Success.invert());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Status::Failure).unwrap();
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Status::Failure);
    }
}
