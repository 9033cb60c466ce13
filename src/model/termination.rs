use std::fmt;

/// The program's self-reported run outcome at the end of a log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationStatus {
    /// The final line reports `Normal termination`.
    Normal,
    /// An `Error termination` line names a Gaussian link executable; the
    /// payload is the link code (e.g. `l9999`).
    LinkError(String),
    /// No normal termination and no diagnosable link error. Typically a
    /// truncated file or an external kill.
    Abnormal,
}

impl TerminationStatus {
    #[inline]
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

impl fmt::Display for TerminationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal termination"),
            Self::LinkError(link) => write!(f, "Error termination ({link})"),
            Self::Abnormal => write!(f, "abnormal termination"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_link() {
        let status = TerminationStatus::LinkError("l9999".to_string());
        assert_eq!(status.to_string(), "Error termination (l9999)");
    }

    #[test]
    fn only_normal_is_normal() {
        assert!(TerminationStatus::Normal.is_normal());
        assert!(!TerminationStatus::Abnormal.is_normal());
        assert!(!TerminationStatus::LinkError("l502".into()).is_normal());
    }
}
