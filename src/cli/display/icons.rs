//! Status icons for CLI output

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// Success icon (all replicas ready)
    pub const SUCCESS: &'static str = "✓";

    /// Warning icon (partial replicas ready)
    pub const WARNING: &'static str = "⚠";

    /// Error icon (no replicas ready)
    pub const ERROR: &'static str = "✗";

    /// Unknown icon
    pub const UNKNOWN: &'static str = "?";

    /// Get status icon based on ready/total counts
    pub fn get_ready_icon(ready: u32, total: u32) -> &'static str {
        if total == 0 {
            Self::UNKNOWN
        } else if ready == total {
            Self::SUCCESS
        } else if ready > 0 {
            Self::WARNING
        } else {
            Self::ERROR
        }
    }

    /// Get status icon for a pod phase
    pub fn get_phase_icon(phase: &str) -> &'static str {
        match phase {
            "Running" | "Succeeded" | "Active" => Self::SUCCESS,
            "Pending" | "Terminating" => Self::WARNING,
            "Failed" => Self::ERROR,
            _ => Self::UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_ready_icon() {
        assert_eq!(StatusIcon::get_ready_icon(3, 3), StatusIcon::SUCCESS);
        assert_eq!(StatusIcon::get_ready_icon(2, 3), StatusIcon::WARNING);
        assert_eq!(StatusIcon::get_ready_icon(0, 3), StatusIcon::ERROR);
        assert_eq!(StatusIcon::get_ready_icon(0, 0), StatusIcon::UNKNOWN);
    }

    #[test]
    fn test_get_phase_icon() {
        assert_eq!(StatusIcon::get_phase_icon("Running"), StatusIcon::SUCCESS);
        assert_eq!(StatusIcon::get_phase_icon("Pending"), StatusIcon::WARNING);
        assert_eq!(StatusIcon::get_phase_icon("Failed"), StatusIcon::ERROR);
        assert_eq!(StatusIcon::get_phase_icon("Evicted"), StatusIcon::UNKNOWN);
    }
}
