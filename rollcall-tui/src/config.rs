/// Default heading shown above the search box
pub const DEFAULT_TITLE: &str = "Moragolla Voting List";

/// Terminal width, in columns, at which results switch from cards to a table
pub const DEFAULT_BREAKPOINT: u16 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiConfig {
    pub title: String,
    pub breakpoint: u16,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

impl TuiConfig {
    /// Whether an area this wide gets the table layout
    pub fn is_wide(&self, width: u16) -> bool {
        width >= self.breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.title, "Moragolla Voting List");
        assert_eq!(config.breakpoint, 100);
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        let config = TuiConfig::default();
        assert!(!config.is_wide(99));
        assert!(config.is_wide(100));
        assert!(config.is_wide(180));
    }
}
