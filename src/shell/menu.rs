//! Main menu entries.

/// An entry of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    ShowOperations,
    ShowHistory,
    DeleteHistory,
    UpdateHistory,
    ClearHistory,
    Credits,
    Quit,
}

impl MenuChoice {
    /// Menu entries in the order they are numbered.
    pub const ALL: [MenuChoice; 8] = [
        Self::Calculate,
        Self::ShowOperations,
        Self::ShowHistory,
        Self::DeleteHistory,
        Self::UpdateHistory,
        Self::ClearHistory,
        Self::Credits,
        Self::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Calculate => "Calculate",
            Self::ShowOperations => "Show Operations",
            Self::ShowHistory => "Show History",
            Self::DeleteHistory => "Delete History",
            Self::UpdateHistory => "Update History",
            Self::ClearHistory => "Clear History",
            Self::Credits => "Credits",
            Self::Quit => "Quit",
        }
    }

    /// 1-based number shown in the menu.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|&choice| choice == self)
            .map_or(0, |i| i + 1)
    }

    /// Parse a menu number. `q`, `quit` and `exit` also quit.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if matches!(input.to_lowercase().as_str(), "q" | "quit" | "exit") {
            return Some(Self::Quit);
        }
        let number: usize = input.parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Calculate));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::ClearHistory));
        assert_eq!(MenuChoice::parse("8"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
    }

    #[test]
    fn test_parse_quit_words() {
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("EXIT"), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_numbers_match_order() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.number(), i + 1);
        }
    }
}
