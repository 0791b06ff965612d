use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr)]
pub enum GameState {
    #[default]
    MainMenu,
    Playing,
    Completed,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_main_menu() {
        assert_eq!(GameState::default(), GameState::MainMenu);
    }

    #[test]
    fn test_display() {
        assert_eq!(GameState::Playing.to_string(), "Playing");
        assert_eq!(GameState::Completed.as_str(), "Completed");
    }
}
