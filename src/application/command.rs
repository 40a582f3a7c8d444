use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Main-menu options, numbered as the operator sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListProducts,
    AddToCart,
    ViewCart,
    Checkout,
    Exit,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::ListProducts,
        Command::AddToCart,
        Command::ViewCart,
        Command::Checkout,
        Command::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Command::ListProducts => 1,
            Command::AddToCart => 2,
            Command::ViewCart => 3,
            Command::Checkout => 4,
            Command::Exit => 5,
        }
    }

    /// Every command returns to the main menu except `Exit`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Command::Exit)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Command::ListProducts => "List products",
            Command::AddToCart => "Add to cart",
            Command::ViewCart => "View cart",
            Command::Checkout => "Checkout",
            Command::Exit => "Exit",
        };
        write!(f, "{}. {}", self.number(), label)
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Command::ALL
            .into_iter()
            .find(|c| input == c.number().to_string())
            .ok_or_else(|| AppError::InvalidOption(input.to_string()))
    }
}

/// Whether a checkout confirmation answer means yes. Case-insensitive.
pub fn is_confirmation(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

/// Parses operator input as a non-negative integer.
pub fn parse_number(input: &str) -> Result<u32, AppError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| AppError::InvalidNumber(input.to_string()))
}
