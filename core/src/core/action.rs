use std::fmt;
use std::str::FromStr;

/// Which controller port an input comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

/// Joystick position combined with the fire button.
///
/// Ordering matches the console's conventional action numbering, so
/// `Input::ALL[i] as usize == i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Noop,
    Fire,
    Up,
    Right,
    Left,
    Down,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
    UpFire,
    RightFire,
    LeftFire,
    DownFire,
    UpRightFire,
    UpLeftFire,
    DownRightFire,
    DownLeftFire,
}

impl Input {
    pub const ALL: [Input; 18] = [
        Input::Noop,
        Input::Fire,
        Input::Up,
        Input::Right,
        Input::Left,
        Input::Down,
        Input::UpRight,
        Input::UpLeft,
        Input::DownRight,
        Input::DownLeft,
        Input::UpFire,
        Input::RightFire,
        Input::LeftFire,
        Input::DownFire,
        Input::UpRightFire,
        Input::UpLeftFire,
        Input::DownRightFire,
        Input::DownLeftFire,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Input::Noop => "NOOP",
            Input::Fire => "FIRE",
            Input::Up => "UP",
            Input::Right => "RIGHT",
            Input::Left => "LEFT",
            Input::Down => "DOWN",
            Input::UpRight => "UPRIGHT",
            Input::UpLeft => "UPLEFT",
            Input::DownRight => "DOWNRIGHT",
            Input::DownLeft => "DOWNLEFT",
            Input::UpFire => "UPFIRE",
            Input::RightFire => "RIGHTFIRE",
            Input::LeftFire => "LEFTFIRE",
            Input::DownFire => "DOWNFIRE",
            Input::UpRightFire => "UPRIGHTFIRE",
            Input::UpLeftFire => "UPLEFTFIRE",
            Input::DownRightFire => "DOWNRIGHTFIRE",
            Input::DownLeftFire => "DOWNLEFTFIRE",
        }
    }
}

/// One symbol of the emulator's closed action set.
///
/// Adapters never invent actions; they only classify membership and emit
/// actions through a [`ControlPort`](crate::core::ControlPort).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Player(Player, Input),
    /// Console reset switch.
    Reset,
    /// Console game-select switch.
    Select,
}

impl Action {
    pub const NOOP_A: Action = Action::Player(Player::A, Input::Noop);
    pub const NOOP_B: Action = Action::Player(Player::B, Input::Noop);

    /// Shorthand for a player A joystick action.
    pub const fn a(input: Input) -> Action {
        Action::Player(Player::A, input)
    }

    /// All eighteen player A actions in canonical order.
    pub fn all_player_a() -> impl Iterator<Item = Action> {
        Input::ALL.into_iter().map(Action::a)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Player(Player::A, input) => f.write_str(input.name()),
            Action::Player(Player::B, input) => write!(f, "B_{}", input.name()),
            Action::Reset => f.write_str("RESET"),
            Action::Select => f.write_str("SELECT"),
        }
    }
}

/// Error returned when parsing an unknown action name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    /// Parses the names produced by `Display`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.as_str() {
            "RESET" => return Ok(Action::Reset),
            "SELECT" => return Ok(Action::Select),
            _ => {}
        }
        let (player, name) = match upper.strip_prefix("B_") {
            Some(rest) => (Player::B, rest),
            None => (Player::A, upper.strip_prefix("A_").unwrap_or(&upper)),
        };
        Input::ALL
            .into_iter()
            .find(|input| input.name() == name)
            .map(|input| Action::Player(player, input))
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
