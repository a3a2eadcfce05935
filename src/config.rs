use crate::core::{board::Board, geometry::DEFAULT_SCALE};

pub const MAX_SCALE: u32 = 8;
pub const USAGE: &str = "usage: holyhell [print] [demo] [scale <1-8>]";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    Standard,
    Demo,
}

impl Layout {
    pub fn board(self) -> Board {
        match self {
            Layout::Standard => Board::standard(),
            Layout::Demo => Board::demo(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),
    #[error("`scale` needs a value")]
    MissingScale,
    #[error("invalid scale `{0}`: expected an integer from 1 to {MAX_SCALE}")]
    InvalidScale(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub layout: Layout,
    pub scale: u32,
    /// Print the board diagram instead of opening a window.
    pub print_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: Layout::Standard,
            scale: DEFAULT_SCALE,
            print_only: false,
        }
    }
}

impl Config {
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .collect();

        let mut config = Config::default();
        let mut rest = args.as_slice();

        loop {
            match rest {
                [] => break,
                [flag, tail @ ..] if flag == "print" => {
                    config.print_only = true;
                    rest = tail;
                }
                [flag, tail @ ..] if flag == "demo" => {
                    config.layout = Layout::Demo;
                    rest = tail;
                }
                [flag, value, tail @ ..] if flag == "scale" => {
                    config.scale = parse_scale(value)?;
                    rest = tail;
                }
                [flag] if flag == "scale" => return Err(ConfigError::MissingScale),
                [other, ..] => return Err(ConfigError::UnknownArgument(other.clone())),
            }
        }

        Ok(config)
    }
}

fn parse_scale(value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(scale) if (1..=MAX_SCALE).contains(&scale) => Ok(scale),
        _ => Err(ConfigError::InvalidScale(value.to_string())),
    }
}
