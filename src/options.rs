use std::str::FromStr;
use std::time::Duration;

use lifegrid::patterns::{self, Pattern};
use lifegrid::universe::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use lifegrid::CellState;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),
    #[error("invalid value {value:?} for --{option}")]
    InvalidValue { option: &'static str, value: String },
    #[error("unknown fill mode {0:?}")]
    UnknownFill(String),
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, ArgsError> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("e", "expand", "grow the grid when cells reach an edge");
        opts.optflag("t", "threads", "enables multi-threading");
        opts.optflag("v", "verbose", "log engine details");
        opts.optopt("r", "rows", "set grid rows", "ROWS");
        opts.optopt("c", "columns", "set grid columns", "COLUMNS");
        opts.optopt("f", "fill", "set fill type", "TYPE");
        opts.optopt("p", "pattern", "seed with a built-in pattern", "NAME");
        opts.optopt("", "seed", "seed for the random fill", "N");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifegrid [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, ArgsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn get<T: FromStr>(&self, option: &'static str) -> Result<Option<T>, ArgsError> {
        match self.matches.opt_str(option) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| ArgsError::InvalidValue { option, value }),
            None => Ok(None),
        }
    }

    pub fn expand(&self) -> bool {
        self.matches.opt_present("expand")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }
    pub fn log_level(&self) -> log::Level {
        if self.matches.opt_present("verbose") {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    pub fn generations(&self) -> Result<usize, ArgsError> {
        Ok(self.get("gens")?.unwrap_or(4))
    }
    pub fn sleep(&self) -> Result<Option<Duration>, ArgsError> {
        Ok(self.get("sleep")?.map(Duration::from_millis))
    }
    pub fn rng_seed(&self) -> Result<Option<u64>, ArgsError> {
        self.get("seed")
    }

    pub fn grid_size(&self) -> Result<(usize, usize), ArgsError> {
        let rows = self.get("rows")?.unwrap_or(DEFAULT_ROWS);
        let columns = self.get("columns")?.unwrap_or(DEFAULT_COLUMNS);
        Ok((rows, columns))
    }
    pub fn fill_mode(&self) -> Result<FillMode, ArgsError> {
        let mode_str = self.matches.opt_str("fill");
        let mode_str = mode_str.as_deref().unwrap_or("random");
        FillMode::new(mode_str).ok_or_else(|| ArgsError::UnknownFill(mode_str.to_owned()))
    }
    pub fn pattern(&self) -> Result<Option<&'static Pattern>, ArgsError> {
        match self.matches.opt_str("pattern") {
            Some(name) => patterns::find(&name)
                .map(Some)
                .ok_or(ArgsError::UnknownPattern(name)),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    /// State of a cell for the deterministic fills; random fills are handled
    /// by [`lifegrid::Universe::auto_fill`]
    fn fill_cell(self, row: usize, column: usize) -> CellState {
        match self {
            Self::Random | Self::Empty => CellState::Dead,
            Self::Alternating => CellState::from((row + column) % 2 == 0),
            Self::All => CellState::Alive,
        }
    }
    pub fn create_grid(self, rows: usize, columns: usize) -> Vec<Vec<CellState>> {
        (0..rows)
            .map(|row| (0..columns).map(|column| self.fill_cell(row, column)).collect())
            .collect()
    }
}
