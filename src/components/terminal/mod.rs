mod line;
mod output;
mod terminal;

pub use line::TerminalLine;
pub use output::CommandOutput;
pub use terminal::Terminal;
