use super::Output;

/// One prompt + input + output unit of the terminal.
///
/// A line is *active* until it is submitted; from then on its input and
/// output are frozen. `hidden` is only a display flag set by `clear`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Position in submission order, starting at 0. Stable key for renderers.
    pub id: usize,
    /// Working directory shown in the prompt when the line was created.
    pub cwd: String,
    /// Text submitted on this line (empty while active).
    pub input: String,
    /// Output frozen on submit, `None` while the line is still active.
    pub output: Option<Output>,
    pub hidden: bool,
}

impl Line {
    pub(crate) fn new(id: usize, cwd: impl Into<String>) -> Self {
        Self {
            id,
            cwd: cwd.into(),
            input: String::new(),
            output: None,
            hidden: false,
        }
    }

    /// Whether this line still accepts input.
    pub fn is_active(&self) -> bool {
        self.output.is_none()
    }

    pub(crate) fn hide(&mut self) {
        self.hidden = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_is_active() {
        let line = Line::new(0, "/home/george");
        assert!(line.is_active());
        assert!(!line.hidden);
        assert_eq!(line.input, "");
        assert_eq!(line.cwd, "/home/george");
    }

    #[test]
    fn test_line_with_output_is_closed() {
        let mut line = Line::new(3, "/");
        line.output = Some(Output::Empty);
        assert!(!line.is_active());
    }
}
