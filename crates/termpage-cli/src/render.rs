//! Plain-text renderer writing to a terminal or any `Write`.

use std::io::{self, Write};

use termpage_core::{Line, Renderer, UnitKind};

/// ANSI sequence clearing the screen and homing the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Renders session lines as text.
///
/// Renderer hooks cannot fail, so the first write error is kept and handed
/// out by [`TerminalRenderer::take_error`].
pub struct TerminalRenderer<W: Write> {
    out: W,
    /// Echo submitted input after the prompt (for non-interactive input).
    echo: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            echo: false,
            error: None,
        }
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Return the first write error since the last call, if any.
    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_with(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = f(&mut self.out).and_then(|()| self.out.flush()) {
            log::warn!("terminal write failed: {}", err);
            self.error = Some(err);
        }
    }
}

/// Prompt shown before each input.
pub fn prompt(cwd: &str) -> String {
    format!("{} $ ", cwd)
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn line_opened(&mut self, line: &Line) {
        let prompt = prompt(&line.cwd);
        self.write_with(|out| write!(out, "{}", prompt));
    }

    fn line_closed(&mut self, line: &Line) {
        let echo = self.echo;
        self.write_with(|out| {
            if echo {
                writeln!(out, "{}", line.input)?;
            }
            let Some(output) = &line.output else {
                return Ok(());
            };
            for unit in output.units() {
                match &unit.kind {
                    UnitKind::Text | UnitKind::Error => writeln!(out, "{}", unit.text)?,
                    UnitKind::Code { .. } => {
                        write!(out, "{}", unit.text)?;
                        if !unit.text.ends_with('\n') {
                            writeln!(out)?;
                        }
                    }
                }
            }
            Ok(())
        });
    }

    fn lines_hidden(&mut self) {
        self.write_with(|out| write!(out, "{}", CLEAR_SCREEN));
    }

    fn show_overlay(&mut self) {
        self.write_with(|out| writeln!(out, "open: the site browser is only available on the web"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termpage_core::{FsNode, Session, SessionConfig};

    fn session(echo: bool) -> Session<TerminalRenderer<Vec<u8>>> {
        let tree = FsNode::dir([(
            "home",
            FsNode::dir([(
                "george",
                FsNode::dir([
                    ("blog", FsNode::dir([("welcome.md", FsNode::file(""))])),
                    ("README.md", FsNode::file("hello")),
                ]),
            )]),
        )]);
        let config = SessionConfig::new("/home/george", tree).unwrap();
        Session::new(config, TerminalRenderer::new(Vec::new()).with_echo(echo))
    }

    fn written(session: &Session<TerminalRenderer<Vec<u8>>>) -> String {
        String::from_utf8(session.renderer().get_ref().clone()).unwrap()
    }

    #[test]
    fn test_prompt() {
        assert_eq!(prompt("/home/george"), "/home/george $ ");
    }

    #[test]
    fn test_first_prompt_on_start() {
        assert_eq!(written(&session(false)), "/home/george $ ");
    }

    #[test]
    fn test_echoed_transcript() {
        let mut session = session(true);
        session.submit("ls");
        session.submit("cd blog");
        session.submit("cat /home/george/README.md");
        assert_eq!(
            written(&session),
            "/home/george $ ls\nblog\nREADME.md\n\
             /home/george $ cd blog\n\
             /home/george/blog $ cat /home/george/README.md\nhello\n\
             /home/george/blog $ "
        );
    }

    #[test]
    fn test_clear_and_open() {
        let mut session = session(false);
        session.submit("clear");
        session.submit("open");
        let text = written(&session);
        assert!(text.contains(CLEAR_SCREEN));
        assert!(text.contains("open: the site browser is only available on the web\n"));
        assert!(session.renderer_mut().take_error().is_ok());
    }

    #[test]
    fn test_write_error_is_kept() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut renderer = TerminalRenderer::new(Broken);
        renderer.lines_hidden();
        assert!(renderer.take_error().is_err());
        assert!(renderer.take_error().is_ok());
    }
}
