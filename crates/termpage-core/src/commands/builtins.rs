//! Builtin commands.
//!
//! Each command only looks at its first argument; an absent argument
//! resolves to the working directory.

use crate::error::ShellError;
use crate::filesystem::{self, Resolution};
use crate::models::{FsNode, Output, RenderUnit};

use super::{Context, Effect};

fn first_arg(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("")
}

/// Execute `ls` command.
pub(super) fn ls(ctx: &mut Context<'_>, args: &[String]) -> Result<Output, ShellError> {
    match filesystem::resolve(ctx.cwd.as_str(), first_arg(args), ctx.fs) {
        Resolution::Found {
            path,
            node: FsNode::File(_),
        } => Ok(Output::Unit(RenderUnit::text(path))),
        Resolution::Found {
            node: FsNode::Directory(children),
            ..
        } => Ok(Output::Sequence(
            children.keys().map(RenderUnit::text).collect(),
        )),
        Resolution::NotFound { path } => Err(ShellError::PathNotFound {
            command: "ls",
            path,
        }),
    }
}

/// Execute `cd` command.
pub(super) fn cd(ctx: &mut Context<'_>, args: &[String]) -> Result<Output, ShellError> {
    match filesystem::resolve(ctx.cwd.as_str(), first_arg(args), ctx.fs) {
        Resolution::Found {
            path,
            node: FsNode::Directory(_),
        } => {
            log::debug!("cd: {} -> {}", ctx.cwd, path);
            *ctx.cwd = path;
            Ok(Output::Empty)
        }
        Resolution::Found { path, .. } => Err(ShellError::NotADirectory {
            command: "cd",
            path,
        }),
        Resolution::NotFound { path } => Err(ShellError::PathNotFound {
            command: "cd",
            path,
        }),
    }
}

/// Execute `cat` command.
///
/// File content is returned as a code block whose language hint is the
/// file extension.
pub(super) fn cat(ctx: &mut Context<'_>, args: &[String]) -> Result<Output, ShellError> {
    match filesystem::resolve(ctx.cwd.as_str(), first_arg(args), ctx.fs) {
        Resolution::Found {
            path,
            node: FsNode::File(content),
        } => {
            let language = filesystem::extension(&path);
            Ok(Output::Unit(RenderUnit::code(content.as_str(), language)))
        }
        Resolution::Found { path, .. } => Err(ShellError::IsADirectory {
            command: "cat",
            path,
        }),
        Resolution::NotFound { path } => Err(ShellError::PathNotFound {
            command: "cat",
            path,
        }),
    }
}

/// Execute `clear` command. Lines are hidden, never removed.
pub(super) fn clear(ctx: &mut Context<'_>, _args: &[String]) -> Result<Output, ShellError> {
    ctx.lines.iter_mut().for_each(|line| line.hide());
    ctx.effects.push(Effect::LinesHidden);
    Ok(Output::Empty)
}

/// Execute `history` command.
pub(super) fn history(ctx: &mut Context<'_>, _args: &[String]) -> Result<Output, ShellError> {
    Ok(Output::Sequence(
        ctx.lines
            .iter()
            .map(|line| RenderUnit::text(line.input.as_str()))
            .collect(),
    ))
}

/// Execute `open` command. Showing the overlay is up to the front-end.
pub(super) fn open(ctx: &mut Context<'_>, _args: &[String]) -> Result<Output, ShellError> {
    ctx.effects.push(Effect::ShowOverlay);
    Ok(Output::Empty)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::models::{Line, UnitKind};

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    fn sample_tree() -> FsNode {
        FsNode::dir([(
            "home",
            FsNode::dir([(
                "george",
                FsNode::dir([
                    ("blog", FsNode::dir([("welcome.md", FsNode::file(""))])),
                    ("README.md", FsNode::file("hello")),
                    (".profile", FsNode::file("export EDITOR=vi")),
                ]),
            )]),
        )])
    }

    /// Owned session state for driving a single handler.
    struct Fixture {
        cwd: String,
        fs: FsNode,
        lines: VecDeque<Line>,
        effects: Vec<Effect>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                cwd: "/home/george".to_string(),
                fs: sample_tree(),
                lines: VecDeque::new(),
                effects: Vec::new(),
            }
        }

        fn run(
            &mut self,
            handler: super::super::Handler,
            argv: &[&str],
        ) -> Result<Output, ShellError> {
            let mut ctx = Context {
                cwd: &mut self.cwd,
                fs: &self.fs,
                lines: &mut self.lines,
                effects: &mut self.effects,
            };
            handler(&mut ctx, &args(argv))
        }
    }

    // =========================================================================
    // ls
    // =========================================================================

    #[test]
    fn test_ls_cwd_lists_in_insertion_order() {
        let mut fx = Fixture::new();
        let output = fx.run(ls, &[]).unwrap();
        assert_eq!(output.texts(), vec!["blog", "README.md", ".profile"]);
    }

    #[test]
    fn test_ls_file_shows_resolved_path() {
        let mut fx = Fixture::new();
        let output = fx.run(ls, &["README.md"]).unwrap();
        assert_eq!(output, Output::Unit(RenderUnit::text("/home/george/README.md")));
    }

    #[test]
    fn test_ls_only_uses_first_argument() {
        let mut fx = Fixture::new();
        let output = fx.run(ls, &["blog", "missing"]).unwrap();
        assert_eq!(output.texts(), vec!["welcome.md"]);
    }

    #[test]
    fn test_ls_missing() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run(ls, &["nope"]).unwrap_err().to_string(),
            "ls: cannot access /home/george/nope: No such file or directory"
        );
    }

    // =========================================================================
    // cd
    // =========================================================================

    #[test]
    fn test_cd_directory() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(cd, &["blog/"]).unwrap(), Output::Empty);
        assert_eq!(fx.cwd, "/home/george/blog");
    }

    #[test]
    fn test_cd_without_argument_stays() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(cd, &[]).unwrap(), Output::Empty);
        assert_eq!(fx.cwd, "/home/george");
    }

    #[test]
    fn test_cd_absolute_and_parent() {
        let mut fx = Fixture::new();
        fx.run(cd, &["/"]).unwrap();
        assert_eq!(fx.cwd, "/");
        fx.run(cd, &["home/george/blog"]).unwrap();
        assert_eq!(fx.cwd, "/home/george/blog");
        fx.run(cd, &[".."]).unwrap();
        assert_eq!(fx.cwd, "/home/george");
    }

    #[test]
    fn test_cd_file_leaves_cwd() {
        let mut fx = Fixture::new();
        let err = fx.run(cd, &["README.md"]).unwrap_err();
        assert_eq!(err.to_string(), "cd: not a directory: /home/george/README.md");
        assert_eq!(fx.cwd, "/home/george");
    }

    #[test]
    fn test_cd_missing_leaves_cwd() {
        let mut fx = Fixture::new();
        let err = fx.run(cd, &["missing"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cd: no such file or directory: /home/george/missing"
        );
        assert_eq!(fx.cwd, "/home/george");
    }

    // =========================================================================
    // cat
    // =========================================================================

    #[test]
    fn test_cat_file() {
        let mut fx = Fixture::new();
        let output = fx.run(cat, &["README.md"]).unwrap();
        assert_eq!(output, Output::Unit(RenderUnit::code("hello", "md")));
    }

    #[test]
    fn test_cat_dotfile_has_no_language() {
        let mut fx = Fixture::new();
        let output = fx.run(cat, &[".profile"]).unwrap();
        assert_eq!(output.units()[0].kind, UnitKind::Code { language: None });
        assert_eq!(output.texts(), vec!["export EDITOR=vi"]);
    }

    #[test]
    fn test_cat_directory() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run(cat, &["blog"]).unwrap_err().to_string(),
            "cat: /home/george/blog: Is a directory"
        );
        // No argument resolves to the working directory
        assert_eq!(
            fx.run(cat, &[]).unwrap_err().to_string(),
            "cat: /home/george: Is a directory"
        );
    }

    #[test]
    fn test_cat_missing() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.run(cat, &["blog/draft.md"]).unwrap_err().to_string(),
            "cat: /home/george/blog/draft.md: No such file or directory"
        );
    }

    // =========================================================================
    // clear / history / open
    // =========================================================================

    #[test]
    fn test_clear_hides_without_removing() {
        let mut fx = Fixture::new();
        fx.lines.push_front(Line::new(0, "/home/george"));
        fx.lines.push_front(Line::new(1, "/home/george"));

        assert_eq!(fx.run(clear, &[]).unwrap(), Output::Empty);
        assert_eq!(fx.lines.len(), 2);
        assert!(fx.lines.iter().all(|l| l.hidden));
        assert_eq!(fx.effects, vec![Effect::LinesHidden]);
    }

    #[test]
    fn test_history_most_recent_first() {
        let mut fx = Fixture::new();
        for (id, input) in ["ls", "cd blog", "history"].into_iter().enumerate() {
            let mut line = Line::new(id, "/");
            line.input = input.to_string();
            fx.lines.push_front(line);
        }

        let output = fx.run(history, &[]).unwrap();
        assert_eq!(output.texts(), vec!["history", "cd blog", "ls"]);
    }

    #[test]
    fn test_open_requests_overlay() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(open, &[]).unwrap(), Output::Empty);
        assert_eq!(fx.effects, vec![Effect::ShowOverlay]);
    }
}
