use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use secrecy::SecretString;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::PasslistError;
use crate::render;
use crate::session::{Session, View};
use crate::store::{Store, Subscription};

const HELP: &str = "\
Commands:
  list               Show the current view
  home               Switch to all entries
  favorites          Switch to favorite entries
  search <text>      Filter by name (case-insensitive)
  clear              Clear the search filter
  show <name>        Show an entry including its password
  fav <name>         Toggle the favorite flag
  delete <name>      Delete an entry
  edit <name>        Change an entry's password
  help               Show this message
  quit               Leave the shell";

/// Source of hidden password input for the edit form.
pub trait PasswordPrompt {
    fn prompt(&mut self, label: &str) -> Result<SecretString>;
}

/// Reads from the controlling terminal without echo.
pub struct TerminalPrompt;

impl PasswordPrompt for TerminalPrompt {
    fn prompt(&mut self, label: &str) -> Result<SecretString> {
        let input = Zeroizing::new(
            rpassword::prompt_password(label).context("Failed to read password")?,
        );
        Ok(SecretString::new(input.to_string()))
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive line-oriented front end over a [`Session`].
pub struct Shell<'s, S: Store, P: PasswordPrompt> {
    session: Session<'s, S>,
    subscription: Subscription,
    prompt: P,
    mask: bool,
}

impl<'s, S: Store, P: PasswordPrompt> Shell<'s, S, P> {
    pub fn new(store: &'s mut S, prompt: P, mask: bool) -> Self {
        let mut session = Session::new(store);
        let subscription = session.store().observe();
        Self {
            session,
            subscription,
            prompt,
            mask,
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        writeln!(out, "Type `help` for commands.")?;
        self.render(out)?;
        let mut line = String::new();
        loop {
            write!(out, "passlist> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Flow::Quit = self.dispatch(line, out)? {
                break;
            }
        }
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        debug!(command, "shell command");

        let result: Result<String> = match command {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => {
                writeln!(out, "{}", HELP)?;
                return Ok(Flow::Continue);
            }
            "list" => return self.render(out).map(|_| Flow::Continue),
            "home" => {
                self.session.set_view(View::Home);
                return self.render(out).map(|_| Flow::Continue);
            }
            "favorites" => {
                self.session.set_view(View::Favorites);
                return self.render(out).map(|_| Flow::Continue);
            }
            "search" => {
                self.session.set_search(arg);
                return self.render(out).map(|_| Flow::Continue);
            }
            "clear" => {
                self.session.clear_search();
                return self.render(out).map(|_| Flow::Continue);
            }
            _ if arg.is_empty() && matches!(command, "show" | "fav" | "delete" | "edit") => {
                writeln!(out, "Usage: {} <name>", command)?;
                return Ok(Flow::Continue);
            }
            "show" => match self.session.store().find(arg) {
                Some(entry) => {
                    render::detail(out, entry)?;
                    return Ok(Flow::Continue);
                }
                None => Err(PasslistError::EntryNotFound(arg.to_string()).into()),
            },
            "fav" => self
                .session
                .toggle_favorite(arg)
                .map(|favorite| {
                    if favorite {
                        format!("'{}' added to favorites.", arg)
                    } else {
                        format!("'{}' removed from favorites.", arg)
                    }
                })
                .map_err(Into::into),
            "delete" => self
                .session
                .delete(arg)
                .map(|()| format!("'{}' deleted.", arg))
                .map_err(Into::into),
            "edit" => self.edit(arg).map(|()| format!("Password for '{}' updated.", arg)),
            other => {
                writeln!(out, "Unknown command '{}'. Type `help` for commands.", other)?;
                return Ok(Flow::Continue);
            }
        };

        match result {
            Ok(message) => {
                writeln!(out, "{}", message)?;
                self.render(out)?;
            }
            Err(e) => writeln!(out, "Error: {:#}", e)?,
        }
        Ok(Flow::Continue)
    }

    /// Run the edit form for `name`. Prompt failures are returned, not fatal.
    fn edit(&mut self, name: &str) -> Result<()> {
        if self.session.store().find(name).is_none() {
            return Err(PasslistError::EntryNotFound(name.to_string()).into());
        }
        let new = self.prompt.prompt("New password: ")?;
        let confirm = self.prompt.prompt("Confirm password: ")?;
        self.session.update_password(name, &new, &confirm)?;
        Ok(())
    }

    fn render<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let visible = self.session.filter(self.subscription.latest());
        let title = match self.session.view() {
            View::Home => "All passwords",
            View::Favorites => "Favorite passwords",
        };
        if self.session.search().is_empty() {
            writeln!(out, "{}:", title)?;
        } else {
            writeln!(out, "{} matching {:?}:", title, self.session.search())?;
        }
        render::entries(out, &visible, self.mask)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_entries;
    use crate::store::MemoryStore;
    use secrecy::ExposeSecret;
    use std::collections::VecDeque;

    /// Canned answers, handed out in order. Runs out with an error.
    pub struct ScriptedPrompt(VecDeque<String>);

    impl ScriptedPrompt {
        pub fn new<I: IntoIterator<Item = &'static str>>(answers: I) -> Self {
            Self(answers.into_iter().map(String::from).collect())
        }
    }

    impl PasswordPrompt for ScriptedPrompt {
        fn prompt(&mut self, label: &str) -> Result<SecretString> {
            self.0
                .pop_front()
                .map(SecretString::new)
                .with_context(|| format!("No scripted answer for {:?}", label))
        }
    }

    fn run_script(store: &mut MemoryStore, script: &str, prompt: ScriptedPrompt) -> String {
        let mut out = Vec::new();
        Shell::new(store, prompt, true)
            .run(script.as_bytes(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_and_quit() {
        let mut store = MemoryStore::new(seed_entries());
        let out = run_script(&mut store, "list\nquit\nlist\n", ScriptedPrompt::new([]));
        // Initial render plus one `list`; nothing after quit.
        assert_eq!(out.matches("All passwords:").count(), 2);
        assert!(out.contains("Mercado Pago"));
        assert!(!out.contains("uziel1290"));
    }

    #[test]
    fn test_favorites_and_search() {
        let mut store = MemoryStore::new(seed_entries());
        let out = run_script(
            &mut store,
            "favorites\nsearch goo\n",
            ScriptedPrompt::new([]),
        );
        let last = out.rsplit("Favorite passwords matching").next().unwrap();
        assert!(last.contains("Google"));
        assert!(!last.contains("Facebook"));
    }

    #[test]
    fn test_fav_and_delete_mutate_store() {
        let mut store = MemoryStore::new(seed_entries());
        let out = run_script(
            &mut store,
            "fav Tik Tok\nfav Google\ndelete Instagram\n",
            ScriptedPrompt::new([]),
        );
        assert!(out.contains("'Tik Tok' added to favorites."));
        assert!(out.contains("'Google' removed from favorites."));
        assert!(out.contains("'Instagram' deleted."));
        let names: Vec<&str> = store.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Facebook", "Tik Tok", "Mercado Pago", "Google"]);
        assert!(store.find("Tik Tok").unwrap().is_favorite);
        assert!(!store.find("Google").unwrap().is_favorite);
    }

    #[test]
    fn test_edit_with_matching_confirmation() {
        let mut store = MemoryStore::new(seed_entries());
        let out = run_script(
            &mut store,
            "edit Facebook\n",
            ScriptedPrompt::new(["newpass", "newpass"]),
        );
        assert!(out.contains("Password for 'Facebook' updated."));
        assert_eq!(
            store.find("Facebook").unwrap().secret.expose_secret(),
            "newpass"
        );
    }

    struct FailingPrompt;

    impl PasswordPrompt for FailingPrompt {
        fn prompt(&mut self, _label: &str) -> Result<SecretString> {
            anyhow::bail!("no tty")
        }
    }

    #[test]
    fn test_prompt_failure_keeps_shell_running() {
        let mut store = MemoryStore::new(seed_entries());
        let mut out = Vec::new();
        Shell::new(&mut store, FailingPrompt, true)
            .run("delete Google\nedit Facebook\nlist\n".as_bytes(), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Error: no tty"));
        // Initial render, after delete, and the trailing `list`.
        assert_eq!(out.matches("All passwords:").count(), 3);
        assert!(store.find("Google").is_none());
        assert_eq!(
            store.find("Facebook").unwrap().secret.expose_secret(),
            "uziel1290"
        );
    }

    #[test]
    fn test_edit_mismatch_reports_error_and_keeps_secret() {
        let mut store = MemoryStore::new(seed_entries());
        let out = run_script(
            &mut store,
            "edit Facebook\n",
            ScriptedPrompt::new(["one", "two"]),
        );
        assert!(out.contains("Error: Passwords do not match."));
        assert_eq!(
            store.find("Facebook").unwrap().secret.expose_secret(),
            "uziel1290"
        );
    }

    #[test]
    fn test_unknown_entry_and_command() {
        let mut store = MemoryStore::new(seed_entries());
        let out = run_script(
            &mut store,
            "delete Nope\nfrobnicate\nfav\n",
            ScriptedPrompt::new([]),
        );
        assert!(out.contains("Error: No entry named 'Nope'"));
        assert!(out.contains("Unknown command 'frobnicate'"));
        assert!(out.contains("Usage: fav <name>"));
        assert_eq!(store.entries(), seed_entries().as_slice());
    }

    #[test]
    fn test_show_reveals_secret() {
        let mut store = MemoryStore::new(seed_entries());
        let out = run_script(&mut store, "show Google\n", ScriptedPrompt::new([]));
        assert!(out.contains("Password: hernandez58"));
        assert!(out.contains("Favorite: yes"));
    }
}
