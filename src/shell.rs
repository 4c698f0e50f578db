use crate::catalog::TagFilter;
use crate::controller::{Completion, Controller, EventHub, Renderer, UiEvent};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

pub const HELP: &str = "\
commands:
  search <term>     filter by name, title or class (empty term clears)
  clear             clear the search term
  tag <class|all>   filter by class (Assassin, Mago, Tank, ... or all)
  detail <id>       open champion details
  skins <id>        open the skin gallery
  close             close the open view
  help              show this help
  quit              leave";

/// Everything the browse loop reacts to, in arrival order.
#[derive(Debug)]
pub enum ShellMessage {
    Input(String),
    InputClosed,
    Fetched(Completion),
}

impl From<Completion> for ShellMessage {
    fn from(completion: Completion) -> Self {
        ShellMessage::Fetched(completion)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Help,
    Quit,
}

/// Parses one line of shell input. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" if rest.is_empty() => Command::Event(UiEvent::ClearSearch),
        "search" | "s" => Command::Event(UiEvent::Search(rest.to_string())),
        "clear" => Command::Event(UiEvent::ClearSearch),
        "tag" | "t" => {
            let tag = if rest.is_empty() {
                TagFilter::All
            } else {
                rest.parse::<TagFilter>()?
            };
            Command::Event(UiEvent::SelectTag(tag))
        }
        "detail" | "d" => Command::Event(UiEvent::OpenDetail(required_id(verb, rest)?)),
        "skins" | "k" => Command::Event(UiEvent::OpenSkins(required_id(verb, rest)?)),
        "close" | "c" => Command::Event(UiEvent::CloseView),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(Some(command))
}

fn required_id(verb: &str, rest: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("'{}' needs a champion id", verb))
    } else {
        Ok(rest.to_string())
    }
}

/// Reads stdin lines on a background thread and forwards them to the loop.
pub fn spawn_stdin_reader(sink: Sender<ShellMessage>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("> ");
            let _ = io::stdout().flush();
            match lines.next() {
                Some(Ok(line)) => {
                    if sink.send(ShellMessage::Input(line)).is_err() {
                        return;
                    }
                }
                Some(Err(e)) => {
                    warn!(error = %e, "stdin read failed");
                    break;
                }
                None => break,
            }
        }
        let _ = sink.send(ShellMessage::InputClosed);
    });
}

/// Drives the interactive session until `quit` or end of input, then tears it down.
pub fn run_loop<R: Renderer + 'static>(controller: Controller<R>, inbox: &Receiver<ShellMessage>) -> Option<R> {
    let hub: EventHub<UiEvent> = EventHub::new();
    let controller = Rc::new(RefCell::new(controller));

    let subscription = {
        let controller = controller.clone();
        hub.subscribe(move |event| controller.borrow_mut().handle(event))
    };

    while let Ok(message) = inbox.recv() {
        match message {
            ShellMessage::Input(line) => match parse_command(&line) {
                Ok(Some(Command::Event(event))) => {
                    debug!(?event, "input");
                    hub.emit(&event);
                }
                Ok(Some(Command::Help)) => controller.borrow_mut().notify(HELP),
                Ok(Some(Command::Quit)) => break,
                Ok(None) => {}
                Err(message) => controller.borrow_mut().notify(&message),
            },
            ShellMessage::Fetched(completion) => {
                controller.borrow_mut().complete(completion);
            }
            ShellMessage::InputClosed => break,
        }
    }

    subscription.dispose();
    match Rc::try_unwrap(controller) {
        Ok(cell) => Some(cell.into_inner().teardown()),
        Err(_) => {
            warn!("controller still referenced, session not torn down");
            None
        }
    }
}

/// Blocks until the outstanding fetch lands or `patience` runs out.
pub fn wait_until_idle<R: Renderer>(
    controller: &mut Controller<R>,
    inbox: &Receiver<ShellMessage>,
    patience: Duration,
) {
    while controller.is_waiting() {
        match inbox.recv_timeout(patience) {
            Ok(ShellMessage::Fetched(completion)) => {
                controller.complete(completion);
            }
            Ok(_) => {}
            Err(RecvTimeoutError::Timeout) => {
                controller.notify("Gave up waiting for the server.");
                break;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tag;

    fn parsed(line: &str) -> Command {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn search_and_clear() {
        assert_eq!(
            parsed("search darkin blade"),
            Command::Event(UiEvent::Search("darkin blade".to_string()))
        );
        assert_eq!(parsed("search"), Command::Event(UiEvent::ClearSearch));
        assert_eq!(parsed("clear"), Command::Event(UiEvent::ClearSearch));
    }

    #[test]
    fn tag_accepts_labels_and_sentinel() {
        assert_eq!(
            parsed("tag Mago"),
            Command::Event(UiEvent::SelectTag(TagFilter::Only(Tag::Mage)))
        );
        assert_eq!(parsed("tag all"), Command::Event(UiEvent::SelectTag(TagFilter::All)));
        assert_eq!(parsed("t"), Command::Event(UiEvent::SelectTag(TagFilter::All)));
        assert!(parse_command("tag wizard").is_err());
    }

    #[test]
    fn views_need_an_id() {
        assert_eq!(
            parsed("detail Aatrox"),
            Command::Event(UiEvent::OpenDetail("Aatrox".to_string()))
        );
        assert_eq!(
            parsed("K Ahri"),
            Command::Event(UiEvent::OpenSkins("Ahri".to_string()))
        );
        assert!(parse_command("detail").is_err());
    }

    #[test]
    fn misc_commands() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parsed("close"), Command::Event(UiEvent::CloseView));
        assert_eq!(parsed("?"), Command::Help);
        assert_eq!(parsed("exit"), Command::Quit);
        assert!(parse_command("dance").is_err());
    }
}
