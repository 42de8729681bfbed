use std::future::Future;
use std::io::{self, BufRead};
use std::thread;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::session::Session;
use crate::{Command, Reply};

/// Lines read so far that the console has not consumed yet.
const LINE_BUFFER: usize = 16;

pub type LineReceiver = mpsc::Receiver<io::Result<String>>;

/// Reads `reader` line by line on its own OS thread.
///
/// A blocked read never holds up the runtime: when the console stops, the
/// thread is left parked in its read and dies with the process. The channel
/// closes at end of input, after a read error, or once the receiver is gone.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<LineReceiver>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })?;

    Ok(rx)
}

/// Line-oriented front end: lines in through a channel, replies out to `W`.
///
/// One line is read, executed and answered before the next is read.
pub struct Console<W> {
    input: LineReceiver,
    output: W,
    session: Session,
    prompt: String,
}

impl<W> Console<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(input: LineReceiver, output: W, session: Session, prompt: impl Into<String>) -> Self {
        Self {
            input,
            output,
            session,
            prompt: prompt.into(),
        }
    }

    /// Runs until end of input, a `quit` command, or `shutdown` resolving.
    pub async fn start<F: Future>(&mut self, shutdown: F) -> Result<()> {
        tokio::pin!(shutdown);
        self.write_prompt().await?;

        loop {
            tokio::select! {
                line = self.input.recv() => {
                    let Some(line) = line else {
                        info!("end of input, shutting down");
                        break;
                    };
                    let line = line.map_err(|e| {
                        warn!(error = %e, "failed to read console input");
                        e
                    })?;

                    match self.handle_line(&line) {
                        Some(Reply::Quit) => {
                            info!("quit requested");
                            break;
                        }
                        Some(Reply::Message(message)) => self.write_message(&message).await?,
                        None => {}
                    }
                    self.write_prompt().await?;
                }
                _ = &mut shutdown => {
                    info!("interrupt received, shutting down");
                    break;
                }
            }
        }

        self.output.flush().await?;
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Option<Reply> {
        match Command::from_line(line) {
            Ok(Some(command)) => {
                debug!(?command, "executing");
                Some(command.execute(&mut self.session))
            }
            Ok(None) => None,
            Err(e) => Some(Reply::Message(e.to_string())),
        }
    }

    async fn write_message(&mut self, message: &str) -> Result<()> {
        self.output.write_all(message.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        Ok(())
    }

    async fn write_prompt(&mut self) -> Result<()> {
        self.output.write_all(self.prompt.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::pending;
    use std::io::Cursor;
    use std::time::Duration;

    use crate::error::PaintError;

    fn script_lines(script: &str) -> LineReceiver {
        spawn_line_reader(Cursor::new(script.to_string())).unwrap()
    }

    async fn run_script(script: &str) -> (Session, String) {
        let mut console = Console::new(
            script_lines(script),
            Vec::new(),
            Session::new("PaintList.txt"),
            "> ",
        );
        console.start(pending::<()>()).await.unwrap();

        let (session, output) = console.into_parts();
        (session, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn scripted_session_reports_each_outcome() {
        let (session, output) = run_script(
            "add BrandA / Red\nadd BrandA / Red\nlist\nremove BrandA / Red\nremove BrandA / Red\n",
        )
        .await;

        assert!(output.contains("Paint added successfully!"));
        assert!(output.contains("This color already exists for the selected brand."));
        assert!(output.contains("Brand: BrandA\n Colors: [Red]"));
        assert!(output.contains("Paint removed successfully!"));
        assert!(output.contains("This color does not exist for the selected brand."));
        assert!(session.store().is_empty());
    }

    #[tokio::test]
    async fn quit_stops_before_remaining_lines() {
        let (session, output) = run_script("add BrandA / Red\nquit\nadd BrandB / Blue\n").await;

        assert!(session.store().contains("BrandA", "Red"));
        assert!(session.store().colors("BrandB").is_none());
        assert!(!output.contains("Blue"));
    }

    #[tokio::test]
    async fn blank_lines_only_reprompt_and_errors_are_messages() {
        let (_, output) = run_script("\n   \nfrobnicate\n").await;

        assert_eq!(output.matches("> ").count(), 4);
        assert!(output.contains("Unknown command 'frobnicate'"));
    }

    #[tokio::test]
    async fn shutdown_stops_loop_while_input_is_still_open() {
        // Sender kept alive: no line ever arrives and the channel never closes.
        let (_tx, rx) = mpsc::channel(1);
        let mut console = Console::new(rx, Vec::new(), Session::new("PaintList.txt"), "> ");

        let stopped = tokio::time::timeout(
            Duration::from_secs(5),
            console.start(tokio::time::sleep(Duration::from_millis(20))),
        )
        .await;

        assert!(matches!(stopped, Ok(Ok(()))));
        assert!(console.session().store().is_empty());
    }

    #[tokio::test]
    async fn read_error_ends_the_loop_with_io_error() {
        let (tx, rx) = mpsc::channel(1);
        tx.send(Err(io::Error::new(io::ErrorKind::InvalidData, "not utf-8")))
            .await
            .unwrap();
        let mut console = Console::new(rx, Vec::new(), Session::new("PaintList.txt"), "> ");

        let err = console.start(pending::<()>()).await.unwrap_err();

        assert!(matches!(err, PaintError::Io(_)));
    }

    #[test]
    fn line_reader_forwards_lines_then_closes() {
        let mut rx = script_lines("brand Citadel\ncolor Red\n");

        assert_eq!(rx.blocking_recv().unwrap().unwrap(), "brand Citadel");
        assert_eq!(rx.blocking_recv().unwrap().unwrap(), "color Red");
        assert!(rx.blocking_recv().is_none());
    }
}
