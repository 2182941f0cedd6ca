use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::commands::{Cmd, Haptic};
use crate::messages::{AppMsg, FormMsg, ListMsg, Msg};
use crate::model::{moved, AppModel, ItemId};
use crate::update::update;
use crate::view::{render_state, render_text};

use super::input::{parse_line, ShellCommand, HELP};

/// Platform side of the effects returned by `update`
pub trait EffectSink {
    /// Drop focus from the text inputs
    fn dismiss_keyboard(&mut self) -> Result<()>;
    /// Play tactile feedback
    fn haptic(&mut self, kind: Haptic) -> Result<()>;
}

/// Effect sink that reports effects as status lines
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EffectSink for TerminalSink<W> {
    fn dismiss_keyboard(&mut self) -> Result<()> {
        writeln!(self.out, "[keyboard] dismissed")?;
        Ok(())
    }

    fn haptic(&mut self, kind: Haptic) -> Result<()> {
        match kind {
            Haptic::Success => writeln!(self.out, "[haptic] success")?,
        }
        Ok(())
    }
}

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented presentation layer around the model
pub struct App<W: Write, S: EffectSink> {
    model: AppModel,
    out: W,
    sink: S,
}

impl<W: Write, S: EffectSink> App<W, S> {
    pub fn new(model: AppModel, out: W, sink: S) -> Self {
        Self { model, out, sink }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Hand back the output writer and effect sink
    pub fn into_parts(self) -> (AppModel, W, S) {
        (self.model, self.out, self.sink)
    }

    /// Read lines until input ends or the user quits
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.redraw()?;
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }
        tracing::debug!(items = self.model.items.len(), "shell finished");
        Ok(())
    }

    /// Parse and execute one line of input
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                tracing::debug!(%e, line, "unparsable input");
                writeln!(self.out, "error: {}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        let msgs = match command {
            ShellCommand::Title(text) => vec![Msg::Form(FormMsg::SetTitle(text))],
            ShellCommand::Description(text) => vec![Msg::Form(FormMsg::SetDescription(text))],
            ShellCommand::Submit => vec![Msg::Form(FormMsg::Submit)],
            ShellCommand::Add { title, description } => vec![
                Msg::Form(FormMsg::SetTitle(title)),
                Msg::Form(FormMsg::SetDescription(description)),
                Msg::Form(FormMsg::Submit),
            ],
            ShellCommand::Edit(n) => match self.id_at(n)? {
                Some(id) => vec![Msg::List(ListMsg::BeginEdit(id))],
                None => return Ok(Flow::Continue),
            },
            ShellCommand::Delete(n) => match self.id_at(n)? {
                Some(id) => vec![Msg::List(ListMsg::Delete(id))],
                None => return Ok(Flow::Continue),
            },
            ShellCommand::Check(n) => match self.id_at(n)? {
                Some(id) => vec![Msg::List(ListMsg::ToggleChecked(id))],
                None => return Ok(Flow::Continue),
            },
            ShellCommand::Move { from, to } => {
                let Some(order) = moved(self.model.items.as_slice(), from - 1, to - 1) else {
                    writeln!(self.out, "error: no item at position {}", from)?;
                    return Ok(Flow::Continue);
                };
                vec![Msg::List(ListMsg::Reorder(order))]
            }
            ShellCommand::List => {
                self.redraw()?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Json => {
                let json = serde_json::to_string_pretty(&render_state(&self.model))
                    .context("Failed to serialize screen state")?;
                writeln!(self.out, "{}", json)?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Help => {
                writeln!(self.out, "{}", HELP)?;
                if self.model.config.file_logging {
                    if let Some(path) = crate::config_paths::log_file() {
                        writeln!(self.out, "\nLog file: {}", path.display())?;
                    }
                }
                return Ok(Flow::Continue);
            }
            ShellCommand::Quit => vec![Msg::App(AppMsg::Quit)],
        };

        self.dispatch(msgs)
    }

    /// Run messages through the update loop and perform the resulting effects
    fn dispatch(&mut self, msgs: Vec<Msg>) -> Result<Flow> {
        let mut effects = Vec::new();
        for msg in msgs {
            if let Some(cmd) = update(&mut self.model, msg) {
                effects.extend(cmd.effects());
            }
        }

        let mut flow = Flow::Continue;
        let mut needs_redraw = false;
        for effect in effects {
            if effect.needs_redraw() {
                needs_redraw = true;
            }
            if self.process_cmd(effect)? == Flow::Quit {
                flow = Flow::Quit;
            }
        }

        if needs_redraw && flow == Flow::Continue {
            self.redraw()?;
        }
        Ok(flow)
    }

    /// Process a single (already flattened) command
    fn process_cmd(&mut self, cmd: Cmd) -> Result<Flow> {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::DismissKeyboard => self.sink.dismiss_keyboard()?,
            Cmd::Haptic(kind) => {
                if self.model.config.haptics {
                    self.sink.haptic(kind)?;
                }
            }
            Cmd::Quit => return Ok(Flow::Quit),
            Cmd::Batch(cmds) => {
                let mut flow = Flow::Continue;
                for cmd in cmds {
                    if self.process_cmd(cmd)? == Flow::Quit {
                        flow = Flow::Quit;
                    }
                }
                return Ok(flow);
            }
        }
        Ok(Flow::Continue)
    }

    /// Resolve a 1-based screen position, reporting a miss to the user
    fn id_at(&mut self, position: usize) -> Result<Option<ItemId>> {
        match self.model.items.get(position.saturating_sub(1)) {
            Some(item) => Ok(Some(item.id.clone())),
            None => {
                writeln!(self.out, "error: no item at position {}", position)?;
                Ok(None)
            }
        }
    }

    fn redraw(&mut self) -> Result<()> {
        let text = render_text(&render_state(&self.model));
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}
