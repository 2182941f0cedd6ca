//! Runtime module - terminal integration
//!
//! This module contains the presentation shell around the model:
//! - `app` - input loop, effect execution, and screen output
//! - `input` - shell line to command mapping

pub mod app;
pub mod input;

pub use app::{App, EffectSink, Flow, TerminalSink};
pub use input::{parse_line, ParseError, ShellCommand};
