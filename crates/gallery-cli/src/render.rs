//! Text the session prints: the menu, prompts, and result lines.

use colored::Colorize;
use gallery_core::{Gallery, GalleryError};

use crate::cli::OutputFormat;

pub const MENU: &str = "\n=== PHOTO GALLERY MENU ===
1. Insert Photo
2. Delete Photo
3. Display Gallery
4. Next Photo
5. Previous Photo
6. Exit
";

pub const CHOICE_PROMPT: &str = "Enter choice: ";
pub const INSERT_PROMPT: &str = "Enter Photo Name: ";
pub const DELETE_PROMPT: &str = "Enter Photo Name to Delete: ";

pub const EMPTY: &str = "Gallery Empty!";
pub const EXITING: &str = "Exiting...";

pub fn added(name: &str) -> String {
    format!("Photo '{name}' added.")
}

pub fn deleted(name: &str) -> String {
    format!("Photo '{name}' deleted.")
}

pub fn not_found(name: &str) -> String {
    format!("Photo '{name}' not found!")
}

pub fn now_viewing(name: &str) -> String {
    format!("Now Viewing: {name}")
}

/// The user-facing line for a gallery error.
pub fn report(err: &GalleryError) -> String {
    match err {
        GalleryError::NotFound { name } => not_found(name),
        GalleryError::Empty => EMPTY.to_owned(),
        GalleryError::OutOfMemory { .. } => err.to_string(),
    }
}

/// The "Display Gallery" output.
///
/// Text mode prints `[a] <-> [b] <-> END`, or [`EMPTY`] for an empty gallery.
/// JSON mode always prints a snapshot object, with an empty `photos` array
/// when there is nothing to show.
pub fn listing(gallery: &Gallery, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(&gallery.snapshot()),
        OutputFormat::Text if gallery.is_empty() => Ok(EMPTY.to_owned()),
        OutputFormat::Text => {
            let mut out = String::from("\nPhoto Gallery:\n");
            for name in gallery.names() {
                out.push('[');
                out.push_str(name);
                out.push_str("] <-> ");
            }
            out.push_str("END");
            Ok(out)
        }
    }
}

/// Optional colouring of result lines.
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colour only when asked for and stdout is a terminal.
    ///
    /// When colour is off, `colored` is overridden globally as well, so
    /// nothing downstream emits escape codes into a pipe or file.
    pub fn for_stdout(requested: bool, is_terminal: bool) -> Self {
        let color = requested && is_terminal;
        if !color {
            colored::control::set_override(false);
        }
        Self::new(color)
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn failure(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn notice(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn viewing(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan().bold())
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> colored::ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_owned()
        }
    }
}
