//! Replay command handler

use anyhow::Result;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::queue;
use std::io::{self, Write};
use std::path::Path;

use blockterm::blocks::{BlockRender, BlockStatus};
use blockterm::terminal::{resolve, RenderTheme, Rgb, Style};

use super::{load_config, load_session};

/// Print every block with its header, body and status.
pub fn handle(events: &Path, plain: bool, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let session = load_session(events, &config)?;
    let plain = plain || std::env::var_os("NO_COLOR").is_some();
    let theme = config.render_theme();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for block in session.render_blocks() {
        if plain {
            write_plain(&mut out, &block)?;
        } else {
            write_styled(&mut out, &block, &theme)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Block as plain text, followed by a bracketed status line.
pub fn write_plain(out: &mut impl Write, block: &BlockRender) -> io::Result<()> {
    if let Some(header) = &block.header {
        write!(out, "{header}")?;
    }
    let body = block.body_text();
    write!(out, "{body}")?;
    if !body.is_empty() && !body.ends_with('\n') {
        writeln!(out)?;
    }
    writeln!(out, "[{}]", block.status.label())
}

fn write_styled(out: &mut impl Write, block: &BlockRender, theme: &RenderTheme) -> io::Result<()> {
    if let Some(header) = &block.header {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print(header),
            SetAttribute(Attribute::Reset)
        )?;
    }

    let mut ends_with_newline = true;
    for segment in &block.segments {
        if segment.text.is_empty() {
            continue;
        }
        queue_segment(out, &segment.text, &segment.style, theme)?;
        ends_with_newline = segment.text.ends_with('\n');
    }
    if !ends_with_newline {
        queue!(out, Print("\n"))?;
    }

    let status_color = match block.status {
        BlockStatus::Running => TermColor::Yellow,
        BlockStatus::Succeeded => TermColor::Green,
        BlockStatus::Failed { .. } => TermColor::Red,
    };
    queue!(
        out,
        SetForegroundColor(status_color),
        Print(format!("[{}]", block.status.label())),
        ResetColor,
        Print("\n")
    )
}

fn queue_segment(
    out: &mut impl Write,
    text: &str,
    style: &Style,
    theme: &RenderTheme,
) -> io::Result<()> {
    let resolved = resolve(style, theme);
    let term = |c: Rgb| TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    };

    queue!(out, SetForegroundColor(term(resolved.foreground)))?;
    if let Some(bg) = resolved.background {
        queue!(out, SetBackgroundColor(term(bg)))?;
    }
    if resolved.traits.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if resolved.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if resolved.traits.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if resolved.traits.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if resolved.traits.strikethrough {
        queue!(out, SetAttribute(Attribute::CrossedOut))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)
}
