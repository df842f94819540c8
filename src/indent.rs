//! Indentation and brace-depth tracking.
//!
//! One small state machine per conversion, covering the two block
//! conventions the engine handles: explicit `{ }` pairs (JavaScript, Swift)
//! and leading-whitespace width (Python). The tracker never errors and its
//! depth never goes negative; malformed input clamps instead of failing.

use crate::classifier::LineClassification;

/// Block-delimiting convention of the source being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentMode {
    /// Depth follows `{` / `}` and block-opening constructs.
    Braces,
    /// Depth follows a stack of seen leading-whitespace widths.
    Whitespace,
}

/// What a single observed line did to the nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentEvent {
    /// The line opened a new block.
    pub opened: bool,
    /// Number of blocks the line closed (several at once on a Python dedent).
    pub closed: usize,
}

impl IndentEvent {
    fn none() -> Self {
        Self { opened: false, closed: 0 }
    }
}

/// Tracks the current nesting depth across the lines of one conversion.
#[derive(Debug, Clone)]
pub struct IndentTracker {
    mode: IndentMode,
    depth: usize,
    // Whitespace mode only: widths of enclosing blocks, base entry 0.
    widths: Vec<usize>,
}

impl IndentTracker {
    pub fn braces() -> Self {
        Self { mode: IndentMode::Braces, depth: 0, widths: vec![0] }
    }

    pub fn whitespace() -> Self {
        Self { mode: IndentMode::Whitespace, depth: 0, widths: vec![0] }
    }

    /// Current nesting depth after the last observed line.
    pub fn current_depth(&self) -> usize {
        self.depth
    }

    /// Feed one classified line through the state machine.
    ///
    /// In brace mode the classification drives the transition: constructs
    /// carrying their opening brace (or a bare `{`) open a block, a bare `}`
    /// closes one. In whitespace mode only the leading-whitespace width
    /// matters; blank lines are ignored so they never close a block.
    pub fn observe(&mut self, class: &LineClassification, leading_ws: usize) -> IndentEvent {
        match self.mode {
            IndentMode::Braces => self.observe_braces(class),
            IndentMode::Whitespace => self.observe_width(class, leading_ws),
        }
    }

    fn observe_braces(&mut self, class: &LineClassification) -> IndentEvent {
        let opens = matches!(
            class,
            LineClassification::FunctionDecl { trailing_brace: true, .. }
                | LineClassification::IfStatement { trailing_brace: true, .. }
                | LineClassification::ForLoop { trailing_brace: true, .. }
                | LineClassification::BlockOpen
        );

        if opens {
            self.depth += 1;
            return IndentEvent { opened: true, closed: 0 };
        }

        if matches!(class, LineClassification::BlockClose) {
            let closed = usize::from(self.depth > 0);
            self.depth = self.depth.saturating_sub(1);
            return IndentEvent { opened: false, closed };
        }

        IndentEvent::none()
    }

    fn observe_width(&mut self, class: &LineClassification, width: usize) -> IndentEvent {
        if matches!(class, LineClassification::Blank) {
            return IndentEvent::none();
        }

        let top = *self.widths.last().unwrap_or(&0);
        if width > top {
            self.widths.push(width);
            self.depth += 1;
            return IndentEvent { opened: true, closed: 0 };
        }

        let mut closed = 0;
        // A width between two stack entries pops to the nearest lower entry
        // and is treated as equal to it.
        while self.widths.len() > 1 && *self.widths.last().unwrap_or(&0) > width {
            self.widths.pop();
            self.depth = self.depth.saturating_sub(1);
            closed += 1;
        }
        IndentEvent { opened: false, closed }
    }

    /// Close all blocks still open at end of input, returning how many.
    pub fn flush(&mut self) -> usize {
        match self.mode {
            IndentMode::Braces => 0,
            IndentMode::Whitespace => {
                let remaining = self.widths.len().saturating_sub(1);
                self.widths.truncate(1);
                self.depth = 0;
                remaining
            }
        }
    }
}
