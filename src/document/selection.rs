//! Mouse-drag selection over the global document.
//!
//! `Idle -> Dragging -> Idle`. While dragging, the anchor stays fixed and
//! the endpoint follows the pointer; the selected range is always
//! `[min(anchor, endpoint), max(anchor, endpoint))`. When the pointer leaves
//! the content area the endpoint keeps moving toward the nearest document
//! edge on every move and auto-scroll tick, clamped at `0` and the document
//! length.

use super::TextRange;

/// Document edge the pointer has moved beyond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEdge {
    /// Above/before the content (toward offset 0)
    Start,
    /// Below/after the content (toward the document end)
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Dragging {
        anchor: usize,
        endpoint: usize,
        /// Set while the pointer is outside the content area
        outside: Option<DragEdge>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    state: SelectionState,
    /// Range kept after the drag ends, for copy
    committed: Option<TextRange>,
    total_length: usize,
}

impl Selection {
    pub fn new(total_length: usize) -> Self {
        Self {
            total_length,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging { .. })
    }

    /// Follow a rebuilt document; offsets beyond the new length clamp.
    pub fn set_total_length(&mut self, total_length: usize) {
        self.total_length = total_length;
        if let SelectionState::Dragging {
            anchor, endpoint, ..
        } = &mut self.state
        {
            *anchor = (*anchor).min(total_length);
            *endpoint = (*endpoint).min(total_length);
        }
        self.committed = self
            .committed
            .map(|r| TextRange::between(r.offset.min(total_length), r.end().min(total_length)))
            .filter(|r| !r.is_empty());
    }

    /// Start a drag at `anchor`. Any previous selection is replaced.
    pub fn begin(&mut self, anchor: usize) {
        let anchor = anchor.min(self.total_length);
        self.committed = None;
        self.state = SelectionState::Dragging {
            anchor,
            endpoint: anchor,
            outside: None,
        };
    }

    /// Pointer moved inside the content to `offset`.
    pub fn drag_to(&mut self, offset: usize) {
        let total = self.total_length;
        if let SelectionState::Dragging {
            endpoint, outside, ..
        } = &mut self.state
        {
            *endpoint = offset.min(total);
            *outside = None;
        }
    }

    /// Pointer moved beyond `edge`: advance `step` characters toward it.
    pub fn drag_outside(&mut self, edge: DragEdge, step: usize) {
        if let SelectionState::Dragging { outside, .. } = &mut self.state {
            *outside = Some(edge);
        }
        self.advance(step);
    }

    /// Auto-scroll tick. Extends toward the edge while the pointer stays
    /// outside; returns `true` if the endpoint moved.
    pub fn autoscroll_tick(&mut self, step: usize) -> bool {
        self.advance(step)
    }

    fn advance(&mut self, step: usize) -> bool {
        let total = self.total_length;
        let SelectionState::Dragging {
            endpoint,
            outside: Some(edge),
            ..
        } = &mut self.state
        else {
            return false;
        };
        let before = *endpoint;
        *endpoint = match edge {
            DragEdge::Start => endpoint.saturating_sub(step),
            DragEdge::End => endpoint.saturating_add(step).min(total),
        };
        *endpoint != before
    }

    /// Finish the drag. The range is kept for copy when non-empty.
    pub fn end(&mut self) -> Option<TextRange> {
        let range = self.current_drag_range();
        self.state = SelectionState::Idle;
        self.committed = range.filter(|r| !r.is_empty());
        self.committed
    }

    /// Drop the selection entirely.
    pub fn clear(&mut self) {
        self.state = SelectionState::Idle;
        self.committed = None;
    }

    /// The selected range: live while dragging, committed otherwise.
    pub fn range(&self) -> Option<TextRange> {
        match self.state {
            SelectionState::Dragging { .. } => self.current_drag_range(),
            SelectionState::Idle => self.committed,
        }
    }

    fn current_drag_range(&self) -> Option<TextRange> {
        match self.state {
            SelectionState::Dragging {
                anchor, endpoint, ..
            } => Some(TextRange::between(anchor, endpoint)),
            SelectionState::Idle => None,
        }
    }
}
