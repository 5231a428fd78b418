//! Core data types for the preview renderer.

/// Semantic role of a rendered span.
///
/// The set is closed and exhaustive: every span carries exactly one role,
/// and the presentation layer maps each role to concrete attributes through
/// a [`crate::preview::style::StyleMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// An object key, or error-banner text in the fallback path.
    Key,
    /// A number, a plain line break, or raw dumped text.
    Scalar,
    /// A string value (curly-quoted when furniture is shown).
    StringValue,
    /// A boolean/null (text or glyph form) or a decorative artifact.
    Special,
    /// Opening brace/bracket furniture.
    MarkStart,
    /// Closing brace/bracket furniture.
    MarkEnd,
}

impl Role {
    /// Number of distinct roles (the style table is indexed by role).
    pub const COUNT: usize = 6;

    /// Stable index into role-keyed tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Role::Key => 0,
            Role::Scalar => 1,
            Role::StringValue => 2,
            Role::Special => 3,
            Role::MarkStart => 4,
            Role::MarkEnd => 5,
        }
    }
}

/// A fragment of rendered text tagged with its semantic role.
///
/// Indentation is part of the text: spans are concatenated verbatim by the
/// presentation layer, so each span carries its own spacer prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    /// The text content, spacer prefix included.
    pub text: String,
    /// The semantic role used to resolve presentation attributes.
    pub role: Role,
}

/// An ordered, append-only sequence of styled spans.
///
/// Built up during a render pass and never mutated afterwards; the
/// presentation layer consumes it in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    spans: Vec<StyledSpan>,
}

impl RenderOutput {
    /// Creates an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one span.
    pub(crate) fn push(&mut self, text: impl Into<String>, role: Role) {
        self.spans.push(StyledSpan {
            text: text.into(),
            role,
        });
    }

    /// Appends an already-built span (glyph substitution hands these over).
    pub(crate) fn push_span(&mut self, span: StyledSpan) {
        self.spans.push(span);
    }

    /// Appends every span of `other`, preserving order.
    pub(crate) fn append(&mut self, mut other: RenderOutput) {
        self.spans.append(&mut other.spans);
    }

    /// The spans in emission order.
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Whether no span has been emitted.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// All span text concatenated, without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Number of rendered lines (newline count across all spans).
    pub fn line_count(&self) -> usize {
        self.spans
            .iter()
            .map(|s| s.text.matches('\n').count())
            .sum()
    }
}

/// Per-depth maximum key widths, built by a single pre-pass over the tree.
///
/// Depth is counted purely by nesting level, not per distinct parent node:
/// sibling subtrees at the same depth under different ancestors share one
/// slot, so unrelated objects at equal depth influence each other's scalar
/// alignment. This matches the product's visible behavior and must not be
/// changed to per-parent tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTable {
    widths: Vec<usize>,
}

impl ColumnTable {
    /// Records a key width at `depth`, keeping the per-depth maximum.
    pub(crate) fn observe(&mut self, depth: usize, width: usize) {
        if self.widths.len() <= depth {
            self.widths.resize(depth + 1, 0);
        }
        self.widths[depth] = self.widths[depth].max(width);
    }

    /// The column width at `depth`; zero for depths never observed.
    pub fn width_at(&self, depth: usize) -> usize {
        self.widths.get(depth).copied().unwrap_or(0)
    }

    /// Number of depths with at least one recorded key.
    pub fn depth_count(&self) -> usize {
        self.widths.len()
    }
}

/// Mutable state scoped to a single render invocation.
///
/// Holds only the line counter consumed by the thumbnail truncation policy.
/// Never shared across concurrent renders: each call to
/// [`crate::preview::PreviewRenderer::render`] allocates a fresh one.
#[derive(Debug, Default)]
pub(crate) struct RenderState {
    /// Count of `prettify` entries so far, thresholded against the
    /// thumbnail line budget.
    pub lines_emitted: usize,
}
