//! Conversion state threaded through every handler.
//!
//! A `State` lives for exactly one conversion. It owns the id index, the
//! frozen base URL, nesting counters and the cell span side table used while
//! a table is being built.

use std::collections::HashMap;

use url::Url;

use crate::handlers::table::CellSpan;
use crate::handlers::Handlers;
use crate::hast::{self, Element};
use crate::mdast;
use crate::options::Options;

/// Span hints of the cells of one table, row by row
pub(crate) type SpanRows = Vec<Vec<CellSpan>>;

/// Mutable context for one conversion
pub struct State<'a> {
    options: &'a Options,
    pub(crate) handlers: &'a Handlers,
    element_by_id: HashMap<String, &'a Element>,
    base_found: bool,
    frozen_base_url: Option<Url>,
    q_nesting: usize,
    in_table: bool,
    span_frames: Vec<SpanRows>,
}

impl<'a> State<'a> {
    /// Create the state for converting `tree`.
    ///
    /// Elements are indexed by `id` up front; the first element with a given
    /// id wins.
    pub fn new(options: &'a Options, handlers: &'a Handlers, tree: &'a hast::Node) -> Self {
        let mut element_by_id = HashMap::new();
        index_ids(tree, &mut element_by_id);

        Self {
            options,
            handlers,
            element_by_id,
            base_found: false,
            frozen_base_url: None,
            q_nesting: 0,
            in_table: false,
            span_frames: Vec::new(),
        }
    }

    pub fn options(&self) -> &'a Options {
        self.options
    }

    /// Look up an element by its `id` attribute
    pub fn element_by_id(&self, id: &str) -> Option<&'a Element> {
        self.element_by_id.get(id).copied()
    }

    /// Resolve a URL against the frozen base URL.
    ///
    /// A missing URL resolves to the empty string. Without a base, or when
    /// joining fails, the URL is returned unchanged.
    pub fn resolve(&self, url: Option<&str>) -> String {
        let Some(url) = url else {
            return String::new();
        };

        match &self.frozen_base_url {
            Some(base) => match base.join(url) {
                Ok(resolved) => resolved.to_string(),
                Err(error) => {
                    tracing::debug!(%base, %url, %error, "could not resolve url");
                    url.to_string()
                }
            },
            None => url.to_string(),
        }
    }

    /// Record the base URL; only the first call has an effect
    pub(crate) fn freeze_base(&mut self, href: Option<String>) {
        if self.base_found {
            return;
        }
        self.base_found = true;

        let Some(href) = href else {
            return;
        };
        match Url::parse(&href) {
            Ok(url) => {
                tracing::debug!(base = %url, "froze base url");
                self.frozen_base_url = Some(url);
            }
            Err(error) => tracing::debug!(%href, %error, "ignoring unparsable base url"),
        }
    }

    /// Copy the source position of `from` onto `to`
    pub fn patch(&self, from: Option<mdast::Position>, to: &mut mdast::Node) {
        if from.is_some() {
            to.set_position(from);
        }
    }

    /// Current `<q>` nesting depth
    pub fn quote_depth(&self) -> usize {
        self.q_nesting
    }

    /// Run `f` one quote level deeper
    pub(crate) fn nested_quote<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.q_nesting += 1;
        let result = f(self);
        self.q_nesting -= 1;
        result
    }

    /// Whether a table is currently being converted
    pub fn in_table(&self) -> bool {
        self.in_table
    }

    /// Run `f` as the body of a table, collecting the span hints its cells
    /// record
    pub(crate) fn table_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> (T, SpanRows) {
        let was_in_table = self.in_table;
        self.in_table = true;
        self.span_frames.push(Vec::new());

        let result = f(self);

        let spans = self.span_frames.pop().unwrap_or_default();
        self.in_table = was_in_table;
        (result, spans)
    }

    /// Begin a new row in the current span table
    pub(crate) fn start_span_row(&mut self) {
        if let Some(frame) = self.span_frames.last_mut() {
            frame.push(Vec::new());
        }
    }

    /// Record the span hint of the next cell in the current row
    pub(crate) fn record_span(&mut self, span: CellSpan) {
        let Some(frame) = self.span_frames.last_mut() else {
            return;
        };
        if frame.is_empty() {
            frame.push(Vec::new());
        }
        if let Some(row) = frame.last_mut() {
            row.push(span);
        }
    }
}

fn index_ids<'a>(node: &'a hast::Node, index: &mut HashMap<String, &'a Element>) {
    if let hast::Node::Element(element) = node {
        if let Some(id) = element.attr("id") {
            index.entry(id).or_insert(element);
        }
    }
    for child in node.children().unwrap_or(&[]) {
        index_ids(child, index);
    }
}
