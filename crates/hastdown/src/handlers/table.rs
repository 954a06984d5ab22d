//! Table reconstruction.
//!
//! HTML tables may merge cells and leave rows short. GFM tables cannot, so a
//! table is rebuilt as a rectangle: merged cells are expanded with empty
//! placeholder cells and short rows are padded.
//!
//! Span hints are never stored on output nodes. Cell handlers record them in
//! a side table kept by [`State`], row by row, and the table handler matches
//! them back to cells by position.

use hastdown_core::AlignKind;

use super::Converted;
use crate::coerce::to_specific_content;
use crate::hast::Element;
use crate::mdast;
use crate::state::State;
use crate::utilities::parse_integer;

/// Largest `colspan` honored
const MAX_COL_SPAN: usize = 1000;

/// Largest `rowspan` honored
const MAX_ROW_SPAN: usize = 65534;

/// Merge hints of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub col_span: usize,
    pub row_span: usize,
}

impl Default for CellSpan {
    fn default() -> Self {
        Self {
            col_span: 1,
            row_span: 1,
        }
    }
}

impl CellSpan {
    /// Read `colspan` and `rowspan`; missing, zero or unparsable values
    /// count as 1
    pub fn from_element(element: &Element) -> Self {
        let read = |name: &str, max: usize| {
            element
                .attr(name)
                .and_then(|value| parse_integer(&value))
                .and_then(|value| usize::try_from(value).ok())
                .filter(|value| *value > 0)
                .map_or(1, |value| value.min(max))
        };

        Self {
            col_span: read("colspan", MAX_COL_SPAN),
            row_span: read("rowspan", MAX_ROW_SPAN),
        }
    }

    pub fn is_merged(&self) -> bool {
        self.col_span > 1 || self.row_span > 1
    }
}

/// Column alignment and header presence, read before conversion
#[derive(Debug, PartialEq)]
struct TableInfo {
    align: Vec<Option<AlignKind>>,
    headless: bool,
}

pub(super) fn table(state: &mut State<'_>, element: &Element, _: Option<&Element>) -> Option<Converted> {
    if state.in_table() {
        let mut result = mdast::Node::text(element.to_text());
        state.patch(element.position, &mut result);
        return Some(result.into());
    }

    let TableInfo {
        mut align,
        headless,
    } = inspect(element);

    let (converted, spans) = state.table_scope(|state| state.all(element));
    let mut rows = to_specific_content(converted, mdast::Node::table_row);

    if headless {
        rows.insert(0, mdast::Node::table_row());
    }

    let offset = usize::from(headless);
    let mut grid: Vec<Vec<Cell>> = rows
        .iter_mut()
        .enumerate()
        .map(|(row_index, row)| {
            let cells = row.children_mut().map(std::mem::take).unwrap_or_default();
            let row_spans = row_index
                .checked_sub(offset)
                .and_then(|source_row| spans.get(source_row));
            to_specific_content(cells, mdast::Node::table_cell)
                .into_iter()
                .enumerate()
                .map(|(cell_index, node)| Cell {
                    node,
                    span: row_spans
                        .and_then(|row| row.get(cell_index))
                        .copied()
                        .unwrap_or_default(),
                })
                .collect()
        })
        .collect();

    expand_spans(&mut grid);

    let columns = grid.iter().map(Vec::len).max().unwrap_or(0).max(1);
    align.resize(columns, None);

    for (row, cells) in rows.iter_mut().zip(grid) {
        let mut nodes: Vec<mdast::Node> = cells.into_iter().map(|cell| cell.node).collect();
        nodes.resize_with(columns, mdast::Node::table_cell);
        if let Some(children) = row.children_mut() {
            *children = nodes;
        }
    }

    let mut result = mdast::Node::Table(mdast::Table {
        align,
        children: rows,
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

pub(super) fn table_row(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    state.start_span_row();
    let children = to_specific_content(state.all(element), mdast::Node::table_cell);

    let mut result = mdast::Node::TableRow(mdast::TableRow {
        children,
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

/// `td` and `th`
pub(super) fn table_cell(
    state: &mut State<'_>,
    element: &Element,
    _: Option<&Element>,
) -> Option<Converted> {
    state.record_span(CellSpan::from_element(element));

    let mut result = mdast::Node::TableCell(mdast::TableCell {
        children: state.all(element),
        ..Default::default()
    });
    state.patch(element.position, &mut result);
    Some(result.into())
}

/// Read column alignment and whether the table lacks a header row.
///
/// The first alignment seen for a column wins. A table has a header when it
/// has a `thead`, or a `th` in its first two rows. Nested tables are not
/// entered.
fn inspect(table: &Element) -> TableInfo {
    let mut info = TableInfo {
        align: vec![None],
        headless: true,
    };
    let mut row_index = 0;
    let mut cell_index = 0;

    visit(table, &mut info, &mut row_index, &mut cell_index);
    info
}

fn visit(element: &Element, info: &mut TableInfo, row_index: &mut usize, cell_index: &mut usize) {
    for child in element.element_children() {
        match child.tag_name.as_str() {
            "table" => continue,
            "th" | "td" => {
                if info.align.len() <= *cell_index {
                    info.align.resize(*cell_index + 1, None);
                }
                if info.align[*cell_index].is_none() {
                    info.align[*cell_index] = child
                        .attr("align")
                        .and_then(|value| AlignKind::parse(&value.to_ascii_lowercase()));
                }
                if info.headless && *row_index <= 2 && child.tag_name == "th" {
                    info.headless = false;
                }
                *cell_index += 1;
            }
            "thead" => info.headless = false,
            "tr" => {
                *row_index += 1;
                *cell_index = 0;
            }
            _ => {}
        }
        visit(child, info, row_index, cell_index);
    }
}

/// A converted cell with the span hint recorded for it
struct Cell {
    node: mdast::Node,
    span: CellSpan,
}

impl Cell {
    fn placeholder() -> Self {
        Self {
            node: mdast::Node::table_cell(),
            span: CellSpan::default(),
        }
    }
}

/// Insert placeholder cells for every merged cell.
///
/// Placeholders shift later cells of a row to the right. Expansion stops at
/// the last existing row.
fn expand_spans(grid: &mut [Vec<Cell>]) {
    for row_index in 0..grid.len() {
        let mut cell_index = 0;
        while cell_index < grid[row_index].len() {
            let span = grid[row_index][cell_index].span;
            if span.is_merged() {
                insert_placeholders(grid, row_index, cell_index, span);
            }
            cell_index += 1;
        }
    }
}

fn insert_placeholders(grid: &mut [Vec<Cell>], row_index: usize, cell_index: usize, span: CellSpan) {
    for other_row in row_index..row_index + span.row_span {
        let Some(cells) = grid.get_mut(other_row) else {
            tracing::debug!(row = other_row, "span runs past the last row, truncating");
            return;
        };
        for column in cell_index..cell_index + span.col_span {
            if other_row == row_index && column == cell_index {
                continue;
            }
            let at = column.min(cells.len());
            cells.insert(at, Cell::placeholder());
        }
    }
}
