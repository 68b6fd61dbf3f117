use crate::dashboard::nav::{breadcrumb_path, DiagnosticSink, LogDiagnostics, Navigator};

/// Height of a card cell in pixels.
pub const CARD_HEIGHT: u16 = 150;

/// Column layout used by [`CardLayout`]: a single column on narrow viewports
/// and three columns on wide ones.
pub const GRID_COLUMNS: Columns = Columns { narrow: 1, wide: 3 };

/// Responsive column counts for the card grid, in columns per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub narrow: u8,
    pub wide: u8,
}

/// One entry of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbEntry<'a> {
    pub label: &'a str,
    /// Route pushed when the entry is activated; the root entry has none
    /// and renders as plain text.
    pub target: Option<String>,
}

/// A fixed-height cell of the card grid.
#[derive(Debug, PartialEq)]
pub struct GridCell<'a, T> {
    pub content: &'a T,
    pub height: u16,
}

/// The card grid: cells in input order plus the responsive column contract.
#[derive(Debug, PartialEq)]
pub struct Grid<'a, T> {
    pub columns: Columns,
    pub cells: Vec<GridCell<'a, T>>,
}

/// A breadcrumb-navigable card layout.
///
/// Renders a breadcrumb trail for `content_uri` and arranges `children` as
/// equally sized cards. The children are pre-rendered content and opaque to
/// the layout; they come out in exactly the order they went in.
///
/// Rendering is a pure function of the two inputs. The only side effects
/// live in [`activate`]: one diagnostic write and one history push.
///
/// [`activate`]: CardLayout::activate
pub struct CardLayout<T> {
    children: Vec<T>,
    content_uri: Vec<String>,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl<T> CardLayout<T> {
    pub fn new(children: Vec<T>, content_uri: Vec<String>) -> Self {
        CardLayout {
            children,
            content_uri,
            diagnostics: Box::new(LogDiagnostics),
        }
    }

    /// Replace the diagnostic side channel.
    pub fn with_diagnostics(mut self, diagnostics: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    /// One entry per path segment, in order. An empty `content_uri` yields
    /// an empty trail.
    pub fn breadcrumb(&self) -> Vec<BreadcrumbEntry<'_>> {
        self.content_uri
            .iter()
            .enumerate()
            .map(|(index, segment)| BreadcrumbEntry {
                label: segment,
                target: breadcrumb_path(&self.content_uri, index),
            })
            .collect()
    }

    /// The card grid. No children means a grid with zero cells, which is a
    /// valid empty state.
    pub fn grid(&self) -> Grid<'_, T> {
        Grid {
            columns: GRID_COLUMNS,
            cells: self
                .children
                .iter()
                .map(|content| GridCell {
                    content,
                    height: CARD_HEIGHT,
                })
                .collect(),
        }
    }

    /// Navigate to the breadcrumb entry at `index`.
    ///
    /// Records the target route on the diagnostic sink, then pushes it onto
    /// the navigator, exactly once. The root entry and out-of-range indices
    /// are not navigable; nothing happens and `false` is returned.
    pub fn activate(&mut self, index: usize, navigator: &mut dyn Navigator) -> bool {
        match breadcrumb_path(&self.content_uri, index) {
            Some(path) => {
                self.diagnostics.record(&path);
                navigator.push(&path);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Default)]
    struct RecordingNavigator {
        pushed: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn push(&mut self, path: &str) {
            self.pushed.push(path.to_string());
        }
    }

    struct SharedSink(Rc<RefCell<Vec<String>>>);

    impl DiagnosticSink for SharedSink {
        fn record(&mut self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    fn segments(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_breadcrumb_entry_per_segment() {
        let layout: CardLayout<String> =
            CardLayout::new(Vec::new(), segments(&["experiments", "exp-1", "run-3"]));

        let trail = layout.breadcrumb();
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[0].label, "experiments");
        assert_eq!(trail[0].target, None);
        assert_eq!(trail[1].target.as_deref(), Some("/experiments/exp-1"));
        assert_eq!(trail[2].target.as_deref(), Some("/experiments/exp-1/run-3"));
    }

    #[test]
    fn cells_keep_the_input_order() {
        let layout = CardLayout::new(vec!["first", "second", "third"], segments(&["models"]));

        let grid = layout.grid();
        assert_eq!(grid.cells.len(), 3);
        let contents: Vec<&str> = grid.cells.iter().map(|cell| *cell.content).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        assert!(grid.cells.iter().all(|cell| cell.height == CARD_HEIGHT));
    }

    #[test]
    fn grid_declares_responsive_columns() {
        let layout = CardLayout::new(vec![1, 2], segments(&["models"]));
        let grid = layout.grid();
        assert_eq!(grid.columns, Columns { narrow: 1, wide: 3 });
    }

    #[test]
    fn activating_an_entry_pushes_its_route_once() {
        let mut layout =
            CardLayout::new(vec!["card"], segments(&["experiments", "exp-1", "run-3"]));
        let mut navigator = RecordingNavigator::default();

        assert!(layout.activate(1, &mut navigator));
        assert_eq!(navigator.pushed, vec!["/experiments/exp-1".to_string()]);
    }

    #[test]
    fn the_root_entry_is_not_navigable() {
        let mut layout = CardLayout::new(vec!["card"], segments(&["experiments"]));
        let mut navigator = RecordingNavigator::default();

        assert!(!layout.activate(0, &mut navigator));
        assert!(!layout.activate(1, &mut navigator));
        assert!(navigator.pushed.is_empty());
    }

    #[test]
    fn empty_inputs_are_valid_empty_states() {
        let mut layout: CardLayout<String> = CardLayout::new(Vec::new(), Vec::new());
        let mut navigator = RecordingNavigator::default();

        assert!(layout.breadcrumb().is_empty());
        assert!(layout.grid().cells.is_empty());
        assert!(!layout.activate(0, &mut navigator));
        assert!(navigator.pushed.is_empty());
    }

    #[test]
    fn rendering_is_idempotent() {
        let layout = CardLayout::new(vec!["a", "b"], segments(&["experiments", "exp-1"]));
        assert_eq!(layout.breadcrumb(), layout.breadcrumb());
        assert_eq!(layout.grid(), layout.grid());
    }

    #[test]
    fn diagnostics_see_the_route_of_every_activation() {
        let recorded = Rc::new(RefCell::new(Vec::new()));
        let mut layout = CardLayout::new(vec!["card"], segments(&["experiments", "exp-1"]))
            .with_diagnostics(SharedSink(Rc::clone(&recorded)));
        let mut navigator = RecordingNavigator::default();

        layout.activate(1, &mut navigator);
        assert_eq!(*recorded.borrow(), vec!["/experiments/exp-1".to_string()]);
    }
}
