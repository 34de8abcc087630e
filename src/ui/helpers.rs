use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for the welcome card and modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Step `current` by `offset` through `len` slots, wrapping at both ends.
pub(crate) fn wrap_index(current: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + offset).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Context};

    use super::*;

    #[test]
    fn wrap_index_cycles_both_ways() {
        assert_eq!(wrap_index(0, 1, 2), 1);
        assert_eq!(wrap_index(1, 1, 2), 0);
        assert_eq!(wrap_index(0, -1, 2), 1);
        assert_eq!(wrap_index(0, 1, 0), 0);
    }

    #[test]
    fn surface_error_prefers_root_cause() {
        let err = Err::<(), _>(anyhow!("disk full"))
            .context("failed to save profile")
            .unwrap_err();
        assert_eq!(surface_error(&err), "disk full");
    }
}
