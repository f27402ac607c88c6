//! Digit-cell group bound to the page by container id.
//!
//! The cells' values and focus live in the DOM. Each handler loads them into a
//! [`DigitGroup`], applies one transition and writes the result back, so the
//! group has no state of its own between events.
//!
//! [`DigitGroup`]: crate::state::digits::DigitGroup

#[cfg(feature = "csr")]
use crate::state::digits::{CODE_LENGTH, CellOutcome, DigitGroup};

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use web_sys::HtmlInputElement;

/// Selector for the cells inside a group container.
pub const CELL_SELECTOR: &str = "input.digit-cell";
/// Class toggled on cells that hold a digit.
pub const FILLED_CLASS: &str = "digit-cell--filled";

#[cfg(feature = "csr")]
fn cells(container_id: &str) -> Option<Vec<HtmlInputElement>> {
    let document = web_sys::window()?.document()?;
    let container = document.get_element_by_id(container_id)?;
    let list = match container.query_selector_all(CELL_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("digit group #{container_id}: query failed: {e:?}");
            return None;
        }
    };
    let cells = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect::<Vec<_>>();
    (cells.len() == CODE_LENGTH).then_some(cells)
}

#[cfg(feature = "csr")]
fn load(cells: &[HtmlInputElement], focus: usize) -> DigitGroup {
    DigitGroup::from_values(cells.iter().map(HtmlInputElement::value), focus)
}

#[cfg(feature = "csr")]
fn store(cells: &[HtmlInputElement], group: &DigitGroup) {
    for (index, cell) in cells.iter().enumerate() {
        let value = group.cell(index).map(String::from).unwrap_or_default();
        if cell.value() != value {
            cell.set_value(&value);
        }
        if let Err(e) = cell.class_list().toggle_with_force(FILLED_CLASS, group.is_filled(index)) {
            log::warn!("digit cell {index}: class toggle failed: {e:?}");
        }
    }
    if let Some(cell) = cells.get(group.focus()) {
        if let Err(e) = cell.focus() {
            log::debug!("digit cell {}: focus failed: {e:?}", group.focus());
        }
    }
}

/// Run one transition against the group in `container_id`, with focus on
/// cell `index`, and write the result back to the page.
///
/// A missing or malformed group is left untouched and reports no handling.
#[cfg(feature = "csr")]
pub fn apply(container_id: &str, index: usize, transition: impl FnOnce(&mut DigitGroup) -> CellOutcome) -> CellOutcome {
    let Some(cells) = cells(container_id) else {
        return CellOutcome::default();
    };
    let mut group = load(&cells, index);
    let outcome = transition(&mut group);
    store(&cells, &group);
    outcome
}

/// Concatenated cell values of the group, or an empty string when the group
/// is not on the page.
pub fn read(container_id: &str) -> String {
    #[cfg(feature = "csr")]
    {
        cells(container_id).map(|cells| load(&cells, 0).value()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = container_id;
        String::new()
    }
}

/// Empty every cell and focus the first one.
pub fn clear(container_id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(cells) = cells(container_id) {
            store(&cells, &DigitGroup::new());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = container_id;
    }
}

/// Focus the first cell without touching any values.
pub fn focus_first(container_id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(cells) = cells(container_id) {
            if let Some(first) = cells.first() {
                if let Err(e) = first.focus() {
                    log::debug!("digit group #{container_id}: focus failed: {e:?}");
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = container_id;
    }
}
